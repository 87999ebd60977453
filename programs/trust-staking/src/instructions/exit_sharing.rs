// Exit Sharing Instruction
//
// Truster pulls one delegation (one TrustCheck) back out of the trustee's pool
// before the trustee unstakes. An unstaked delegation returns principal only.
// A staked one is held until the round's lockup elapses, then leaves with its
// pro-rata share of the trustee's reward.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ExitSharing<'info> {
    pub beneficiary: Signer<'info>,

    #[account(
        seeds = [
            REGISTRAR_SEED,
            registrar.utility_mint.as_ref(),
            registrar.reward_mint.as_ref(),
        ],
        bump = registrar.bump,
    )]
    pub registrar: Box<Account<'info, Registrar>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [REGISTRAR_SIGNER_SEED, registrar.key().as_ref()],
        bump = registrar.signer_nonce,
    )]
    pub registrar_signer: UncheckedAccount<'info>,

    #[account(
        has_one = registrar @ StakingError::NotFound,
        address = trust_check.round @ StakingError::NotFound,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), truster.beneficiary.as_ref()],
        bump = truster.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub truster: Box<Account<'info, Member>>,

    #[account(mut, address = truster.utility_vault)]
    pub truster_utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = truster.reward_vault)]
    pub truster_reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), trustee.beneficiary.as_ref()],
        bump = trustee.bump,
    )]
    pub trustee: Box<Account<'info, Member>>,

    #[account(mut, address = trustee.utility_vault)]
    pub trustee_utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [
            TRUST_CHECK_SEED,
            truster.key().as_ref(),
            &trust_check.index.to_le_bytes(),
        ],
        bump = trust_check.bump,
        has_one = truster @ StakingError::NotFound,
        has_one = trustee @ StakingError::NotFound,
    )]
    pub trust_check: Account<'info, TrustCheck>,

    #[account(mut, address = registrar.stake_vault)]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ExitSharing<'info> {
    pub fn exit_sharing(&mut self) -> Result<()> {
        // 1. Receipt Check
        self.trust_check.assert_open()?;

        let truster_key = self.truster.key();
        let round_key = self.trust_check.round;
        let amount = self.trust_check.amount;

        // 2. Trustee Side
        let now = Clock::get()?.unix_timestamp;
        let unlocked = self.round.lockup_elapsed(now, self.registrar.round_timelock);
        let release = self.trustee.exit_trust(
            &truster_key,
            &round_key,
            amount,
            unlocked,
            &self.registrar,
        )?;

        // 3. Return Principal (+ reward share when it was staked)
        let registrar_key = self.registrar.key();
        let token_program = self.token_program.to_account_info();
        if release.from_stake {
            let signer_seeds = &[
                REGISTRAR_SIGNER_SEED,
                registrar_key.as_ref(),
                &[self.registrar.signer_nonce],
            ];
            transfer_from_vault(
                release.principal,
                &token_program,
                &self.stake_vault.to_account_info(),
                &self.truster_utility_vault.to_account_info(),
                &self.registrar_signer.to_account_info(),
                signer_seeds,
            )?;
            mint_reward(
                release.reward,
                &token_program,
                &self.reward_mint.to_account_info(),
                &self.truster_reward_vault.to_account_info(),
                &self.registrar_signer.to_account_info(),
                signer_seeds,
            )?;
        } else {
            let trustee_seeds = &[
                MEMBER_SEED,
                registrar_key.as_ref(),
                self.trustee.beneficiary.as_ref(),
                &[self.trustee.bump],
            ];
            transfer_from_vault(
                release.principal,
                &token_program,
                &self.trustee_utility_vault.to_account_info(),
                &self.truster_utility_vault.to_account_info(),
                &self.trustee.to_account_info(),
                trustee_seeds,
            )?;
        }

        // 4. Truster Side
        self.truster.close_delegation(amount)?;
        self.trust_check.burn()?;

        emit!(SharingExited {
            truster: truster_key,
            trustee: self.trustee.key(),
            round: round_key,
            principal: release.principal,
            reward: release.reward,
            timestamp: now,
        });
        msg!(
            "Exited sharing: {} returned with reward {}",
            release.principal,
            release.reward
        );

        Ok(())
    }
}
