// Check Unstaked Instruction
//
// Truster-side settlement of a TrustCheck after its round has closed and the
// trustee no longer holds a stake in it. The principal was normally repaid
// by the trustee's unstake; when the trustee never staked that round, the
// delegation is still parked in the trustee's vault and is returned here.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CheckUnstaked<'info> {
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

    #[account(
        address = trust_check.round @ StakingError::NotFound,
        has_one = registrar @ StakingError::NotFound,
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

    pub token_program: Program<'info, Token>,
}

impl<'info> CheckUnstaked<'info> {
    pub fn check_unstaked(&mut self) -> Result<()> {
        // 1. Receipt Check
        self.trust_check.assert_open()?;

        // 2. Lockup Check
        let now = Clock::get()?.unix_timestamp;
        self.round.assert_unlocked(now, self.registrar.round_timelock)?;

        // 3. Trustee Check
        let round_key = self.round.key();
        require!(
            !self.trustee.is_staked_in(&round_key),
            StakingError::TrusteeStillStaked
        );

        // 4. Residual Principal
        let amount = self.trust_check.amount;
        let residual = self
            .trustee
            .reclaim_residual(&self.truster.key(), &round_key, amount)?;
        if residual > 0 {
            let registrar_key = self.registrar.key();
            let trustee_seeds = &[
                MEMBER_SEED,
                registrar_key.as_ref(),
                self.trustee.beneficiary.as_ref(),
                &[self.trustee.bump],
            ];
            transfer_from_vault(
                residual,
                &self.token_program.to_account_info(),
                &self.trustee_utility_vault.to_account_info(),
                &self.truster_utility_vault.to_account_info(),
                &self.trustee.to_account_info(),
                trustee_seeds,
            )?;
        }

        // 5. Burn
        self.truster.close_delegation(amount)?;
        self.trust_check.burn()?;

        msg!(
            "Trust check {} settled after round {} (residual {})",
            self.trust_check.key(),
            self.round.sequence_number,
            residual
        );
        Ok(())
    }
}
