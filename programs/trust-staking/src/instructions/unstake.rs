// Unstake Instruction
//
// Unwinds the member's position once the round timelock has elapsed:
// - the member gets its own principal back plus its part of the reward
// - every staked truster gets its principal back plus
//   reward * delegated / total stake, minted into its reward vault
//
// Remaining accounts carry the (utility vault, reward vault) of every staked
// truster, in any order. One missing vault aborts the whole unstake.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
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
        mut,
        has_one = registrar @ StakingError::NotFound,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), member.beneficiary.as_ref()],
        bump = member.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub member: Box<Account<'info, Member>>,

    #[account(mut, address = member.utility_vault)]
    pub utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = member.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.stake_vault)]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
}

fn find_vault<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
    key: &Pubkey,
) -> Result<&'a AccountInfo<'info>> {
    accounts
        .iter()
        .find(|account| account.key == key)
        .ok_or(StakingError::MissingTrusterAccounts.into())
}

impl<'info> Unstake<'info> {
    pub fn unstake(&mut self, truster_accounts: &[AccountInfo<'info>]) -> Result<()> {
        // 1. Position Check
        require!(
            self.member.is_staked_in(&self.round.key()),
            StakingError::NoStakePosition
        );

        // 2. Lockup Check
        let now = Clock::get()?.unix_timestamp;
        self.round.assert_unlocked(now, self.registrar.round_timelock)?;

        // 3. Settlement
        let settlement = self.member.settle_unstake(&self.round.key())?;

        // 4. Truster Vaults
        // Resolve every vault before moving anything
        let mut truster_vaults = Vec::with_capacity(settlement.trusters.len());
        for payout in settlement.trusters.iter() {
            let utility = find_vault(truster_accounts, &payout.entry.utility_vault)?;
            let reward = find_vault(truster_accounts, &payout.entry.reward_vault)?;
            truster_vaults.push((payout, utility, reward));
        }

        let registrar_key = self.registrar.key();
        let signer_seeds = &[
            REGISTRAR_SIGNER_SEED,
            registrar_key.as_ref(),
            &[self.registrar.signer_nonce],
        ];
        let token_program = self.token_program.to_account_info();
        let stake_vault = self.stake_vault.to_account_info();
        let reward_mint = self.reward_mint.to_account_info();
        let registrar_signer = self.registrar_signer.to_account_info();

        // 5. Pay Trusters
        for (payout, utility, reward) in truster_vaults {
            transfer_from_vault(
                payout.entry.amount,
                &token_program,
                &stake_vault,
                utility,
                &registrar_signer,
                signer_seeds,
            )?;
            mint_reward(
                payout.reward,
                &token_program,
                &reward_mint,
                reward,
                &registrar_signer,
                signer_seeds,
            )?;
            msg!(
                "Truster {} repaid {} + reward {}",
                payout.entry.truster,
                payout.entry.amount,
                payout.reward
            );
        }

        // 6. Pay Member
        transfer_from_vault(
            settlement.principal,
            &token_program,
            &stake_vault,
            &self.utility_vault.to_account_info(),
            &registrar_signer,
            signer_seeds,
        )?;
        mint_reward(
            settlement.reward,
            &token_program,
            &reward_mint,
            &self.reward_vault.to_account_info(),
            &registrar_signer,
            signer_seeds,
        )?;

        // 7. Round Bookkeeping
        self.round.close_position()?;
        self.registrar.close_position()?;
        if self.round.is_discharged() {
            msg!("Final round {} fully unwound", self.round.sequence_number);
        }

        emit!(RewardPaid {
            member: self.member.key(),
            round: self.round.key(),
            principal: settlement.principal,
            reward: settlement.reward,
            trusters_paid: settlement.trusters.len() as u8,
            trusters_reward: settlement.trusters_reward(),
            timestamp: now,
        });
        msg!(
            "Unstaked {} with reward {}",
            settlement.principal,
            settlement.reward
        );

        Ok(())
    }
}
