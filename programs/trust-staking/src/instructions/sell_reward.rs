// Sell Reward Instruction
//
// Burns reward tokens from the member's reward vault and pays lamports out of
// the currency vault at the registrar's reward rate.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct SellReward<'info> {
    #[account(mut)]
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
        seeds = [MEMBER_SEED, registrar.key().as_ref(), member.beneficiary.as_ref()],
        bump = member.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub member: Box<Account<'info, Member>>,

    #[account(mut, address = member.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [CURRENCY_VAULT_SEED, registrar.key().as_ref()],
        bump = registrar.currency_vault_bump,
    )]
    pub currency_vault: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> SellReward<'info> {
    pub fn sell_reward(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::ZeroAmount);
        require!(
            self.reward_vault.amount >= amount,
            StakingError::InsufficientBalance
        );

        let payout = self.registrar.reward_payout(amount)?;
        require!(
            spendable_lamports(&self.currency_vault.to_account_info())? >= payout,
            StakingError::InsufficientTreasury
        );

        let registrar_key = self.registrar.key();
        let member_seeds = &[
            MEMBER_SEED,
            registrar_key.as_ref(),
            self.member.beneficiary.as_ref(),
            &[self.member.bump],
        ];
        burn_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.reward_mint.to_account_info(),
            &self.reward_vault.to_account_info(),
            &self.member.to_account_info(),
            member_seeds,
        )?;

        let vault_seeds = &[
            CURRENCY_VAULT_SEED,
            registrar_key.as_ref(),
            &[self.registrar.currency_vault_bump],
        ];
        pay_from_currency_vault(
            payout,
            &self.system_program.to_account_info(),
            &self.currency_vault.to_account_info(),
            &self.beneficiary.to_account_info(),
            vault_seeds,
        )?;

        msg!("Sold {} reward units for {} lamports", amount, payout);
        Ok(())
    }
}
