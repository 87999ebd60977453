// Sell All Instruction
//
// Returns the member's whole free balance to the treasury and refunds lamports
// at the same fixed rate. Tokens currently lent out stay lent out.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct SellAll<'info> {
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
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), member.beneficiary.as_ref()],
        bump = member.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub member: Box<Account<'info, Member>>,

    #[account(mut, address = member.utility_vault)]
    pub utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.treasury_vault)]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [CURRENCY_VAULT_SEED, registrar.key().as_ref()],
        bump = registrar.currency_vault_bump,
    )]
    pub currency_vault: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> SellAll<'info> {
    pub fn sell_all(&mut self) -> Result<()> {
        let amount = self.member.free_balance()?;
        require!(amount > 0, StakingError::NothingToSell);

        let payout = self.registrar.sale_payout(amount)?;
        require!(
            spendable_lamports(&self.currency_vault.to_account_info())? >= payout,
            StakingError::InsufficientTreasury
        );

        self.member.debit_free(amount)?;

        // Tokens back to the treasury, signed by the member PDA
        let registrar_key = self.registrar.key();
        let member_seeds = &[
            MEMBER_SEED,
            registrar_key.as_ref(),
            self.member.beneficiary.as_ref(),
            &[self.member.bump],
        ];
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.utility_vault.to_account_info(),
            &self.treasury_vault.to_account_info(),
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

        msg!("Sold {} utility units for {} lamports", amount, payout);
        Ok(())
    }
}
