// Transfer Tokens Instruction
//
// Peer-to-peer move of free utility tokens to any utility token account.
// Lent-out and delegated-in tokens cannot be moved.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct TransferTokens<'info> {
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

    #[account(
        mut,
        constraint = destination.mint == registrar.utility_mint @ StakingError::InvalidParameter,
        constraint = destination.key() != utility_vault.key() @ StakingError::InvalidParameter,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> TransferTokens<'info> {
    pub fn transfer_tokens(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::ZeroAmount);
        self.member.debit_free(amount)?;

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
            &self.destination.to_account_info(),
            &self.member.to_account_info(),
            member_seeds,
        )?;

        msg!("Transferred {} utility units to {}", amount, self.destination.key());
        Ok(())
    }
}
