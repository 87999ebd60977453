// Release Trust Instruction
//
// Trustee hands a delegation it never staked back to the truster. The
// truster's receipts for it are then settled with check_exit.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ReleaseTrust<'info> {
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
        seeds = [MEMBER_SEED, registrar.key().as_ref(), trustee.beneficiary.as_ref()],
        bump = trustee.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub trustee: Box<Account<'info, Member>>,

    #[account(mut, address = trustee.utility_vault)]
    pub trustee_utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [MEMBER_SEED, registrar.key().as_ref(), truster.beneficiary.as_ref()],
        bump = truster.bump,
    )]
    pub truster: Box<Account<'info, Member>>,

    #[account(mut, address = truster.utility_vault)]
    pub truster_utility_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ReleaseTrust<'info> {
    pub fn release_trust(&mut self) -> Result<()> {
        let entry = self.trustee.release_trust(&self.truster.key())?;

        let registrar_key = self.registrar.key();
        let trustee_seeds = &[
            MEMBER_SEED,
            registrar_key.as_ref(),
            self.trustee.beneficiary.as_ref(),
            &[self.trustee.bump],
        ];
        transfer_from_vault(
            entry.amount,
            &self.token_program.to_account_info(),
            &self.trustee_utility_vault.to_account_info(),
            &self.truster_utility_vault.to_account_info(),
            &self.trustee.to_account_info(),
            trustee_seeds,
        )?;

        msg!("Released {} back to truster {}", entry.amount, entry.truster);
        Ok(())
    }
}
