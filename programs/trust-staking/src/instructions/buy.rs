// Buy Instruction
//
// Member pays lamports into the currency vault at the registrar's fixed rate
// and receives utility tokens from the treasury vault.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Buy<'info> {
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

    /// CHECK: PDA signer
    #[account(
        seeds = [REGISTRAR_SIGNER_SEED, registrar.key().as_ref()],
        bump = registrar.signer_nonce,
    )]
    pub registrar_signer: UncheckedAccount<'info>,

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

impl<'info> Buy<'info> {
    pub fn buy(&mut self, amount: u64) -> Result<()> {
        // 1. Amount Check
        require!(amount >= self.registrar.min_purchase, StakingError::AmountTooSmall);

        // 2. Treasury Check
        require!(
            self.treasury_vault.amount >= amount,
            StakingError::InsufficientTreasury
        );

        // 3. Price Check
        let price = self.registrar.purchase_price(amount)?;
        require!(
            self.beneficiary.lamports() >= price,
            StakingError::InsufficientBalance
        );

        // Pay the currency vault
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.beneficiary.to_account_info(),
                    to: self.currency_vault.to_account_info(),
                },
            ),
            price,
        )?;

        // Release tokens from the treasury
        let registrar_key = self.registrar.key();
        let signer_seeds = &[
            REGISTRAR_SIGNER_SEED,
            registrar_key.as_ref(),
            &[self.registrar.signer_nonce],
        ];
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.treasury_vault.to_account_info(),
            &self.utility_vault.to_account_info(),
            &self.registrar_signer.to_account_info(),
            signer_seeds,
        )?;

        self.member.credit_purchase(amount)?;

        msg!("Bought {} utility units for {} lamports", amount, price);
        Ok(())
    }
}
