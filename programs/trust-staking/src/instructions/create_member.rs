// Create Member Instruction
//
// One member per (registrar, beneficiary). The member PDA owns both of its
// vaults so that the program can move tokens on the member's behalf during
// delegation and settlement.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct CreateMember<'info> {
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
        init,
        payer = beneficiary,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub member: Box<Account<'info, Member>>,

    #[account(address = registrar.utility_mint)]
    pub utility_mint: Box<Account<'info, Mint>>,

    #[account(address = registrar.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = beneficiary,
        seeds = [UTILITY_VAULT_SEED, member.key().as_ref()],
        bump,
        token::mint = utility_mint,
        token::authority = member,
    )]
    pub utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = beneficiary,
        seeds = [REWARD_VAULT_SEED, member.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = member,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMember<'info> {
    pub fn create_member(&mut self, accepts_delegation: bool, bumps: &CreateMemberBumps) -> Result<()> {
        self.member.set_inner(Member {
            registrar: self.registrar.key(),
            beneficiary: self.beneficiary.key(),
            utility_vault: self.utility_vault.key(),
            reward_vault: self.reward_vault.key(),
            accepts_delegation,
            bump: bumps.member,
            ..Member::default()
        });

        msg!(
            "Member created for {} (accepts delegation: {})",
            self.beneficiary.key(),
            accepts_delegation
        );

        Ok(())
    }
}
