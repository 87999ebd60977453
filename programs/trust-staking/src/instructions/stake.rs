// Stake Instruction
//
// Moves the member's free balance, plus every delegation received for this
// round that is not staked yet, into the stake vault. Reward is re-derived
// from the new total. Only an open round (lockup still running) accepts stake.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Stake<'info> {
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

    #[account(mut, address = registrar.stake_vault)]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.round.assert_open(now, self.registrar.round_timelock)?;

        let deposit = self.member.apply_stake(self.round.key(), &self.registrar)?;
        if deposit.opened_position {
            self.round.open_position()?;
            self.registrar.open_position()?;
        }

        let registrar_key = self.registrar.key();
        let member_seeds = &[
            MEMBER_SEED,
            registrar_key.as_ref(),
            self.member.beneficiary.as_ref(),
            &[self.member.bump],
        ];
        transfer_from_vault(
            deposit.total()?,
            &self.token_program.to_account_info(),
            &self.utility_vault.to_account_info(),
            &self.stake_vault.to_account_info(),
            &self.member.to_account_info(),
            member_seeds,
        )?;

        msg!(
            "Staked {} own + {} trusted into round {}, reward {}",
            deposit.own,
            deposit.trusted,
            self.round.sequence_number,
            self.member.reward
        );
        Ok(())
    }
}
