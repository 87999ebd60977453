// Start Round Instruction
//
// Authority opens round number current_round + 1. Starting a final round
// finalizes the registrar: no further rounds can follow it.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct StartRound<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            REGISTRAR_SEED,
            registrar.utility_mint.as_ref(),
            registrar.reward_mint.as_ref(),
        ],
        bump = registrar.bump,
        has_one = authority @ StakingError::Unauthorized,
    )]
    pub registrar: Box<Account<'info, Registrar>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Round::INIT_SPACE,
        seeds = [
            ROUND_SEED,
            registrar.key().as_ref(),
            &(registrar.current_round + 1).to_le_bytes(),
        ],
        bump
    )]
    pub round: Account<'info, Round>,

    pub system_program: Program<'info, System>,
}

impl<'info> StartRound<'info> {
    pub fn start_round(&mut self, is_final: bool, bumps: &StartRoundBumps) -> Result<()> {
        self.registrar.assert_not_finalized()?;

        let sequence_number = self
            .registrar
            .current_round
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        let started_at = Clock::get()?.unix_timestamp;

        self.round.set_inner(Round {
            registrar: self.registrar.key(),
            sequence_number,
            started_at,
            is_final,
            open_positions: 0,
            swept: false,
            bump: bumps.round,
        });

        self.registrar.current_round = sequence_number;
        self.registrar.current_round_account = Some(self.round.key());
        self.registrar.finalized = is_final;

        emit!(RoundStarted {
            registrar: self.registrar.key(),
            round: self.round.key(),
            sequence_number,
            is_final,
            started_at,
        });
        msg!("Round {} started (final: {})", sequence_number, is_final);

        Ok(())
    }
}
