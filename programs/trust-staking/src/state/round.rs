use anchor_lang::prelude::*;

use crate::errors::*;

// Staking epoch. Lockup is the registrar's round_timelock counted from started_at.
#[account]
#[derive(InitSpace)]
pub struct Round {
    pub registrar: Pubkey,
    pub sequence_number: u64,
    pub started_at: i64,
    pub is_final: bool,
    // Members currently holding a stake position in this round
    pub open_positions: u32,
    // Set once the treasury has been withdrawn against this (final) round
    pub swept: bool,
    pub bump: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Open,
    Unwindable,
    Swept,
}

impl Round {
    pub fn state(&self, now: i64, timelock: i64) -> RoundState {
        if self.swept {
            RoundState::Swept
        } else if self.lockup_elapsed(now, timelock) {
            RoundState::Unwindable
        } else {
            RoundState::Open
        }
    }

    pub fn lockup_elapsed(&self, now: i64, timelock: i64) -> bool {
        now.saturating_sub(self.started_at) >= timelock
    }

    pub fn assert_unlocked(&self, now: i64, timelock: i64) -> Result<()> {
        require!(self.lockup_elapsed(now, timelock), StakingError::RoundLocked);
        Ok(())
    }

    // Stakes and delegations only enter a round before its lockup elapses
    pub fn assert_open(&self, now: i64, timelock: i64) -> Result<()> {
        match self.state(now, timelock) {
            RoundState::Open => Ok(()),
            RoundState::Unwindable => err!(StakingError::RoundClosed),
            RoundState::Swept => err!(StakingError::RoundSwept),
        }
    }

    pub fn assert_not_swept(&self) -> Result<()> {
        require!(!self.swept, StakingError::RoundSwept);
        Ok(())
    }

    pub fn open_position(&mut self) -> Result<()> {
        self.open_positions = self
            .open_positions
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn close_position(&mut self) -> Result<()> {
        self.open_positions = self
            .open_positions
            .checked_sub(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    // Final round with every position unwound
    pub fn is_discharged(&self) -> bool {
        self.is_final && self.open_positions == 0
    }
}
