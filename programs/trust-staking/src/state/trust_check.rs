use anchor_lang::prelude::*;

use crate::errors::*;

// Receipt of one delegation, held by the truster.
// Immutable except for `burned`, which flips exactly once on settlement.
#[account]
#[derive(InitSpace)]
pub struct TrustCheck {
    pub truster: Pubkey, // truster's Member account
    pub trustee: Pubkey, // trustee's Member account
    pub round: Pubkey,
    pub amount: u64,
    pub created_at: i64,
    pub burned: bool,
    pub index: u64, // truster.checks_issued at creation, part of the PDA seeds
    pub bump: u8,
}

impl TrustCheck {
    pub fn assert_open(&self) -> Result<()> {
        require!(!self.burned, StakingError::AlreadySettled);
        Ok(())
    }

    pub fn burn(&mut self) -> Result<()> {
        self.assert_open()?;
        self.burned = true;
        Ok(())
    }
}
