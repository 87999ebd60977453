// Close Trust Check Instruction
//
// Truster reclaims the rent of a burned TrustCheck.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct CloseTrustCheck<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        seeds = [MEMBER_SEED, truster.registrar.as_ref(), truster.beneficiary.as_ref()],
        bump = truster.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub truster: Box<Account<'info, Member>>,

    #[account(
        mut,
        seeds = [
            TRUST_CHECK_SEED,
            truster.key().as_ref(),
            &trust_check.index.to_le_bytes(),
        ],
        bump = trust_check.bump,
        has_one = truster @ StakingError::NotFound,
        constraint = trust_check.burned @ StakingError::CheckNotBurned,
        close = beneficiary,
    )]
    pub trust_check: Account<'info, TrustCheck>,
}

impl<'info> CloseTrustCheck<'info> {
    pub fn close_trust_check(&mut self) -> Result<()> {
        msg!("Closed trust check {}", self.trust_check.key());
        Ok(())
    }
}
