// Check Exit Instruction
//
// Truster-side settlement of a TrustCheck whose delegation the trustee side
// has already discharged (released, or repaid by unstake). No lockup applies.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct CheckExit<'info> {
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
        seeds = [MEMBER_SEED, registrar.key().as_ref(), truster.beneficiary.as_ref()],
        bump = truster.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub truster: Box<Account<'info, Member>>,

    #[account(
        seeds = [MEMBER_SEED, registrar.key().as_ref(), trustee.beneficiary.as_ref()],
        bump = trustee.bump,
    )]
    pub trustee: Box<Account<'info, Member>>,

    #[account(
        mut,
        seeds = [
            TRUST_CHECK_SEED,
            truster.key().as_ref(),
            &trust_check.index.to_le_bytes(),
        ],
        bump = trust_check.bump,
        has_one = truster @ StakingError::NotFound,
        has_one = trustee @ StakingError::NotFound,
    )]
    pub trust_check: Account<'info, TrustCheck>,
}

impl<'info> CheckExit<'info> {
    pub fn check_exit(&mut self) -> Result<()> {
        self.trust_check.assert_open()?;

        require!(
            !self
                .trustee
                .trusted_pool
                .holds(&self.truster.key(), &self.trust_check.round),
            StakingError::DelegationStillOpen
        );

        self.truster.close_delegation(self.trust_check.amount)?;
        self.trust_check.burn()?;

        msg!("Trust check {} settled", self.trust_check.key());
        Ok(())
    }
}
