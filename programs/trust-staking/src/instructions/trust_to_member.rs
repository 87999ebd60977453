// Trust To Member Instruction
//
// Truster delegates `amount` into the trustee's pool for a round and receives
// a TrustCheck as receipt.
//
// Delegations are only accepted while the round is open.
//
// Funding: truster's free balance, or its own open stake when the free balance
// is short. Destination: the stake vault when the trustee is already staked in
// that round, the trustee's utility vault otherwise.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct TrustToMember<'info> {
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

    #[account(has_one = registrar @ StakingError::NotFound)]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), truster.beneficiary.as_ref()],
        bump = truster.bump,
        has_one = beneficiary @ StakingError::Unauthorized,
    )]
    pub truster: Box<Account<'info, Member>>,

    #[account(mut, address = truster.utility_vault)]
    pub truster_utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, registrar.key().as_ref(), trustee.beneficiary.as_ref()],
        bump = trustee.bump,
        constraint = trustee.key() != truster.key() @ StakingError::SelfDelegation,
    )]
    pub trustee: Box<Account<'info, Member>>,

    #[account(mut, address = trustee.utility_vault)]
    pub trustee_utility_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = registrar.stake_vault)]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = beneficiary,
        space = ANCHOR_DISCRIMINATOR + TrustCheck::INIT_SPACE,
        seeds = [
            TRUST_CHECK_SEED,
            truster.key().as_ref(),
            &truster.checks_issued.to_le_bytes(),
        ],
        bump
    )]
    pub trust_check: Account<'info, TrustCheck>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> TrustToMember<'info> {
    pub fn trust_to_member(&mut self, amount: u64, bumps: &TrustToMemberBumps) -> Result<()> {
        // 1. Round Check
        let created_at = Clock::get()?.unix_timestamp;
        self.round.assert_open(created_at, self.registrar.round_timelock)?;

        let truster_key = self.truster.key();
        let round_key = self.round.key();
        let index = self.truster.checks_issued;

        // 2. Truster Side
        let source = self.truster.lend(amount, &self.registrar)?;

        // 3. Trustee Side
        let folded = self.trustee.accept_trust(
            TrustedEntry {
                truster: truster_key,
                utility_vault: self.truster.utility_vault,
                reward_vault: self.truster.reward_vault,
                round: round_key,
                amount,
                staked: false,
            },
            &self.registrar,
        )?;

        // 4. Move Principal
        let registrar_key = self.registrar.key();
        let token_program = self.token_program.to_account_info();
        let destination = if folded {
            self.stake_vault.to_account_info()
        } else {
            self.trustee_utility_vault.to_account_info()
        };

        match source {
            LendSource::UtilityVault => {
                let member_seeds = &[
                    MEMBER_SEED,
                    registrar_key.as_ref(),
                    self.truster.beneficiary.as_ref(),
                    &[self.truster.bump],
                ];
                transfer_from_vault(
                    amount,
                    &token_program,
                    &self.truster_utility_vault.to_account_info(),
                    &destination,
                    &self.truster.to_account_info(),
                    member_seeds,
                )?;
            }
            // Already in the stake vault when folded
            LendSource::StakeVault if !folded => {
                let signer_seeds = &[
                    REGISTRAR_SIGNER_SEED,
                    registrar_key.as_ref(),
                    &[self.registrar.signer_nonce],
                ];
                transfer_from_vault(
                    amount,
                    &token_program,
                    &self.stake_vault.to_account_info(),
                    &destination,
                    &self.registrar_signer.to_account_info(),
                    signer_seeds,
                )?;
            }
            LendSource::StakeVault => {}
        }

        // 5. Receipt
        self.trust_check.set_inner(TrustCheck {
            truster: truster_key,
            trustee: self.trustee.key(),
            round: round_key,
            amount,
            created_at,
            burned: false,
            index,
            bump: bumps.trust_check,
        });

        emit!(TrustCreated {
            truster: truster_key,
            trustee: self.trustee.key(),
            round: round_key,
            trust_check: self.trust_check.key(),
            amount,
            folded_into_stake: folded,
        });
        msg!(
            "Trusted {} to {} in round {} (source: {:?}, folded: {})",
            amount,
            self.trustee.key(),
            self.round.sequence_number,
            source,
            folded
        );

        Ok(())
    }
}
