// Registrar State
//
// One registrar per (utility mint, reward mint) pair. Holds the fixed exchange
// rates, the round timelock and the reward policy every instruction reads.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*};

#[account]
#[derive(InitSpace)]
pub struct Registrar {
    pub authority: Pubkey,         // Starts rounds, sweeps the treasury
    pub utility_mint: Pubkey,      // Token bought, staked and delegated
    pub reward_mint: Pubkey,       // Token minted as staking reward
    pub utility_decimals: u8,
    pub reward_decimals: u8,
    pub treasury_vault: Pubkey,    // Unsold utility tokens
    pub stake_vault: Pubkey,       // Staked principal of every member
    pub currency_vault: Pubkey,    // Lamports raised by buys
    pub round_timelock: i64,       // Lockup of every round, in seconds
    pub utility_per_sol: u64,      // Whole utility tokens per SOL (buy and sell)
    pub reward_per_sol: u64,       // Whole reward tokens per SOL (sell only)
    pub min_purchase: u64,         // Base units
    pub reward_policy: RewardPolicy,
    pub current_round: u64,        // Last started sequence number, 0 before any
    pub current_round_account: Option<Pubkey>,
    pub finalized: bool,           // A final round has been started
    pub open_positions: u32,       // Stake positions open across every round
    pub bump: u8,
    pub signer_nonce: u8,          // Bump of the registrar signer PDA
    pub currency_vault_bump: u8,
}

// Reward curve applied to a member's total stake (own + trusted).
// Every variant is zero for zero stake and non-decreasing in stake.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RewardPolicy {
    Flat { rate_bps: u16 },
    TrusterBonus { base_bps: u16, per_truster_bps: u16 },
}

impl Default for RewardPolicy {
    fn default() -> Self {
        RewardPolicy::Flat {
            rate_bps: DEFAULT_REWARD_RATE_BPS,
        }
    }
}

impl RewardPolicy {
    pub fn validate(&self) -> Result<()> {
        match *self {
            RewardPolicy::Flat { rate_bps } => {
                require!(
                    rate_bps > 0 && rate_bps <= MAX_RATE_BPS,
                    StakingError::InvalidParameter
                );
            }
            RewardPolicy::TrusterBonus {
                base_bps,
                per_truster_bps,
            } => {
                let max_rate = (base_bps as u64)
                    .checked_add((per_truster_bps as u64) * MAX_TRUSTERS as u64)
                    .ok_or(StakingError::MathOverflow)?;
                require!(
                    base_bps > 0 && max_rate <= MAX_RATE_BPS as u64,
                    StakingError::InvalidParameter
                );
            }
        }
        Ok(())
    }

    // Rate in basis points for a stake carrying `trusters` staked delegations
    pub fn rate_bps(&self, trusters: u8) -> u64 {
        match *self {
            RewardPolicy::Flat { rate_bps } => rate_bps as u64,
            RewardPolicy::TrusterBonus {
                base_bps,
                per_truster_bps,
            } => base_bps as u64 + per_truster_bps as u64 * trusters as u64,
        }
    }
}

impl Registrar {
    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, StakingError::Unauthorized);
        Ok(())
    }

    pub fn assert_not_finalized(&self) -> Result<()> {
        require!(!self.finalized, StakingError::StakingFinalized);
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

    // No staked principal left in the stake vault
    pub fn is_discharged(&self) -> bool {
        self.open_positions == 0
    }

    // Reward, in reward base units, owed for `total_stake` utility base units
    pub fn reward_for(&self, total_stake: u64, trusters: u8) -> Result<u64> {
        reward_units(
            total_stake,
            self.reward_policy.rate_bps(trusters),
            self.utility_decimals,
            self.reward_decimals,
        )
    }

    // Lamports a buyer pays for `amount` utility base units
    pub fn purchase_price(&self, amount: u64) -> Result<u64> {
        lamports_for_tokens(amount, self.utility_per_sol, self.utility_decimals, true)
    }

    // Lamports refunded for `amount` utility base units
    pub fn sale_payout(&self, amount: u64) -> Result<u64> {
        lamports_for_tokens(amount, self.utility_per_sol, self.utility_decimals, false)
    }

    // Lamports paid for `amount` reward base units
    pub fn reward_payout(&self, amount: u64) -> Result<u64> {
        lamports_for_tokens(amount, self.reward_per_sol, self.reward_decimals, false)
    }
}
