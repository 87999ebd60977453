// Member State
//
// Per-participant ledger. The member PDA owns the member's utility and reward
// vaults and signs every transfer out of them.
//
// Ledger rules:
// - bought is the member's own principal outside the stake vault, including
//   whatever is currently lent out (shared)
// - free balance = bought - shared
// - trusted == sum of trusted_pool amounts
// - staked_trusted == sum of staked trusted_pool amounts
// - utility vault holds free balance + unstaked trusted_pool amounts

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::proportional_share, state::Registrar};

#[account]
#[derive(InitSpace, Default)]
pub struct Member {
    pub registrar: Pubkey,
    pub beneficiary: Pubkey,
    pub utility_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub accepts_delegation: bool,
    pub bought: u64,
    pub shared: u64,
    pub trusted: u64,
    pub staked: u64,
    pub staked_trusted: u64,
    pub reward: u64,
    pub staked_round: Option<Pubkey>,
    pub checks_issued: u64,
    pub trusted_pool: TrustedPool,
    pub bump: u8,
}

// One truster's delegation into this member
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct TrustedEntry {
    pub truster: Pubkey, // truster's Member account
    pub utility_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub round: Pubkey,
    pub amount: u64,
    pub staked: bool, // principal sits in the stake vault instead of this member's vault
}

// Insertion-ordered truster -> entry map
// Fixed-size array avoids realloc, entries [0, len) are live
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct TrustedPool {
    pub entries: [TrustedEntry; MAX_TRUSTERS],
    pub len: u8,
}

impl TrustedPool {
    pub fn iter(&self) -> impl Iterator<Item = &TrustedEntry> {
        self.entries.iter().take(self.len as usize)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self, truster: &Pubkey) -> Option<usize> {
        self.iter().position(|entry| &entry.truster == truster)
    }

    pub fn get(&self, truster: &Pubkey) -> Option<&TrustedEntry> {
        self.iter().find(|entry| &entry.truster == truster)
    }

    pub fn holds(&self, truster: &Pubkey, round: &Pubkey) -> bool {
        self.get(truster).is_some_and(|entry| &entry.round == round)
    }

    pub fn total(&self) -> Result<u64> {
        self.iter().try_fold(0u64, |sum, entry| {
            sum.checked_add(entry.amount)
                .ok_or(StakingError::MathOverflow.into())
        })
    }

    pub fn staked_total(&self) -> Result<u64> {
        self.iter()
            .filter(|entry| entry.staked)
            .try_fold(0u64, |sum, entry| {
                sum.checked_add(entry.amount)
                    .ok_or(StakingError::MathOverflow.into())
            })
    }

    pub fn staked_count(&self) -> u8 {
        self.iter().filter(|entry| entry.staked).count() as u8
    }

    // Add a delegation, extending the truster's entry when it targets the same round
    pub fn credit(&mut self, delegation: TrustedEntry) -> Result<()> {
        if let Some(index) = self.position(&delegation.truster) {
            let entry = &mut self.entries[index];
            require_keys_eq!(entry.round, delegation.round, StakingError::DuplicateDelegation);
            entry.amount = entry
                .amount
                .checked_add(delegation.amount)
                .ok_or(StakingError::MathOverflow)?;
            return Ok(());
        }

        require!(self.len() < MAX_TRUSTERS, StakingError::TrustedPoolFull);
        self.entries[self.len()] = delegation;
        self.len += 1;
        Ok(())
    }

    // Take `amount` off the truster's entry for `round`, dropping it when empty.
    // Returns the entry as it was before the debit.
    pub fn debit(&mut self, truster: &Pubkey, round: &Pubkey, amount: u64) -> Result<TrustedEntry> {
        let index = self
            .position(truster)
            .filter(|&index| &self.entries[index].round == round)
            .ok_or(StakingError::NotFound)?;

        let before = self.entries[index];
        let remaining = before
            .amount
            .checked_sub(amount)
            .ok_or(StakingError::NotFound)?;

        if remaining == 0 {
            self.remove_at(index);
        } else {
            self.entries[index].amount = remaining;
        }
        Ok(before)
    }

    pub fn remove_at(&mut self, index: usize) -> TrustedEntry {
        let removed = self.entries[index];
        let len = self.len();
        self.entries.copy_within(index + 1..len, index);
        self.entries[len - 1] = TrustedEntry::default();
        self.len -= 1;
        removed
    }

    // Sum of unstaked entries delegated for `round`
    pub fn pending_for(&self, round: &Pubkey) -> Result<u64> {
        self.iter()
            .filter(|entry| !entry.staked && &entry.round == round)
            .try_fold(0u64, |sum, entry| {
                sum.checked_add(entry.amount)
                    .ok_or(StakingError::MathOverflow.into())
            })
    }

    pub fn mark_staked_for(&mut self, round: &Pubkey) {
        let len = self.len();
        for entry in self.entries[..len].iter_mut() {
            if &entry.round == round {
                entry.staked = true;
            }
        }
    }

    // Remove and return every staked entry, preserving order
    pub fn drain_staked(&mut self) -> Vec<TrustedEntry> {
        let mut drained = Vec::with_capacity(self.len());
        let mut index = 0;
        while index < self.len() {
            if self.entries[index].staked {
                drained.push(self.remove_at(index));
            } else {
                index += 1;
            }
        }
        drained
    }
}

// Where the principal of a new delegation comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LendSource {
    UtilityVault,
    StakeVault,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeDeposit {
    pub own: u64,
    pub trusted: u64,
    pub opened_position: bool,
}

impl StakeDeposit {
    pub fn total(&self) -> Result<u64> {
        self.own
            .checked_add(self.trusted)
            .ok_or(StakingError::MathOverflow.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrusterPayout {
    pub entry: TrustedEntry,
    pub reward: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnstakeSettlement {
    pub principal: u64,
    pub reward: u64,
    pub trusters: Vec<TrusterPayout>,
}

impl UnstakeSettlement {
    pub fn trusters_reward(&self) -> u64 {
        self.trusters.iter().map(|payout| payout.reward).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustRelease {
    pub principal: u64,
    pub reward: u64,
    pub from_stake: bool,
}

impl Member {
    pub fn free_balance(&self) -> Result<u64> {
        self.bought
            .checked_sub(self.shared)
            .ok_or(StakingError::InsufficientBalance.into())
    }

    pub fn total_stake(&self) -> Result<u64> {
        self.staked
            .checked_add(self.staked_trusted)
            .ok_or(StakingError::MathOverflow.into())
    }

    pub fn is_staked_in(&self, round: &Pubkey) -> bool {
        self.staked_round.as_ref() == Some(round)
    }

    pub fn credit_purchase(&mut self, amount: u64) -> Result<()> {
        self.bought = self
            .bought
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    // Sell or transfer out of the free balance
    pub fn debit_free(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.free_balance()?, StakingError::InsufficientBalance);
        self.bought -= amount;
        Ok(())
    }

    // Reward always follows the current total, never accumulates
    pub fn refresh_reward(&mut self, registrar: &Registrar) -> Result<()> {
        self.reward = registrar.reward_for(self.total_stake()?, self.trusted_pool.staked_count())?;
        Ok(())
    }

    pub fn apply_stake(&mut self, round: Pubkey, registrar: &Registrar) -> Result<StakeDeposit> {
        if let Some(open) = self.staked_round {
            require_keys_eq!(open, round, StakingError::StakeInOtherRound);
        }

        let own = self.free_balance()?;
        let trusted = self.trusted_pool.pending_for(&round)?;
        require!(own > 0 || trusted > 0, StakingError::NothingToStake);

        let opened_position = self.staked_round.is_none();
        self.trusted_pool.mark_staked_for(&round);
        self.bought -= own;
        self.staked = self.staked.checked_add(own).ok_or(StakingError::MathOverflow)?;
        self.staked_trusted = self
            .staked_trusted
            .checked_add(trusted)
            .ok_or(StakingError::MathOverflow)?;
        self.staked_round = Some(round);
        self.refresh_reward(registrar)?;

        Ok(StakeDeposit {
            own,
            trusted,
            opened_position,
        })
    }

    // Unwind the position: principal back to the member and every staked truster,
    // reward split pro rata to principal
    pub fn settle_unstake(&mut self, round: &Pubkey) -> Result<UnstakeSettlement> {
        require!(self.is_staked_in(round), StakingError::NoStakePosition);

        let total = self.total_stake()?;
        let reward = self.reward;

        let mut trusters = Vec::with_capacity(self.trusted_pool.len());
        let mut trusters_reward: u64 = 0;
        for entry in self.trusted_pool.drain_staked() {
            let share = proportional_share(reward, entry.amount, total)?;
            trusters_reward = trusters_reward
                .checked_add(share)
                .ok_or(StakingError::MathOverflow)?;
            self.trusted = self
                .trusted
                .checked_sub(entry.amount)
                .ok_or(StakingError::MathOverflow)?;
            trusters.push(TrusterPayout { entry, reward: share });
        }

        let principal = self.staked;
        let own_reward = reward
            .checked_sub(trusters_reward)
            .ok_or(StakingError::MathOverflow)?;

        self.bought = self
            .bought
            .checked_add(principal)
            .ok_or(StakingError::MathOverflow)?;
        self.staked = 0;
        self.staked_trusted = 0;
        self.reward = 0;
        self.staked_round = None;

        Ok(UnstakeSettlement {
            principal,
            reward: own_reward,
            trusters,
        })
    }

    // Truster side of a delegation. Funds it from the free balance, or carves it
    // out of the truster's own open stake.
    pub fn lend(&mut self, amount: u64, registrar: &Registrar) -> Result<LendSource> {
        require!(amount > 0, StakingError::ZeroAmount);

        let source = if self.free_balance()? >= amount {
            LendSource::UtilityVault
        } else if self.staked_round.is_some() && self.staked >= amount {
            self.staked -= amount;
            self.bought = self
                .bought
                .checked_add(amount)
                .ok_or(StakingError::MathOverflow)?;
            self.refresh_reward(registrar)?;
            LendSource::StakeVault
        } else {
            return err!(StakingError::InsufficientBalance);
        };

        self.shared = self
            .shared
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.checks_issued = self
            .checks_issued
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(source)
    }

    // Truster side of a settled delegation
    pub fn close_delegation(&mut self, amount: u64) -> Result<()> {
        self.shared = self
            .shared
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    // Trustee side of a delegation. Returns true when the amount was folded
    // straight into an open stake in the same round.
    pub fn accept_trust(&mut self, mut delegation: TrustedEntry, registrar: &Registrar) -> Result<bool> {
        require!(self.accepts_delegation, StakingError::DelegationDisabled);

        let folded = self.is_staked_in(&delegation.round);
        delegation.staked = folded;
        self.trusted_pool.credit(delegation)?;
        self.trusted = self
            .trusted
            .checked_add(delegation.amount)
            .ok_or(StakingError::MathOverflow)?;

        if folded {
            self.staked_trusted = self
                .staked_trusted
                .checked_add(delegation.amount)
                .ok_or(StakingError::MathOverflow)?;
            self.refresh_reward(registrar)?;
        }
        Ok(folded)
    }

    // Truster-initiated exit of `amount` from this member's pool.
    // A staked delegation stays locked until the round's lockup has elapsed,
    // then takes its pro-rata share of the reward with it. The remaining reward
    // is capped by a re-derivation so a truster bonus leaves with its truster.
    pub fn exit_trust(
        &mut self,
        truster: &Pubkey,
        round: &Pubkey,
        amount: u64,
        unlocked: bool,
        registrar: &Registrar,
    ) -> Result<TrustRelease> {
        let entry = *self
            .trusted_pool
            .get(truster)
            .filter(|entry| &entry.round == round && entry.amount >= amount)
            .ok_or(StakingError::NotFound)?;

        let mut reward = 0;
        if entry.staked {
            require!(unlocked, StakingError::RoundLocked);
            reward = proportional_share(self.reward, amount, self.total_stake()?)?;
            self.staked_trusted = self
                .staked_trusted
                .checked_sub(amount)
                .ok_or(StakingError::MathOverflow)?;
        }

        self.trusted_pool.debit(truster, round, amount)?;
        self.trusted = self
            .trusted
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;

        if entry.staked {
            let remaining = self.reward - reward;
            self.refresh_reward(registrar)?;
            self.reward = self.reward.min(remaining);
        }

        Ok(TrustRelease {
            principal: amount,
            reward,
            from_stake: entry.staked,
        })
    }

    // Trustee-initiated return of a delegation that was never staked
    pub fn release_trust(&mut self, truster: &Pubkey) -> Result<TrustedEntry> {
        let index = self
            .trusted_pool
            .position(truster)
            .ok_or(StakingError::NotFound)?;
        require!(
            !self.trusted_pool.entries[index].staked,
            StakingError::DelegationStaked
        );

        let entry = self.trusted_pool.remove_at(index);
        self.trusted = self
            .trusted
            .checked_sub(entry.amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(entry)
    }

    // Principal of an unstaked delegation for `round` still parked in this
    // member's vault, up to `amount`. Zero when the pool no longer holds it.
    pub fn reclaim_residual(&mut self, truster: &Pubkey, round: &Pubkey, amount: u64) -> Result<u64> {
        let Some(entry) = self.trusted_pool.get(truster).copied() else {
            return Ok(0);
        };
        if &entry.round != round {
            return Ok(0);
        }
        require!(!entry.staked, StakingError::TrusteeStillStaked);

        let residual = entry.amount.min(amount);
        self.trusted_pool.debit(truster, round, residual)?;
        self.trusted = self
            .trusted
            .checked_sub(residual)
            .ok_or(StakingError::MathOverflow)?;
        Ok(residual)
    }
}
