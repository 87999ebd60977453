// Trust Staking Helper Functions
//
// Fixed-rate pricing, reward arithmetic and the CPI wrappers shared by the
// instructions. All math is done in u128 and checked.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
use anchor_lang::system_program::{self, Transfer as SystemTransfer};
use anchor_spl::token::{burn, mint_to, transfer, Burn, MintTo, Transfer};

use crate::{constants::*, errors::*};

// PRICING HELPERS

fn pow10(decimals: u8) -> Result<u128> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or(StakingError::MathOverflow.into())
}

// Lamports worth `amount` base units at `tokens_per_sol` whole tokens per SOL
// Buyers round up, sellers round down
pub fn lamports_for_tokens(
    amount: u64,
    tokens_per_sol: u64,
    decimals: u8,
    round_up: bool,
) -> Result<u64> {
    let numerator = (amount as u128)
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .ok_or(StakingError::MathOverflow)?;
    let denominator = (tokens_per_sol as u128)
        .checked_mul(pow10(decimals)?)
        .ok_or(StakingError::MathOverflow)?;
    require!(denominator > 0, StakingError::InvalidParameter);

    let mut lamports = numerator / denominator;
    if round_up && numerator % denominator != 0 {
        lamports += 1;
    }
    u64::try_from(lamports).map_err(|_| StakingError::MathOverflow.into())
}

// REWARD HELPERS

// Reward base units for `stake` utility base units at `rate_bps`
pub fn reward_units(stake: u64, rate_bps: u64, utility_decimals: u8, reward_decimals: u8) -> Result<u64> {
    let reward = (stake as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(pow10(reward_decimals)?)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(
            (BPS_DENOMINATOR as u128)
                .checked_mul(pow10(utility_decimals)?)
                .ok_or(StakingError::MathOverflow)?,
        )
        .ok_or(StakingError::MathOverflow)?;
    u64::try_from(reward).map_err(|_| StakingError::MathOverflow.into())
}

// floor(total * part / whole), zero when nothing is staked
pub fn proportional_share(total: u64, part: u64, whole: u64) -> Result<u64> {
    if whole == 0 {
        return Ok(0);
    }
    require!(part <= whole, StakingError::MathOverflow);
    let share = (total as u128)
        .checked_mul(part as u128)
        .ok_or(StakingError::MathOverflow)?
        / whole as u128;
    Ok(share as u64)
}

// CPI HELPERS

// Transfer tokens out of a PDA-owned vault
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Mint reward tokens (registrar signer is the mint authority)
pub fn mint_reward<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds = &[authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Burn reward tokens held by a member vault
pub fn burn_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    burn(
        CpiContext::new_with_signer(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Pay lamports out of the currency vault PDA
pub fn pay_from_currency_vault<'info>(
    lamports: u64,
    system_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }
    let signer_seeds = &[vault_seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            SystemTransfer {
                from: vault.clone(),
                to: recipient.clone(),
            },
            signer_seeds,
        ),
        lamports,
    )
}

// Lamports the currency vault can pay without dropping below rent exemption
pub fn spendable_lamports(vault: &AccountInfo) -> Result<u64> {
    let floor = Rent::get()?.minimum_balance(0);
    Ok(vault.lamports().saturating_sub(floor))
}
