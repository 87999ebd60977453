// Initialize Instruction
//
// Creates the registrar for a (utility mint, reward mint) pair together with
// its vaults:
// - treasury vault: unsold utility tokens, funded by the authority afterwards
// - stake vault: principal of every open stake
// - currency vault: system-owned PDA collecting lamports from buys
//
// The reward mint must already have the registrar signer as mint authority.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub utility_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = reward_mint.key() != utility_mint.key() @ StakingError::InvalidParameter,
        constraint = reward_mint.mint_authority == COption::Some(registrar_signer.key())
            @ StakingError::InvalidRewardMint,
        constraint = reward_mint.supply == 0 @ StakingError::InvalidRewardMint,
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Registrar::INIT_SPACE,
        seeds = [
            REGISTRAR_SEED,
            utility_mint.key().as_ref(),
            reward_mint.key().as_ref(),
        ],
        bump
    )]
    pub registrar: Box<Account<'info, Registrar>>,

    /// CHECK: PDA signer for the registrar vaults and reward mint
    #[account(
        seeds = [REGISTRAR_SIGNER_SEED, registrar.key().as_ref()],
        bump
    )]
    pub registrar_signer: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_VAULT_SEED, registrar.key().as_ref()],
        bump,
        token::mint = utility_mint,
        token::authority = registrar_signer,
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        seeds = [STAKE_VAULT_SEED, registrar.key().as_ref()],
        bump,
        token::mint = utility_mint,
        token::authority = registrar_signer,
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [CURRENCY_VAULT_SEED, registrar.key().as_ref()],
        bump,
    )]
    pub currency_vault: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        round_timelock: i64,
        utility_per_sol: u64,
        reward_per_sol: u64,
        min_purchase: u64,
        reward_policy: RewardPolicy,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        // 1. Parameter Validation
        require!(round_timelock > 0, StakingError::InvalidParameter);
        require!(
            utility_per_sol > 0 && reward_per_sol > 0,
            StakingError::InvalidParameter
        );
        require!(min_purchase > 0, StakingError::InvalidParameter);
        reward_policy.validate()?;

        // 2. Registrar State
        self.registrar.set_inner(Registrar {
            authority: self.authority.key(),
            utility_mint: self.utility_mint.key(),
            reward_mint: self.reward_mint.key(),
            utility_decimals: self.utility_mint.decimals,
            reward_decimals: self.reward_mint.decimals,
            treasury_vault: self.treasury_vault.key(),
            stake_vault: self.stake_vault.key(),
            currency_vault: self.currency_vault.key(),
            round_timelock,
            utility_per_sol,
            reward_per_sol,
            min_purchase,
            reward_policy,
            current_round: 0,
            current_round_account: None,
            finalized: false,
            open_positions: 0,
            bump: bumps.registrar,
            signer_nonce: bumps.registrar_signer,
            currency_vault_bump: bumps.currency_vault,
        });

        // 3. Currency Vault
        // Created rent-exempt so buys can top it up and sells never close it
        let registrar_key = self.registrar.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            CURRENCY_VAULT_SEED,
            registrar_key.as_ref(),
            &[bumps.currency_vault],
        ]];

        let min_rent = Rent::get()?.minimum_balance(0);
        create_account(
            CpiContext::new(
                self.system_program.to_account_info(),
                CreateAccount {
                    from: self.authority.to_account_info(),
                    to: self.currency_vault.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            min_rent,
            0,
            &self.system_program.key(),
        )?;

        msg!(
            "Registrar initialized: {} / {}",
            self.utility_mint.key(),
            self.reward_mint.key()
        );
        msg!(
            "Timelock: {}s, rates: {} utility / {} reward per SOL",
            round_timelock,
            utility_per_sol,
            reward_per_sol
        );

        Ok(())
    }
}
