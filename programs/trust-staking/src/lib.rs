// Trust Staking Program
//
// Members buy a utility token from the registrar treasury at a fixed rate,
// stake it into time-locked rounds for a minted reward, and may delegate
// ("trust") part of their holdings into another member's stake to share its
// reward.
//
// Instructions:
// - initialize: Create the registrar and its treasury, stake and currency vaults
// - create_member: Create a member ledger and its utility/reward vaults
// - buy / sell_all / sell_reward / transfer_tokens: Fixed-rate treasury trades
// - start_round: Open the next staking round (authority)
// - stake / unstake: Lock the free balance into a round, unwind after lockup
// - trust_to_member: Delegate tokens into another member's pool
// - exit_sharing / release_trust: Exit by the truster / release by the trustee
// - check_unstaked / check_exit / close_trust_check: Settle delegation receipts
// - withdraw_currency: Sweep the raised lamports after the final round (authority)

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::RewardPolicy;

declare_id!("BJ4WdCpEA1bqfEXdJdpnWo54oSxGXUCJtunhcGRsdphp");

#[program]
pub mod trust_staking {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        round_timelock: i64,
        utility_per_sol: u64,
        reward_per_sol: u64,
        min_purchase: u64,
        reward_policy: RewardPolicy,
    ) -> Result<()> {
        ctx.accounts.initialize(
            round_timelock,
            utility_per_sol,
            reward_per_sol,
            min_purchase,
            reward_policy,
            &ctx.bumps,
        )
    }

    pub fn create_member(ctx: Context<CreateMember>, accepts_delegation: bool) -> Result<()> {
        ctx.accounts.create_member(accepts_delegation, &ctx.bumps)
    }

    pub fn buy(ctx: Context<Buy>, amount: u64) -> Result<()> {
        ctx.accounts.buy(amount)
    }

    pub fn sell_all(ctx: Context<SellAll>) -> Result<()> {
        ctx.accounts.sell_all()
    }

    pub fn sell_reward(ctx: Context<SellReward>, amount: u64) -> Result<()> {
        ctx.accounts.sell_reward(amount)
    }

    pub fn transfer_tokens(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_tokens(amount)
    }

    pub fn start_round(ctx: Context<StartRound>, is_final: bool) -> Result<()> {
        ctx.accounts.start_round(is_final, &ctx.bumps)
    }

    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        ctx.accounts.stake()
    }

    // Remaining accounts: (utility vault, reward vault) of every staked truster
    pub fn unstake<'info>(ctx: Context<'_, '_, 'info, 'info, Unstake<'info>>) -> Result<()> {
        ctx.accounts.unstake(ctx.remaining_accounts)
    }

    pub fn trust_to_member(ctx: Context<TrustToMember>, amount: u64) -> Result<()> {
        ctx.accounts.trust_to_member(amount, &ctx.bumps)
    }

    pub fn exit_sharing(ctx: Context<ExitSharing>) -> Result<()> {
        ctx.accounts.exit_sharing()
    }

    pub fn release_trust(ctx: Context<ReleaseTrust>) -> Result<()> {
        ctx.accounts.release_trust()
    }

    pub fn check_unstaked(ctx: Context<CheckUnstaked>) -> Result<()> {
        ctx.accounts.check_unstaked()
    }

    pub fn check_exit(ctx: Context<CheckExit>) -> Result<()> {
        ctx.accounts.check_exit()
    }

    pub fn close_trust_check(ctx: Context<CloseTrustCheck>) -> Result<()> {
        ctx.accounts.close_trust_check()
    }

    pub fn withdraw_currency(ctx: Context<WithdrawCurrency>) -> Result<()> {
        ctx.accounts.withdraw_currency()
    }
}
