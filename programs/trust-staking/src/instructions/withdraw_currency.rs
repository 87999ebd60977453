// Withdraw Currency Instruction
//
// Authority sweeps every lamport raised by buys once the final round has run
// its timelock and every stake has been unwound. After WITHDRAW_GRACE_ROUNDS
// further timelocks the sweep is allowed even with positions still open.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawCurrency<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [
            REGISTRAR_SEED,
            registrar.utility_mint.as_ref(),
            registrar.reward_mint.as_ref(),
        ],
        bump = registrar.bump,
        has_one = authority @ StakingError::Unauthorized,
    )]
    pub registrar: Box<Account<'info, Registrar>>,

    #[account(
        mut,
        has_one = registrar @ StakingError::NotFound,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [CURRENCY_VAULT_SEED, registrar.key().as_ref()],
        bump = registrar.currency_vault_bump,
    )]
    pub currency_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawCurrency<'info> {
    pub fn withdraw_currency(&mut self) -> Result<()> {
        // 1. Final Round Check
        require!(
            self.round.is_final
                && self.registrar.current_round_account == Some(self.round.key()),
            StakingError::RoundNotFinal
        );
        require!(!self.round.swept, StakingError::AlreadySettled);

        // 2. Lockup Check
        let now = Clock::get()?.unix_timestamp;
        let timelock = self.registrar.round_timelock;
        self.round.assert_unlocked(now, timelock)?;

        // 3. Obligations Check
        // Every stake position, in any round, unwound
        let discharged = self.registrar.is_discharged();
        let grace_end = timelock
            .checked_mul(WITHDRAW_GRACE_ROUNDS + 1)
            .and_then(|span| span.checked_add(self.round.started_at))
            .ok_or(StakingError::MathOverflow)?;
        require!(
            discharged || now >= grace_end,
            StakingError::ObligationsOutstanding
        );

        // 4. Sweep
        let lamports = self.currency_vault.lamports();
        let registrar_key = self.registrar.key();
        let vault_seeds = &[
            CURRENCY_VAULT_SEED,
            registrar_key.as_ref(),
            &[self.registrar.currency_vault_bump],
        ];
        pay_from_currency_vault(
            lamports,
            &self.system_program.to_account_info(),
            &self.currency_vault.to_account_info(),
            &self.authority.to_account_info(),
            vault_seeds,
        )?;

        self.round.swept = true;

        msg!(
            "Swept {} lamports after final round {} (discharged: {})",
            lamports,
            self.round.sequence_number,
            discharged
        );
        Ok(())
    }
}
