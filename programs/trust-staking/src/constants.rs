// Trust Staking Program Constants

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["registrar", utility_mint, reward_mint]
pub const REGISTRAR_SEED: &[u8] = b"registrar";

// Seeds for PDA derivation: ["registrar_signer", registrar]
// Owns the treasury and stake vaults, mint authority of the reward token
pub const REGISTRAR_SIGNER_SEED: &[u8] = b"registrar_signer";

// Seeds for PDA derivation: ["treasury_vault", registrar]
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";

// Seeds for PDA derivation: ["stake_vault", registrar]
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

// Seeds for PDA derivation: ["currency_vault", registrar]
pub const CURRENCY_VAULT_SEED: &[u8] = b"currency_vault";

// Seeds for PDA derivation: ["member", registrar, beneficiary]
pub const MEMBER_SEED: &[u8] = b"member";

// Seeds for PDA derivation: ["utility_vault", member] and ["reward_vault", member]
pub const UTILITY_VAULT_SEED: &[u8] = b"utility_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

// Seeds for PDA derivation: ["round", registrar, sequence_number]
pub const ROUND_SEED: &[u8] = b"round";

// Seeds for PDA derivation: ["trust_check", truster_member, index]
pub const TRUST_CHECK_SEED: &[u8] = b"trust_check";

// Maximum number of distinct trusters a member can carry at once
pub const MAX_TRUSTERS: usize = 4;

pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_RATE_BPS: u16 = 10_000;

// Extra timelocks after the final round before the treasury can be swept
// with positions still open
pub const WITHDRAW_GRACE_ROUNDS: i64 = 2;

// Defaults used by clients, in whole tokens per SOL
pub const DEFAULT_UTILITY_PER_SOL: u64 = 109;
pub const DEFAULT_REWARD_PER_SOL: u64 = 11;
pub const DEFAULT_REWARD_RATE_BPS: u16 = 100; // 1% per round
pub const DEFAULT_PER_TRUSTER_BPS: u16 = 200; // +2% per staked truster
