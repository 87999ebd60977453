use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub registrar: Pubkey,
    pub round: Pubkey,
    pub sequence_number: u64,
    pub is_final: bool,
    pub started_at: i64,
}

#[event]
pub struct TrustCreated {
    pub truster: Pubkey,
    pub trustee: Pubkey,
    pub round: Pubkey,
    pub trust_check: Pubkey,
    pub amount: u64,
    pub folded_into_stake: bool,
}

#[event]
pub struct RewardPaid {
    pub member: Pubkey,
    pub round: Pubkey,
    pub principal: u64,
    pub reward: u64,
    pub trusters_paid: u8,
    pub trusters_reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct SharingExited {
    pub truster: Pubkey,
    pub trustee: Pubkey,
    pub round: Pubkey,
    pub principal: u64,
    pub reward: u64,
    pub timestamp: i64,
}
