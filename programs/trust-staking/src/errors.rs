use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Member balance is too low for this operation")]
    InsufficientBalance,

    #[msg("Treasury cannot cover this operation")]
    InsufficientTreasury,

    #[msg("Round timelock has not elapsed yet")]
    RoundLocked,

    #[msg("Vaults of every staked truster must be supplied")]
    MissingTrusterAccounts,

    #[msg("An open delegation to this member exists for another round")]
    DuplicateDelegation,

    #[msg("Delegation record not found")]
    NotFound,

    #[msg("Already settled")]
    AlreadySettled,

    #[msg("Invalid registrar parameter")]
    InvalidParameter,

    #[msg("Reward mint must be controlled by the registrar signer with zero supply")]
    InvalidRewardMint,

    #[msg("Amount is below the minimum purchase")]
    AmountTooSmall,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Nothing to sell")]
    NothingToSell,

    #[msg("Nothing to stake")]
    NothingToStake,

    #[msg("Staking is finalized, no more rounds can be started")]
    StakingFinalized,

    #[msg("Member already holds a stake in another round")]
    StakeInOtherRound,

    #[msg("Member has no stake in this round")]
    NoStakePosition,

    #[msg("A member cannot delegate to itself")]
    SelfDelegation,

    #[msg("Member does not accept delegations")]
    DelegationDisabled,

    #[msg("Trusted pool is full")]
    TrustedPoolFull,

    #[msg("Delegation is staked and can only be settled by unstake or exit")]
    DelegationStaked,

    #[msg("Trustee still holds its stake in this round")]
    TrusteeStillStaked,

    #[msg("Trustee still holds this delegation")]
    DelegationStillOpen,

    #[msg("Trust check must be burned before it can be closed")]
    CheckNotBurned,

    #[msg("Round is not the final round")]
    RoundNotFinal,

    #[msg("Round has been swept")]
    RoundSwept,

    #[msg("Staking obligations are still outstanding")]
    ObligationsOutstanding,

    #[msg("Arithmetic overflow occurred")]
    MathOverflow,

    #[msg("Round is no longer open for staking")]
    RoundClosed,
}
