pub mod buy;
pub mod check_exit;
pub mod check_unstaked;
pub mod close_trust_check;
pub mod create_member;
pub mod exit_sharing;
pub mod initialize;
pub mod release_trust;
pub mod sell_all;
pub mod sell_reward;
pub mod stake;
pub mod start_round;
pub mod transfer_tokens;
pub mod trust_to_member;
pub mod unstake;
pub mod withdraw_currency;

pub use buy::*;
pub use check_exit::*;
pub use check_unstaked::*;
pub use close_trust_check::*;
pub use create_member::*;
pub use exit_sharing::*;
pub use initialize::*;
pub use release_trust::*;
pub use sell_all::*;
pub use sell_reward::*;
pub use stake::*;
pub use start_round::*;
pub use transfer_tokens::*;
pub use trust_to_member::*;
pub use unstake::*;
pub use withdraw_currency::*;
