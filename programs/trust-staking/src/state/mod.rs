pub mod member;
pub mod registrar;
pub mod round;
pub mod trust_check;

pub use member::*;
pub use registrar::*;
pub use round::*;
pub use trust_check::*;
