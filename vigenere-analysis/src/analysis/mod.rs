//! Statistical key-recovery algorithms

pub mod candidates;
pub mod coincidence;
pub mod exhaustive;

pub use candidates::*;
pub use coincidence::*;
pub use exhaustive::*;
