pub mod ladder;
pub mod machine;
mod queries;
pub mod review;
mod types;

pub use ladder::{LadderError, TransferLadder};
pub use machine::{DuplicatePolicy, DuplicateTransfer};
pub use queries::*;
pub use types::*;
