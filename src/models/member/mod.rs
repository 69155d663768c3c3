pub mod age;
pub mod defaults;
pub mod filter;
pub mod missing;
mod queries;
mod types;

pub use age::calculate_age;
pub use filter::MemberFilter;
pub use missing::{MemberWithMissingInfo, members_with_missing_info, missing_fields};
pub use queries::*;
pub use types::*;
