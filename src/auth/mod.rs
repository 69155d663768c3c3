pub mod accounts;
pub mod csrf;
pub mod middleware;
pub mod password;
pub mod rate_limit;
pub mod session;
pub mod transfer_policy;
pub mod validate;
pub mod visibility;
