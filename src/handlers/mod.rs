pub mod api_v1;
pub mod auth_handlers;
pub mod dashboard;
pub mod helpers;
pub mod meeting_handlers;
pub mod member_handlers;
pub mod overview;
pub mod transfer_handlers;
