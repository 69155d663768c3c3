pub mod data_manager;
pub mod department;
pub mod meeting;
pub mod member;
pub mod transfer;
