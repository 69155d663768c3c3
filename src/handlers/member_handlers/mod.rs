pub mod crud;
pub mod csv;
pub mod forms;
pub mod list;
pub mod missing;
pub mod transfer;
