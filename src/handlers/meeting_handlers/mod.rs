pub mod attendance;
pub mod crud;
pub mod forms;
pub mod list;
