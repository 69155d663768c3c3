pub mod audit;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod roster;
pub mod routes;
pub mod store;
pub mod templates_structs;
