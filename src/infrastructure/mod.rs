pub mod auth;
pub mod config;
pub mod database;
pub mod domain;
