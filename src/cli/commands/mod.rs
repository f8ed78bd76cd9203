pub mod config;
pub mod create;
pub mod db;
pub mod export;
pub mod schema;
pub mod show;
