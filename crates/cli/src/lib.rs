//! Demo driver for the inventory store.

pub mod config;
pub mod demo;

pub use config::Config;
