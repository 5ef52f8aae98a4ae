//! Core application plumbing

pub mod config;

pub use config::Config;
