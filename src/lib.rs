// src/lib.rs
pub mod aggregate;
pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod extract;
pub mod reporting;
pub mod scene;
pub mod types;
