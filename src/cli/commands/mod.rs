//! Command implementations for the outcode CLI

pub mod config;
pub mod report;
