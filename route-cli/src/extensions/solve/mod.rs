//! Contains logic related to running the optimizer.

pub mod config;
