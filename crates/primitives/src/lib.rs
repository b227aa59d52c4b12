//! Core primitives for the Gascope project.
/// Foundry broadcast artifact parsing and gas accounting
pub mod broadcast;
/// Fiat gas cost calculation helpers
pub mod cost;
