//! chart-risk: risk management for discretionary chart trading
//!
//! This library provides:
//! - Entry validation against drawn support/resistance lines and zones
//! - Take-profit zone detection beyond the current market
//! - Risk-based position sizing for pending and market orders
//! - Instrument pip/volume metrics with exact decimal rounding
//! - TOML configuration, structured logging and a snapshot-driven CLI

pub mod cli;
pub mod config;
pub mod instrument;
pub mod marker;
pub mod order;
pub mod risk;
pub mod telemetry;
