//! Cutoff Trends - Admission cutoff trend derivation engine
//!
//! This crate answers cascading facet queries and derives round-by-round
//! opening/closing rank trends over a table of admission cutoff records,
//! for single selections and for selections pinned side by side.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
