//! Core types and definitions for the RAIDER enemy engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! screen geometry, pattern and direction enums, spawn events, frame
//! snapshots, and tuning constants. It has no dependency on any renderer.

pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
