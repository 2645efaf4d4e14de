//! Raysprite library.
//!
//! This module exposes the demo's configuration, game context, input layer
//! and sprite animation types for use in integration tests and as a
//! reusable library.

pub mod config;
pub mod game;
pub mod input;
pub mod visuals;
