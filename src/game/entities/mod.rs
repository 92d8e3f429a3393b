//! Game entities module.
//!
//! This module organizes roster creation.

pub mod player;

pub use player::*;
