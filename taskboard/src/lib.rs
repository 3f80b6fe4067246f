//! `taskboard` — drag resolution for task boards.
//!
//! The [`engine`] decides where a dragged task ends up: its list, its rank
//! in an ordered list, or its clamped coordinates in the free-position
//! list. The remaining modules support the demo host binary.

pub mod config;
pub mod engine;
pub mod render;
pub mod seed;
