// src/core/mod.rs
pub mod engine;
pub mod finder;
pub mod format;
pub mod pager;
pub mod pattern;
pub mod types;
