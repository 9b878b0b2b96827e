// src/core.rs
pub mod import;
pub mod registry;
pub mod render;
pub mod title;
