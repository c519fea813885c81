// src/core/mod.rs

pub mod random_source;
