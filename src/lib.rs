// src/lib.rs

pub mod algorithms;
pub mod core;
pub mod integer_math;
