// src/integer_math/mod.rs

pub mod gcd;
pub mod jacobi;
pub mod mod_exp;
