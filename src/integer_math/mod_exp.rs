// src/integer_math/mod_exp.rs

pub struct ModExp;

impl ModExp {
    /// Computes base^exponent mod modulus by square-and-multiply.
    ///
    /// Intermediate products are carried in u128, which holds modulus^2 for
    /// any u64 modulus, so reduction never wraps. modulus must be >= 1;
    /// modulus == 1 yields 0 for every base and exponent.
    ///
    /// # Examples
    /// ```
    /// use primality::integer_math::mod_exp::ModExp;
    ///
    /// assert_eq!(ModExp::pow_mod(4, 13, 497), 445);
    /// assert_eq!(ModExp::pow_mod(7, 0, 11), 1);
    /// ```
    pub fn pow_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
        let modulus = modulus as u128;
        let mut base = base as u128 % modulus;
        let mut exponent = exponent;
        let mut result = 1 % modulus;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = (result * base) % modulus;
            }
            base = (base * base) % modulus;
            exponent >>= 1;
        }

        result as u64
    }
}
