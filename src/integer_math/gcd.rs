// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        let mut a = left;
        let mut b = right;
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    pub fn are_coprime(left: u64, right: u64) -> bool {
        Self::find_gcd_pair(left, right) == 1
    }
}
