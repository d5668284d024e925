//! Base field arithmetic modulo a prime supplied at runtime.

use bigint::BigUint;
use num_traits::Zero;

/// Arithmetic in 𝔽ₚ where `p` is the curve's field prime.
///
/// Every operation accepts operands of any size and returns a value in the
/// range `[0, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BaseField {
    modulus: BigUint,

    /// p - 2
    modulus_m2: BigUint,

    /// Size of a serialized field element in bytes.
    bytes_len: usize,
}

impl BaseField {
    /// Create the field for the given modulus.
    ///
    /// The modulus must already have been checked to be an odd prime `> 3`.
    pub(crate) fn new(modulus: BigUint) -> Self {
        let modulus_m2 = if modulus.bits() > 1 {
            &modulus - 2u32
        } else {
            BigUint::zero()
        };
        let bytes_len = (modulus.bits() as usize).div_ceil(8);

        Self {
            modulus,
            modulus_m2,
            bytes_len,
        }
    }

    /// Returns the size of a serialized field element in bytes.
    pub(crate) fn bytes_len(&self) -> usize {
        self.bytes_len
    }

    /// Is `a` already a canonical element, i.e. `a < p`?
    pub(crate) fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    /// Returns `a mod p`.
    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    /// Returns `a + b mod p`.
    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Returns `a - b mod p`.
    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);

        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    /// Returns `-a mod p`.
    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);

        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    /// Returns `a * b mod p`.
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Returns `k * a mod p` for a small constant `k`.
    pub(crate) fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.modulus
    }

    /// Returns `a² mod p`.
    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `a⁻¹ mod p`, or `None` if `a ≡ 0`.
    ///
    /// Computed as `a^(p - 2)` (Fermat's little theorem).
    pub(crate) fn invert(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);

        if a.is_zero() {
            return None;
        }

        Some(a.modpow(&self.modulus_m2, &self.modulus))
    }
}
