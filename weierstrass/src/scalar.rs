//! Random scalar generation.
//!
//! Scalars are drawn from a caller-supplied cryptographically secure RNG
//! ([`TryCryptoRng`]). A failure of the RNG is reported as
//! [`Error::EntropySourceFailure`]; there is no retry and no fallback to a
//! weaker generator.

use crate::{Curve, Error, Result};
use alloc::{string::ToString, vec::Vec};
use bigint::BigUint;
use num_traits::Zero;
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

/// Returns a uniformly random integer in `[0, 2^bits)`.
///
/// `bits = 0` yields zero without touching the RNG. A bit length whose byte
/// buffer cannot be allocated yields [`Error::InvalidParameters`].
pub fn random_scalar<R: TryCryptoRng + ?Sized>(rng: &mut R, bits: u64) -> Result<BigUint> {
    if bits == 0 {
        return Ok(BigUint::zero());
    }

    let len = usize::try_from(bits.div_ceil(8)).map_err(|_| too_large())?;
    let mut bytes = Zeroizing::new(Vec::new());
    bytes.try_reserve_exact(len).map_err(|_| too_large())?;
    bytes.resize(len, 0u8);

    rng.try_fill_bytes(&mut bytes).map_err(|e| {
        log::error!("secure random source failed: {}", e);
        Error::EntropySourceFailure(e.to_string())
    })?;

    // Clear the excess high bits of the most significant byte
    let excess = len as u64 * 8 - bits;
    bytes[0] &= 0xffu8 >> excess;

    Ok(BigUint::from_bytes_be(&bytes))
}

fn too_large() -> Error {
    Error::InvalidParameters("scalar bit length is too large")
}

/// Returns a uniformly random integer in `[0, bound)`.
///
/// Uses rejection sampling over `bits(bound - 1)`-bit candidates, so each
/// attempt succeeds with probability greater than one half.
pub fn random_scalar_below<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidParameters("sampling bound must be non-zero"));
    }

    let bits = (bound - 1u32).bits();

    loop {
        let candidate = random_scalar(rng, bits)?;

        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

impl Curve {
    /// Returns a uniformly random scalar in `[1, n)` where `n` is the order of
    /// the generator.
    pub fn random_nonzero_scalar<R: TryCryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        if self.order() <= &BigUint::from(1u32) {
            return Err(Error::InvalidParameters(
                "group order has no non-zero scalars",
            ));
        }

        let bound = self.order() - 1u32;
        Ok(random_scalar_below(rng, &bound)? + 1u32)
    }
}
