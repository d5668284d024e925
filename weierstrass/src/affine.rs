//! Affine curve points.

use alloc::vec::Vec;
use bigint::BigUint;
use core::fmt;
use num_traits::Zero;
use subtle::Choice;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Points are plain values: they do not know which curve they belong to, and
/// every operation on them goes through a [`Curve`][`crate::Curve`] which
/// supplies the domain parameters.
///
/// A point built with [`AffinePoint::new`] carries no guarantee of curve
/// membership. Check it with [`Curve::is_on_curve`][`crate::Curve::is_on_curve`]
/// before using it in further arithmetic.
#[derive(Clone, Debug)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// The point at infinity always has both coordinates set to zero.
    pub(crate) infinity: u8,
}

impl AffinePoint {
    /// Create a point from raw coordinates (MakePoint).
    ///
    /// No range or curve membership checks are performed.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: 1,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Borrow the x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Borrow the y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Returns the coordinates as an `(x, y)` pair, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        if self.infinity == 1 {
            None
        } else {
            Some((&self.x, &self.y))
        }
    }

    /// Number of bytes needed by the wider of the two coordinates.
    pub(crate) fn coordinate_bytes_len(&self) -> usize {
        (self.x.bits().max(self.y.bits()) as usize).div_ceil(8)
    }
}

/// Big-endian bytes of `n`, left-padded with zeroes to `len` bytes.
///
/// `len` must be at least the byte length of `n`.
pub(crate) fn to_be_bytes_padded(n: &BigUint, len: usize) -> Vec<u8> {
    let bytes = if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    };
    let mut out = alloc::vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compares the infinity flag and both coordinates.
///
/// # Security
///
/// Not constant time: big integer comparison short-circuits on the first
/// differing limb.
impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.infinity == other.infinity && self.x == other.x && self.y == other.y
    }
}

impl Eq for AffinePoint {}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "({}, {})", x, y),
            None => f.write_str("(infinity)"),
        }
    }
}
