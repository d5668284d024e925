//! Jacobian projective coordinates used as the scalar multiplication
//! accumulator.
//!
//! A point `(X : Y : Z)` with `Z ≠ 0` represents the affine point
//! `(X / Z², Y / Z³)`; any point with `Z = 0` is the point at infinity.

use crate::{AffinePoint, Curve};
use bigint::BigUint;
use num_traits::{One, Zero};

#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift an affine point, reducing its coordinates into the field.
    pub(crate) fn from_affine(point: &AffinePoint, curve: &Curve) -> Self {
        match point.coordinates() {
            Some((x, y)) => Self {
                x: curve.field().reduce(x),
                y: curve.field().reduce(y),
                z: BigUint::one(),
            },
            None => Self::identity(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub(crate) fn to_affine(&self, curve: &Curve) -> AffinePoint {
        let f = curve.field();

        match f.invert(&self.z) {
            Some(zinv) => {
                let zinv2 = f.square(&zinv);
                let zinv3 = f.mul(&zinv2, &zinv);
                AffinePoint::new(f.mul(&self.x, &zinv2), f.mul(&self.y, &zinv3))
            }
            None => AffinePoint::identity(),
        }
    }

    /// Returns `self + self`.
    ///
    /// ```text
    /// S  = 4·X·Y²
    /// M  = 3·X² + a·Z⁴
    /// X' = M² - 2·S
    /// Y' = M·(S - X') - 8·Y⁴
    /// Z' = 2·Y·Z
    /// ```
    pub(crate) fn double(&self, curve: &Curve) -> Self {
        let f = curve.field();

        // A 2-torsion point doubles to the identity
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }

        let yy = f.square(&self.y);
        let s = f.mul_small(&f.mul(&self.x, &yy), 4);
        let zz = f.square(&self.z);
        let m = f.add(
            &f.mul_small(&f.square(&self.x), 3),
            &f.mul(&curve.params().a, &f.square(&zz)),
        );
        let x3 = f.sub(&f.square(&m), &f.mul_small(&s, 2));
        let y3 = f.sub(
            &f.mul(&m, &f.sub(&s, &x3)),
            &f.mul_small(&f.square(&yy), 8),
        );
        let z3 = f.mul_small(&f.mul(&self.y, &self.z), 2);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + rhs` for an affine `rhs`.
    ///
    /// ```text
    /// U2 = x2·Z1²,  S2 = y2·Z1³
    /// H  = U2 - X1, R  = S2 - Y1
    /// X3 = R² - H³ - 2·X1·H²
    /// Y3 = R·(X1·H² - X3) - Y1·H³
    /// Z3 = Z1·H
    /// ```
    pub(crate) fn add_mixed(&self, rhs: &AffinePoint, curve: &Curve) -> Self {
        let (x2, y2) = match rhs.coordinates() {
            Some(coords) => coords,
            None => return self.clone(),
        };

        if self.is_identity() {
            return Self::from_affine(rhs, curve);
        }

        let f = curve.field();
        let z1z1 = f.square(&self.z);
        let u2 = f.mul(x2, &z1z1);
        let s2 = f.mul(y2, &f.mul(&self.z, &z1z1));
        let h = f.sub(&u2, &self.x);
        let r = f.sub(&s2, &self.y);

        if h.is_zero() {
            return if r.is_zero() {
                // Same point
                self.double(curve)
            } else {
                // Inverse points
                Self::identity()
            };
        }

        let hh = f.square(&h);
        let hhh = f.mul(&h, &hh);
        let v = f.mul(&self.x, &hh);
        let x3 = f.sub(&f.sub(&f.square(&r), &hhh), &f.mul_small(&v, 2));
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&self.y, &hhh));
        let z3 = f.mul(&self.z, &h);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
