//! Point arithmetic: the chord-and-tangent group law and scalar multiplication.
//!
//! Addition and doubling work directly on affine coordinates and special-case
//! every input for which the slope would otherwise divide by zero:
//!
//! - either operand is the point at infinity;
//! - `A = B` (delegated to doubling);
//! - `A = -B` (the result is the point at infinity);
//! - doubling a point with `y = 0` (a 2-torsion point).
//!
//! Scalar multiplication accumulates in Jacobian coordinates so that a single
//! field inversion is needed per product.
//!
//! None of these operations validate their inputs: pass points which were
//! produced by this crate's arithmetic, the curve's generator, or which have
//! been checked with [`Curve::is_on_curve`].

use crate::{projective::ProjectivePoint, AffinePoint, Curve};
use bigint::BigUint;
use num_traits::Zero;

impl Curve {
    /// Returns `a + b`.
    pub fn add(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        let ((x1, y1), (x2, y2)) = match (a.coordinates(), b.coordinates()) {
            (None, _) => return b.clone(),
            (_, None) => return a.clone(),
            (Some(p1), Some(p2)) => (p1, p2),
        };

        let f = self.field();
        let (x1, y1) = (f.reduce(x1), f.reduce(y1));
        let (x2, y2) = (f.reduce(x2), f.reduce(y2));

        if x1 == x2 {
            return if y1 == y2 {
                self.double(a)
            } else {
                // b = -a
                AffinePoint::identity()
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let Some(dx_inv) = f.invert(&f.sub(&x2, &x1)) else {
            return AffinePoint::identity();
        };
        let lambda = f.mul(&f.sub(&y2, &y1), &dx_inv);

        let x3 = f.sub(&f.sub(&f.square(&lambda), &x1), &x2);
        let y3 = f.sub(&f.mul(&lambda, &f.sub(&x1, &x3)), &y1);
        AffinePoint::new(x3, y3)
    }

    /// Returns `a + a`.
    pub fn double(&self, a: &AffinePoint) -> AffinePoint {
        let Some((x, y)) = a.coordinates() else {
            return AffinePoint::identity();
        };

        let f = self.field();
        let (x, y) = (f.reduce(x), f.reduce(y));

        // The tangent at a 2-torsion point is vertical
        if y.is_zero() {
            return AffinePoint::identity();
        }

        // λ = (3x² + a) / 2y
        let Some(dy_inv) = f.invert(&f.mul_small(&y, 2)) else {
            return AffinePoint::identity();
        };
        let numerator = f.add(&f.mul_small(&f.square(&x), 3), &self.params().a);
        let lambda = f.mul(&numerator, &dy_inv);

        let x3 = f.sub(&f.square(&lambda), &f.mul_small(&x, 2));
        let y3 = f.sub(&f.mul(&lambda, &f.sub(&x, &x3)), &y);
        AffinePoint::new(x3, y3)
    }

    /// Returns `-a`.
    pub fn neg(&self, a: &AffinePoint) -> AffinePoint {
        match a.coordinates() {
            Some((x, y)) => AffinePoint::new(self.field().reduce(x), self.field().neg(y)),
            None => AffinePoint::identity(),
        }
    }

    /// Returns `a - b`.
    pub fn sub(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        self.add(a, &self.neg(b))
    }

    /// Returns `k · a`.
    ///
    /// Left-to-right double-and-add over every bit of `k`. `k` is not reduced
    /// modulo the group order, and `k = 0` yields the point at infinity.
    ///
    /// # Security
    ///
    /// Not constant time: the sequence of additions and the running time of
    /// the big integer arithmetic depend on the bits of `k`.
    pub fn mul(&self, k: &BigUint, a: &AffinePoint) -> AffinePoint {
        log::trace!("scalar multiplication by a {}-bit scalar", k.bits());

        let mut acc = ProjectivePoint::identity();

        for i in (0..k.bits()).rev() {
            acc = acc.double(self);

            if k.bit(i) {
                acc = acc.add_mixed(a, self);
            }
        }

        acc.to_affine(self)
    }

    /// Returns `k · G` where `G` is the curve's generator.
    pub fn mul_generator(&self, k: &BigUint) -> AffinePoint {
        self.mul(k, &self.generator())
    }
}
