//! Curve domain parameters and the [`Curve`] handle every operation is bound to.

use crate::{field::BaseField, AffinePoint, Error, Result};
use bigint::BigUint;
use hex_literal::hex;
use num_traits::Zero;

/// Domain parameters of a short Weierstrass curve `y² = x³ + a·x + b` over 𝔽ₚ.
///
/// This is a plain parameter table: nothing is checked until it is handed to
/// [`Curve::new`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Field prime `p`.
    pub p: BigUint,

    /// Coefficient `a` in the curve equation.
    pub a: BigUint,

    /// Coefficient `b` in the curve equation.
    pub b: BigUint,

    /// Generator point's affine x-coordinate.
    pub gx: BigUint,

    /// Generator point's affine y-coordinate.
    pub gy: BigUint,

    /// Order `n` of the group generated by the generator.
    pub n: BigUint,
}

impl CurveParams {
    /// NIST P-256 (a.k.a. secp256r1, prime256v1) domain parameters as
    /// specified in NIST SP 800-186.
    ///
    /// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field.
    pub fn nist_p256() -> Self {
        Self {
            p: BigUint::from_bytes_be(&hex!(
                "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff ffffffff"
            )),
            a: BigUint::from_bytes_be(&hex!(
                "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff fffffffc"
            )),
            b: BigUint::from_bytes_be(&hex!(
                "5ac635d8 aa3a93e7 b3ebbd55 769886bc 651d06b0 cc53b0f6 3bce3c3e 27d2604b"
            )),
            gx: BigUint::from_bytes_be(&hex!(
                "6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296"
            )),
            gy: BigUint::from_bytes_be(&hex!(
                "4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5"
            )),
            n: BigUint::from_bytes_be(&hex!(
                "ffffffff 00000000 ffffffff ffffffff bce6faad a7179e84 f3b9cac2 fc632551"
            )),
        }
    }

    /// Parse a parameter table given as big-endian hexadecimal strings.
    pub fn from_be_hex(p: &str, a: &str, b: &str, gx: &str, gy: &str, n: &str) -> Result<Self> {
        fn parse(s: &str) -> Result<BigUint> {
            BigUint::parse_bytes(s.trim().as_bytes(), 16)
                .ok_or(Error::InvalidParameters("malformed hexadecimal integer"))
        }

        Ok(Self {
            p: parse(p)?,
            a: parse(a)?,
            b: parse(b)?,
            gx: parse(gx)?,
            gy: parse(gy)?,
            n: parse(n)?,
        })
    }
}

/// A short Weierstrass curve with validated domain parameters.
///
/// All point operations are methods on this type, so the curve parameters are
/// always explicit: no operation relies on an implicitly selected curve.
/// Values of this type are immutable and may be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Curve {
    params: CurveParams,
    field: BaseField,
    generator: AffinePoint,
}

impl Curve {
    /// Validate the given domain parameters and build a curve from them.
    ///
    /// Checks that `p` is odd and greater than 3, that the coefficients and
    /// generator coordinates are reduced, that the curve is non-singular
    /// (`4a³ + 27b² ≢ 0 mod p`), that the generator satisfies the curve
    /// equation and that `n` is non-zero. Primality of `p` and `n` is not
    /// tested.
    pub fn new(params: CurveParams) -> Result<Self> {
        if params.p <= BigUint::from(3u32) || !params.p.bit(0) {
            return Err(Error::InvalidParameters(
                "field prime must be odd and greater than 3",
            ));
        }

        if params.a >= params.p || params.b >= params.p {
            return Err(Error::InvalidParameters("coefficients must be reduced mod p"));
        }

        if params.gx >= params.p || params.gy >= params.p {
            return Err(Error::InvalidParameters(
                "generator coordinates must be reduced mod p",
            ));
        }

        if params.n.is_zero() {
            return Err(Error::InvalidParameters("group order must be non-zero"));
        }

        let curve = Self::from_params(params);
        let f = &curve.field;
        let a3 = f.mul(&f.square(&curve.params.a), &curve.params.a);
        let b2 = f.square(&curve.params.b);
        let discriminant = f.add(&f.mul_small(&a3, 4), &f.mul_small(&b2, 27));

        if discriminant.is_zero() {
            return Err(Error::InvalidParameters("curve is singular"));
        }

        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::InvalidParameters("generator is not on the curve"));
        }

        Ok(curve)
    }

    /// NIST P-256.
    pub fn nist_p256() -> Self {
        Self::from_params(CurveParams::nist_p256())
    }

    fn from_params(params: CurveParams) -> Self {
        let field = BaseField::new(params.p.clone());
        let generator = AffinePoint::new(params.gx.clone(), params.gy.clone());

        Self {
            params,
            field,
            generator,
        }
    }

    /// Borrow the domain parameters.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Order `n` of the generator.
    pub fn order(&self) -> &BigUint {
        &self.params.n
    }

    /// Size of a serialized field element in bytes.
    pub fn field_bytes_len(&self) -> usize {
        self.field.bytes_len()
    }

    pub(crate) fn field(&self) -> &BaseField {
        &self.field
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint {
        self.generator.clone()
    }

    /// Returns `x³ + a·x + b mod p`.
    pub(crate) fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.params.a, x);
        f.add(&f.add(&x3, &ax), &self.params.b)
    }

    /// Does the point satisfy the curve equation `y² ≡ x³ + a·x + b (mod p)`?
    ///
    /// The point at infinity is on every curve. Coordinates outside `[0, p)`
    /// are rejected rather than reduced, so a point with a non-canonical
    /// coordinate is never reported as valid.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let (x, y) = match point.coordinates() {
            Some(coords) => coords,
            None => return true,
        };

        if !self.field.contains(x) || !self.field.contains(y) {
            return false;
        }

        self.field.square(y) == self.equation_rhs(x)
    }

    /// Returns [`Error::InvalidPoint`] unless the point is on the curve.
    pub fn check_point(&self, point: &AffinePoint) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            log::debug!("rejected point not on the curve: {}", point);
            Err(Error::InvalidPoint)
        }
    }
}
