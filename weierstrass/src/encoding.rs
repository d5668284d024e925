//! Point codec.
//!
//! Points are serialized with the `Elliptic-Curve-Point-to-Octet-String`
//! algorithm from SEC 1: Elliptic Curve Cryptography (Version 2.0), section
//! 2.3.3, in its uncompressed form:
//!
//! ```text
//! 0x04 || X || Y
//! ```
//!
//! where `X` and `Y` are big-endian and zero-padded to the same width, which
//! is the field width (32 bytes for P-256). The point at infinity is the single
//! byte `0x00`. The text form is the lowercase hexadecimal spelling of those
//! bytes, which contains no delimiters and so cannot be confused by the digits
//! of either coordinate.
//!
//! Unvalidated points built with [`AffinePoint::new`] may have coordinates
//! wider than the field. Such points are encoded with both coordinates padded
//! to the width of the wider one, so that every point has exactly one
//! encoding and decoding is the exact inverse of encoding.
//!
//! <https://www.secg.org/sec1-v2.pdf>

use crate::{affine::to_be_bytes_padded, AffinePoint, Curve, Error, Result};
use alloc::{string::String, vec, vec::Vec};
use bigint::BigUint;

/// Tag byte of the SEC1 encoding of the point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// Tag byte of an uncompressed SEC1 point.
const TAG_UNCOMPRESSED: u8 = 0x04;

impl Curve {
    /// Serialize a point as SEC1 bytes.
    pub fn to_sec1_bytes(&self, point: &AffinePoint) -> Vec<u8> {
        let Some((x, y)) = point.coordinates() else {
            return vec![TAG_IDENTITY];
        };

        let width = self.field_bytes_len().max(point.coordinate_bytes_len());
        let mut bytes = Vec::with_capacity(1 + 2 * width);
        bytes.push(TAG_UNCOMPRESSED);
        bytes.extend_from_slice(&to_be_bytes_padded(x, width));
        bytes.extend_from_slice(&to_be_bytes_padded(y, width));
        bytes
    }

    /// Parse SEC1 bytes produced by [`Curve::to_sec1_bytes`].
    ///
    /// Curve membership is NOT checked.
    pub fn from_sec1_bytes(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let (&tag, body) = bytes
            .split_first()
            .ok_or_else(|| malformed("empty encoding"))?;

        match tag {
            TAG_IDENTITY if body.is_empty() => Ok(AffinePoint::identity()),
            TAG_IDENTITY => Err(malformed("trailing bytes after identity tag")),
            TAG_UNCOMPRESSED => {
                if body.len() % 2 != 0 {
                    return Err(malformed("coordinates have unequal lengths"));
                }

                let width = body.len() / 2;

                if width < self.field_bytes_len() {
                    return Err(malformed("coordinates are shorter than the field width"));
                }

                let (x, y) = body.split_at(width);

                if width > self.field_bytes_len() && x[0] == 0 && y[0] == 0 {
                    return Err(malformed("coordinates are padded beyond the canonical width"));
                }

                Ok(AffinePoint::new(
                    BigUint::from_bytes_be(x),
                    BigUint::from_bytes_be(y),
                ))
            }
            _ => Err(malformed("unsupported tag byte")),
        }
    }

    /// Encode a point as a hexadecimal string.
    pub fn encode(&self, point: &AffinePoint) -> String {
        hex::encode(self.to_sec1_bytes(point))
    }

    /// Decode a string produced by [`Curve::encode`].
    ///
    /// Upper-case hexadecimal is accepted. Curve membership is NOT checked, so
    /// that `decode(encode(p)) == p` for every point; use
    /// [`Curve::decode_point`] for untrusted input.
    pub fn decode(&self, s: &str) -> Result<AffinePoint> {
        let bytes = hex::decode(s).map_err(|_| malformed("invalid hexadecimal"))?;
        self.from_sec1_bytes(&bytes)
    }

    /// Decode a string produced by [`Curve::encode`] and check that the
    /// result is on the curve.
    pub fn decode_point(&self, s: &str) -> Result<AffinePoint> {
        let point = self.decode(s)?;
        self.check_point(&point)?;
        Ok(point)
    }
}

fn malformed(reason: &'static str) -> Error {
    log::debug!("rejected point encoding: {}", reason);
    Error::MalformedEncoding(reason)
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, Curve, CurveParams, Error};
    use alloc::{format, string::String};
    use bigint::BigUint;
    use hex_literal::hex;

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    const GENERATOR_SEC1: [u8; 65] = hex!(
        "04"
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    );

    #[test]
    fn generator_sec1() {
        let curve = Curve::nist_p256();
        let g = curve.generator();

        assert_eq!(curve.to_sec1_bytes(&g), GENERATOR_SEC1);
        assert_eq!(curve.from_sec1_bytes(&GENERATOR_SEC1).unwrap(), g);
        assert_eq!(curve.encode(&g), hex::encode(GENERATOR_SEC1));
    }

    #[test]
    fn identity() {
        let curve = Curve::nist_p256();
        assert_eq!(curve.encode(&AffinePoint::identity()), "00");
        assert_eq!(curve.decode("00").unwrap(), AffinePoint::identity());
    }

    #[test]
    fn small_coordinates_are_padded() {
        let curve = Curve::nist_p256();
        let p = AffinePoint::new(n(123), n(456));
        let s = curve.encode(&p);

        assert_eq!(s.len(), 2 + 64 + 64);
        assert!(s.ends_with("01c8"));
        assert_eq!(curve.decode(&s).unwrap(), p);
    }

    #[test]
    fn toy_curve_width() {
        let curve = Curve::new(CurveParams {
            p: n(17),
            a: n(2),
            b: n(2),
            gx: n(5),
            gy: n(1),
            n: n(19),
        })
        .unwrap();

        assert_eq!(curve.encode(&curve.generator()), "040501");
        assert_eq!(curve.decode("040501").unwrap(), curve.generator());
    }

    #[test]
    fn wide_coordinates_round_trip() {
        let curve = Curve::nist_p256();
        let x = (BigUint::from(1u32) << 256usize) + 1u32;
        let p = AffinePoint::new(x, n(5));
        let s = curve.encode(&p);

        assert_eq!(s.len(), 2 + 66 + 66);
        assert_eq!(curve.decode(&s).unwrap(), p);
    }

    #[test]
    fn uppercase_is_accepted() {
        let curve = Curve::nist_p256();
        let s = curve.encode(&curve.generator()).to_uppercase();
        assert_eq!(curve.decode(&s).unwrap(), curve.generator());
    }

    #[test]
    fn decode_point_checks_membership() {
        let curve = Curve::nist_p256();
        let off_curve = curve.encode(&AffinePoint::new(n(123), n(456)));

        assert_eq!(curve.decode_point(&off_curve), Err(Error::InvalidPoint));
        assert!(curve.decode(&off_curve).is_ok());

        let g = curve.encode(&curve.generator());
        assert_eq!(curve.decode_point(&g).unwrap(), curve.generator());
    }

    #[test]
    fn malformed() {
        let curve = Curve::nist_p256();
        let g = curve.encode(&curve.generator());
        let zeros = "00".repeat(32);

        let cases: [String; 10] = [
            String::new(),
            "0".into(),
            "zz".into(),
            "(123, 456)".into(),
            "0000".into(),
            format!("05{}", &g[2..]),
            format!("{}00", g),
            g[..g.len() - 2].into(),
            format!("04{}{}", &zeros[2..], &zeros[2..]),
            format!("0400{}00{}", &g[2..66], &g[66..]),
        ];

        for case in cases.iter() {
            assert!(
                matches!(curve.decode(case), Err(Error::MalformedEncoding(_))),
                "accepted {:?}",
                case
            );
        }
    }
}
