#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Point arithmetic over short Weierstrass curves `y² = x³ + a·x + b` whose
//! domain parameters are supplied at runtime, with NIST P-256 built in.
//!
//! Coordinates and scalars are arbitrary-precision integers, so the same code
//! serves cryptographically sized curves as well as small teaching curves.
//!
//! ## Usage
//!
//! ```
//! use weierstrass::{BigUint, Curve};
//!
//! let curve = Curve::nist_p256();
//! let g = curve.generator();
//!
//! let a = curve.mul(&BigUint::from(7u32), &curve.mul(&BigUint::from(11u32), &g));
//! let b = curve.mul_generator(&BigUint::from(77u32));
//! assert_eq!(a, b);
//! assert!(curve.is_on_curve(&a));
//!
//! let encoded = curve.encode(&a);
//! assert_eq!(curve.decode_point(&encoded)?, a);
//! # Ok::<(), weierstrass::Error>(())
//! ```
//!
//! ## ⚠️ Security Warning
//!
//! Scalar multiplication is NOT constant time and the arbitrary-precision
//! backend makes no attempt to hide timing. This crate is suitable for
//! experimentation and interoperability testing, not for handling long-lived
//! secret keys.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod affine;
mod curve;
mod encoding;
mod error;
mod field;
mod point_arithmetic;
mod projective;
pub mod scalar;

pub use crate::{
    affine::AffinePoint,
    curve::{Curve, CurveParams},
    error::{Error, Result},
    scalar::{random_scalar, random_scalar_below},
};
pub use bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;
