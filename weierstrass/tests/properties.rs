//! Property-based tests over NIST P-256.

use proptest::prelude::*;
use weierstrass::{AffinePoint, BigUint, Curve};

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

prop_compose! {
    fn point()(k in scalar()) -> AffinePoint {
        Curve::nist_p256().mul_generator(&k)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn mul_stays_on_curve(p in point()) {
        prop_assert!(Curve::nist_p256().is_on_curve(&p));
    }

    #[test]
    fn add_is_commutative(a in point(), b in point()) {
        let curve = Curve::nist_p256();
        let sum = curve.add(&a, &b);

        prop_assert!(curve.is_on_curve(&sum));
        prop_assert_eq!(&sum, &curve.add(&b, &a));
    }

    #[test]
    fn double_is_add_to_self(a in point()) {
        let curve = Curve::nist_p256();
        prop_assert_eq!(curve.double(&a), curve.add(&a, &a));
    }

    #[test]
    fn scalar_mul_commutes(p in point(), k in scalar(), d in scalar()) {
        let curve = Curve::nist_p256();
        prop_assert_eq!(
            curve.mul(&k, &curve.mul(&d, &p)),
            curve.mul(&d, &curve.mul(&k, &p))
        );
    }

    #[test]
    fn scalar_mul_distributes(p in point(), k in scalar(), d in scalar()) {
        let curve = Curve::nist_p256();
        prop_assert_eq!(
            curve.mul(&(&k + &d), &p),
            curve.add(&curve.mul(&k, &p), &curve.mul(&d, &p))
        );
    }

    #[test]
    fn mul_by_zero_and_one(p in point()) {
        let curve = Curve::nist_p256();
        prop_assert_eq!(curve.mul(&BigUint::from(0u32), &p), AffinePoint::identity());
        prop_assert_eq!(&curve.mul(&BigUint::from(1u32), &p), &p);
    }

    #[test]
    fn codec_round_trip(p in point()) {
        let curve = Curve::nist_p256();
        let s = curve.encode(&p);

        prop_assert_eq!(s.len(), 130);
        prop_assert_eq!(curve.decode_point(&s).unwrap(), p);
    }

    #[test]
    fn codec_round_trip_arbitrary_coordinates(x in scalar(), y in scalar()) {
        let curve = Curve::nist_p256();
        let p = AffinePoint::new(x, y);
        prop_assert_eq!(curve.decode(&curve.encode(&p)).unwrap(), p);
    }
}
