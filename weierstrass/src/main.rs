//! Shared-secret agreement check over NIST P-256.
//!
//! Draws two random 256-bit secrets `k` and `d` and verifies that
//! `k·(d·G) = d·(k·G)`, then walks through the remaining point operations and
//! reports whether every result lies on the curve.

use std::process::ExitCode;
use weierstrass::{random_scalar, AffinePoint, BigUint, Curve, OsRng};

fn main() -> ExitCode {
    let curve = Curve::nist_p256();
    let mut rng = OsRng;

    let (k, d) = match (random_scalar(&mut rng, 256), random_scalar(&mut rng, 256)) {
        (Ok(k), Ok(d)) => (k, d),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let g = curve.generator();

    let h1 = curve.mul(&d, &g);
    let h2 = curve.mul(&k, &h1);

    let h3 = curve.mul(&k, &g);
    let h4 = curve.mul(&d, &h3);

    let agreed = h2 == h4;
    println!("Correctness Check Result: {agreed}");

    println!("Is G on curve? {}", curve.is_on_curve(&g));
    println!("Is H1 on curve? {}", curve.is_on_curve(&h1));
    println!("Is H2 on curve? {}", curve.is_on_curve(&h2));

    println!("\nCheck point construction");
    let p = AffinePoint::new(BigUint::from(123u32), BigUint::from(456u32));
    println!("{p}");
    println!("Is P on curve? {}", curve.is_on_curve(&p));

    println!("\nCheck addition");
    let q = curve.add(&g, &g);
    println!("{q}");
    println!("Is Q on curve? {}", curve.is_on_curve(&q));

    println!("\nCheck doubling");
    let r = curve.double(&g);
    println!("{r}");
    println!("Is R on curve? {}", curve.is_on_curve(&r));

    println!("\nCheck encoding");
    let encoded = curve.encode(&g);
    let round_trip = matches!(curve.decode(&encoded), Ok(decoded) if decoded == g);
    println!("{encoded}");
    println!("Encoding round trip: {round_trip}");

    if agreed && round_trip && q == r {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
