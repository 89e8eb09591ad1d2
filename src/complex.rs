// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The three operations the escape-time loop needs, over `num`'s
//! complex type.  `Complex<f64>` is `Copy`, so every operation hands
//! back a fresh value and nothing is ever mutated in place.

use num::Complex;

/// A point on the complex plane.
pub type Point = Complex<f64>;

/// The origin, where every orbit starts.
pub const ZERO: Point = Complex { re: 0.0, im: 0.0 };

/// Component-wise sum.
#[inline]
pub fn add(a: Point, b: Point) -> Point {
    Complex {
        re: a.re + b.re,
        im: a.im + b.im,
    }
}

/// `(re² - im², 2·re·im)`.
#[inline]
pub fn square(a: Point) -> Point {
    Complex {
        re: a.re * a.re - a.im * a.im,
        im: 2.0 * a.re * a.im,
    }
}

/// Distance from the origin.  `norm()` is a `hypot`, so large
/// components do not overflow before the square root.
#[inline]
pub fn magnitude(a: Point) -> f64 {
    a.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(magnitude(Complex::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn square_matches_expansion() {
        let cases = [(0.5, -1.25), (-2.0, 3.0), (1e-3, 7.5), (0.0, 0.0)];
        for &(re, im) in cases.iter() {
            let s = square(Complex::new(re, im));
            assert_eq!(s.re, re * re - im * im);
            assert_eq!(s.im, 2.0 * re * im);
        }
    }

    #[test]
    fn square_then_add_is_one_iteration() {
        let z = Complex::new(0.25, -0.5);
        let c = Complex::new(-1.0, 0.125);
        let n = add(square(z), c);
        assert_eq!(n.re, 0.25 * 0.25 - 0.5 * 0.5 - 1.0);
        assert_eq!(n.im, 2.0 * 0.25 * -0.5 + 0.125);
        // Agrees with num's own arithmetic.
        assert_eq!(n, z * z + c);
    }

    #[test]
    fn operations_leave_inputs_alone() {
        let a = Complex::new(1.0, 2.0);
        let _ = add(a, a);
        let _ = square(a);
        assert_eq!(a, Complex::new(1.0, 2.0));
    }

    #[test]
    fn magnitude_survives_huge_components() {
        let m = magnitude(Complex::new(1e200, 1e200));
        assert!(m.is_finite());
        assert!(m > 1e200);
    }
}
