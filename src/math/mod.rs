pub mod vector2;
pub use vector2::Vector2;

pub mod error;
pub use error::MathError;

use std::fmt::Debug;

/// Component-wise comparison with an absolute tolerance, for float types where exact equality is too strict.
pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool;
}

pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f32) {
	if !left.approx_eq(right, tol) {
		panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`", left, right, tol);
	}
}

impl ApproxEq for f32 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self - other).abs() <= tol
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn approx_eq_f32() {
		assert!(1.0f32.approx_eq(&1.0005, 1e-3));
		assert!(!1.0f32.approx_eq(&1.1, 1e-3));
	}

	#[test]
	#[should_panic(expected = "left ≈ right")]
	fn assert_approx_eq_fails() {
		assert_approx_eq(&1.0f32, &2.0, 1e-6);
	}
}
