use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MathError {
	/// A vector was divided by the scalar zero.
	DivisionByZero
}

impl Display for MathError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			MathError::DivisionByZero => write!(f, "attempt to divide a vector by zero")
		}
	}
}

impl std::error::Error for MathError {}
