use super::{ApproxEq, MathError};
use std::cmp::Ordering;
use std::fmt::Display;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use bytemuck::{Pod, Zeroable};
use log::debug;

pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };
pub const UP: Vector2 = Vector2 { x: 0.0, y: 1.0 };
pub const DOWN: Vector2 = Vector2 { x: 0.0, y: -1.0 };
pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };

// Below this, the product of the two magnitudes is treated as zero when measuring angles
const EPSILON_NORMAL_SQRT: f32 = 1e-15;
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// A 2D vector of two `f32` components.
///
/// Every operation returns a new value; [`Vector2::set`] is the only way to change an existing one.
/// Equality is exact component comparison with no tolerance, use [`ApproxEq`] when rounding matters.
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
	pub x: f32,
	pub y: f32
}

impl Vector2 {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn from_scalar(scalar: f32) -> Self {
		Self { x: scalar, y: scalar }
	}

	pub fn set(&mut self, x: f32, y: f32) {
		self.x = x;
		self.y = y;
	}

	pub fn x_coord(&self) -> f32 {
		self.x
	}

	pub fn y_coord(&self) -> f32 {
		self.y
	}

	pub fn to_array(&self) -> [f32; 2] {
		[self.x, self.y]
	}

	pub fn sqr_magnitude(&self) -> f32 {
		self.x * self.x + self.y * self.y
	}

	pub fn magnitude(&self) -> f32 {
		self.sqr_magnitude().sqrt()
	}

	/// Returns this vector scaled to unit length. A zero vector has no direction and normalizes to [`ZERO`].
	pub fn normalized(&self) -> Self {
		let magnitude = self.magnitude();

		if magnitude == 0.0 {
			debug!("normalizing a zero length vector, returning zero");
			return ZERO;
		}

		Self::new(self.x / magnitude, self.y / magnitude)
	}

	/// Returns a copy whose length is at most `max_length`, keeping the direction.
	pub fn clamp_magnitude(&self, max_length: f32) -> Self {
		let magnitude = self.magnitude();

		if magnitude > max_length {
			self * (max_length / magnitude)
		} else {
			*self
		}
	}

	pub fn dot(&self, other: &Self) -> f32 {
		self.x * other.x + self.y * other.y
	}

	/// The z component of the 3D cross product, positive when `other` lies counter-clockwise of `self`.
	pub fn cross(&self, other: &Self) -> f32 {
		self.x * other.y - self.y * other.x
	}

	/// Unsigned angle in degrees between the two vectors, in `[0, 180]`.
	///
	/// Returns `0.0` if either vector has zero length.
	pub fn angle(&self, other: &Self) -> f32 {
		let denominator = self.magnitude() * other.magnitude();

		if denominator < EPSILON_NORMAL_SQRT {
			debug!("angle between {} and {} is undefined, returning 0", self, other);
			return 0.0;
		}

		// Rounding can push the cosine just past +-1 for (anti)parallel vectors
		let cos = (self.dot(other) / denominator).clamp(-1.0, 1.0);
		cos.acos().to_degrees()
	}

	/// Angle in degrees from `self` to `other`, positive counter-clockwise, in `[-180, 180]`.
	///
	/// Collinear vectors count as counter-clockwise, so opposite vectors give `180`.
	pub fn signed_angle(&self, other: &Self) -> f32 {
		let angle = self.angle(other);

		if self.cross(other) < 0.0 {
			-angle
		} else {
			angle
		}
	}

	/// Exact component equality, same as `==`.
	pub fn equals(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}

	pub fn distance(&self, other: &Self) -> f32 {
		(self - other).magnitude()
	}

	/// Interpolates from `self` to `other`. `t` is not clamped, so values outside `[0, 1]` extrapolate.
	pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
		self + (other - self) * t
	}

	pub fn max(&self, other: &Self) -> Self {
		Self::new(self.x.max(other.x), self.y.max(other.y))
	}

	pub fn min(&self, other: &Self) -> Self {
		Self::new(self.x.min(other.x), self.y.min(other.y))
	}

	/// Moves from `self` toward `target` by at most `max_distance_delta`, landing exactly on `target`
	/// when it is within reach. A negative delta moves away from `target`.
	pub fn move_towards(&self, target: &Self, max_distance_delta: f32) -> Self {
		let to = target - self;
		let sqr_distance = to.sqr_magnitude();

		if sqr_distance == 0.0 || (max_distance_delta >= 0.0 && sqr_distance <= max_distance_delta * max_distance_delta) {
			return *target;
		}

		self + to / sqr_distance.sqrt() * max_distance_delta
	}

	/// Reflects `self` off the surface with the given normal. `normal` should have unit length.
	pub fn reflect(&self, normal: &Self) -> Self {
		self - normal * (2.0 * self.dot(normal))
	}

	pub fn scale(&self, factor: f32) -> Self {
		self * factor
	}

	/// Rotates 90 degrees counter-clockwise.
	pub fn perpendicular(&self) -> Self {
		Self::new(-self.y, self.x)
	}

	/// Gradually moves `self` toward `target` like a critically damped spring.
	///
	/// `velocity` carries state between calls and is updated in place. The distance covered per call is
	/// limited by `max_speed`, and the result never passes `target`.
	pub fn smooth_damp(&self, target: &Self, velocity: &mut Self, smooth_time: f32, max_speed: f32, delta_time: f32) -> Self {
		let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
		let omega = 2.0 / smooth_time;

		let x = omega * delta_time;
		let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

		let max_change = max_speed * smooth_time;
		let change = (self - target).clamp_magnitude(max_change);
		let clamped_target = self - change;

		let temp = (*velocity + change * omega) * delta_time;
		*velocity = (*velocity - temp * omega) * decay;

		let output = clamped_target + (change + temp) * decay;

		if (target - self).dot(&(output - target)) > 0.0 {
			*velocity = ZERO;
			return *target;
		}

		output
	}

	/// Divides both components by `scalar`, failing instead of producing infinities when it is zero.
	pub fn checked_div(&self, scalar: f32) -> Result<Self, MathError> {
		if scalar == 0.0 {
			return Err(MathError::DivisionByZero);
		}

		Ok(Self::new(self.x / scalar, self.y / scalar))
	}

	/// True if either component is exactly `scalar`.
	pub fn contains(&self, scalar: f32) -> bool {
		self.x == scalar || self.y == scalar
	}

	pub fn all_lt(&self, other: &Self) -> bool {
		self.x < other.x && self.y < other.y
	}

	pub fn all_gt(&self, other: &Self) -> bool {
		self.x > other.x && self.y > other.y
	}

	pub fn all_le(&self, other: &Self) -> bool {
		self.x <= other.x && self.y <= other.y
	}

	pub fn all_ge(&self, other: &Self) -> bool {
		self.x >= other.x && self.y >= other.y
	}
}

impl From<[f32; 2]> for Vector2 {
	fn from(a: [f32; 2]) -> Self {
		Self::new(a[0], a[1])
	}
}

impl From<Vector2> for [f32; 2] {
	fn from(v: Vector2) -> Self {
		v.to_array()
	}
}

impl_op_ex!(+ |a: &Vector2, b: &Vector2| -> Vector2 {
	Vector2::new(a.x + b.x, a.y + b.y)
});

impl_op_ex!(- |a: &Vector2, b: &Vector2| -> Vector2 {
	Vector2::new(a.x - b.x, a.y - b.y)
});

impl_op_ex!(* |a: &Vector2, b: &Vector2| -> Vector2 {
	Vector2::new(a.x * b.x, a.y * b.y)
});

// Zero components are not checked and follow IEEE-754
impl_op_ex!(/ |a: &Vector2, b: &Vector2| -> Vector2 {
	Vector2::new(a.x / b.x, a.y / b.y)
});

impl_op_ex!(+ |a: &Vector2, b: f32| -> Vector2 {
	Vector2::new(a.x + b, a.y + b)
});

impl_op_ex!(- |a: &Vector2, b: f32| -> Vector2 {
	Vector2::new(a.x - b, a.y - b)
});

impl_op_ex_commutative!(* |a: &Vector2, b: f32| -> Vector2 {
	Vector2::new(a.x * b, a.y * b)
});

// Panics on zero like integer division, see `checked_div`
impl_op_ex!(/ |a: &Vector2, b: f32| -> Vector2 {
	match a.checked_div(b) {
		Ok(r) => r,
		Err(e) => panic!("{}", e)
	}
});

impl_op_ex!(- |a: &Vector2| -> Vector2 {
	Vector2 {
		x: -a.x,
		y: -a.y
	}
});

// Against a scalar, a vector compares by the sum of its components
impl PartialEq<f32> for Vector2 {
	fn eq(&self, other: &f32) -> bool {
		self.x + self.y == *other
	}
}

/// Orders by `x + y` against the scalar on the right, so `Vector2::new(1.0, 2.0) < 4.0` holds.
impl PartialOrd<f32> for Vector2 {
	fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
		(self.x + self.y).partial_cmp(other)
	}
}

impl ApproxEq for Vector2 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();

		x_diff <= tol && y_diff <= tol
	}
}

impl Display for Vector2 {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "<Vector2 ({:?}, {:?})>", self.x, self.y)
	}
}
