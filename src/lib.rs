pub mod math;
pub use math::Vector2;
pub use math::MathError;
