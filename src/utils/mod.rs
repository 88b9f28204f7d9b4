//! Various unsorted geometrical and logical operators.

pub use self::normalize::normalize_or_zero;

mod normalize;
