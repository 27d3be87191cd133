pub mod point;
pub mod range;
