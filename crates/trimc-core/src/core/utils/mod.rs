pub mod formatting;
pub mod geometry;
