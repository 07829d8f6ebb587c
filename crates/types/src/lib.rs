pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Rgba;
pub use geometry::{Affine, Point, Rect, Size};
pub use ids::NodeId;
