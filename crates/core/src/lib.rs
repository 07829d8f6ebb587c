//! The front half of the scenemark compiler: the composition JSON a
//! design-tool exporter produces, its validation, and its lowering into the
//! render IR.

pub mod error;
pub mod lower;
pub mod model;

pub use error::BuildError;
pub use lower::{lower_composition, LowerOptions, LoweredComposition};
pub use model::Composition;
