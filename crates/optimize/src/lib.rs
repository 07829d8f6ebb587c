//! Output-size optimization passes over the CSS the renderers produce.
//!
//! All passes are deterministic and idempotent, and all of their state is
//! owned by the caller so that it lives exactly as long as one build.

pub mod scale;
pub mod selector;
pub mod shared;
pub mod transform;
pub mod utility;

pub use selector::escape_class;
pub use shared::SharedClassPool;
pub use transform::simplify_transform;
pub use utility::{is_reserved_class, UtilityClasses, UtilityExtractor};
