use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Node '{node_id}' has a wrapper without a center strategy.")]
    MissingCenterStrategy { node_id: String },
}

pub mod boxes;
pub mod segment;
pub mod shadow;
pub mod translator;

pub use self::boxes::{compose_box, BoxLayout};
pub use self::segment::{segment_siblings, Axis, RenderItem, SegmentParams, SiblingInfo};
pub use self::shadow::{migrate_shadows, needs_shadow_migration};
pub use self::translator::{translate_layout, LayoutCss};
