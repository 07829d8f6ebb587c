//! Mask and z-order segmentation of a sibling list.
//!
//! Siblings are turned into render items: plain nodes, or masked segments
//! where a mask node clips the visible siblings that follow it. Stacking and
//! negative auto-layout spacing are resolved here so that the renderer only
//! attaches the returned CSS to each item.
use scenemark_style::{normalize_length, Declarations};

/// What the segmenter needs to know about one sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingInfo {
    pub is_mask: bool,
    pub visible: bool,
    /// Participates in the parent's flex flow (not absolutely positioned).
    pub in_flow: bool,
    pub breaks_mask: bool,
}

impl SiblingInfo {
    pub fn node(visible: bool, in_flow: bool) -> Self {
        Self { is_mask: false, visible, in_flow, breaks_mask: false }
    }

    pub fn mask() -> Self {
        Self { is_mask: true, visible: true, in_flow: false, breaks_mask: false }
    }
}

/// The parent's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentParams {
    pub parent_is_auto_layout: bool,
    pub item_spacing: f64,
    pub item_reverse_z_index: bool,
    pub axis: Axis,
}

impl SegmentParams {
    fn emits_z_index(&self) -> bool {
        !self.parent_is_auto_layout || self.item_spacing < 0.0 || self.item_reverse_z_index
    }

    fn overlap_margin(&self) -> Option<(&'static str, String)> {
        if !self.parent_is_auto_layout || self.item_spacing >= 0.0 {
            return None;
        }
        let prop = match self.axis {
            Axis::Horizontal => "margin-left",
            Axis::Vertical => "margin-top",
        };
        Some((prop, normalize_length(self.item_spacing)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    Node {
        index: usize,
        item_css: Declarations,
    },
    Masked {
        mask_index: usize,
        node_indices: Vec<usize>,
        container_css: Declarations,
    },
}

enum Draft {
    Node(usize),
    Masked(usize, Vec<usize>),
}

pub fn segment_siblings(siblings: &[SiblingInfo], params: &SegmentParams) -> Vec<RenderItem> {
    let mut drafts = Vec::with_capacity(siblings.len());
    let mut open: Option<(usize, Vec<usize>)> = None;

    let close = |open: &mut Option<(usize, Vec<usize>)>, drafts: &mut Vec<Draft>| {
        if let Some((mask, members)) = open.take() {
            if members.is_empty() {
                log::debug!("Dropping mask segment at {} with no visible members", mask);
            } else {
                drafts.push(Draft::Masked(mask, members));
            }
        }
    };

    for (index, sibling) in siblings.iter().enumerate() {
        if sibling.is_mask {
            close(&mut open, &mut drafts);
            open = Some((index, Vec::new()));
            continue;
        }
        if sibling.breaks_mask {
            close(&mut open, &mut drafts);
        }
        if !sibling.visible {
            continue;
        }
        match open.as_mut() {
            Some((_, members)) => members.push(index),
            None => drafts.push(Draft::Node(index)),
        }
    }
    close(&mut open, &mut drafts);

    let total = drafts.len();
    let z_index = params.emits_z_index();
    let margin = params.overlap_margin();
    let mut seen_in_flow = false;

    drafts
        .into_iter()
        .enumerate()
        .map(|(position, draft)| {
            let mut css = Declarations::new();
            if z_index {
                let z = if params.item_reverse_z_index { total - position } else { position + 1 };
                css.set("z-index", z.to_string());
            }
            match draft {
                Draft::Node(index) => {
                    if siblings[index].in_flow {
                        if seen_in_flow {
                            if let Some((prop, value)) = &margin {
                                css.set(*prop, value.clone());
                            }
                        }
                        seen_in_flow = true;
                    }
                    RenderItem::Node { index, item_css: css }
                }
                Draft::Masked(mask_index, node_indices) => RenderItem::Masked {
                    mask_index,
                    node_indices,
                    container_css: css,
                },
            }
        })
        .collect()
}
