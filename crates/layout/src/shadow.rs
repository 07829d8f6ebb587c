//! Moving outer shadows off transformed content boxes.
//!
//! A `box-shadow` on a rotated element rotates with it, so its offset points
//! the wrong way. For wrapped, transformed nodes the outer shadows move to
//! the untransformed outer slot as `drop-shadow()` filters; inset shadows
//! must follow the content and stay on the inner box.
use scenemark_ir::LayoutInfo;
use scenemark_style::{Declarations, Shadow};
use scenemark_style::shadow::shadow_list_to_css;

pub fn needs_shadow_migration(layout: &LayoutInfo) -> bool {
    layout.wrapper.is_some() && !layout.transform_2x2.is_identity()
}

/// Moves every non-inset entry of `inner`'s `box-shadow` onto `outer`'s
/// `filter`. Returns the number of migrated shadows.
///
/// A shadow list that cannot be parsed is left where it is.
pub fn migrate_shadows(outer: &mut Declarations, inner: &mut Declarations) -> usize {
    let Some(value) = inner.get("box-shadow") else {
        return 0;
    };
    let shadows = match Shadow::parse_list(value) {
        Ok(shadows) => shadows,
        Err(e) => {
            log::debug!("Leaving unparseable box-shadow in place: {}", e);
            return 0;
        }
    };
    let (inset, outer_shadows): (Vec<Shadow>, Vec<Shadow>) =
        shadows.into_iter().partition(|s| s.inset);
    if outer_shadows.is_empty() {
        return 0;
    }

    let drop_shadows: Vec<String> = outer_shadows.iter().map(Shadow::to_drop_shadow).collect();
    let filter = match outer.get("filter") {
        Some(existing) if existing != "none" => format!("{} {}", existing, drop_shadows.join(" ")),
        _ => drop_shadows.join(" "),
    };
    outer.set("filter", filter);

    if inset.is_empty() {
        inner.remove("box-shadow");
    } else {
        inner.set("box-shadow", shadow_list_to_css(&inset));
    }
    outer_shadows.len()
}
