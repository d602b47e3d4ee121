//! CSS Stacking Contexts.
//!
//! [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
//!
//! "An element in CSS 2 may have a stack level, which describes its position
//! within a set of elements sharing the same stacking context."
//!
//! Whether a box establishes a stacking context is decided upstream; this
//! module only gathers the flagged boxes and orders them.

use super::layout_box::LayoutBox;

/// A box establishing a stacking context, paired with its stack level.
///
/// Entries borrow the tree and live only for one paint pass.
#[derive(Debug, Clone, Copy)]
pub struct StackingContextEntry<'a> {
    /// The box establishing the context.
    pub layout_box: &'a LayoutBox,
    /// Its stack level.
    pub z_index: i32,
}

/// [§ Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
///
/// Collect every stacking context in the tree, in pre-order.
///
/// "The root element forms the root stacking context." The root is therefore
/// always the first entry, whatever its own flag says. `display: none`
/// subtrees generate no boxes and are not walked, including when the root
/// itself is `display: none`.
#[must_use]
pub fn collect_stacking_contexts(root: &LayoutBox) -> Vec<StackingContextEntry<'_>> {
    let mut entries = vec![StackingContextEntry {
        layout_box: root,
        z_index: root.z_index,
    }];
    if root.box_type.generates_box() {
        collect_descendants(root, &mut entries);
    }
    entries
}

fn collect_descendants<'a>(parent: &'a LayoutBox, entries: &mut Vec<StackingContextEntry<'a>>) {
    for child in &parent.children {
        if !child.box_type.generates_box() {
            continue;
        }
        if child.is_stacking_context {
            entries.push(StackingContextEntry {
                layout_box: child,
                z_index: child.z_index,
            });
        }
        collect_descendants(child, entries);
    }
}

/// [§ 9.9.1](https://www.w3.org/TR/CSS2/visuren.html#z-index)
///
/// Order stacking contexts back to front by stack level.
///
/// "Boxes with the same stack level in a stacking context are stacked
/// back-to-front according to document tree order." The sort is stable, so
/// pre-order collection order is kept for equal levels.
pub fn sort_stacking_contexts(entries: &mut [StackingContextEntry<'_>]) {
    entries.sort_by_key(|entry| entry.z_index);
}
