//! Read-only diagnostics for behavior trees: ASCII rendering, activity dumps and snapshots.
//!
//! Nothing here mutates a tree or its blackboard.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod activity;
pub mod render;
pub mod snapshot;
pub mod style;

pub use activity::{activity_report, render_activity};
pub use render::{indent_guide, kind_glyph, render_tree};
pub use snapshot::TreeSnapshot;
pub use style::{status_glyph, ActivityStyle, RenderStyle, DEFAULT_CELL_WIDTH, DEFAULT_INDENT};
