//! View module - derives what each widget shows from the model
//!
//! `rows` builds host-agnostic row models; `text` turns them into the
//! terminal frame printed by the binary.

pub mod rows;
pub mod text;

pub use rows::{
    outline_view, row_indent, selector_view, OutlineRow, OutlineView, SelectorRow, SelectorView,
    INDENT_PER_LEVEL_PX, ROW_BASE_PADDING_PX,
};
pub use text::render_frame;
