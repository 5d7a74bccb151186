//! Fixed-width table layout and rendering.

pub mod render;
pub mod schema;

pub use render::render_lines;
pub use schema::{COLUMNS, Column};
