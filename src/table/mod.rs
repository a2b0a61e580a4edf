/// Table-rendering core: themes, layout, and the two render operations.
///
/// This layer is deliberately type-erased: it consumes only
/// [`KeyValueSet`] and [`Table`] payloads of display strings and never
/// branches on domain types. The command layer owns all domain-to-string
/// conversion.
pub mod errors;
pub mod render;
pub mod theme;

pub use errors::RenderError;
pub use render::{KeyValueSet, Table, render_key_value, render_table};
pub use theme::{BorderGlyphs, DEFAULT_THEME, Theme, ThemeStore};
