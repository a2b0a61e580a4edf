/// Errors from the table-rendering core.
use thiserror::Error;

/// Typed errors from theme lookup and table layout.
///
/// All variants are caller contract violations or bad requests; none are
/// retryable. The renderer returns these before producing any output, so a
/// failed render emits nothing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested theme name has no registered match.
    #[error("Unknown theme '{name}'")]
    UnknownTheme {
        /// The name that was looked up.
        name: String,
    },

    /// A data row's cell count does not match the header count.
    #[error("Row {index} has {found} cells, expected {expected}")]
    RowShape {
        /// Zero-based index of the offending row.
        index: usize,
        /// The header count every row must match.
        expected: usize,
        /// The offending row's actual cell count.
        found: usize,
    },

    /// A table with zero columns was requested.
    #[error("Table has no columns")]
    EmptyTable,
}
