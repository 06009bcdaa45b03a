//! Format trait definition
//!
//! Every output format turns an [`ExtractionResult`] into text. Formats are pure: no I/O, no
//! validation, the same result always renders to the same bytes.

use crate::error::FormatError;
use cpcd_parser::ExtractionResult;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn serialize(&self, result: &ExtractionResult) -> Result<String, FormatError> {
///         Ok(format!("{}\n", result.len()))
///     }
/// }
/// ```
pub trait Format {
    /// The name of this format (e.g., "fortran", "yaml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render the extracted constants
    fn serialize(&self, result: &ExtractionResult) -> Result<String, FormatError>;
}
