//! Fortran module emission
//!
//! Renders the extracted constants as a Fortran module of named real parameters:
//!
//! ```text
//! module cpcd
//!
//!   integer, parameter :: cpcd_kind = kind(1.d0)
//!
//! ! - from set earth
//!   real(cpcd_kind), parameter :: earth_g = 9.80665_cpcd_kind
//!
//! end module cpcd
//! ```
//!
//! Identifiers are `<set>_<name>`. Values are copied verbatim from the dictionary and get the
//! kind suffix appended; nothing is checked or reformatted.

use crate::error::FormatError;
use crate::format::Format;
use cpcd_parser::ExtractionResult;
use serde::Deserialize;

pub const DEFAULT_MODULE_NAME: &str = "cpcd";
pub const DEFAULT_KIND_NAME: &str = "cpcd_kind";
pub const DEFAULT_KIND_VALUE: &str = "kind(1.d0)";
pub const DEFAULT_INDENT: &str = "  ";

/// Names and layout used in the emitted module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FortranOptions {
    pub module_name: String,
    pub kind_name: String,
    pub kind_value: String,
    pub indent: String,
}

impl Default for FortranOptions {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            kind_name: DEFAULT_KIND_NAME.to_string(),
            kind_value: DEFAULT_KIND_VALUE.to_string(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

/// Fortran module format
#[derive(Debug, Clone, Default)]
pub struct FortranFormat {
    options: FortranOptions,
}

impl FortranFormat {
    pub fn new(options: FortranOptions) -> Self {
        Self { options }
    }

    fn render(&self, result: &ExtractionResult) -> String {
        let FortranOptions {
            module_name,
            kind_name,
            kind_value,
            indent,
        } = &self.options;

        let mut out = String::new();
        out.push_str(&format!("module {}\n\n", module_name));
        out.push_str(&format!(
            "{}integer, parameter :: {} = {}\n\n",
            indent, kind_name, kind_value
        ));
        for (group, constants) in result.groups() {
            out.push_str(&format!("! - from set {}\n", group));
            for constant in constants {
                out.push_str(&format!(
                    "{}real({}), parameter :: {}_{} = {}_{}\n",
                    indent, kind_name, constant.group, constant.name, constant.value, kind_name
                ));
            }
        }
        out.push('\n');
        out.push_str(&format!("end module {}\n", module_name));
        out
    }
}

impl Format for FortranFormat {
    fn name(&self) -> &str {
        "fortran"
    }

    fn description(&self) -> &str {
        "Fortran module of real parameters"
    }

    fn serialize(&self, result: &ExtractionResult) -> Result<String, FormatError> {
        Ok(self.render(result))
    }
}
