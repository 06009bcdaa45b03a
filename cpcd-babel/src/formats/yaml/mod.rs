//! YAML dump of the extraction result
//!
//! The same tree the extractor builds, printed as YAML. Useful for inspecting a request
//! before generating code from it.

use crate::error::FormatError;
use crate::format::Format;
use cpcd_parser::{to_yaml_string, ExtractionResult};

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Extracted constants as YAML"
    }

    fn serialize(&self, result: &ExtractionResult) -> Result<String, FormatError> {
        Ok(to_yaml_string(&result.to_node())?)
    }
}
