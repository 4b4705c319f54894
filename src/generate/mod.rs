mod cpp;
mod output;

pub use cpp::CppGenerator;
pub use output::Output;

use serde::Serialize;

/// Named slots of the generated file: everything about the output that is
/// syntax rather than content lives here, so a different target language is
/// a different `Template` plus a `Generator` impl, not a second driver.
#[derive(Debug, Clone)]
pub struct Template {
    /// Tool name recorded in the provenance comment
    pub tool_name: String,
    /// Include directives, written verbatim after `#include `
    pub includes: Vec<String>,
    pub namespace: String,
    pub table_name: String,
    pub accessor_name: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            tool_name: "genesis2cpp".to_string(),
            includes: vec!["<string>".to_string(), "<sstream>".to_string()],
            namespace: "genesis".to_string(),
            table_name: "genesis_json_lines".to_string(),
            accessor_name: "get_builtin_genesis_json_as_string".to_string(),
        }
    }
}

/// Generator options
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Input name for the provenance comment (default: "<stdin>")
    pub source_name: Option<String>,
    pub template: Template,
}

/// Generation result
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub code: String,
    /// Number of literal table entries, equal to the number of input lines
    pub line_count: usize,
}

/// Generator trait - converts a table of escaped literals to a source file
pub trait Generator {
    fn generate(&self, literals: &[String], options: &GenerateOptions) -> GenerateResult;
}
