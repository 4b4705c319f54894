use super::output::Output;
use super::{GenerateOptions, GenerateResult, Generator};

/// Emits the C++ rendering of the literal table: a provenance comment,
/// includes, a namespace wrapper, `static const char* const <table>[]`, and
/// an accessor that rejoins the table with `"\n"`.
///
/// The accessor appends a newline after every entry including the last, so
/// its return value always ends with `\n` even when the input file did not.
/// Consumers rely on that shape; do not "fix" it here.
pub struct CppGenerator;

impl Generator for CppGenerator {
    fn generate(&self, literals: &[String], options: &GenerateOptions) -> GenerateResult {
        let t = &options.template;
        let source_name = options.source_name.as_deref().unwrap_or("<stdin>");

        let mut out = Output::new();
        out.line(&format!(
            "// This file is generated by {} from {}",
            t.tool_name, source_name
        ));
        for include in &t.includes {
            out.line(&format!("#include {include}"));
        }
        out.newline();

        out.line(&format!("namespace {} {{", t.namespace));
        out.newline();

        out.line(&format!("static const char* const {}[] =", t.table_name));
        out.line("{");
        for (i, literal) in literals.iter().enumerate() {
            out.push("  ");
            out.push(literal);
            if i + 1 < literals.len() {
                out.push(",");
            }
            out.newline();
        }
        out.line("};");
        out.newline();

        out.line(&format!("std::string {}()", t.accessor_name));
        out.line("{");
        out.line("  std::ostringstream result;");
        out.line(&format!(
            "  for (unsigned i = 0; i < sizeof({0})/sizeof({0}[0]); ++i)",
            t.table_name
        ));
        out.line(&format!("    result << {}[i] << \"\\n\";", t.table_name));
        out.line("  return result.str();");
        out.line("}");
        out.newline();

        out.line(&format!("}} // namespace {}", t.namespace));

        GenerateResult {
            code: out.finish(),
            line_count: literals.len(),
        }
    }
}
