//! Converts a blockchain genesis.json file into a C++ source file that
//! embeds the JSON as a table of string literals, plus an accessor that
//! rejoins the table with `\n` at runtime. The input is treated as opaque
//! line-oriented text; nothing here parses or validates JSON.
//!
//! The pure entry points are [`embed`] / [`embed_with`] (text in, generated
//! code out); [`compile_to_file`] is the file-to-file driver used by the
//! `genesis2cpp` binary.

pub mod error;
pub mod escape;
pub mod generate;

use std::fs;
use std::path::Path;

pub use error::{Error, Result};
pub use escape::{EscapeError, escape_c_literal};
pub use generate::{CppGenerator, GenerateOptions, GenerateResult, Generator, Template};

/// Generate with default options (provenance names `<stdin>`).
pub fn embed(source: &str) -> Result<GenerateResult> {
    embed_with(source, &GenerateOptions::default())
}

pub fn embed_with(source: &str, options: &GenerateOptions) -> Result<GenerateResult> {
    embed_bytes(source.as_bytes(), options)
}

/// Generate from raw input bytes.
///
/// Records are separated by `\n`; a trailing `\r` is stripped from each
/// record, so CRLF input generates the same output as LF input. A final
/// newline does not produce a phantom empty record. Each line must be valid
/// UTF-8 on its own; anything else fails loudly rather than being re-encoded.
pub fn embed_bytes(source: &[u8], options: &GenerateOptions) -> Result<GenerateResult> {
    let mut records: Vec<&[u8]> = source.split(|&b| b == b'\n').collect();
    if records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }

    let mut literals = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let record = record.strip_suffix(b"\r").unwrap_or(record);
        let line =
            std::str::from_utf8(record).map_err(|_| Error::InvalidUtf8 { line: idx + 1 })?;
        let literal = escape_c_literal(line)
            .map_err(|source| Error::Escape { line: idx + 1, source })?;
        literals.push(literal);
    }

    Ok(CppGenerator.generate(&literals, options))
}

/// Read `input`, generate, and write the result to `output` in one shot.
///
/// The provenance comment names `input` unless `options.source_name` is
/// already set. The output is written whole after generation succeeds, so a
/// bad input never leaves a truncated output behind; a failed write is
/// reported as-is and the caller treats the file as garbage.
pub fn compile_to_file(
    input: &Path,
    output: &Path,
    options: &GenerateOptions,
) -> Result<GenerateResult> {
    let bytes = fs::read(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let mut options = options.clone();
    if options.source_name.is_none() {
        options.source_name = Some(input.display().to_string());
    }

    let result = embed_bytes(&bytes, &options)?;

    fs::write(output, &result.code).map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode one double-quoted C literal back to its text, per C literal
    /// semantics (the escapes the escaper emits: \\ \" \t \n and octal).
    fn decode_c_literal(literal: &str) -> String {
        let inner = literal
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or_else(|| panic!("not a quoted literal: {literal}"));
        let mut out = String::new();
        let mut chars = inner.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next().expect("dangling backslash") {
                '\\' => out.push('\\'),
                '"' => out.push('"'),
                't' => out.push('\t'),
                'n' => out.push('\n'),
                d @ '0'..='7' => {
                    let mut value = d.to_digit(8).unwrap();
                    for _ in 0..2 {
                        match chars.peek().and_then(|c| c.to_digit(8)) {
                            Some(digit) => {
                                value = value * 8 + digit;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    out.push(char::from_u32(value).unwrap());
                }
                other => panic!("unexpected escape \\{other}"),
            }
        }
        out
    }

    /// Evaluate the generated accessor: decode each table entry and append
    /// a newline after it, exactly as the emitted C++ loop does.
    fn run_accessor(code: &str) -> String {
        let open = "[] =\n{\n";
        let table_start = code.find(open).expect("table open") + open.len();
        let table_end = code[table_start..].find("};").expect("table close") + table_start;
        code[table_start..table_end]
            .lines()
            .map(|entry| {
                let entry = entry.trim_start().trim_end_matches(',');
                decode_c_literal(entry) + "\n"
            })
            .collect()
    }

    #[test]
    fn test_example_scenario() {
        // Three lines: JSON, empty, quotes + backslash
        let source = "{\"step\":1}\n\nvalue with \"quotes\" and a \\backslash";
        let result = embed(source).unwrap();
        assert_eq!(result.line_count, 3);
        assert_eq!(
            run_accessor(&result.code),
            "{\"step\":1}\n\nvalue with \"quotes\" and a \\backslash\n"
        );
    }

    #[test]
    fn test_round_trip_tricky_lines() {
        let source = "plain\n\ttabbed\nquote \" backslash \\ mix \\\"\npäivä ☀\n";
        let result = embed(source).unwrap();
        assert_eq!(result.line_count, 4);
        assert_eq!(run_accessor(&result.code), source);
    }

    #[test]
    fn test_trailing_newline_quirk() {
        // The accessor output ends with \n whether or not the input did
        let with = embed("a\nb\n").unwrap();
        let without = embed("a\nb").unwrap();
        assert_eq!(with.code, without.code);
        assert_eq!(run_accessor(&with.code), "a\nb\n");
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let lf = embed("a\nb\n").unwrap();
        let crlf = embed("a\r\nb\r\n").unwrap();
        assert_eq!(lf.code, crlf.code);
    }

    #[test]
    fn test_empty_input() {
        let result = embed("").unwrap();
        assert_eq!(result.line_count, 0);
        assert_eq!(run_accessor(&result.code), "");
    }

    #[test]
    fn test_empty_lines_are_preserved() {
        let result = embed("\n\n\n").unwrap();
        assert_eq!(result.line_count, 3);
        assert_eq!(run_accessor(&result.code), "\n\n\n");
    }

    #[test]
    fn test_determinism() {
        let source = "{\"chain_id\":\"test\"}\n{\"balances\":[1,2,3]}\n";
        let a = embed(source).unwrap();
        let b = embed(source).unwrap();
        assert_eq!(a.code, b.code);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let err = embed_bytes(b"ok\n\xff\xfe\n", &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { line: 2 }));
    }

    #[test]
    fn test_source_name_in_provenance() {
        let options = GenerateOptions {
            source_name: Some("genesis.json".to_string()),
            ..Default::default()
        };
        let result = embed_with("x\n", &options).unwrap();
        assert!(
            result
                .code
                .starts_with("// This file is generated by genesis2cpp from genesis.json\n")
        );
    }
}
