use thiserror::Error;

/// Escaping failure. The line splitter removes record separators before
/// escaping, so hitting one here means the caller fed unsplit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("line contains an embedded line terminator")]
    EmbeddedNewline,
}

/// Escape one line of text into a double-quoted C string literal.
///
/// The literal, compiled by a C/C++ compiler, evaluates to exactly the input
/// line. Characters that need no escaping pass through unchanged, including
/// non-ASCII text (the generated file is UTF-8, same as the input).
///
/// Control characters other than tab are emitted as three-digit octal
/// escapes (`\NNN`). Octal escapes stop after three digits, so a digit
/// following the escape cannot extend it the way it would with `\x`.
///
/// A carriage return mid-line is escaped like any other control character;
/// only a line feed is rejected, since that is the record separator the
/// splitter should have consumed.
pub fn escape_c_literal(line: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(line.len() + 2);
    out.push('"');
    for ch in line.chars() {
        match ch {
            '\n' => return Err(EscapeError::EmbeddedNewline),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}
