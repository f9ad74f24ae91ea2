/// Escape line-break characters for display in problem messages.
///
/// Only `\r`, `\n`, and `\t` are rewritten; everything else passes through.
#[must_use]
pub fn escape_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
