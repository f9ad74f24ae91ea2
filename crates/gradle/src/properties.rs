use std::collections::HashMap;

/// Parse Java `.properties` text into a key/value map.
///
/// Handles `#`/`!` comments, `=` and `:` delimiters, and backslash escapes
/// (`\:`, `\=`, `\\`, `\n`, `\r`, `\t`), which wrapper files rely on for URLs
/// like `https\://services.gradle.org/...`. Line continuations and `\uXXXX`
/// escapes are not needed for wrapper files and are not supported.
#[must_use]
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let Some((key, value)) = split_entry(line) else {
            continue;
        };
        entries.insert(unescape(key.trim()), unescape(value.trim()));
    }

    entries
}

/// Split at the first unescaped `=` or `:`.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' | b':' => return Some((&line[..i], &line[i + 1..])),
            _ => i += 1,
        }
    }
    None
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
