use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Line separator styles a text file can use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// Unix style: `\n`
    Lf,
    /// Windows style: `\r\n`
    CrLf,
    /// Classic Mac style: `\r`
    Cr,
}

impl LineSeparator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Escaped rendering for problem messages (`\r\n` instead of a real break).
    #[must_use]
    pub const fn escaped(&self) -> &'static str {
        match self {
            Self::Lf => "\\n",
            Self::CrLf => "\\r\\n",
            Self::Cr => "\\r",
        }
    }

    /// Detect the separator used by `text` from its first line break.
    ///
    /// Returns `None` for single-line content, where no style can be inferred.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match b {
                b'\n' => return Some(Self::Lf),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        return Some(Self::CrLf);
                    }
                    return Some(Self::Cr);
                }
                _ => {}
            }
        }
        None
    }
}

impl Display for LineSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.escaped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a\nb\nc", Some(LineSeparator::Lf))]
    #[case("a\r\nb\r\nc", Some(LineSeparator::CrLf))]
    #[case("a\rb", Some(LineSeparator::Cr))]
    #[case("mixed\r\nthen\nlf", Some(LineSeparator::CrLf))]
    #[case("no break at all", None)]
    #[case("", None)]
    #[case("\n", Some(LineSeparator::Lf))]
    #[case("\r", Some(LineSeparator::Cr))]
    fn test_detect(#[case] text: &str, #[case] expected: Option<LineSeparator>) {
        assert_eq!(LineSeparator::detect(text), expected);
    }

    #[rstest]
    #[case(LineSeparator::Lf, "\n", "\\n")]
    #[case(LineSeparator::CrLf, "\r\n", "\\r\\n")]
    #[case(LineSeparator::Cr, "\r", "\\r")]
    fn test_as_str_and_escaped(
        #[case] separator: LineSeparator,
        #[case] raw: &str,
        #[case] escaped: &str,
    ) {
        assert_eq!(separator.as_str(), raw);
        assert_eq!(separator.escaped(), escaped);
        assert_eq!(format!("{separator}"), escaped);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&LineSeparator::CrLf).unwrap();
        assert_eq!(json, r#""crlf""#);
        let back: LineSeparator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineSeparator::CrLf);
    }
}
