//! Column format templates such as `"{:.2} ms"`.

use crate::cell::Value;
use crate::error::{Error, Result};

/// A parsed template with exactly one placeholder.
///
/// `{}` prints the value as is, `{:.N}` applies precision `N`: fixed decimals
/// for numbers, a character limit for text. `{{` and `}}` are literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    prefix: String,
    suffix: String,
    precision: Option<usize>,
}

impl Format {
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidFormat {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut precision = None;
        let mut placeholders = 0;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if placeholders == 0 {
                &mut prefix
            } else {
                &mut suffix
            };
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '}' => return Err(invalid("unmatched '}'")),
                '{' => {
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => inner.push(ch),
                            None => return Err(invalid("unterminated placeholder")),
                        }
                    }
                    precision = parse_placeholder(&inner)
                        .ok_or_else(|| invalid("unsupported placeholder"))?;
                    placeholders += 1;
                }
                _ => out.push(c),
            }
        }

        match placeholders {
            1 => Ok(Self {
                prefix,
                suffix,
                precision,
            }),
            0 => Err(invalid("no placeholder")),
            _ => Err(invalid("more than one placeholder")),
        }
    }

    pub fn apply(&self, value: &Value) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            value.format_with(self.precision),
            self.suffix
        )
    }
}

/// `""` or `":.N"`; the outer option is `None` for anything else.
fn parse_placeholder(inner: &str) -> Option<Option<usize>> {
    if inner.is_empty() {
        return Some(None);
    }
    let digits = inner.strip_prefix(":.")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_on_float() {
        let f = Format::parse("{:.2} ms").unwrap();
        assert_eq!(f.apply(&Value::Float(1.23456)), "1.23 ms");
    }

    #[test]
    fn escaped_braces() {
        let f = Format::parse("{{{}}}").unwrap();
        assert_eq!(f.apply(&Value::Int(7)), "{7}");
    }

    #[test]
    fn rejects_bad_templates() {
        assert!(Format::parse("none").is_err());
        assert!(Format::parse("{} {}").is_err());
        assert!(Format::parse("{:x}").is_err());
        assert!(Format::parse("{").is_err());
        assert!(Format::parse("}").is_err());
    }
}
