//! Runtime composite formatting for message templates.
//!
//! Templates use positional holes: `{0}`, `{1,8}` (right-aligned to width 8),
//! `{1,-8}` (left-aligned), `{2:x}` (spec handed to the provider). `{{` and `}}`
//! are literal braces. Rendering of each value is delegated to a
//! [`FormatProvider`].

use std::fmt;
use thiserror::Error;

/// Renders a single argument; the provider decides culture/spec handling.
pub trait FormatProvider: Send + Sync {
    fn format(&self, value: &dyn fmt::Display, spec: Option<&str>) -> String;
}

/// Plain `Display` rendering; format specs are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantFormat;

impl FormatProvider for InvariantFormat {
    fn format(&self, value: &dyn fmt::Display, _spec: Option<&str>) -> String {
        value.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Unmatched '{brace}' at offset {offset}")]
    UnmatchedBrace { brace: char, offset: usize },

    #[error("Malformed placeholder '{placeholder}'")]
    MalformedPlaceholder { placeholder: String },

    #[error("Placeholder index {index} out of range for {count} argument(s)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Substitute `args` into `template`.
pub fn format_composite(
    provider: &dyn FormatProvider,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let start = offset + c.len_utf8();
                let mut end = None;
                for (idx, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            end = Some(idx);
                            break;
                        }
                        '{' => {
                            return Err(FormatError::MalformedPlaceholder {
                                placeholder: template[offset..=idx].to_string(),
                            });
                        }
                        _ => {}
                    }
                }
                let Some(end) = end else {
                    return Err(FormatError::UnmatchedBrace { brace: '{', offset });
                };

                out.push_str(&render_hole(provider, &template[start..end], args)?);
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnmatchedBrace { brace: '}', offset });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Widest padding a placeholder may request.
pub const MAX_ALIGNMENT: u32 = 1024;

/// Single value through `provider`, as if formatted with the template `{0}`.
pub fn format_value(provider: &dyn FormatProvider, value: &dyn fmt::Display) -> String {
    provider.format(value, None)
}

fn render_hole(
    provider: &dyn FormatProvider,
    hole: &str,
    args: &[&dyn fmt::Display],
) -> Result<String, FormatError> {
    let malformed = || FormatError::MalformedPlaceholder {
        placeholder: format!("{{{hole}}}"),
    };

    let (head, spec) = match hole.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (hole, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index: usize = index.trim().parse().map_err(|_| malformed())?;
    let alignment: Option<i32> = alignment
        .map(|a| a.trim().parse().map_err(|_| malformed()))
        .transpose()?;
    if alignment.is_some_and(|width| width.unsigned_abs() > MAX_ALIGNMENT) {
        return Err(malformed());
    }

    let value = args.get(index).ok_or(FormatError::IndexOutOfRange {
        index,
        count: args.len(),
    })?;
    let rendered = provider.format(*value, spec);

    Ok(match alignment {
        Some(width) if width >= 0 => format!("{rendered:>w$}", w = width as usize),
        Some(width) => format!("{rendered:<w$}", w = width.unsigned_abs() as usize),
        None => rendered,
    })
}
