//! Message template rendering.
//!
//! Templates use `{Name}` holes filled from the event's properties, where
//! `Name` is an ASCII identifier. `{{` and `}}` render literal braces. Holes
//! naming a property the event does not carry are left verbatim, so producer
//! mistakes stay visible in the forwarded message.

use crate::format::ValueFormatter;
use serde_json::Value;
use std::collections::BTreeMap;

pub(crate) fn render(
    template: &str,
    properties: &BTreeMap<String, Value>,
    formatter: &dyn ValueFormatter,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let (name, closed) = read_hole(&mut chars);
                match properties.get(&name) {
                    Some(value) if closed && is_identifier(&name) => {
                        out.push_str(&formatter.format_value(value));
                    }
                    _ => {
                        out.push('{');
                        out.push_str(&name);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            other => out.push(other),
        }
    }

    out
}

fn read_hole(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> (String, bool) {
    let mut name = String::new();
    for c in chars {
        if c == '}' {
            return (name, true);
        }
        name.push(c);
    }
    (name, false)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
