//! Colorized JSON rendering

use super::colors::{paint, ColorTheme};
use crate::domain::config::OutputConf;
use serde_json::Value;

const EXPANDED_INDENT: usize = 4;

/// Renders JSON values with per-type colors.
///
/// Object keys are emitted in sorted order. With `indent == 0` the output is
/// a single line.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pub indent: usize,
    pub raw_strings: bool,
    pub theme: ColorTheme,
    pub colorize: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            indent: 0,
            raw_strings: false,
            theme: ColorTheme::default(),
            colorize: true,
        }
    }

    pub fn from_output(output: &OutputConf) -> Self {
        Self {
            indent: if output.expand { EXPANDED_INDENT } else { 0 },
            raw_strings: output.raw_string,
            theme: if output.invert {
                ColorTheme::inverted()
            } else {
                ColorTheme::default()
            },
            colorize: !output.no_color,
        }
    }

    pub fn marshal(&self, value: &Value) -> String {
        let mut buf = String::new();
        self.write_value(value, &mut buf, 0);
        buf
    }

    fn write_value(&self, value: &Value, buf: &mut String, depth: usize) {
        match value {
            Value::Null => buf.push_str(&paint("null", self.theme.null, self.colorize)),
            Value::Bool(b) => {
                buf.push_str(&paint(&b.to_string(), self.theme.boolean, self.colorize))
            }
            Value::Number(n) => {
                buf.push_str(&paint(&n.to_string(), self.theme.number, self.colorize))
            }
            Value::String(s) => {
                let text = if self.raw_strings {
                    s.clone()
                } else {
                    quote(s)
                };
                buf.push_str(&paint(&text, self.theme.string, self.colorize));
            }
            Value::Array(items) => {
                if items.is_empty() {
                    buf.push_str("[]");
                    return;
                }
                buf.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        buf.push(',');
                    }
                    self.write_newline(buf, depth + 1);
                    self.write_value(item, buf, depth + 1);
                }
                self.write_newline(buf, depth);
                buf.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    buf.push_str("{}");
                    return;
                }
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();

                buf.push('{');
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        buf.push(',');
                    }
                    self.write_newline(buf, depth + 1);
                    buf.push_str(&paint(&quote(key), self.theme.key, self.colorize));
                    buf.push(':');
                    if self.indent > 0 {
                        buf.push(' ');
                    }
                    self.write_value(&map[key.as_str()], buf, depth + 1);
                }
                self.write_newline(buf, depth);
                buf.push('}');
            }
        }
    }

    fn write_newline(&self, buf: &mut String, depth: usize) {
        if self.indent > 0 {
            buf.push('\n');
            buf.push_str(&" ".repeat(self.indent * depth));
        }
    }
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}
