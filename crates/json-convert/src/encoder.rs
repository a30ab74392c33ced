//! [`JsonEncoder`] — extensible JSON encoder writing to an output sink.
//!
//! Unlike a plain JSON encoder, values outside the JSON grammar are given
//! one chance to convert themselves via [`ToJson`] before encoding fails.

use std::io::Write;

use crate::error::EncodeError;
use crate::options::EncodeOptions;
use crate::value::JsonValue;

/// Extensible JSON encoder.
///
/// Writes RFC 8259 JSON text to the sink `W`. [`JsonValue::Convertible`]
/// values are replaced by the result of their `to_json()` call, recursively;
/// [`JsonValue::Bytes`] carries no conversion capability and fails with
/// [`EncodeError::NotSerializable`].
///
/// Encoders are cheap to construct and hold no state across `encode` calls
/// beyond the sink itself.
pub struct JsonEncoder<W: Write> {
    pub sink: W,
    pub options: EncodeOptions,
    depth: usize,
}

impl<W: Write> JsonEncoder<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            options: EncodeOptions::default(),
            depth: 0,
        }
    }

    pub fn with_options(sink: W, options: EncodeOptions) -> Self {
        Self {
            sink,
            options,
            depth: 0,
        }
    }

    /// Consume the encoder and return the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Encode a complete value.
    pub fn encode(&mut self, value: &JsonValue) -> Result<(), EncodeError> {
        self.depth = 0;
        self.write_any(value)
    }

    pub fn write_any(&mut self, value: &JsonValue) -> Result<(), EncodeError> {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Integer(i) => self.write_integer(*i),
            JsonValue::UInteger(u) => self.write_u_integer(*u),
            JsonValue::Float(f) => self.write_float(*f),
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr),
            JsonValue::Object(obj) => self.write_obj(obj),
            // One chance to convert, then the result is re-dispatched.
            // Cyclic conversions recurse until the stack runs out.
            JsonValue::Convertible(c) => {
                let converted = c.to_json();
                self.write_any(&converted)
            }
            JsonValue::Bytes(_) => Err(EncodeError::NotSerializable(value.kind())),
        }
    }

    pub fn write_null(&mut self) -> Result<(), EncodeError> {
        self.sink.write_all(b"null")?;
        Ok(())
    }

    pub fn write_boolean(&mut self, b: bool) -> Result<(), EncodeError> {
        self.sink.write_all(if b { b"true" } else { b"false" })?;
        Ok(())
    }

    pub fn write_integer(&mut self, int: i64) -> Result<(), EncodeError> {
        self.sink.write_all(int.to_string().as_bytes())?;
        Ok(())
    }

    pub fn write_u_integer(&mut self, uint: u64) -> Result<(), EncodeError> {
        self.sink.write_all(uint.to_string().as_bytes())?;
        Ok(())
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), EncodeError> {
        self.sink.write_all(format_float(float).as_bytes())?;
        Ok(())
    }

    /// Write a JSON-encoded string (with escaping).
    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        let bytes = s.as_bytes();

        // Fast path: pure ASCII printable, no quotes or backslash
        let mut has_special = false;
        for &b in bytes {
            if b < 32 || b > 126 || b == b'"' || b == b'\\' {
                has_special = true;
                break;
            }
        }
        if !has_special {
            self.sink.write_all(b"\"")?;
            self.sink.write_all(bytes)?;
            self.sink.write_all(b"\"")?;
            return Ok(());
        }

        if self.options.ensure_ascii {
            let escaped = escape_ascii(s);
            self.sink.write_all(escaped.as_bytes())?;
            return Ok(());
        }

        // serde_json implements the standard escaping rules
        let json_str = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.sink.write_all(json_str.as_bytes())?;
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[JsonValue]) -> Result<(), EncodeError> {
        if arr.is_empty() {
            self.sink.write_all(b"[]")?;
            return Ok(());
        }
        self.sink.write_all(b"[")?;
        self.depth += 1;
        let last = arr.len() - 1;
        for (i, item) in arr.iter().enumerate() {
            self.write_newline_indent()?;
            self.write_any(item)?;
            if i < last {
                self.sink.write_all(self.options.item_sep().as_bytes())?;
            }
        }
        self.depth -= 1;
        self.write_newline_indent()?;
        self.sink.write_all(b"]")?;
        Ok(())
    }

    pub fn write_obj(&mut self, obj: &[(String, JsonValue)]) -> Result<(), EncodeError> {
        if obj.is_empty() {
            self.sink.write_all(b"{}")?;
            return Ok(());
        }
        // Sort an index vector rather than the pairs; only the emission
        // order changes.
        let mut indices: Vec<usize> = (0..obj.len()).collect();
        if self.options.sort_keys {
            indices.sort_by(|&a, &b| obj[a].0.cmp(&obj[b].0));
        }
        self.sink.write_all(b"{")?;
        self.depth += 1;
        let last = indices.len() - 1;
        for (i, &idx) in indices.iter().enumerate() {
            let (key, val) = &obj[idx];
            self.write_newline_indent()?;
            self.write_str(key)?;
            self.sink.write_all(self.options.key_sep().as_bytes())?;
            self.write_any(val)?;
            if i < last {
                self.sink.write_all(self.options.item_sep().as_bytes())?;
            }
        }
        self.depth -= 1;
        self.write_newline_indent()?;
        self.sink.write_all(b"}")?;
        Ok(())
    }

    /// In indented mode, break the line and indent to the current depth.
    /// No-op in compact mode.
    fn write_newline_indent(&mut self) -> Result<(), EncodeError> {
        if let Some(indent) = &self.options.indent {
            let mut line = String::with_capacity(1 + indent.len() * self.depth);
            line.push('\n');
            for _ in 0..self.depth {
                line.push_str(indent);
            }
            self.sink.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

/// Format a finite float exactly as `serde_json` would. Non-finite floats
/// have no JSON representation and are clamped instead of failing.
fn format_float(f: f64) -> String {
    match serde_json::Number::from_f64(f) {
        Some(n) => n.to_string(),
        None if f.is_nan() => "null".to_string(),
        None if f > 0.0 => "1e308".to_string(),
        None => "-1e308".to_string(),
    }
}

/// JSON-escape `s` with every non-ASCII character as a `\uXXXX` sequence,
/// astral-plane characters as UTF-16 surrogate pairs.
fn escape_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii() && (c as u32) >= 0x20 => out.push(c),
            c => {
                let cp = c as u32;
                if cp <= 0xffff {
                    out.push_str(&format!("\\u{cp:04x}"));
                } else {
                    let v = cp - 0x10000;
                    let hi = 0xd800 + (v >> 10);
                    let lo = 0xdc00 + (v & 0x3ff);
                    out.push_str(&format!("\\u{hi:04x}\\u{lo:04x}"));
                }
            }
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_float_matches_serde_json_for_finite_values() {
        for f in [0.0, 1.5, -0.5, 3.14, 1500.0, 1e20, -2.25e-10] {
            let expected = serde_json::to_string(&serde_json::json!(f)).unwrap();
            assert_eq!(format_float(f), expected, "float: {f}");
        }
    }

    #[test]
    fn format_float_clamps_non_finite_values() {
        assert_eq!(format_float(f64::NAN), "null");
        assert_eq!(format_float(f64::INFINITY), "1e308");
        assert_eq!(format_float(f64::NEG_INFINITY), "-1e308");
    }

    #[test]
    fn escape_ascii_named_and_numeric_escapes() {
        assert_eq!(escape_ascii("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(escape_ascii("tab\there"), r#""tab\there""#);
        assert_eq!(escape_ascii("\u{01}"), r#""\u0001""#);
        assert_eq!(escape_ascii("snow \u{2603}"), r#""snow \u2603""#);
    }

    #[test]
    fn escape_ascii_surrogate_pairs_above_bmp() {
        // U+1D11E MUSICAL SYMBOL G CLEF
        assert_eq!(escape_ascii("\u{1d11e}"), r#""\ud834\udd1e""#);
    }
}
