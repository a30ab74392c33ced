//! Extensible JSON serialization.
//!
//! A plain JSON encoder rejects values outside the JSON grammar. This crate
//! gives such values one chance to convert themselves: anything implementing
//! [`ToJson`] is replaced by the result of its `to_json()` call, recursively,
//! before encoding proceeds. Values that are natively representable encode
//! exactly as [`serde_json`] would encode them, so the conversion hook is
//! the only observable addition.
//!
//! # Example
//!
//! ```
//! use json_convert::{to_string, JsonValue, ToJson};
//!
//! #[derive(Debug)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl ToJson for Point {
//!     fn to_json(&self) -> JsonValue {
//!         JsonValue::Object(vec![
//!             ("x".to_string(), self.x.into()),
//!             ("y".to_string(), self.y.into()),
//!         ])
//!     }
//! }
//!
//! let value = JsonValue::convertible(Point { x: 1, y: 2 });
//! assert_eq!(to_string(&value).unwrap(), r#"{"x":1,"y":2}"#);
//! ```

pub mod encoder;
pub mod error;
pub mod options;
pub mod value;

pub use encoder::JsonEncoder;
pub use error::EncodeError;
pub use options::EncodeOptions;
pub use value::{JsonValue, ToJson};

use std::io::Write;

/// Serialize `value` to a JSON string with default formatting.
///
/// # Errors
///
/// Returns [`EncodeError::NotSerializable`] if the value tree contains a
/// value that is neither representable in JSON nor convertible.
pub fn to_string(value: &JsonValue) -> Result<String, EncodeError> {
    to_string_with(value, &EncodeOptions::default())
}

/// Serialize `value` to a JSON string with explicit formatting options.
///
/// # Errors
///
/// Returns [`EncodeError::NotSerializable`] if the value tree contains a
/// value that is neither representable in JSON nor convertible.
pub fn to_string_with(value: &JsonValue, options: &EncodeOptions) -> Result<String, EncodeError> {
    let mut encoder = JsonEncoder::with_options(Vec::new(), options.clone());
    encoder.encode(value)?;
    Ok(String::from_utf8(encoder.into_sink()).unwrap_or_default())
}

/// Serialize `value` as JSON into `sink` with default formatting.
///
/// Output is written incrementally; on error the sink may have received a
/// partial document.
///
/// # Errors
///
/// Returns [`EncodeError::NotSerializable`] for unconvertible values and
/// [`EncodeError::Io`] if the sink fails.
pub fn to_writer<W: Write>(sink: W, value: &JsonValue) -> Result<(), EncodeError> {
    to_writer_with(sink, value, &EncodeOptions::default())
}

/// Serialize `value` as JSON into `sink` with explicit formatting options.
///
/// # Errors
///
/// Returns [`EncodeError::NotSerializable`] for unconvertible values and
/// [`EncodeError::Io`] if the sink fails.
pub fn to_writer_with<W: Write>(
    sink: W,
    value: &JsonValue,
    options: &EncodeOptions,
) -> Result<(), EncodeError> {
    JsonEncoder::with_options(sink, options.clone()).encode(value)
}
