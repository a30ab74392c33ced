//! Shared [`JsonValue`] type and the [`ToJson`] conversion capability.

use std::fmt;
use std::rc::Rc;

/// Conversion capability for values the encoder cannot represent natively.
///
/// Implementors produce a JSON-representable substitute for themselves. The
/// returned value may itself contain further [`JsonValue::Convertible`]
/// values; the encoder applies the conversion rule recursively until it
/// reaches natively representable values.
///
/// The conversion chain must terminate. A cycle (A converts to something
/// containing B, B converts to something containing A) recurses without
/// bound and exhausts the stack; no cycle detection is performed.
///
/// # Example
///
/// ```
/// use json_convert::{JsonValue, ToJson};
///
/// #[derive(Debug)]
/// struct Celsius(f64);
///
/// impl ToJson for Celsius {
///     fn to_json(&self) -> JsonValue {
///         JsonValue::Float(self.0)
///     }
/// }
///
/// let value = JsonValue::convertible(Celsius(21.5));
/// assert_eq!(json_convert::to_string(&value).unwrap(), "21.5");
/// ```
pub trait ToJson: fmt::Debug {
    /// Produce a JSON-representable substitute for this value.
    fn to_json(&self) -> JsonValue;
}

/// A value that the extensible encoder knows how to serialize.
///
/// Most variants map one-to-one onto the JSON grammar. `Object` keeps its
/// pairs in insertion order. The remaining two are opaque:
/// - `Bytes` has no JSON representation and no conversion capability;
///   encoding it fails.
/// - `Convertible` carries a [`ToJson`] implementation and is replaced by
///   the result of its `to_json()` call during encoding.
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    /// Signed integer (anything that fits in `i64`).
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UInteger(u64),
    Float(f64),
    Str(String),
    /// Raw binary data. Not representable in JSON.
    Bytes(Vec<u8>),
    Array(Vec<JsonValue>),
    /// Ordered key-value pairs.
    Object(Vec<(String, JsonValue)>),
    /// Opaque value carrying the [`ToJson`] conversion capability.
    Convertible(Rc<dyn ToJson>),
}

impl JsonValue {
    /// Wrap a [`ToJson`] implementor as a value.
    pub fn convertible<T: ToJson + 'static>(value: T) -> Self {
        JsonValue::Convertible(Rc::new(value))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Integer(_) | JsonValue::UInteger(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::Str(_) => "string",
            JsonValue::Bytes(_) => "bytes",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
            JsonValue::Convertible(_) => "convertible",
        }
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Integer(a), JsonValue::Integer(b)) => a == b,
            (JsonValue::UInteger(a), JsonValue::UInteger(b)) => a == b,
            (JsonValue::Float(a), JsonValue::Float(b)) => a == b,
            (JsonValue::Str(a), JsonValue::Str(b)) => a == b,
            (JsonValue::Bytes(a), JsonValue::Bytes(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => a == b,
            // Convertibles compare by identity; conversions are not run.
            (JsonValue::Convertible(a), JsonValue::Convertible(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::UInteger(u)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(obj) => {
                JsonValue::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i32> for JsonValue {
    fn from(i: i32) -> Self {
        JsonValue::Integer(i64::from(i))
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        JsonValue::Integer(i)
    }
}

impl From<u32> for JsonValue {
    fn from(u: u32) -> Self {
        JsonValue::Integer(i64::from(u))
    }
}

impl From<u64> for JsonValue {
    fn from(u: u64) -> Self {
        if let Ok(i) = i64::try_from(u) {
            JsonValue::Integer(i)
        } else {
            JsonValue::UInteger(u)
        }
    }
}

impl From<f64> for JsonValue {
    fn from(f: f64) -> Self {
        JsonValue::Float(f)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::Str(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::Str(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<Vec<(String, JsonValue)>> for JsonValue {
    fn from(obj: Vec<(String, JsonValue)>) -> Self {
        JsonValue::Object(obj)
    }
}

impl From<Vec<u8>> for JsonValue {
    fn from(bytes: Vec<u8>) -> Self {
        JsonValue::Bytes(bytes)
    }
}
