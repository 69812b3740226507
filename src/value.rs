// Data structures for building and inspecting json value trees.

use std::fmt;
use std::io;
use std::iter::FromIterator;

use indexmap::IndexMap;

use super::defaults::{self, PayloadMut};
use super::ser::{Serialize, Serializer, SerializeArray, SerializeObject};
use super::json;
use super::msgpack::{self, EncodeMsgpackError};

/// The elements of an array value, in insertion order.
pub type Array = Vec<Value>;

/// The entries of an object value, in insertion order.
///
/// Inserting a key that is already present replaces its value but keeps the position of the
/// original entry.
pub type Object = IndexMap<String, Value>;

/// The kind of a [`Value`]. Fixed for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// A string.
    String,
    /// An integer.
    Int,
    /// A double precision float.
    Double,
    /// `true` or `false`.
    Bool,
    /// An ordered sequence of values.
    Array,
    /// An insertion-ordered mapping from strings to values.
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::Bool => "bool",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

/// A node of an in-memory json document.
///
/// Every accessor can be called on every kind of value. Asking a value for a payload it does not
/// hold never fails, it yields the zero value of the requested type instead (`""`, `0`, `0.0`,
/// `false`, an empty array or an empty object).
///
/// ```
/// use json_value_dump::{Kind, Value};
///
/// let mut v = Value::array();
/// v.get_array_mut().push(Value::from(1));
/// v.get_array_mut().push(Value::from("a"));
/// v.get_array_mut().push(Value::from(true));
///
/// assert_eq!(v.value_type(), Kind::Array);
/// assert_eq!(v.get_bool(), false);
/// assert_eq!(v.dump_to_string(), r#"[1,"a",true]"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A string. Dumped to json text without any escaping.
    String(String),
    /// An integer.
    Int(i64),
    /// A double precision float.
    Double(f64),
    /// A boolean.
    Bool(bool),
    /// An array, owning its elements.
    Array(Array),
    /// An object, owning its values.
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Creates an empty array value.
    pub fn array() -> Value {
        Value::Array(Array::new())
    }

    /// Creates an empty object value.
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    /// The kind of this value.
    pub fn value_type(&self) -> Kind {
        match *self {
            Value::Null => Kind::Null,
            Value::String(_) => Kind::String,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::Bool(_) => Kind::Bool,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// The string payload, or `""` if this is not a string.
    pub fn get_string(&self) -> &str {
        match *self {
            Value::String(ref s) => s,
            _ => defaults::DEFAULT_STRING,
        }
    }

    /// The integer payload, or `0` if this is not an integer.
    ///
    /// Doubles are not converted, `Value::Double(1.0).get_number_int()` is `0`.
    pub fn get_number_int(&self) -> i64 {
        match *self {
            Value::Int(n) => n,
            _ => defaults::DEFAULT_INT,
        }
    }

    /// The double payload, or `0.0` if this is not a double.
    pub fn get_number_double(&self) -> f64 {
        match *self {
            Value::Double(f) => f,
            _ => defaults::DEFAULT_DOUBLE,
        }
    }

    /// The boolean payload, or `false` if this is not a boolean.
    pub fn get_bool(&self) -> bool {
        match *self {
            Value::Bool(b) => b,
            _ => defaults::DEFAULT_BOOL,
        }
    }

    /// The elements of this array, or an empty array if this is not an array.
    pub fn get_array(&self) -> &Array {
        match *self {
            Value::Array(ref a) => a,
            _ => defaults::empty_array(),
        }
    }

    /// Mutable access to the elements of this array.
    ///
    /// If this is not an array, the returned handle is [detached](PayloadMut::is_detached): it
    /// starts out empty and anything pushed into it is discarded when it is dropped.
    pub fn get_array_mut(&mut self) -> PayloadMut<'_, Array> {
        match *self {
            Value::Array(ref mut a) => PayloadMut::Attached(a),
            _ => {
                log::debug!("mutable array access on a {} value, handing out a detached array",
                            self.value_type());
                PayloadMut::detached()
            }
        }
    }

    /// The entries of this object, or an empty object if this is not an object.
    pub fn get_object(&self) -> &Object {
        match *self {
            Value::Object(ref o) => o,
            _ => defaults::empty_object(),
        }
    }

    /// Mutable access to the entries of this object.
    ///
    /// If this is not an object, the returned handle is [detached](PayloadMut::is_detached): it
    /// starts out empty and anything inserted into it is discarded when it is dropped.
    pub fn get_object_mut(&mut self) -> PayloadMut<'_, Object> {
        match *self {
            Value::Object(ref mut o) => PayloadMut::Attached(o),
            _ => {
                log::debug!("mutable object access on a {} value, handing out a detached object",
                            self.value_type());
                PayloadMut::detached()
            }
        }
    }

    /// Writes this value as compact json text into the writer, then flushes it.
    ///
    /// Strings are written verbatim between double quotes, without escaping. Use
    /// [`json::to_writer_escaped`](crate::json::to_writer_escaped) for escaped output.
    pub fn dump<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        json::to_writer(&mut writer, self)?;
        writer.flush()
    }

    /// Writes this value as msgpack into the writer, then flushes it.
    pub fn dump_msgpack<W: io::Write>(&self, mut writer: W) -> Result<(), EncodeMsgpackError> {
        msgpack::to_writer(&mut writer, self)?;
        Ok(writer.flush()?)
    }

    /// Returns this value as compact json text.
    pub fn dump_to_string(&self) -> String {
        json::to_string(self)
    }

    /// Returns this value as msgpack.
    pub fn dump_msgpack_to_vec(&self) -> Result<Vec<u8>, EncodeMsgpackError> {
        msgpack::to_vec(self)
    }
}

impl Serialize for Value {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match *self {
            Value::Null => serializer.serialize_null(),
            Value::String(ref s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_int(n),
            Value::Double(f) => serializer.serialize_f64(f),
            Value::Bool(b) => serializer.serialize_bool(b),
            Value::Array(ref v) => {
                let mut s = serializer.serialize_array(v.len())?;
                for inner in v {
                    s.serialize_element(inner)?;
                }
                s.end()
            }
            Value::Object(ref m) => {
                let mut s = serializer.serialize_object(m.len())?;
                for (key, value) in m {
                    s.serialize_entry(key, value)?;
                }
                s.end()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.dump_to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
