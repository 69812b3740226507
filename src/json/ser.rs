use std::io;

use super::super::ser::{Serialize, Serializer, SerializeArray, SerializeObject};

/// A structure for serializing values into compact json text.
///
/// By default, string payloads and object keys are written verbatim between double quotes. The
/// caller is responsible for passing strings that need no escaping. Use
/// [`escaping`](JsonSerializer::escaping) to get standard json string escapes instead.
pub struct JsonSerializer<W> {
    writer: W,
    escape: bool, // if true escapes quotes, backslashes and control characters in strings
}

impl<W> JsonSerializer<W>
    where W: io::Write
{
    /// Creates a new serializer that writes strings verbatim.
    #[inline]
    pub fn new(writer: W) -> Self {
        JsonSerializer { writer, escape: false }
    }

    /// Creates a new serializer that escapes strings the way the json grammar requires.
    #[inline]
    pub fn escaping(writer: W) -> Self {
        JsonSerializer { writer, escape: true }
    }

    /// Unwrap the `Writer` from the `Serializer`.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_escaped(&mut self, v: &str) -> Result<(), io::Error> {
        let bytes = v.as_bytes();
        let mut start = 0;

        for (i, byte) in bytes.iter().enumerate() {
            let escape: &[u8] = match *byte {
                0x08 => br"\b",
                0x09 => br"\t",
                0x0A => br"\n",
                0x0C => br"\f",
                0x0D => br"\r",
                0x22 => b"\\\"",
                0x5C => br"\\",
                0x00..=0x1F => {
                    self.writer.write_all(&bytes[start..i])?;
                    write!(self.writer, "\\u{:04x}", byte)?;
                    start = i + 1;
                    continue;
                }
                _ => continue,
            };

            self.writer.write_all(&bytes[start..i])?;
            self.writer.write_all(escape)?;
            start = i + 1;
        }

        self.writer.write_all(&bytes[start..])
    }
}

/// Serialize the given data structure as json into the IO stream, writing strings verbatim.
pub fn to_writer<W, T: ?Sized>(writer: W, value: &T) -> Result<(), io::Error>
    where W: io::Write,
          T: Serialize
{
    let mut ser = JsonSerializer::new(writer);
    value.serialize(&mut ser)
}

/// Serialize the given data structure as json into the IO stream, escaping strings.
pub fn to_writer_escaped<W, T: ?Sized>(writer: W, value: &T) -> Result<(), io::Error>
    where W: io::Write,
          T: Serialize
{
    let mut ser = JsonSerializer::escaping(writer);
    value.serialize(&mut ser)
}

/// Serialize the given data structure as a json byte vector, writing strings verbatim.
pub fn to_vec<T: ?Sized>(value: &T) -> Vec<u8>
    where T: Serialize
{
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, value).expect("writing to a Vec never fails");
    writer
}

/// Serialize the given data structure as a String of json, writing strings verbatim.
pub fn to_string<T: ?Sized>(value: &T) -> String
where
    T: Serialize,
{
    let vec = to_vec(value);
    unsafe {
        // We only ever emit ascii and the bytes of valid `str`s.
        String::from_utf8_unchecked(vec)
    }
}

/// Serialize the given data structure as a String of json, escaping strings.
pub fn to_string_escaped<T: ?Sized>(value: &T) -> String
where
    T: Serialize,
{
    let mut writer = Vec::with_capacity(128);
    to_writer_escaped(&mut writer, value).expect("writing to a Vec never fails");
    unsafe {
        // We only ever emit ascii and the bytes of valid `str`s.
        String::from_utf8_unchecked(writer)
    }
}

/// Renders a finite double as the shortest ecmascript decimal that round-trips, with a `.0`
/// suffix when that rendering would otherwise read back as an integer.
///
/// The output is exact and keeps the sign, `-0.0` is written as `-0.0`. It is not the `%g`
/// style six digit rendering, so `1234567.0` stays `1234567.0`.
fn write_f64<W: io::Write>(writer: &mut W, v: f64) -> Result<(), io::Error> {
    let mut buffer = ryu_ecmascript::Buffer::new();
    let s = buffer.format::<f64>(v);
    writer.write_all(s.as_bytes())?;

    if s.bytes().all(|b| b == b'-' || b.is_ascii_digit()) {
        writer.write_all(b".0")?;
    }
    Ok(())
}

impl<'a, W> Serializer for &'a mut JsonSerializer<W>
    where W: io::Write,
{
    type Ok = ();
    type Error = io::Error;
    type SerializeArray = CollectionSerializer<'a, W>;
    type SerializeObject = CollectionSerializer<'a, W>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        let s = if v {
            b"true" as &[u8]
        } else {
            b"false" as &[u8]
        };
        self.writer.write_all(s)
    }

    fn serialize_int(self, v: i64) -> Result<Self::Ok, Self::Error> {
        write!(self.writer, "{}", v)
    }

    // Infinities and NaN have no json representation, they are written as `null` just like
    // `JSON.stringify` does.
    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        if v.is_finite() {
            write_f64(&mut self.writer, v)
        } else {
            self.serialize_null()
        }
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        self.writer.write_all(b"\"")?;

        if self.escape {
            self.write_escaped(v)?;
        } else {
            self.writer.write_all(v.as_bytes())?;
        }

        self.writer.write_all(b"\"")
    }

    fn serialize_null(self) -> Result<Self::Ok, Self::Error> {
        self.writer.write_all(b"null")
    }

    fn serialize_array(self, _len: usize) -> Result<Self::SerializeArray, Self::Error> {
        self.writer.write_all(b"[")?;
        Ok(CollectionSerializer::new(&mut *self))
    }

    fn serialize_object(self, _len: usize) -> Result<Self::SerializeObject, Self::Error> {
        self.writer.write_all(b"{")?;
        Ok(CollectionSerializer::new(&mut *self))
    }
}

#[doc(hidden)]
pub struct CollectionSerializer<'a, W> {
    ser: &'a mut JsonSerializer<W>,
    first: bool,
}

impl<'a, W: io::Write> CollectionSerializer<'a, W> {
    fn new(ser: &'a mut JsonSerializer<W>) -> CollectionSerializer<'a, W> {
        CollectionSerializer {
            ser,
            first: true,
        }
    }

    fn write_separator(&mut self) -> Result<(), io::Error> {
        if self.first {
            self.first = false;
            Ok(())
        } else {
            self.ser.writer.write_all(b",")
        }
    }
}

impl<'a, W> SerializeArray for CollectionSerializer<'a, W>
where W: io::Write
{
    type Ok = ();
    type Error = io::Error;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> where T: Serialize {
        self.write_separator()?;
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.ser.writer.write_all(b"]")
    }
}

impl<'a, W> SerializeObject for CollectionSerializer<'a, W>
where W: io::Write
{
    type Ok = ();
    type Error = io::Error;

    fn serialize_key(&mut self, key: &str) -> Result<(), Self::Error> {
        self.write_separator()?;
        (&mut *self.ser).serialize_str(key)?;
        self.ser.writer.write_all(b":")
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> where T: Serialize {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.ser.writer.write_all(b"}")
    }
}

#[cfg(test)]
mod tests {
    use super::{to_string, to_string_escaped};

    #[test]
    fn scalars() {
        assert_eq!(to_string(&()), "null");
        assert_eq!(to_string(&true), "true");
        assert_eq!(to_string(&false), "false");
        assert_eq!(to_string(&0i64), "0");
        assert_eq!(to_string(&-42i64), "-42");
        assert_eq!(to_string(&i64::MIN), "-9223372036854775808");
        assert_eq!(to_string("abc"), "\"abc\"");
    }

    #[test]
    fn floats() {
        assert_eq!(to_string(&1.5f64), "1.5");
        assert_eq!(to_string(&-0.25f64), "-0.25");
        assert_eq!(to_string(&0.1f64), "0.1");
        assert_eq!(to_string(&3.0f64), "3.0");
        assert_eq!(to_string(&-7.0f64), "-7.0");
        assert_eq!(to_string(&0.0f64), "0.0");
        assert_eq!(to_string(&-0.0f64), "-0.0");
        assert_eq!(to_string(&1234567.0f64), "1234567.0");
        assert_eq!(to_string(&std::f64::NAN), "null");
        assert_eq!(to_string(&std::f64::INFINITY), "null");
        assert_eq!(to_string(&std::f64::NEG_INFINITY), "null");
    }

    #[test]
    fn raw_strings_are_verbatim() {
        assert_eq!(to_string("a\"b"), "\"a\"b\"");
        assert_eq!(to_string("back\\slash"), "\"back\\slash\"");
        assert_eq!(to_string("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(to_string("ß∂ƒ"), "\"ß∂ƒ\"");
    }

    #[test]
    fn escaped_strings() {
        assert_eq!(to_string_escaped("plain"), "\"plain\"");
        assert_eq!(to_string_escaped("a\"b"), r#""a\"b""#);
        assert_eq!(to_string_escaped("back\\slash"), r#""back\\slash""#);
        assert_eq!(to_string_escaped("\u{8}\t\n\u{c}\r"), r#""\b\t\n\f\r""#);
        assert_eq!(to_string_escaped("\u{0}\u{1f}\u{b}"), r#""\u0000\u001f\u000b""#);
        assert_eq!(to_string_escaped("ß∂ƒ"), "\"ß∂ƒ\"");
    }
}
