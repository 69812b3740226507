use std::io;

use thiserror::Error;

use super::super::ser::{Serialize, Serializer, SerializeArray, SerializeObject};

/// Everything that can go wrong during msgpack serialization.
#[derive(Debug, Error)]
pub enum EncodeMsgpackError {
    /// An IO error occured on the underlying writer.
    ///
    /// When serializing directly into a `Vec<u8>`, this error never occurs.
    #[error("failed to write msgpack: {0}")]
    Io(#[from] io::Error),
    /// A string, array or object is longer than the 2^32 - 1 entries a msgpack header can hold.
    #[error("length {0} does not fit into a msgpack header")]
    LengthOverflow(usize),
}

/// A structure for serializing values into the msgpack encoding.
pub struct MsgpackSerializer<W> {
    writer: W,
}

impl<W> MsgpackSerializer<W>
    where W: io::Write
{
    /// Creates a new serializer.
    pub fn new(writer: W) -> Self {
        MsgpackSerializer { writer }
    }

    /// Unwrap the `Writer` from the `Serializer`.
    pub fn into_inner(self) -> W {
        self.writer
    }

    // Writes the header for a string, array or map of the given length, using the smallest
    // format family member that can hold it.
    fn write_len(&mut self, len: usize, major: LenMajor) -> Result<(), EncodeMsgpackError> {
        let (fix, fix_max, marker16, marker32) = match major {
            LenMajor::Str => (0xa0, 31, 0xda, 0xdb),
            LenMajor::Array => (0x90, 15, 0xdc, 0xdd),
            LenMajor::Map => (0x80, 15, 0xde, 0xdf),
        };

        if len <= fix_max {
            self.writer.write_all(&[fix | len as u8])?;
        } else if len <= 0xff && major == LenMajor::Str {
            self.writer.write_all(&[0xd9, len as u8])?;
        } else if len <= 0xffff {
            self.writer.write_all(&[marker16])?;
            self.writer.write_all(&(len as u16).to_be_bytes())?;
        } else if len <= 0xffff_ffff {
            self.writer.write_all(&[marker32])?;
            self.writer.write_all(&(len as u32).to_be_bytes())?;
        } else {
            log::warn!("refusing to encode a msgpack {:?} of length {}", major, len);
            return Err(EncodeMsgpackError::LengthOverflow(len));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LenMajor {
    Str,
    Array,
    Map,
}

/// Serialize the given data structure as msgpack into the IO stream.
pub fn to_writer<W, T: ?Sized>(writer: W, value: &T) -> Result<(), EncodeMsgpackError>
    where W: io::Write,
          T: Serialize
{
    let mut ser = MsgpackSerializer::new(writer);
    value.serialize(&mut ser)
}

/// Serialize the given data structure as a msgpack byte vector.
pub fn to_vec<T: ?Sized>(value: &T) -> Result<Vec<u8>, EncodeMsgpackError>
    where T: Serialize
{
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, value).map(|_| writer)
}

impl<'a, W> Serializer for &'a mut MsgpackSerializer<W>
    where W: io::Write
{
    type Ok = ();
    type Error = EncodeMsgpackError;
    type SerializeArray = CollectionSerializer<'a, W>;
    type SerializeObject = CollectionSerializer<'a, W>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(self.writer.write_all(if v { &[0xc3] } else { &[0xc2] })?)
    }

    // Non-negative numbers use the unsigned family, negative ones the signed family, always
    // picking the shortest form.
    fn serialize_int(self, v: i64) -> Result<Self::Ok, Self::Error> {
        let w = &mut self.writer;

        if v < -(1 << 5) {
            if v < -(1 << 15) {
                if v < -(1 << 31) {
                    w.write_all(&[0xd3])?;
                    w.write_all(&v.to_be_bytes())?;
                } else {
                    w.write_all(&[0xd2])?;
                    w.write_all(&(v as i32).to_be_bytes())?;
                }
            } else if v < -(1 << 7) {
                w.write_all(&[0xd1])?;
                w.write_all(&(v as i16).to_be_bytes())?;
            } else {
                w.write_all(&[0xd0, v as i8 as u8])?;
            }
        } else if v < (1 << 7) {
            // positive fixint or negative fixint
            w.write_all(&[v as i8 as u8])?;
        } else if v < (1 << 8) {
            w.write_all(&[0xcc, v as u8])?;
        } else if v < (1 << 16) {
            w.write_all(&[0xcd])?;
            w.write_all(&(v as u16).to_be_bytes())?;
        } else if v < (1 << 32) {
            w.write_all(&[0xce])?;
            w.write_all(&(v as u32).to_be_bytes())?;
        } else {
            w.write_all(&[0xcf])?;
            w.write_all(&(v as u64).to_be_bytes())?;
        }

        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        self.writer.write_all(&[0xcb])?;
        Ok(self.writer.write_all(&v.to_bits().to_be_bytes())?)
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        self.write_len(v.len(), LenMajor::Str)?;
        Ok(self.writer.write_all(v.as_bytes())?)
    }

    fn serialize_null(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.writer.write_all(&[0xc0])?)
    }

    fn serialize_array(self, len: usize) -> Result<Self::SerializeArray, Self::Error> {
        self.write_len(len, LenMajor::Array)?;
        Ok(CollectionSerializer::new(&mut *self))
    }

    fn serialize_object(self, len: usize) -> Result<Self::SerializeObject, Self::Error> {
        self.write_len(len, LenMajor::Map)?;
        Ok(CollectionSerializer::new(&mut *self))
    }
}

#[doc(hidden)]
pub struct CollectionSerializer<'a, W> {
    ser: &'a mut MsgpackSerializer<W>,
}

impl<'a, W: io::Write> CollectionSerializer<'a, W> {
    fn new(ser: &'a mut MsgpackSerializer<W>) -> CollectionSerializer<'a, W> {
        CollectionSerializer { ser }
    }
}

impl<'a, W> SerializeArray for CollectionSerializer<'a, W>
    where W: io::Write
{
    type Ok = ();
    type Error = EncodeMsgpackError;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<(), Self::Error>
        where T: Serialize
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}

impl<'a, W> SerializeObject for CollectionSerializer<'a, W>
    where W: io::Write
{
    type Ok = ();
    type Error = EncodeMsgpackError;

    fn serialize_key(&mut self, key: &str) -> Result<(), Self::Error> {
        (&mut *self.ser).serialize_str(key)
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<(), Self::Error>
        where T: Serialize
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::to_vec;

    use std::iter::repeat;

    use test_case::test_case;

    #[test]
    fn fixtures() {
        // A bunch of these are from https://github.com/msgpack/msgpack/blob/master/spec.md
        assert_eq!(to_vec(&()).unwrap(), vec![0xc0]);
        assert_eq!(to_vec(&false).unwrap(), vec![0xc2]);
        assert_eq!(to_vec(&true).unwrap(), vec![0xc3]);
        assert_eq!(to_vec(&1.1f64).unwrap(),
                   vec![0xcb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a]);
        assert_eq!(to_vec(&0.0f64).unwrap(), vec![0xcb, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(to_vec(&std::f64::INFINITY).unwrap(),
                   vec![0xcb, 0x7f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(to_vec("").unwrap(), vec![0xa0]);
        assert_eq!(to_vec("a").unwrap(), vec![0xa1, 0x61]);
        assert_eq!(to_vec("ä").unwrap(), vec![0xa2, 0xc3, 0xa4]);
    }

    #[test_case(0, &[0x00]; "zero")]
    #[test_case(1, &[0x01]; "positive fixint")]
    #[test_case(127, &[0x7f]; "largest positive fixint")]
    #[test_case(128, &[0xcc, 0x80]; "smallest uint8")]
    #[test_case(255, &[0xcc, 0xff]; "largest uint8")]
    #[test_case(256, &[0xcd, 0x01, 0x00]; "smallest uint16")]
    #[test_case(65535, &[0xcd, 0xff, 0xff]; "largest uint16")]
    #[test_case(65536, &[0xce, 0x00, 0x01, 0x00, 0x00]; "smallest uint32")]
    #[test_case(4294967295, &[0xce, 0xff, 0xff, 0xff, 0xff]; "largest uint32")]
    #[test_case(4294967296, &[0xcf, 0, 0, 0, 0x01, 0, 0, 0, 0]; "smallest uint64")]
    #[test_case(i64::MAX, &[0xcf, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]; "largest uint64")]
    #[test_case(-1, &[0xff]; "negative fixint")]
    #[test_case(-32, &[0xe0]; "smallest negative fixint")]
    #[test_case(-33, &[0xd0, 0xdf]; "int8")]
    #[test_case(-128, &[0xd0, 0x80]; "smallest int8")]
    #[test_case(-129, &[0xd1, 0xff, 0x7f]; "int16")]
    #[test_case(-32768, &[0xd1, 0x80, 0x00]; "smallest int16")]
    #[test_case(-32769, &[0xd2, 0xff, 0xff, 0x7f, 0xff]; "int32")]
    #[test_case(-2147483648, &[0xd2, 0x80, 0x00, 0x00, 0x00]; "smallest int32")]
    #[test_case(-2147483649, &[0xd3, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]; "int64")]
    #[test_case(i64::MIN, &[0xd3, 0x80, 0, 0, 0, 0, 0, 0, 0]; "smallest int64")]
    fn integers(n: i64, expected: &[u8]) {
        assert_eq!(to_vec(&n).unwrap(), expected);
    }

    #[test]
    fn string_headers() {
        let s31: String = repeat('x').take(31).collect();
        assert_eq!(to_vec(s31.as_str()).unwrap()[0], 0xbf);

        let s32: String = repeat('x').take(32).collect();
        let encoded = to_vec(s32.as_str()).unwrap();
        assert_eq!(&encoded[..2], &[0xd9, 32]);
        assert_eq!(encoded.len(), 34);

        let s256: String = repeat('x').take(256).collect();
        let encoded = to_vec(s256.as_str()).unwrap();
        assert_eq!(&encoded[..3], &[0xda, 0x01, 0x00]);
        assert_eq!(encoded.len(), 259);

        let s65536: String = repeat('x').take(65536).collect();
        let encoded = to_vec(s65536.as_str()).unwrap();
        assert_eq!(&encoded[..5], &[0xdb, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(encoded.len(), 65541);
    }
}
