//! Binary [msgpack](https://github.com/msgpack/msgpack/blob/master/spec.md) encoding of values.

mod ser;

pub use self::ser::{EncodeMsgpackError, MsgpackSerializer, to_writer, to_vec};
