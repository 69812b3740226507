//! Generic value serialization framework, corresponds to
//! [serde::ser](https://docs.serde.rs/serde/ser/index.html).
//!
//! Both wire formats of this crate (`json` and `msgpack`) implement the `Serializer` trait, and
//! `Value` drives them through its `Serialize` implementation.

mod serialize;
mod serializer;

pub use self::serialize::*;
pub use self::serializer::*;
