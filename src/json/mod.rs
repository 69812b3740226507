//! Compact json text encoding of values.

mod ser;

pub use self::ser::{JsonSerializer, to_writer, to_writer_escaped, to_vec, to_string,
                    to_string_escaped};
