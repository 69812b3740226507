//! This crate models an in-memory json document as a tree of [`Value`](Value)s and writes such
//! trees out as compact json text or as [msgpack](https://msgpack.org/).
//!
//! It is not a parser. Trees are built by composing the constructors and `From` conversions of
//! `Value`, and by pushing into or inserting into the mutable payload of arrays and objects.
//!
//! Every accessor is total: asking a value for a payload of a different kind yields the zero
//! value of that payload (`""`, `0`, `0.0`, `false`, an empty array or object) instead of an
//! error, so client code can probe any node without checking its [`Kind`](Kind) first.
//!
//! The serialization framework follows the same split between data model and data formats as
//! [serde](https://serde.rs/data-model.html): the [`ser`](ser) module defines the abstract
//! traits, the [`json`](json) and [`msgpack`](msgpack) modules implement the two encodings.
//!
//! Json text is written *without escaping strings*. Strings are copied verbatim between double
//! quotes, callers that store quotes, backslashes or control characters in strings must use the
//! explicitly escaping functions of the [`json`](json) module instead.
#![warn(missing_docs)]

mod defaults;
mod interop;
mod value;

pub use self::defaults::PayloadMut;
pub use self::value::*;

pub mod json;
pub mod msgpack;
pub mod ser;
