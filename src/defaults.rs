// Fallback payloads for accessors invoked on a value of a different kind.

use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use super::{Array, Object};

pub(crate) const DEFAULT_STRING: &str = "";
pub(crate) const DEFAULT_INT: i64 = 0;
pub(crate) const DEFAULT_DOUBLE: f64 = 0.0;
pub(crate) const DEFAULT_BOOL: bool = false;

static EMPTY_ARRAY: Array = Vec::new();
static EMPTY_OBJECT: OnceLock<Object> = OnceLock::new();

/// The shared empty array. Nothing can obtain mutable access to it.
pub(crate) fn empty_array() -> &'static Array {
    &EMPTY_ARRAY
}

/// The shared empty object, created on first use.
pub(crate) fn empty_object() -> &'static Object {
    EMPTY_OBJECT.get_or_init(Object::new)
}

/// Mutable access to the array or object payload of a [`Value`](crate::Value).
///
/// Obtained from [`get_array_mut`](crate::Value::get_array_mut) and
/// [`get_object_mut`](crate::Value::get_object_mut). If the value holds a payload of the
/// requested kind, this derefs to it. Otherwise it derefs to a fresh empty container owned by
/// this handle: every call starts out empty, and whatever is written into it is dropped
/// together with the handle.
#[derive(Debug)]
pub enum PayloadMut<'a, T> {
    /// Borrows the payload of the value.
    Attached(&'a mut T),
    /// A fresh container not connected to any value.
    Detached(T),
}

impl<'a, T: Default> PayloadMut<'a, T> {
    pub(crate) fn detached() -> Self {
        PayloadMut::Detached(T::default())
    }
}

impl<'a, T> PayloadMut<'a, T> {
    /// Returns `true` if writes through this handle are discarded.
    pub fn is_detached(&self) -> bool {
        match self {
            PayloadMut::Attached(_) => false,
            PayloadMut::Detached(_) => true,
        }
    }
}

impl<'a, T> Deref for PayloadMut<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            PayloadMut::Attached(payload) => &**payload,
            PayloadMut::Detached(payload) => payload,
        }
    }
}

impl<'a, T> DerefMut for PayloadMut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self {
            PayloadMut::Attached(payload) => &mut **payload,
            PayloadMut::Detached(payload) => payload,
        }
    }
}
