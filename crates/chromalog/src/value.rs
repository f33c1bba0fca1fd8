//! Dynamic values accepted by loggers and the pretty-printer.
//!
//! [`Value`] covers the primitives a log call usually carries plus two shared
//! container handles, [`List`] and [`Map`]. Containers are reference-counted
//! and interior-mutable so a value can point back at one of its ancestors;
//! the formatter tracks container identity to print such cycles as
//! `[Circular]` instead of recursing forever.
//!
//! A cycle built this way is an `Rc` cycle and is never freed.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// A loggable value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An absent value.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(List),
    Map(Map),
}

impl Value {
    /// Converts any serializable type into a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromalog::Value;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct User { name: String, age: u32 }
    ///
    /// let value = Value::from_serialize(&User { name: "Alice".into(), age: 30 }).unwrap();
    /// assert_eq!(value.to_string(), r#"{ name: "Alice", age: 30 }"#);
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(data).map(Value::from)
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns true for anything that is not a list or a map.
    pub fn is_primitive(&self) -> bool {
        !self.is_container()
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true for a list or map with no entries.
    ///
    /// A container that is being mutated elsewhere counts as non-empty.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Value::List(list) => list.try_len() == Some(0),
            Value::Map(map) => map.try_len() == Some(0),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The plain string form of a primitive: strings are not quoted.
    ///
    /// Containers fall through to the pretty-printer.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_value(self))
    }
}

/// Writes a float the way a terminal user expects to read it.
pub(crate) fn float_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

/// Identity of a shared container, used for cycle detection.
pub(crate) type Identity = *const ();

/// A shared, ordered sequence of values.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value. Visible through every clone of this handle.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the elements, or `None` if the list is being mutated.
    pub fn try_items(&self) -> Option<Ref<'_, Vec<Value>>> {
        self.0.try_borrow().ok()
    }

    /// Mutable access to the elements, held for as long as the guard lives.
    pub fn items_mut(&self) -> std::cell::RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    pub(crate) fn try_len(&self) -> Option<usize> {
        self.try_items().map(|items| items.len())
    }

    pub(crate) fn identity(&self) -> Identity {
        Rc::as_ptr(&self.0) as Identity
    }

    /// Returns true if both handles point at the same list.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({:p})", self.identity())
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let items: Vec<Value> = iter.into_iter().map(Into::into).collect();
        List(Rc::new(RefCell::new(items)))
    }
}

/// A shared mapping with unique keys, kept in insertion order.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<Vec<(String, Value)>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under `key`.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the entries, or `None` if the map is being mutated.
    pub fn try_entries(&self) -> Option<Ref<'_, Vec<(String, Value)>>> {
        self.0.try_borrow().ok()
    }

    /// Mutable access to the entries, held for as long as the guard lives.
    pub fn entries_mut(&self) -> std::cell::RefMut<'_, Vec<(String, Value)>> {
        self.0.borrow_mut()
    }

    pub(crate) fn try_len(&self) -> Option<usize> {
        self.try_entries().map(|entries| entries.len())
    }

    pub(crate) fn identity(&self) -> Identity {
        Rc::as_ptr(&self.0) as Identity
    }

    /// Returns true if both handles point at the same map.
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map({:p})", self.identity())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => Value::Int(n),
                        Err(_) => Value::Float(n as f64),
                    }
                }
            }
        )*
    };
}

from_wide_int!(u64, usize, isize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().collect()),
            Json::Object(entries) => Value::Map(entries.into_iter().collect()),
        }
    }
}
