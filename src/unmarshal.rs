//! Conversion of a successful response body into a typed result.

use crate::{Error, ErrorContext, Result};
use serde::de::value::SeqDeserializer;
use serde::de::{self, DeserializeOwned, Visitor};
use serde::Deserializer;
use serde_json::Value;

/// Converts the root JSON object of a successful response into `T`.
pub trait JsonUnmarshaler<T>: Send + Sync {
    fn from_json(&self, root: &Value) -> Result<T>;
}

impl<T, F> JsonUnmarshaler<T> for F
where
    F: Fn(&Value) -> Result<T> + Send + Sync,
{
    fn from_json(&self, root: &Value) -> Result<T> {
        self(root)
    }
}

fn decode<T: DeserializeOwned>(value: Value, path: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        Error::unmarshal_with_context(
            e.to_string(),
            ErrorContext::new()
                .with_field_path(path.to_string())
                .with_source("unmarshal"),
        )
    })
}

/// Feeds an empty sequence to targets that ask for one and rejects the rest.
struct EmptySeq;

impl<'de> Deserializer<'de> for EmptySeq {
    type Error = de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> std::result::Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a sequence"))
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, Self::Error> {
        visitor.visit_seq(SeqDeserializer::new(std::iter::empty::<()>()))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Deserialize the value under `root[key]`.
///
/// A missing or null key reads as `null`, so `Option` targets yield `None`.
/// Sequence targets such as `Vec` yield an empty collection.
pub fn field<T: DeserializeOwned>(key: &'static str) -> impl JsonUnmarshaler<T> {
    move |root: &Value| -> Result<T> {
        match root.get(key) {
            Some(v) if !v.is_null() => decode(v.clone(), key),
            _ => decode(Value::Null, key).or_else(|err| T::deserialize(EmptySeq).map_err(|_| err)),
        }
    }
}

/// Deserialize the array under `root[key]`. A missing or null key yields an empty list.
pub fn list<T: DeserializeOwned>(key: &'static str) -> impl JsonUnmarshaler<Vec<T>> {
    move |root: &Value| -> Result<Vec<T>> {
        match root.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(v) => decode(v.clone(), key),
        }
    }
}

/// Deserialize the first element of the array under `root[key]`.
pub fn first_in<T: DeserializeOwned>(key: &'static str) -> impl JsonUnmarshaler<T> {
    move |root: &Value| -> Result<T> {
        let first = root
            .get(key)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .ok_or_else(|| {
                Error::unmarshal_with_context(
                    "expected a non-empty array",
                    ErrorContext::new()
                        .with_field_path(format!("{}[0]", key))
                        .with_source("unmarshal"),
                )
            })?;
        decode(first.clone(), &format!("{}[0]", key))
    }
}

/// Ignore the body.
pub fn unit() -> impl JsonUnmarshaler<()> {
    |_: &Value| -> Result<()> { Ok(()) }
}
