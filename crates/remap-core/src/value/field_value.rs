use super::{MapKey, Value};
use crate::{schema::Type, Error, Result};

use indexmap::IndexMap;
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// A Rust type that can be stored in a field of a [`Mappable`] type.
///
/// [`Mappable`]: crate::Mappable
pub trait FieldValue: Sized {
    /// Declared type of a field holding `Self`.
    fn ty() -> Type;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

/// A [`FieldValue`] usable as the key of a map field.
pub trait KeyValue: FieldValue {
    fn to_key(&self) -> MapKey;

    fn from_key(key: MapKey) -> Result<Self>;
}

impl FieldValue for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl FieldValue for i32 {
    fn ty() -> Type {
        Type::I32
    }

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))
            }
            value => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl FieldValue for i64 {
    fn ty() -> Type {
        Type::I64
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl FieldValue for f64 {
    fn ty() -> Type {
        Type::F64
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl FieldValue for String {
    fn ty() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn load(value: Value) -> Result<Self> {
        T::load(value).map(Box::new)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(T::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(Error::type_conversion(value, format!("List<{}>", T::ty()))),
        }
    }
}

fn map_to_value<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value
where
    K: KeyValue + 'a,
    V: FieldValue + 'a,
{
    Value::Map(entries.map(|(k, v)| (k.to_key(), v.to_value())).collect())
}

fn load_map<K, V, M>(value: Value) -> Result<M>
where
    K: KeyValue,
    V: FieldValue,
    M: FromIterator<(K, V)>,
{
    match value {
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| -> Result<(K, V)> { Ok((K::from_key(k)?, V::load(v)?)) })
            .collect(),
        value => Err(Error::type_conversion(
            value,
            Type::map(K::ty(), V::ty()).to_string(),
        )),
    }
}

impl<K: KeyValue + Eq + Hash, V: FieldValue> FieldValue for HashMap<K, V> {
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }

    fn load(value: Value) -> Result<Self> {
        load_map(value)
    }
}

impl<K: KeyValue + Ord, V: FieldValue> FieldValue for BTreeMap<K, V> {
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }

    fn load(value: Value) -> Result<Self> {
        load_map(value)
    }
}

impl<K: KeyValue + Eq + Hash, V: FieldValue> FieldValue for IndexMap<K, V> {
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }

    fn load(value: Value) -> Result<Self> {
        load_map(value)
    }
}

impl KeyValue for String {
    fn to_key(&self) -> MapKey {
        MapKey::String(self.clone())
    }

    fn from_key(key: MapKey) -> Result<Self> {
        match key {
            MapKey::String(v) => Ok(v),
            MapKey::I64(v) => Ok(v.to_string()),
        }
    }
}

impl KeyValue for i64 {
    fn to_key(&self) -> MapKey {
        MapKey::I64(*self)
    }

    fn from_key(key: MapKey) -> Result<Self> {
        match key {
            MapKey::I64(v) => Ok(v),
            MapKey::String(v) => i64::load(Value::String(v).cast(&Type::I64)?),
        }
    }
}

impl KeyValue for i32 {
    fn to_key(&self) -> MapKey {
        MapKey::I64((*self).into())
    }

    fn from_key(key: MapKey) -> Result<Self> {
        i32::load(key.into_value().cast(&Type::I32)?)
    }
}
