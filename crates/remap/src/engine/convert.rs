use super::Exec;

use remap_core::{
    mapping::{Direction, ElementTransform},
    schema::Type,
    value::ValueMap,
    MapKey, Result, Value,
};

impl Exec<'_> {
    /// Converts a value declared as `from` into the representation of `to`.
    ///
    /// Containers convert element by element. A record whose model differs
    /// from the destination's is mapped through the registry; everything
    /// else is a primitive cast.
    pub(super) fn convert(&mut self, value: Value, from: &Type, to: &Type) -> Result<Value> {
        match (value, to) {
            (Value::Null, _) => Ok(Value::Null),
            (Value::List(items), Type::List(to_elem)) => {
                let from_elem = match from {
                    Type::List(from_elem) => from_elem,
                    _ => to_elem,
                };

                items
                    .into_iter()
                    .map(|item| self.convert(item, from_elem, to_elem))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            }
            (Value::Map(entries), Type::Map(to_key, to_value)) => {
                let from_value = match from {
                    Type::Map(_, from_value) => from_value,
                    _ => to_value,
                };

                let mut converted = ValueMap::with_capacity(entries.len());
                for (key, value) in entries {
                    let key = MapKey::from_value(key.into_value().cast(to_key)?)?;
                    let value = self.convert(value, from_value, to_value)?;
                    converted.insert(key, value);
                }

                Ok(Value::Map(converted))
            }
            (Value::Record(record), Type::Model(to_model)) => match from {
                Type::Model(from_model) if from_model != to_model => self
                    .map_nested(*from_model, record, *to_model, to_model.default_record())
                    .map(Value::Record),
                _ => Ok(Value::Record(record)),
            },
            (value, to) => value.cast(to),
        }
    }
}

/// Runs a field's transform on each element of a list, each value of a map,
/// or the value itself. Nulls are left alone.
pub(super) fn transform(
    value: Value,
    transform: &dyn ElementTransform,
    direction: Direction,
) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::List(items) => items
            .into_iter()
            .map(|item| transform.transform(item, direction))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        Value::Map(entries) => entries
            .into_iter()
            .map(|(key, value)| -> Result<(MapKey, Value)> {
                Ok((key, transform.transform(value, direction)?))
            })
            .collect::<Result<ValueMap>>()
            .map(Value::Map),
        value => transform.transform(value, direction),
    }
}
