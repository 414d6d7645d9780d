use super::{Access, FieldPath, Segment};
use crate::{schema::Type, Error, MapKey, PathErrorKind, Record, Result, Value};

static NULL: Value = Value::Null;

/// What segment names are looked up in while walking a path.
#[derive(Debug, Clone)]
enum Scope {
    /// A value of a declared type. Only models have fields.
    Ty(Type),

    /// A map entry exposing `key` and `value`
    Entry(Type, Type),
}

/// Either kind of subscript.
enum Subscript<'a> {
    Index(usize),
    Key(&'a MapKey),
}

impl FieldPath {
    /// Declared type of the value the path addresses, starting from `root`.
    ///
    /// Checks every segment against the models along the way, so a path that
    /// resolves here can only fail at runtime on data (an index past the end
    /// of a list), never on shape.
    pub fn resolve_ty(&self, root: &Type) -> Result<Type> {
        self.resolve_ty_from(Scope::Ty(root.clone()))
    }

    fn resolve_ty_from(&self, mut scope: Scope) -> Result<Type> {
        for segment in &self.segments {
            let ty = self.field_ty(&scope, &segment.name)?;

            scope = match (&segment.access, ty) {
                (Access::Field, ty) => Scope::Ty(ty),
                (Access::Index(_), Type::List(elem)) => Scope::Ty(*elem),
                (Access::Index(_), Type::Map(_, value)) => Scope::Ty(*value),
                (Access::Key(key), Type::Map(key_ty, value)) => {
                    self.coerce_key(key.clone(), &key_ty)?;
                    Scope::Ty(*value)
                }
                (Access::Key(key), Type::List(_)) => {
                    return Err(self.error(PathErrorKind::KeyTypeMismatch {
                        key: key.to_string(),
                    }));
                }
                (Access::Each(inner), Type::List(elem)) => {
                    return inner.resolve_ty_from(Scope::Ty(*elem));
                }
                (Access::Each(inner), Type::Map(key, value)) => {
                    if inner.is_identity() {
                        return Err(self.error(PathErrorKind::Malformed {
                            position: self.expr.len(),
                            reason: "map elements must be projected through `key` or `value`",
                        }));
                    }
                    return inner.resolve_ty_from(Scope::Entry(*key, *value));
                }
                _ => return Err(self.not_a_container(segment)),
            };
        }

        match scope {
            Scope::Ty(ty) => Ok(ty),
            Scope::Entry(..) => Err(self.error(PathErrorKind::Malformed {
                position: self.expr.len(),
                reason: "map elements must be projected through `key` or `value`",
            })),
        }
    }

    /// Reads the value the path addresses.
    ///
    /// Null anywhere along the way reads as null, as does an absent map key.
    /// An index past the end of a list is an error.
    pub fn get(&self, root: &Value) -> Result<Value> {
        let mut current = root;

        for segment in &self.segments {
            let field = match current {
                Value::Null => return Ok(Value::Null),
                Value::Record(record) => self.record_field(record, &segment.name)?,
                _ => return Err(self.not_a_container(segment)),
            };

            current = match &segment.access {
                Access::Field => field,
                Access::Index(index) => self.element(field, Subscript::Index(*index), segment)?,
                Access::Key(key) => self.element(field, Subscript::Key(key), segment)?,
                Access::Each(_) => return Err(self.error(PathErrorKind::WildcardMismatch)),
            };
        }

        Ok(current.clone())
    }

    /// Reads every element a multi-occurrence path projects, in collection
    /// order. Returns `None` when the collection itself is null.
    pub fn get_multi(&self, root: &Value) -> Result<Option<Vec<Value>>> {
        let Some((collection, inner)) = self.split_multi() else {
            return Err(self.error(PathErrorKind::WildcardMismatch));
        };

        match collection.get(root)? {
            Value::Null => Ok(None),
            Value::List(items) => items
                .iter()
                .map(|item| inner.get(item))
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Value::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| inner.get(&Value::Record(entry_record(key, value))))
                .collect::<Result<Vec<_>>>()
                .map(Some),
            _ => Err(self.not_a_container(&self.segments[self.segments.len() - 1])),
        }
    }

    /// Writes `value` at the path, starting from a root of type `root_ty`.
    ///
    /// Null containers along the way are materialized: records from their
    /// model's default instance, lists and maps empty. Writing past the end
    /// of a list fails; lists never grow.
    pub fn set(&self, root: &mut Value, root_ty: &Type, value: Value) -> Result<()> {
        self.set_in(&self.segments, root, Scope::Ty(root_ty.clone()), value)
    }

    /// Like [`FieldPath::set`], but the root is a map entry with `key` and
    /// `value` fields of the given types.
    pub fn set_in_entry(
        &self,
        entry: &mut Value,
        key_ty: &Type,
        value_ty: &Type,
        value: Value,
    ) -> Result<()> {
        let scope = Scope::Entry(key_ty.clone(), value_ty.clone());
        self.set_in(&self.segments, entry, scope, value)
    }

    fn set_in(
        &self,
        segments: &[Segment],
        current: &mut Value,
        scope: Scope,
        value: Value,
    ) -> Result<()> {
        let Some((segment, rest)) = segments.split_first() else {
            *current = value;
            return Ok(());
        };

        let field_ty = self.field_ty(&scope, &segment.name)?;

        if current.is_null() {
            *current = self.materialize(&scope, segment)?;
        }

        let Value::Record(record) = current else {
            return Err(self.not_a_container(segment));
        };

        let slot = record.slot_mut(&segment.name);

        match &segment.access {
            Access::Field => self.set_in(rest, slot, Scope::Ty(field_ty), value),
            Access::Index(index) => {
                let (target, ty) =
                    self.element_mut(slot, &field_ty, Subscript::Index(*index), segment)?;
                self.set_in(rest, target, Scope::Ty(ty), value)
            }
            Access::Key(key) => {
                let (target, ty) = self.element_mut(slot, &field_ty, Subscript::Key(key), segment)?;
                self.set_in(rest, target, Scope::Ty(ty), value)
            }
            Access::Each(_) => Err(self.error(PathErrorKind::WildcardMismatch)),
        }
    }

    fn field_ty(&self, scope: &Scope, name: &str) -> Result<Type> {
        match scope {
            Scope::Ty(Type::Model(model)) => match model.model().field(name) {
                Some(field) => Ok(field.ty.clone()),
                None => Err(self.error(PathErrorKind::UnknownField {
                    model: model.name().to_string(),
                    field: name.to_string(),
                })),
            },
            Scope::Entry(key, _) if name == "key" => Ok(key.clone()),
            Scope::Entry(_, value) if name == "value" => Ok(value.clone()),
            Scope::Entry(..) => Err(self.error(PathErrorKind::UnknownField {
                model: "map entry".to_string(),
                field: name.to_string(),
            })),
            Scope::Ty(_) => Err(self.error(PathErrorKind::NotAContainer {
                segment: name.to_string(),
            })),
        }
    }

    /// Empty container to write `segment` into.
    fn materialize(&self, scope: &Scope, segment: &Segment) -> Result<Value> {
        match scope {
            Scope::Ty(Type::Model(model)) => Ok(Value::Record(model.default_record())),
            Scope::Entry(..) => {
                let mut entry = Record::with_capacity(2);
                entry.insert("key", Value::Null);
                entry.insert("value", Value::Null);
                Ok(Value::Record(entry))
            }
            Scope::Ty(_) => Err(self.not_a_container(segment)),
        }
    }

    fn record_field<'a>(&self, record: &'a Record, name: &str) -> Result<&'a Value> {
        record.get(name).ok_or_else(|| {
            self.error(PathErrorKind::UnknownField {
                model: "record".to_string(),
                field: name.to_string(),
            })
        })
    }

    fn element<'a>(
        &self,
        container: &'a Value,
        subscript: Subscript<'_>,
        segment: &Segment,
    ) -> Result<&'a Value> {
        match (container, subscript) {
            (Value::Null, _) => Ok(&NULL),
            (Value::List(items), Subscript::Index(index)) => {
                items.get(index).ok_or_else(|| {
                    self.error(PathErrorKind::IndexOutOfRange {
                        index,
                        len: items.len(),
                    })
                })
            }
            (Value::List(_), Subscript::Key(key)) => {
                Err(self.error(PathErrorKind::KeyTypeMismatch {
                    key: key.to_string(),
                }))
            }
            (Value::Map(entries), Subscript::Index(index)) => {
                let key = MapKey::I64(index as i64);
                Ok(lookup(entries, &key).unwrap_or(&NULL))
            }
            (Value::Map(entries), Subscript::Key(key)) => Ok(lookup(entries, key).unwrap_or(&NULL)),
            _ => Err(self.not_a_container(segment)),
        }
    }

    fn element_mut<'a>(
        &self,
        slot: &'a mut Value,
        ty: &Type,
        subscript: Subscript<'_>,
        segment: &Segment,
    ) -> Result<(&'a mut Value, Type)> {
        match ty {
            Type::List(elem) => {
                let index = match subscript {
                    Subscript::Index(index) => index,
                    Subscript::Key(key) => {
                        return Err(self.error(PathErrorKind::KeyTypeMismatch {
                            key: key.to_string(),
                        }));
                    }
                };

                if slot.is_null() {
                    *slot = Value::List(vec![]);
                }

                let Value::List(items) = slot else {
                    return Err(self.not_a_container(segment));
                };

                let len = items.len();
                match items.get_mut(index) {
                    Some(target) => Ok((target, (**elem).clone())),
                    None => Err(self.error(PathErrorKind::IndexOutOfRange { index, len })),
                }
            }
            Type::Map(key_ty, value_ty) => {
                let key = match subscript {
                    Subscript::Index(index) => MapKey::I64(index as i64),
                    Subscript::Key(key) => key.clone(),
                };
                let key = self.coerce_key(key, key_ty)?;

                if slot.is_null() {
                    *slot = Value::Map(Default::default());
                }

                let Value::Map(entries) = slot else {
                    return Err(self.not_a_container(segment));
                };

                Ok((entries.entry(key).or_default(), (**value_ty).clone()))
            }
            _ => Err(self.not_a_container(segment)),
        }
    }

    /// Converts a key written in the path into the map's declared key type.
    fn coerce_key(&self, key: MapKey, key_ty: &Type) -> Result<MapKey> {
        let mismatch = |key: &MapKey| {
            self.error(PathErrorKind::KeyTypeMismatch {
                key: key.to_string(),
            })
        };

        let value = key
            .clone()
            .into_value()
            .cast(key_ty)
            .map_err(|_| mismatch(&key))?;

        MapKey::from_value(value).map_err(|_| mismatch(&key))
    }

    fn not_a_container(&self, segment: &Segment) -> Error {
        self.error(PathErrorKind::NotAContainer {
            segment: segment.name.clone(),
        })
    }

    fn error(&self, kind: PathErrorKind) -> Error {
        Error::path(self.expr.as_str(), kind)
    }
}

/// Map entry as seen by the inner path of a multi-occurrence segment.
fn entry_record(key: MapKey, value: Value) -> Record {
    let mut record = Record::with_capacity(2);
    record.insert("key", key.into_value());
    record.insert("value", value);
    record
}

/// Looks a key up, accepting `"3"` for `3` and the other way around.
fn lookup<'a>(entries: &'a crate::value::ValueMap, key: &MapKey) -> Option<&'a Value> {
    if let Some(value) = entries.get(key) {
        return Some(value);
    }

    let alternate = match key {
        MapKey::String(v) => MapKey::I64(v.parse().ok()?),
        MapKey::I64(v) => MapKey::String(v.to_string()),
    };

    entries.get(&alternate)
}
