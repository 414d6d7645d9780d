use super::{resolved_tys, Exec};

use remap_core::{
    mapping::{Direction, FieldMapping},
    schema::Type,
    value::ValueMap,
    Error, FieldPath, MapKey, NullPolicy, PathErrorKind, Result, Value,
};
use tracing::trace;

/// Multi-occurrence rules reading the same source collection into the same
/// destination collection.
///
/// The rules of a group are evaluated pairwise: element `i` of the
/// destination is built from element `i` of every rule's projection.
pub(super) struct Group<'c> {
    source: FieldPath,
    dest: FieldPath,
    pub(super) rules: Vec<&'c FieldMapping>,
}

#[derive(Default)]
pub(super) struct Groups<'c> {
    groups: Vec<Group<'c>>,
}

impl<'c> Groups<'c> {
    pub(super) fn push(&mut self, rule: &'c FieldMapping, direction: Direction) {
        let (Some((source, _)), Some((dest, _))) = (
            rule.source(direction).split_multi(),
            rule.dest(direction).split_multi(),
        ) else {
            return;
        };

        match self
            .groups
            .iter_mut()
            .find(|group| group.source == source && group.dest == dest)
        {
            Some(group) => group.rules.push(rule),
            None => self.groups.push(Group {
                source,
                dest,
                rules: vec![rule],
            }),
        }
    }
}

impl<'c> IntoIterator for Groups<'c> {
    type Item = Group<'c>;
    type IntoIter = std::vec::IntoIter<Group<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl Exec<'_> {
    pub(super) fn copy_group(
        &mut self,
        group: &Group<'_>,
        direction: Direction,
        fallback: NullPolicy,
        source: &Value,
        dest: &mut Value,
        dest_ty: &Type,
    ) -> Result<()> {
        let mut columns = Vec::with_capacity(group.rules.len());

        for rule in &group.rules {
            match rule.source(direction).get_multi(source)? {
                Some(values) => columns.push(values),
                None if rule.null_policy(direction).or(fallback).maps_nulls() => {
                    return group.dest.set(dest, dest_ty, Value::Null);
                }
                None => {
                    trace!(field = %group.dest, "null suppressed");
                    return Ok(());
                }
            }
        }

        let len = columns.first().map_or(0, Vec::len);
        let mut elements = vec![Value::Null; len];

        let collection = match group.dest.resolve_ty(dest_ty)? {
            Type::List(elem_ty) => {
                for (rule, column) in group.rules.iter().zip(columns) {
                    let (from, to) = resolved_tys(rule, direction)?;
                    let inner = inner_path(rule.dest(direction))?;

                    for (element, value) in elements.iter_mut().zip(column) {
                        let value = self.project(rule, direction, value, from, to)?;
                        inner.set(element, &elem_ty, value)?;
                    }
                }

                Value::List(elements)
            }
            Type::Map(key_ty, value_ty) => {
                for (rule, column) in group.rules.iter().zip(columns) {
                    let (from, to) = resolved_tys(rule, direction)?;
                    let inner = inner_path(rule.dest(direction))?;

                    for (element, value) in elements.iter_mut().zip(column) {
                        let value = self.project(rule, direction, value, from, to)?;
                        inner.set_in_entry(element, &key_ty, &value_ty, value)?;
                    }
                }

                // Duplicate keys overwrite, the last element wins
                let mut entries = ValueMap::with_capacity(len);
                for element in elements {
                    let Value::Record(mut entry) = element else {
                        continue;
                    };
                    let key = MapKey::from_value(entry.take("key"))?;
                    entries.insert(key, entry.take("value"));
                }

                Value::Map(entries)
            }
            _ => {
                return Err(Error::path(
                    group.dest.expr(),
                    PathErrorKind::NotAContainer {
                        segment: group.dest.expr().to_string(),
                    },
                ));
            }
        };

        trace!(from = %group.source, to = %group.dest, len, "copy collection");
        group.dest.set(dest, dest_ty, collection)
    }

    /// Transforms and converts one projected element.
    fn project(
        &mut self,
        rule: &FieldMapping,
        direction: Direction,
        value: Value,
        from: &Type,
        to: &Type,
    ) -> Result<Value> {
        let value = match &rule.transform {
            Some(transform) if !value.is_null() => transform.transform(value, direction)?,
            _ => value,
        };

        self.convert(value, from, to)
    }
}

fn inner_path(path: &FieldPath) -> Result<&FieldPath> {
    match path.split_multi() {
        Some((_, inner)) => Ok(inner),
        None => Err(Error::path(path.expr(), PathErrorKind::WildcardMismatch)),
    }
}
