mod convert;
mod wildcard;

use crate::factory::Registry;

use remap_core::{
    bail, err,
    mapping::{Direction, FieldMapping, Hook},
    schema::Type,
    ClassMap, Error, MappingContext, ModelRef, NullPolicy, Record, Result, TypePair, Value,
};
use tracing::trace;

use std::{collections::HashMap, sync::Arc};

/// State of one top-level map call.
pub(crate) struct Exec<'a> {
    registry: &'a Registry,
    context: &'a mut MappingContext,

    /// Class maps derived during this call, reused for repeated nested pairs.
    derived: HashMap<TypePair, Arc<ClassMap>>,
}

impl<'a> Exec<'a> {
    pub(crate) fn new(registry: &'a Registry, context: &'a mut MappingContext) -> Self {
        Self {
            registry,
            context,
            derived: HashMap::new(),
        }
    }

    /// Maps `source` onto `dest`, finding the class map from the two models.
    pub(crate) fn map_record(
        &mut self,
        source_model: ModelRef,
        source: Record,
        dest_model: ModelRef,
        dest: Record,
    ) -> Result<Record> {
        let (class_map, direction) = self.plan(source_model, dest_model)?;
        self.apply(&class_map, direction, source, dest)
    }

    /// Maps `source` onto `dest` with a class map already in hand.
    pub(crate) fn apply(
        &mut self,
        class_map: &ClassMap,
        direction: Direction,
        source: Record,
        dest: Record,
    ) -> Result<Record> {
        let (source_model, dest_model) = match direction {
            Direction::AToB => (class_map.pair.a, class_map.pair.b),
            Direction::BToA => (class_map.pair.b, class_map.pair.a),
        };
        let pair = TypePair::new(source_model, dest_model);

        let span = tracing::debug_span!("map", %pair, %direction, depth = self.context.depth());
        let _enter = span.enter();

        let fallback = class_map.null_policy(direction).or(self.registry.null_policy());
        let dest_ty = Type::Model(dest_model);
        let source = Value::Record(source);
        let mut dest = Value::Record(dest);

        let mut groups = wildcard::Groups::default();

        for rule in class_map.rules(direction) {
            if rule.is_multi() {
                groups.push(rule, direction);
                continue;
            }

            self.copy(rule, direction, fallback, &source, &mut dest, &dest_ty)
                .map_err(|err| with_context(err, &pair, rule))?;
        }

        for group in groups {
            self.copy_group(&group, direction, fallback, &source, &mut dest, &dest_ty)
                .map_err(|err| with_context(err, &pair, group.rules[0]))?;
        }

        let dest = match dest {
            Value::Record(dest) => dest,
            value => return Err(Error::type_conversion(value, dest_model.name())),
        };

        match (&class_map.hook, source) {
            (Some(hook), Value::Record(source)) => {
                self.run_hook(&**hook, direction, source_model, source, dest_model, dest)
            }
            _ => Ok(dest),
        }
    }

    /// Finds the class map for `source -> dest`, deriving one if needed.
    fn plan(&mut self, source: ModelRef, dest: ModelRef) -> Result<(Arc<ClassMap>, Direction)> {
        if let Some(found) = self.registry.lookup(source, dest) {
            return Ok(found);
        }

        let pair = TypePair::new(source, dest);

        if let Some(class_map) = self.derived.get(&pair) {
            return Ok((class_map.clone(), Direction::AToB));
        }

        let class_map = self.registry.derive(pair)?;
        self.derived.insert(pair, class_map.clone());
        Ok((class_map, Direction::AToB))
    }

    fn copy(
        &mut self,
        rule: &FieldMapping,
        direction: Direction,
        fallback: NullPolicy,
        source: &Value,
        dest: &mut Value,
        dest_ty: &Type,
    ) -> Result<()> {
        let (from, to) = resolved_tys(rule, direction)?;
        let source_path = rule.source(direction);
        let dest_path = rule.dest(direction);

        let value = source_path.get(source)?;

        if value.is_null() && !rule.null_policy(direction).or(fallback).maps_nulls() {
            trace!(field = %dest_path, "null suppressed");
            return Ok(());
        }

        let value = match &rule.transform {
            Some(transform) => convert::transform(value, &**transform, direction)?,
            None => value,
        };
        let value = match (value, from, to) {
            (Value::Record(record), Type::Model(from_model), Type::Model(to_model))
                if from_model != to_model =>
            {
                // Map onto the record already at the destination, if any
                let base = match dest_path.get(dest) {
                    Ok(Value::Record(base)) => base,
                    _ => to_model.default_record(),
                };
                Value::Record(self.map_nested(*from_model, record, *to_model, base)?)
            }
            (value, ..) => self.convert(value, from, to)?,
        };

        trace!(from = %source_path, to = %dest_path, "copy field");
        dest_path.set(dest, dest_ty, value)
    }

    /// Runs the class map's hook on loaded instances and flattens the result.
    fn run_hook(
        &mut self,
        hook: &dyn Hook,
        direction: Direction,
        source_model: ModelRef,
        source: Record,
        dest_model: ModelRef,
        dest: Record,
    ) -> Result<Record> {
        let source = source_model.load_any(source)?;
        let mut dest = dest_model.load_any(dest)?;

        trace!("custom mapper");
        hook.apply(direction, &*source, &mut *dest, self.context)?;

        dest_model.record_any(&*dest)
    }

    /// Maps a nested record of a different model onto `dest` through the
    /// registry.
    fn map_nested(
        &mut self,
        from: ModelRef,
        record: Record,
        to: ModelRef,
        dest: Record,
    ) -> Result<Record> {
        self.context.enter();
        let result = self.map_record(from, record, to, dest);
        self.context.exit();
        result
    }
}

fn resolved_tys(rule: &FieldMapping, direction: Direction) -> Result<(&Type, &Type)> {
    match (rule.source_ty(direction), rule.dest_ty(direction)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => bail!("field mapping {rule} was used before its class map was registered"),
    }
}

/// Names the pair and rule on path and conversion errors. Anything else,
/// custom mapper errors included, is returned as is.
fn with_context(err: Error, pair: &TypePair, rule: &FieldMapping) -> Error {
    if err.is_path() {
        err.context(err!("{pair}"))
    } else if err.is_type_conversion() {
        err.context(err!("{pair}: {rule}"))
    } else {
        err
    }
}
