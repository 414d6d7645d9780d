use crate::{custom::TypedHook, CustomMapper, MapperFactory};

use remap_core::{
    err,
    mapping::{ElementTransform, MappingDirection},
    ClassMap, Error, FieldMapping, Mappable, NullPolicy, Result, TypePair,
};

use std::{marker::PhantomData, sync::Arc};

/// Declares the class map for `A -> B`.
///
/// Obtained from [`MapperFactory::class_map`]; takes effect on
/// [`register`](ClassMapBuilder::register). Path expressions are checked when
/// the map is registered, so a typo fails there rather than on first use.
#[must_use = "a class map has no effect until it is registered"]
pub struct ClassMapBuilder<'f, A, B> {
    factory: &'f mut MapperFactory,
    class_map: ClassMap,

    /// First malformed path expression, reported on register
    error: Option<Error>,

    _p: PhantomData<fn() -> (A, B)>,
}

/// Declares one field rule with its own options.
///
/// Returned by [`ClassMapBuilder::field_map`]; [`add`](FieldMapBuilder::add)
/// hands the class map builder back.
#[must_use = "a field mapping has no effect until it is added"]
pub struct FieldMapBuilder<'f, A, B> {
    parent: ClassMapBuilder<'f, A, B>,
    field: Option<FieldMapping>,
}

impl<'f, A: Mappable, B: Mappable> ClassMapBuilder<'f, A, B> {
    pub(crate) fn new(factory: &'f mut MapperFactory) -> Self {
        Self {
            factory,
            class_map: ClassMap::new(TypePair::of::<A, B>()),
            error: None,
            _p: PhantomData,
        }
    }

    /// Maps `a` on `A` to `b` on `B`, both ways.
    pub fn field(self, a: &str, b: &str) -> Self {
        self.field_with(a, b, MappingDirection::Both)
    }

    /// Maps `a` to `b` only when copying `A -> B`.
    pub fn field_a_to_b(self, a: &str, b: &str) -> Self {
        self.field_with(a, b, MappingDirection::AToB)
    }

    /// Maps `b` to `a` only when copying `B -> A`.
    pub fn field_b_to_a(self, a: &str, b: &str) -> Self {
        self.field_with(a, b, MappingDirection::BToA)
    }

    fn field_with(self, a: &str, b: &str, direction: MappingDirection) -> Self {
        self.field_map(a, b).direction(direction).add()
    }

    /// Starts a field rule with options of its own.
    pub fn field_map(mut self, a: &str, b: &str) -> FieldMapBuilder<'f, A, B> {
        let field = match FieldMapping::parse(a, b) {
            Ok(field) => Some(field),
            Err(err) => {
                self.error.get_or_insert(err);
                None
            }
        };

        FieldMapBuilder {
            parent: self,
            field,
        }
    }

    /// Never maps the field `name`, whichever side it is on.
    pub fn exclude(mut self, name: &str) -> Self {
        self.class_map.excluded.insert(name.to_string());
        self
    }

    /// Class-level null policy for `A -> B`.
    pub fn map_nulls(mut self, map_nulls: bool) -> Self {
        self.class_map.null_policy = NullPolicy::from_bool(map_nulls);
        self
    }

    /// Class-level null policy for `B -> A`.
    pub fn map_nulls_in_reverse(mut self, map_nulls: bool) -> Self {
        self.class_map.null_policy_reverse = NullPolicy::from_bool(map_nulls);
        self
    }

    /// Also maps every field whose name exists on both sides, unless it is
    /// excluded or already covered by an explicit rule.
    pub fn by_default(mut self) -> Self {
        self.class_map.use_defaults = true;
        self
    }

    /// Attaches custom logic, run after the field rules of each map call.
    pub fn customize(mut self, mapper: impl CustomMapper<A, B>) -> Self {
        self.class_map.hook = Some(Arc::new(TypedHook::new(mapper)));
        self
    }

    /// The class map as declared so far, before defaults are inferred.
    pub fn class_map(&self) -> &ClassMap {
        &self.class_map
    }

    /// Records the class map with the factory, replacing any earlier map for
    /// the same pair.
    pub fn register(self) -> Result<()> {
        if let Some(error) = self.error {
            let pair = self.class_map.pair;
            return Err(error.context(err!("registering class map {pair}")));
        }

        self.factory.register(self.class_map)
    }
}

impl<'f, A: Mappable, B: Mappable> FieldMapBuilder<'f, A, B> {
    /// Field-level null policy for `A -> B`.
    pub fn map_nulls(mut self, map_nulls: bool) -> Self {
        if let Some(field) = &mut self.field {
            field.null_policy = NullPolicy::from_bool(map_nulls);
        }
        self
    }

    /// Field-level null policy for `B -> A`.
    pub fn map_nulls_in_reverse(mut self, map_nulls: bool) -> Self {
        if let Some(field) = &mut self.field {
            field.null_policy_reverse = NullPolicy::from_bool(map_nulls);
        }
        self
    }

    pub fn a_to_b(self) -> Self {
        self.direction(MappingDirection::AToB)
    }

    pub fn b_to_a(self) -> Self {
        self.direction(MappingDirection::BToA)
    }

    fn direction(mut self, direction: MappingDirection) -> Self {
        if let Some(field) = &mut self.field {
            field.direction = direction;
        }
        self
    }

    /// Converts each value before it is written: every element of a list,
    /// every value of a map, otherwise the value itself.
    pub fn transform(mut self, transform: impl ElementTransform) -> Self {
        if let Some(field) = &mut self.field {
            field.transform = Some(Arc::new(transform));
        }
        self
    }

    /// Adds the rule to the class map.
    pub fn add(self) -> ClassMapBuilder<'f, A, B> {
        let mut parent = self.parent;

        if let Some(field) = self.field {
            parent.class_map.fields.push(field);
        }

        parent
    }
}
