use super::{Direction, FieldMapping, Hook, NullPolicy, TypePair};
use crate::Result;

use indexmap::IndexSet;
use std::{fmt, sync::Arc};

/// The rules governing conversion between one ordered pair of types.
///
/// Built by `remap::ClassMapBuilder`, then frozen once registered.
#[derive(Clone)]
pub struct ClassMap {
    pub pair: TypePair,

    /// Explicit rules in declaration order, followed by inferred ones once
    /// the map is finished.
    pub fields: Vec<FieldMapping>,

    /// Field names that never get a rule, on either side.
    pub excluded: IndexSet<String>,

    /// Infer same-name rules for fields no explicit rule covers.
    pub use_defaults: bool,

    /// Class-level null policy for `A -> B`
    pub null_policy: NullPolicy,

    /// Class-level null policy for `B -> A`
    pub null_policy_reverse: NullPolicy,

    pub hook: Option<Arc<dyn Hook>>,
}

impl ClassMap {
    pub fn new(pair: TypePair) -> Self {
        Self {
            pair,
            fields: vec![],
            excluded: IndexSet::new(),
            use_defaults: false,
            null_policy: NullPolicy::Inherit,
            null_policy_reverse: NullPolicy::Inherit,
            hook: None,
        }
    }

    /// Structural map for a pair nobody registered: every same-name field,
    /// nothing excluded, every policy inherited.
    pub fn derive(pair: TypePair) -> Result<Self> {
        let mut class_map = Self::new(pair);
        class_map.use_defaults = true;
        class_map.finish()
    }

    /// Infers default rules and resolves every path against the pair's
    /// models.
    ///
    /// Inference runs here, after every explicit rule and exclusion is known,
    /// so the order in which they were declared does not matter.
    pub fn finish(mut self) -> Result<Self> {
        if self.use_defaults {
            let inferred: Vec<_> = self
                .pair
                .a
                .model()
                .field_names()
                .filter(|name| self.pair.b.model().has_field(name))
                .filter(|name| !self.is_excluded(name))
                .filter(|name| !self.fields.iter().any(|field| field.covers(name)))
                .map(FieldMapping::same_name)
                .collect();

            self.fields.extend(inferred);
        }

        for field in &mut self.fields {
            field.resolve(&self.pair)?;
        }

        Ok(self)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Rules to run when copying in `direction`, in order.
    ///
    /// Rules touching an excluded field are skipped even when declared
    /// explicitly.
    pub fn rules(&self, direction: Direction) -> impl Iterator<Item = &FieldMapping> + '_ {
        self.fields.iter().filter(move |field| {
            field.applies_to(direction)
                && !field.a.root_name().is_some_and(|name| self.is_excluded(name))
                && !field.b.root_name().is_some_and(|name| self.is_excluded(name))
        })
    }

    pub fn null_policy(&self, direction: Direction) -> NullPolicy {
        match direction {
            Direction::AToB => self.null_policy,
            Direction::BToA => self.null_policy_reverse,
        }
    }

    /// Rules that were inferred rather than declared.
    pub fn defaults(&self) -> impl Iterator<Item = &FieldMapping> + '_ {
        self.fields.iter().filter(|field| field.by_default)
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }
}

impl fmt::Debug for ClassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMap")
            .field("pair", &self.pair)
            .field("fields", &self.fields)
            .field("excluded", &self.excluded)
            .field("use_defaults", &self.use_defaults)
            .field("null_policy", &self.null_policy)
            .field("null_policy_reverse", &self.null_policy_reverse)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}
