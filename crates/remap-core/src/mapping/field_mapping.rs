use super::{Direction, ElementTransform, MappingDirection, NullPolicy, TypePair};
use crate::{schema::Type, Error, FieldPath, PathErrorKind, Result};

use std::{fmt, sync::Arc};

/// One rule pairing a path on the `A` side with a path on the `B` side.
#[derive(Clone)]
pub struct FieldMapping {
    pub a: FieldPath,
    pub b: FieldPath,
    pub direction: MappingDirection,

    /// Null policy when copying `A -> B`
    pub null_policy: NullPolicy,

    /// Null policy when copying `B -> A`
    pub null_policy_reverse: NullPolicy,

    pub transform: Option<Arc<dyn ElementTransform>>,

    /// Inferred by name matching rather than declared.
    pub by_default: bool,

    /// Declared types at the end of each path, once resolved against the
    /// pair's models.
    resolved: Option<(Type, Type)>,
}

impl FieldMapping {
    pub fn new(a: FieldPath, b: FieldPath) -> Self {
        Self {
            a,
            b,
            direction: MappingDirection::Both,
            null_policy: NullPolicy::Inherit,
            null_policy_reverse: NullPolicy::Inherit,
            transform: None,
            by_default: false,
            resolved: None,
        }
    }

    /// Parses both expressions into a bidirectional rule.
    pub fn parse(a: &str, b: &str) -> Result<Self> {
        Ok(Self::new(FieldPath::parse(a)?, FieldPath::parse(b)?))
    }

    /// Same-name rule used by default inference.
    pub fn same_name(name: &str) -> Self {
        let mut mapping = Self::new(FieldPath::field(name), FieldPath::field(name));
        mapping.by_default = true;
        mapping
    }

    pub fn applies_to(&self, direction: Direction) -> bool {
        self.direction.allows(direction)
    }

    /// Path read from when copying in `direction`.
    pub fn source(&self, direction: Direction) -> &FieldPath {
        match direction {
            Direction::AToB => &self.a,
            Direction::BToA => &self.b,
        }
    }

    /// Path written to when copying in `direction`.
    pub fn dest(&self, direction: Direction) -> &FieldPath {
        self.source(direction.reverse())
    }

    pub fn source_ty(&self, direction: Direction) -> Option<&Type> {
        let (a, b) = self.resolved.as_ref()?;
        match direction {
            Direction::AToB => Some(a),
            Direction::BToA => Some(b),
        }
    }

    pub fn dest_ty(&self, direction: Direction) -> Option<&Type> {
        self.source_ty(direction.reverse())
    }

    pub fn null_policy(&self, direction: Direction) -> NullPolicy {
        match direction {
            Direction::AToB => self.null_policy,
            Direction::BToA => self.null_policy_reverse,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.a.is_multi()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// True if either side of the rule starts at field `name`.
    pub fn covers(&self, name: &str) -> bool {
        self.a.root_name() == Some(name) || self.b.root_name() == Some(name)
    }

    /// Checks both paths against the pair's models and records the types
    /// they end in.
    pub fn resolve(&mut self, pair: &TypePair) -> Result<()> {
        match (self.a.is_multi(), self.b.is_multi()) {
            (true, false) => {
                return Err(Error::path(self.a.expr(), PathErrorKind::WildcardMismatch));
            }
            (false, true) => {
                return Err(Error::path(self.b.expr(), PathErrorKind::WildcardMismatch));
            }
            _ => {}
        }

        let a = self.a.resolve_ty(&Type::Model(pair.a))?;
        let b = self.b.resolve_ty(&Type::Model(pair.b))?;
        self.resolved = Some((a, b));
        Ok(())
    }
}

impl fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("a", &self.a.expr())
            .field("b", &self.b.expr())
            .field("direction", &self.direction)
            .field("null_policy", &self.null_policy)
            .field("null_policy_reverse", &self.null_policy_reverse)
            .field("transform", &self.transform.is_some())
            .field("by_default", &self.by_default)
            .finish()
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            MappingDirection::Both => "<->",
            MappingDirection::AToB => "->",
            MappingDirection::BToA => "<-",
        };
        write!(f, "`{}` {arrow} `{}`", self.a, self.b)
    }
}
