mod parse;
mod resolve;

use crate::{MapKey, Result};

use std::fmt;

/// A parsed path expression addressing a value inside an instance.
///
/// Grammar, by example:
///
/// * `name` reads a plain field,
/// * `name.firstName` descends into a nested record,
/// * `nameList[0]` reads a sequence element (or an integer map key),
/// * `nameMap['first']` / `nameMap["first"]` reads a map entry,
/// * `names{fullName}` projects `fullName` out of every element of `names`;
///   `names{}` projects the elements themselves. Over a map the elements are
///   entries with a `key` and a `value` field, as in `personalNames{key}`.
///
/// A multi-occurrence (`{..}`) segment must be the last segment and cannot
/// nest.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPath {
    expr: String,
    segments: Vec<Segment>,
}

/// One step of a [`FieldPath`]: a field name plus how the field's value is
/// accessed.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub access: Access,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// The field itself
    Field,

    /// Element of a sequence, or integer key of a map
    Index(usize),

    /// Entry of a map
    Key(MapKey),

    /// Every element of a collection, each projected through the inner path
    Each(FieldPath),
}

impl FieldPath {
    pub fn parse(expr: &str) -> Result<Self> {
        parse::parse(expr)
    }

    /// The path addressing its own base. Only produced for `{}`.
    pub fn identity() -> Self {
        Self {
            expr: String::new(),
            segments: vec![],
        }
    }

    /// Path of a single plain field.
    pub fn field(name: &str) -> Self {
        Self {
            expr: name.to_string(),
            segments: vec![Segment {
                name: name.to_string(),
                access: Access::Field,
            }],
        }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_identity(&self) -> bool {
        self.segments.is_empty()
    }

    /// Name of the field the path starts from.
    pub fn root_name(&self) -> Option<&str> {
        self.segments.first().map(|segment| segment.name.as_str())
    }

    /// True if the path ends in a multi-occurrence segment.
    pub fn is_multi(&self) -> bool {
        matches!(
            self.segments.last(),
            Some(Segment {
                access: Access::Each(_),
                ..
            })
        )
    }

    /// Splits `a.names{fullName}` into the collection path `a.names` and the
    /// element path `fullName`.
    pub fn split_multi(&self) -> Option<(FieldPath, &FieldPath)> {
        let (last, init) = self.segments.split_last()?;

        let Access::Each(inner) = &last.access else {
            return None;
        };

        let mut segments = init.to_vec();
        segments.push(Segment {
            name: last.name.clone(),
            access: Access::Field,
        });

        let end = self.expr.rfind('{').unwrap_or(self.expr.len());

        let collection = FieldPath {
            expr: self.expr[..end].to_string(),
            segments,
        };

        Some((collection, inner))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}
