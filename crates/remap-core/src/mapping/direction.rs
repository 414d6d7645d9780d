use std::fmt;

/// Which way a single map call copies, relative to the class map's pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    AToB,
    BToA,
}

/// Directions a field mapping takes part in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingDirection {
    #[default]
    Both,
    AToB,
    BToA,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl MappingDirection {
    pub fn allows(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Self::Both, _) | (Self::AToB, Direction::AToB) | (Self::BToA, Direction::BToA)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => f.write_str("a_to_b"),
            Self::BToA => f.write_str("b_to_a"),
        }
    }
}
