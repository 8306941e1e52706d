//! Identifiers for SkillStack entities.
//!
//! The backend keys every record with an integer primary key, so each
//! identifier is a thin newtype over `u64` that serializes transparently.

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw primary key.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// The raw primary key.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseIdError {
                        kind: stringify!($name),
                        input: s.to_string(),
                    })
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Unique identifier for a Skill
    SkillId
);
numeric_id!(
    /// Unique identifier for a Resource
    ResourceId
);
numeric_id!(
    /// Unique identifier for a Progress record
    ProgressId
);
numeric_id!(
    /// Unique identifier for a Category
    CategoryId
);
numeric_id!(
    /// Unique identifier for a Certification
    CertificationId
);
numeric_id!(
    /// Unique identifier for a User
    UserId
);

/// Error returned when an identifier cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {input:?}")]
pub struct ParseIdError {
    kind: &'static str,
    input: String,
}
