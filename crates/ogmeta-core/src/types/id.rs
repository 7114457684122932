//! Newtype wrappers around the host's numeric row identifiers.
//!
//! Forum software hands out small unsigned integer ids for forums,
//! threads, posts, users and attachments. Distinct types prevent passing
//! a `ThreadId` where a `PostId` is expected. Every id type is `Ord`, so
//! collections keyed by id iterate in ascending id order.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u32`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from a raw row id.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the raw row id.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u32>().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a forum (a sub-forum listing).
    ForumId
);

define_id!(
    /// Identifier of a thread.
    ThreadId
);

define_id!(
    /// Identifier of a single post.
    PostId
);

define_id!(
    /// Identifier of a registered member.
    UserId
);

define_id!(
    /// Identifier of a post attachment.
    AttachmentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_number() {
        assert_eq!(ForumId::new(42).to_string(), "42");
    }

    #[test]
    fn test_from_str_trims() {
        let id: PostId = " 17 ".parse().expect("should parse");
        assert_eq!(id, PostId(17));
        assert!("abc".parse::<PostId>().is_err());
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![PostId(9), PostId(2), PostId(5)];
        ids.sort();
        assert_eq!(ids, vec![PostId(2), PostId(5), PostId(9)]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ThreadId(7)).expect("serialize");
        assert_eq!(json, "7");
        let parsed: ThreadId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(parsed, ThreadId(7));
    }
}
