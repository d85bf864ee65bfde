//! String-keyed identifiers for states and events.
//!
//! Both identifiers are thin newtypes over `String`. They serialize as plain
//! strings and borrow as `str`, so map lookups can be done with `&str` keys.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// Name of a configured state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateId;
    ///
    /// let idle = StateId::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert_eq!(idle.to_string(), "idle");
    /// ```
    StateId
}

string_id! {
    /// Name of an event that may trigger a transition.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn ids_compare_against_str() {
        let state = StateId::new("running");
        assert_eq!(state, "running");
        assert_eq!(state.as_str(), "running");
        assert_ne!(state, "paused");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let event = EventId::from("start");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "\"start\"");

        let parsed: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn map_lookup_by_str_key() {
        let mut targets: HashMap<EventId, StateId> = HashMap::new();
        targets.insert("stop".into(), "idle".into());

        assert_eq!(targets.get("stop"), Some(&StateId::from("idle")));
        assert!(targets.get("pause").is_none());
    }
}
