//! Strongly typed string keys.
//!
//! People are keyed by their SSN ("codice fiscale") and hubs by their name.
//! Both are plain strings on the wire, but keeping them as distinct types
//! stops a hub name from being passed where a person id is expected.  Both
//! are `Ord` so they can key `BTreeMap`s; the registry relies on that order
//! for deterministic iteration.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed key wrapper around an owned `String`.
macro_rules! typed_key {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
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
    };
}

typed_key! {
    /// Identity of a registered person (their SSN).
    pub struct PersonId;
}

typed_key! {
    /// Unique name of a vaccination hub.
    pub struct HubId;
}
