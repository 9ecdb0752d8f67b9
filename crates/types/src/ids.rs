//! String newtypes for the identifiers that leave the painter: the names of
//! document destinations and the targets of link annotations.

use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Name of a document destination a link can jump to.
    AnchorId
);

string_id!(
    /// A resolved link target: either an absolute URL or `#name` for an
    /// in-document destination.
    Href
);

impl Href {
    /// The destination name when this link points inside the document.
    pub fn internal_target(&self) -> Option<&str> {
        self.0.strip_prefix('#').filter(|name| !name.is_empty())
    }
}
