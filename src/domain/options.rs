//! Closed allow-lists for the enumerated search parameters.
//!
//! Every parameter that ends up as a qualifier or query parameter in the
//! outbound request is one of these enums, so a value that reaches the query
//! string has already been checked against its table. Parsing ignores case
//! and surrounding whitespace.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Raised when a raw value matches no entry of an option table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

/// A `(value, label)` pair used to render `<select>` boxes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Macro to generate an allow-list enum with its wire value and label.
macro_rules! option_enum {
    ($name:ident, $doc:expr, { $($variant:ident => ($value:expr, $label:expr)),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the value sent to the search provider.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Returns the human readable label shown in the web form.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Lists the table as `(value, label)` pairs.
            pub fn options() -> Vec<SelectOption> {
                Self::ALL
                    .iter()
                    .map(|option| SelectOption {
                        value: option.as_str(),
                        label: option.label(),
                    })
                    .collect()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| UnknownOption(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

option_enum!(Language, "Programming languages accepted by the `language:` qualifier.", {
    Python => ("python", "Python"),
    JavaScript => ("javascript", "JavaScript"),
    Java => ("java", "Java"),
    C => ("c", "C"),
    Cpp => ("cpp", "C++"),
    Ruby => ("ruby", "Ruby"),
    Go => ("go", "Go"),
    Swift => ("swift", "Swift"),
    Rust => ("rust", "Rust"),
    TypeScript => ("typescript", "TypeScript"),
});

option_enum!(SortKey, "Fields the provider can sort search results by.", {
    Stars => ("stars", "Stars"),
    Forks => ("forks", "Forks"),
    HelpWantedIssues => ("help-wanted-issues", "Help Wanted"),
    Updated => ("updated", "Updated"),
});

option_enum!(SortOrder, "Direction of the result ordering.", {
    Desc => ("desc", "Descending"),
    Asc => ("asc", "Ascending"),
});

option_enum!(Scope, "Repository fields the name fragment is matched against (`in:` qualifier).", {
    Name => ("name", "Name"),
    Description => ("description", "Description"),
    Topics => ("topics", "Topics"),
    Readme => ("readme", "README"),
});

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Stars
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
