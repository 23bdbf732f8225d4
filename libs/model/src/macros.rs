//! Macro for defining validated name types.

/// Macro to define a validated name newtype.
///
/// This generates a string wrapper with:
/// - `parse()` that trims the input and rejects empty, over-long, and
///   control-character names
/// - `as_str()` access to the canonical form
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` as a plain string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_name!(MemberName);
/// define_name!(AreaName);
///
/// let member: MemberName = "  Alice ".parse()?; // canonical form "Alice"
/// ```
#[macro_export]
macro_rules! define_name {
    ($name:ident) => {
        /// A validated, canonical name.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum name length in bytes.
            pub const MAX_LEN: usize = 100;

            /// Parses and canonicalizes a name.
            ///
            /// Leading and trailing whitespace is trimmed; the trimmed
            /// form is the canonical identity.
            pub fn parse(s: &str) -> Result<Self, $crate::NameError> {
                let trimmed = s.trim();

                if trimmed.is_empty() {
                    return Err($crate::NameError::Empty);
                }

                if trimmed.len() > Self::MAX_LEN {
                    return Err($crate::NameError::TooLong {
                        max: Self::MAX_LEN,
                        actual: trimmed.len(),
                    });
                }

                if trimmed.chars().any(char::is_control) {
                    return Err($crate::NameError::ControlCharacter);
                }

                Ok(Self(trimmed.to_string()))
            }

            /// Returns the canonical name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
