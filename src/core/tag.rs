/// Define a string-tagged enumeration which tolerates unrecognised tags.
///
/// Unrecognised tags are carried verbatim in the `Other` variant, so that they survive
/// the persistence and share-link round trips and only get resolved to a fallback
/// at the point of use.
macro_rules! tag {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $tag:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::cmp::PartialEq,
            ::std::cmp::Eq,
            ::std::hash::Hash,
            ::serde::Deserialize,
            ::serde::Serialize,
        )]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+

            /// Unrecognised tag.
            Other(String),
        }

        impl $name {
            /// Canonical tag.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(tag) => tag,
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $($tag $(| $alias)* => Self::$variant,)+
                    _ => Self::Other(tag),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(tag: &str) -> Self {
                Self::from(tag.to_owned())
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(tag: $name) -> Self {
                match tag {
                    $name::Other(tag) => tag,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(tag: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(tag))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(self.as_str())
            }
        }
    };
}
