//! Closed string enums with a fixed wire form
//!
//! `wire_enum!` generates `as_str`, `display_name`, `all`, `FromStr`,
//! `Display` and serde impls that go through the wire string. Parsing an
//! unknown string is always an error.

#[macro_export]
macro_rules! wire_enum {
    // Closed value enum (status, category, ...)
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $crate::wire_enum!(@impl
            [$(#[$meta])*] $vis $name
            (|value: &str| $crate::shared::list_view::ListViewError::unknown_value($kind, value))
            { $( [$(#[$vmeta])*] $variant => $wire, $label; )+ }
        );
    };

    // Facet / sort key enum with its own error variant
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident [$err:path] {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $crate::wire_enum!(@impl
            [$(#[$meta])*] $vis $name
            (|value: &str| $err(value.to_string()))
            { $( [$(#[$vmeta])*] $variant => $wire, $label; )+ }
        );
    };

    (@impl
        [$(#[$meta:meta])*] $vis:vis $name:ident ($err_fn:expr)
        { $( [$(#[$vmeta:meta])*] $variant:ident => $wire:literal, $label:literal; )+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// All variants in declaration order
            pub fn all() -> &'static [$name] {
                Self::VARIANTS
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::shared::list_view::ListViewError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(($err_fn)(other)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::shared::list_view::ListViewError;

    crate::wire_enum! {
        enum Shade ("shade") {
            Light => "light", "Light";
            DarkGrey => "dark-grey", "Dark grey";
        }
    }

    crate::wire_enum! {
        enum ShadeFacet [ListViewError::UnknownFacet] {
            Tone => "tone", "Tone";
        }
    }

    #[test]
    fn test_wire_round_trip() {
        assert_eq!("dark-grey".parse::<Shade>(), Ok(Shade::DarkGrey));
        assert_eq!(Shade::DarkGrey.as_str(), "dark-grey");
        assert_eq!(Shade::DarkGrey.display_name(), "Dark grey");
        assert_eq!(Shade::all(), &[Shade::Light, Shade::DarkGrey]);
        assert_eq!(serde_json::to_string(&Shade::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert_eq!(
            "Light".parse::<Shade>(),
            Err(ListViewError::unknown_value("shade", "Light"))
        );
        assert_eq!(
            "hue".parse::<ShadeFacet>(),
            Err(ListViewError::UnknownFacet("hue".into()))
        );
        assert!(serde_json::from_str::<Shade>("\"purple\"").is_err());
    }
}
