//! Macros for ergonomic state declarations.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use automaton::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;
    use crate::DefinitionBuilder;

    state_enum! {
        enum Light {
            Red,
            Green,
            Yellow,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Light::Red.name(), "Red");
        assert_eq!(Light::Yellow.name(), "Yellow");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }

    #[test]
    fn enum_states_drive_a_definition() {
        let definition = DefinitionBuilder::new()
            .event("go", [Light::Red], Light::Green)
            .event("slowdown", [Light::Green], Light::Yellow)
            .event("stop", [Light::Yellow], Light::Red)
            .build()
            .unwrap();

        assert!(definition.contains_state(&Light::Green));
    }
}
