//! Macros for declaring timer states.

/// Declare an enum and implement `State` for it.
///
/// Each variant's name doubles as its state name. An optional
/// `names: [Variant => "label", ...]` clause overrides individual names.
///
/// # Example
///
/// ```
/// use state_timer::core::State;
/// use state_timer::state_enum;
///
/// state_enum! {
///     pub enum Activity {
///         Active,
///         Idle,
///     }
///     names: [Active => "active", Idle => "idle"]
/// }
///
/// assert_eq!(Activity::Active.name(), "active");
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

        $(names: [$($named:ident => $label:literal),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            #[allow(unreachable_patterns)]
            fn name(&self) -> &str {
                match self {
                    $($(Self::$named => $label,)*)?
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Active,
            Idle,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Active.name(), "Active");
        assert_eq!(TestState::Idle.name(), "Idle");
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
        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_overrides_names() {
        state_enum! {
            enum Labelled {
                Active,
                Idle,
                Closing,
            }
            names: [Active => "active", Idle => "idle"]
        }

        assert_eq!(Labelled::Active.name(), "active");
        assert_eq!(Labelled::Idle.name(), "idle");
        assert_eq!(Labelled::Closing.name(), "Closing");
    }

    #[test]
    fn state_enum_serializes_variant_names() {
        let json = serde_json::to_string(&TestState::Idle).unwrap();
        assert_eq!(json, "\"Idle\"");
    }
}
