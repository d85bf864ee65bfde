//! Macros for ergonomic configuration literals.

/// Build a [`Configuration`](crate::config::Configuration) from a
/// declarative literal.
///
/// State and event names are identifiers and become their own string form.
/// The result is not validated; call `.validate()` if needed. Names that are
/// not valid identifiers need `ConfigBuilder` or JSON instead.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { pause => paused, stop => idle },
///         paused => { resume => running },
///     }
/// };
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::config::OrderedMap::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::config::OrderedMap::new();
            $(
                transitions.insert(
                    $crate::core::EventId::from(stringify!($event)),
                    $crate::core::StateId::from(stringify!($target)),
                );
            )*
            states.insert(
                $crate::core::StateId::from(stringify!($state)),
                $crate::config::StateDefinition::new(transitions),
            );
        )*
        $crate::config::Configuration::new(
            $crate::core::StateId::from(stringify!($initial)),
            states,
        )
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    #[test]
    fn fsm_config_macro_builds_configuration() {
        let config = fsm_config! {
            initial: red,
            states: {
                red => { next => green },
                green => { next => yellow },
                yellow => { next => red },
            }
        };

        assert_eq!(config.initial(), "red");
        let order: Vec<&str> = config.state_ids().map(StateId::as_str).collect();
        assert_eq!(order, vec!["red", "green", "yellow"]);
        assert_eq!(
            config.definition("yellow").and_then(|d| d.target("next")),
            Some(&StateId::from("red"))
        );
    }

    #[test]
    fn fsm_config_supports_empty_states() {
        let config = fsm_config! {
            initial: done,
            states: {
                done => {},
            }
        };

        assert_eq!(config.definition("done").map(|d| d.events().count()), Some(0));
    }

    #[test]
    fn fsm_config_without_trailing_commas() {
        let config = fsm_config! {
            initial: a,
            states: {
                a => { go => b },
                b => { back => a }
            }
        };

        assert!(config.validate().is_success());
    }
}
