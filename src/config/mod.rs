/*!
Configuration of a context.

All configuration for a context is contained within a [Config] struct, and each option is a [ConfigOption] which records the bounds of the option and the latest [state](ContextState) of a context in which the option may be revised.

Options may be revised by name, from a string, through [Config::set_from_str], or directly through the typed setters on a [context](crate::context::Context).
*/

mod config_option;
pub use config_option::ConfigOption;

mod schedule;
pub use schedule::RuleSchedule;

use crate::{context::ContextState, types::err::ConfigError};

/// A count of passes made during closure.
pub type PassCount = u32;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The maximum number of passes a closure may make before a fixpoint is reached.
    ///
    /// If the limit is reached, closure returns [ClosureDidNotConverge](crate::types::err::ErrorKind::ClosureDidNotConverge).
    pub pass_limit: ConfigOption<PassCount>,

    /// Record the facts matched by conditions of a rule alongside each fact derived by the rule.
    pub record_premises: ConfigOption<bool>,

    /// The order in which rules are evaluated during a pass.
    pub rule_schedule: ConfigOption<RuleSchedule>,
}

impl Default for Config {
    /// By default there is no (practical) limit on passes, premises are recorded, and rules are evaluated in order of registration.
    fn default() -> Self {
        Config {
            pass_limit: ConfigOption {
                name: "pass_limit",
                min: 1,
                max: PassCount::MAX,
                max_state: ContextState::Input,
                value: PassCount::MAX,
            },

            record_premises: ConfigOption {
                name: "record_premises",
                min: false,
                max: true,
                max_state: ContextState::Input,
                value: true,
            },

            rule_schedule: ConfigOption {
                name: "rule_schedule",
                min: RuleSchedule::MIN,
                max: RuleSchedule::MAX,
                max_state: ContextState::Input,
                value: RuleSchedule::Registration,
            },
        }
    }
}

impl Config {
    /// Sets the option named `name` to the value read from `value`, provided a context in `state` permits revision.
    ///
    /// ```rust
    /// # use catalog_closure::config::{Config, RuleSchedule};
    /// # use catalog_closure::context::ContextState;
    /// let mut config = Config::default();
    /// assert!(config.set_from_str("rule_schedule", "Dependency", &ContextState::Input).is_ok());
    /// assert_eq!(config.rule_schedule.value, RuleSchedule::Dependency);
    ///
    /// assert!(config.set_from_str("pass_limit", "0", &ContextState::Input).is_err());
    /// ```
    pub fn set_from_str(
        &mut self,
        name: &str,
        value: &str,
        state: &ContextState,
    ) -> Result<(), ConfigError> {
        match name {
            "pass_limit" => match value.parse::<PassCount>() {
                Ok(limit) => self.pass_limit.set(limit, state),
                Err(_) => Err(ConfigError::Unparsable(self.pass_limit.name)),
            },

            "record_premises" => match value.parse::<bool>() {
                Ok(record) => self.record_premises.set(record, state),
                Err(_) => Err(ConfigError::Unparsable(self.record_premises.name)),
            },

            "rule_schedule" => match value.parse::<RuleSchedule>() {
                Ok(schedule) => self.rule_schedule.set(schedule, state),
                Err(_) => Err(ConfigError::Unparsable(self.rule_schedule.name)),
            },

            _ => Err(ConfigError::UnknownOption(name.to_string())),
        }
    }
}
