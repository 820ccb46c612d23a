use crate::{context::ContextState, types::err::ConfigError};

/// A configuration option, bounded by `min` and `max` and revisable until a context is in `max_state`.
#[derive(Clone)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the option to `value`, if `value` is within bounds and `state` does not follow the max state of the option.
    pub fn set(&mut self, value: T, state: &ContextState) -> Result<(), ConfigError> {
        if *state > self.max_state {
            return Err(ConfigError::InvalidState(self.name));
        }

        let (min, max) = self.min_max();
        if value < min || max < value {
            return Err(ConfigError::OutOfRange(self.name));
        }

        self.value = value;
        Ok(())
    }
}
