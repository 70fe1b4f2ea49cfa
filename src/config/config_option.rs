use crate::{misc::log::targets::{self}, types::err::ConfigError};

/// A configurable value, together with its name and the bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || self.max < value {
            log::error!(target: targets::CONFIG, "{} is out of bounds", self.name);
            return Err(ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, types::err::ConfigError};

    #[test]
    fn bounds() {
        let mut config = Config::default();

        assert_eq!(config.term_limit.set(0), Err(ConfigError::OutOfBounds("term_limit")));
        assert_eq!(config.term_limit.value, config.term_limit.max);

        assert_eq!(config.term_limit.set(1024), Ok(()));
        assert_eq!(config.term_limit.value, 1024);
    }
}
