use crate::error::ConfigError;

pub const DEFAULT_TRIGGER_CLASS: &str = "menu-icon";
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// Class names shared between the toggle and the stylesheet that
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavToggleConfig {
    trigger_class: String,
    active_class: String,
}

impl Default for NavToggleConfig {
    fn default() -> Self {
        Self {
            trigger_class: DEFAULT_TRIGGER_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl NavToggleConfig {
    pub fn new(
        trigger_class: impl Into<String>,
        active_class: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self {
            trigger_class: validate_class("trigger_class", trigger_class.into())?,
            active_class: validate_class("active_class", active_class.into())?,
        }
        .distinct()
    }

    pub fn with_trigger_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.trigger_class = validate_class("trigger_class", class.into())?;
        self.distinct()
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.active_class = validate_class("active_class", class.into())?;
        self.distinct()
    }

    pub fn trigger_class(&self) -> &str {
        &self.trigger_class
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    /// The marker must differ from the trigger class, otherwise removing it
    /// would also strip the trigger.
    fn distinct(self) -> Result<Self, ConfigError> {
        if self.trigger_class == self.active_class {
            return Err(ConfigError::SameClass(self.active_class));
        }
        Ok(self)
    }
}

/// A class must be a single non-empty token so that adding or removing it
/// touches exactly one entry of the element's class list.
fn validate_class(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyClass(field));
    }
    if value.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(ConfigError::InvalidClass { field, value });
    }
    Ok(value)
}
