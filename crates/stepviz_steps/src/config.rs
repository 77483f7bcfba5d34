use crate::error::InputError;
use crate::generators::factorial::MAX_FACTORIAL_INPUT;

/// Input limits and playback tuning applied by [`crate::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub max_array_len: usize,
    pub max_string_len: usize,
    pub max_graph_nodes: usize,
    pub max_amount: u32,
    pub max_factorial_input: u32,
    /// Largest magnitude accepted for any integer element or target.
    pub max_abs_value: i64,
    /// Playback speed multiplier applied to every step's timing hint.
    pub speed: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_array_len: 20,
            max_string_len: 32,
            max_graph_nodes: 12,
            max_amount: 50,
            max_factorial_input: MAX_FACTORIAL_INPUT,
            max_abs_value: 1_000_000,
            speed: 1.0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(InputError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    pub(crate) fn check_len(&self, what: &'static str, len: usize) -> Result<(), InputError> {
        self.check_len_max(what, len, self.max_array_len)
    }

    pub(crate) fn check_text(&self, what: &'static str, text: &str) -> Result<(), InputError> {
        self.check_len_max(what, text.chars().count(), self.max_string_len)
    }

    pub(crate) fn check_values(
        &self,
        what: &'static str,
        values: impl IntoIterator<Item = i64>,
    ) -> Result<(), InputError> {
        let max = self.max_abs_value;
        match values.into_iter().find(|v| v.unsigned_abs() > max.unsigned_abs()) {
            Some(value) => Err(InputError::ValueOutOfRange { what, value, max }),
            None => Ok(()),
        }
    }

    fn check_len_max(&self, what: &'static str, len: usize, max: usize) -> Result<(), InputError> {
        if len > max {
            return Err(InputError::TooLong { what, len, max });
        }
        Ok(())
    }
}
