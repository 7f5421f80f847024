use consts::DEFAULT_ENTRY_RATIO;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Intersection ratio at or above which a video resumes and fades in
    pub entry_ratio: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            entry_ratio: DEFAULT_ENTRY_RATIO,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// `None` or a blank string yields the defaults
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, WidgetError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(self) -> Result<Self, WidgetError> {
        // a zero entry ratio would make "entered" and "fully hidden" indistinguishable
        if !(self.entry_ratio > 0.0 && self.entry_ratio <= 1.0) {
            return Err(WidgetError::InvalidConfig(format!(
                "entry ratio must be in (0, 1], got {}",
                self.entry_ratio
            )));
        }
        Ok(self)
    }
}
