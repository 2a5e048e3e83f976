//! Milestone calendar configuration.

use serde::{Deserialize, Serialize};

const fn default_window_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Days ahead of today that `settle calendar` shows by default.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}
