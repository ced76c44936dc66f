//! Session state tracked beside the course.

use serde::{Deserialize, Serialize};

/// Per-session planner state that is not part of the course itself: the day
/// new places land on, and whether the active course is a read-only shared
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// 1-based index of the day selected for toggled-on places
    #[serde(default = "default_selected_day")]
    pub selected_day: u32,

    /// Whether a shared snapshot is active (mutations are refused)
    #[serde(default)]
    pub shared: bool,
}

fn default_selected_day() -> u32 {
    1
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected_day: 1,
            shared: false,
        }
    }
}

impl Session {
    /// Clamps the selected day into the valid range after the day count
    /// changed.
    pub fn clamp_selected_day(&mut self, day_count: u32) {
        self.selected_day = self.selected_day.min(day_count).max(1);
    }
}
