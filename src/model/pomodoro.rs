use serde::{Deserialize, Serialize};

use crate::util::new_id;

/// Pomodoro phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PomodoroMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSettings {
    #[serde(default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default)]
    pub auto_start_breaks: bool,
    #[serde(default)]
    pub auto_start_pomodoros: bool,
}

fn default_pomodoro_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        PomodoroSettings {
            pomodoro_minutes: default_pomodoro_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            auto_start_breaks: false,
            auto_start_pomodoros: false,
        }
    }
}

impl PomodoroSettings {
    /// Phase length in seconds.
    pub fn duration_for(&self, mode: PomodoroMode) -> u32 {
        let minutes = match mode {
            PomodoroMode::Pomodoro => self.pomodoro_minutes,
            PomodoroMode::ShortBreak => self.short_break_minutes,
            PomodoroMode::LongBreak => self.long_break_minutes,
        };
        minutes * 60
    }
}

/// Timer state. The countdown itself is driven by the caller's interval
/// timer dispatching ticks; reaching zero is also detected by the caller,
/// which then requests the next mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pomodoro {
    pub mode: PomodoroMode,
    pub time_remaining: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub pomodoros_completed: u32,
    #[serde(default)]
    pub settings: PomodoroSettings,
}

impl Default for Pomodoro {
    fn default() -> Self {
        let settings = PomodoroSettings::default();
        Pomodoro {
            mode: PomodoroMode::Pomodoro,
            time_remaining: settings.duration_for(PomodoroMode::Pomodoro),
            is_active: false,
            pomodoros_completed: 0,
            settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroTask {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl PomodoroTask {
    pub fn new(text: String) -> Self {
        PomodoroTask {
            id: new_id(),
            text,
            is_completed: false,
        }
    }
}
