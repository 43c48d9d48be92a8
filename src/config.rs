use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::layout::LayoutConfig;

const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
const DEFAULT_MESSAGE_DURATION_MS: u64 = 3000;

/// Host-supplied settings. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub layout: LayoutConfig,
    /// Pause between the human's move and the computer's reply.
    pub reply_delay_ms: u64,
    /// How long an outcome message stays on screen.
    pub message_duration_ms: u64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            message_duration_ms: DEFAULT_MESSAGE_DURATION_MS,
            log_level: "info".to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), String> {
        let layout = &self.layout;
        let geometry = [
            ("width", layout.width),
            ("height", layout.height),
            ("token_radius", layout.token_radius),
            ("row_spacing", layout.row_spacing),
            ("token_spacing", layout.token_spacing),
        ];
        for (name, value) in geometry {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("layout.{name} must be a positive number, got {value}"));
            }
        }
        if !layout.top_offset.is_finite() {
            return Err("layout.top_offset must be finite".to_string());
        }

        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("unknown log level: {}", self.log_level))
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn message_duration(&self) -> Duration {
        Duration::from_millis(self.message_duration_ms)
    }
}
