use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit names used when rendering a [`ReadTime`]. The singular form is used
/// for a value of exactly 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub minute: String,
    pub minutes: String,
    pub second: String,
    pub seconds: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            minute: "min".to_string(),
            minutes: "min".to_string(),
            second: "sec".to_string(),
            seconds: "sec".to_string(),
        }
    }
}

impl Labels {
    fn minutes_for(&self, value: u64) -> &str {
        if value == 1 {
            &self.minute
        } else {
            &self.minutes
        }
    }

    fn seconds_for(&self, value: u64) -> &str {
        if value == 1 {
            &self.second
        } else {
            &self.seconds
        }
    }
}

/// Estimated reading time. Built once per computation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "ReadTimeSummary")]
pub struct ReadTime {
    total_seconds: u64,
    show_seconds: bool,
}

impl ReadTime {
    pub fn new(total_seconds: u64, show_seconds: bool) -> Self {
        Self {
            total_seconds,
            show_seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn show_seconds(&self) -> bool {
        self.show_seconds
    }

    pub fn hours(&self) -> u64 {
        self.total_seconds / 3600
    }

    pub fn minutes(&self) -> u64 {
        self.total_seconds / 60
    }

    pub fn remainder_seconds(&self) -> u64 {
        self.total_seconds % 60
    }

    /// Minutes shown when seconds are hidden: any remainder rounds up.
    pub fn rounded_minutes(&self) -> u64 {
        if self.remainder_seconds() > 0 {
            self.minutes() + 1
        } else {
            self.minutes()
        }
    }

    pub fn as_std(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.total_seconds)
    }

    pub fn format(&self) -> String {
        self.format_with(&Labels::default())
    }

    pub fn format_with(&self, labels: &Labels) -> String {
        if !self.show_seconds {
            let minutes = self.rounded_minutes();
            return format!("{} {}", minutes, labels.minutes_for(minutes));
        }

        let minutes = self.minutes();
        let seconds = self.remainder_seconds();

        match (minutes, seconds) {
            (0, s) => format!("{} {}", s, labels.seconds_for(s)),
            (m, 0) => format!("{} {}", m, labels.minutes_for(m)),
            (m, s) => format!(
                "{} {} {} {}",
                m,
                labels.minutes_for(m),
                s,
                labels.seconds_for(s)
            ),
        }
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[derive(Debug, Serialize)]
struct ReadTimeSummary {
    seconds: u64,
    minutes: u64,
    remainder_seconds: u64,
    show_seconds: bool,
    text: String,
}

impl From<ReadTime> for ReadTimeSummary {
    fn from(read_time: ReadTime) -> Self {
        Self {
            seconds: read_time.total_seconds(),
            minutes: read_time.minutes(),
            remainder_seconds: read_time.remainder_seconds(),
            show_seconds: read_time.show_seconds(),
            text: read_time.format(),
        }
    }
}
