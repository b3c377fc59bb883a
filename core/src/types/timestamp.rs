use chrono::{Local, NaiveDateTime};
use std::fmt;

/// A single wall-clock reading shared by every date/time attribute of a dataset
///
/// Content, Study, Series, Acquisition and InstanceCreation date/time pairs
/// are all rendered from the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedInstant(NaiveDateTime);

impl CapturedInstant {
    /// Reads the local clock once
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Wraps a fixed date and time
    pub fn at(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// DA value, `YYYYMMDD`
    pub fn date_string(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// TM value with microseconds, `HHMMSS.ffffff`
    pub fn time_string(&self) -> String {
        self.0.format("%H%M%S%.6f").to_string()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for CapturedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}
