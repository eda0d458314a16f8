use crate::event::{ClientId, Event};
use crate::parse::ParseError;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono format of the bracketed time field, e.g. `19/Oct/2025:12:00:00 +0000`.
pub const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\S+) \S+ \S+ \[(.+?)\] "(\S+) (\S+) \S+" (\d{3}) (\d+|-)(?:\s|$)"#)
        .expect("access log pattern is valid")
});

/// Turns raw log lines into [`Event`]s for a single client.
#[derive(Debug, Clone)]
pub struct LineParser {
    client_id: ClientId,
}

impl LineParser {
    pub fn new(client_id: ClientId) -> Self {
        Self { client_id }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Parses one line.
    ///
    /// Returns `Ok(None)` for lines that are not access-log records and
    /// `Err` when the record's time field is present but unreadable.
    pub fn parse(&self, line: &str) -> Result<Option<Event>, ParseError> {
        let Some(caps) = LINE.captures(line) else {
            return Ok(None);
        };

        let size = match &caps[6] {
            "-" => 0,
            // Digits only, so this fails on overflow alone.
            digits => match digits.parse::<u64>() {
                Ok(size) => size,
                Err(_) => return Ok(None),
            },
        };

        let Ok(status) = caps[5].parse::<u16>() else {
            return Ok(None);
        };

        let time = &caps[2];
        let timestamp = DateTime::parse_from_str(time, TIME_FORMAT)
            .map_err(|e| ParseError::invalid_timestamp(time, e))?
            // The offset is dropped; wall-clock time in the record's own zone is kept.
            .naive_local();

        Ok(Some(Event::new(
            self.client_id.clone(),
            &caps[1],
            &caps[3],
            &caps[4],
            status,
            size,
            timestamp,
        )))
    }
}
