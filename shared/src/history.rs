use std::collections::VecDeque;

use chrono::{DateTime, Duration, NaiveDateTime};

use crate::constants::HISTORY_LIMIT;
use crate::shared_roulette_game::SpinResult;

/// Hours subtracted from every server timestamp before display.
///
/// FIXME: fragile. This assumes the server clock runs exactly five hours
/// ahead of the player and ignores real timezones and DST. It is kept because
/// the deployed backend relies on it; a proper fix needs the server to send an
/// offset.
pub const HISTORY_CLOCK_SKEW_HOURS: i64 = 5;

/// Parses the server's timestamp. Offset-less ISO-8601 is the normal case,
/// RFC 3339 is accepted too and reduced to its wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// `HH:MM:SS` after the clock skew correction. Unparsable input is shown as is.
pub fn display_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(time) => (time - Duration::hours(HISTORY_CLOCK_SKEW_HOURS))
            .format("%H:%M:%S")
            .to_string(),
        None => {
            log::warn!("Unparsable spin timestamp {:?}", raw);
            raw.to_string()
        }
    }
}

/// Text and style for the "last result" box.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    pub text: String,
    pub css_class: &'static str,
}

impl From<&SpinResult> for ResultDisplay {
    fn from(result: &SpinResult) -> Self {
        Self {
            text: format!(
                "{} - {}",
                result.outcome.value(),
                result.color.wire_name().to_uppercase()
            ),
            css_class: result.color.css_class(),
        }
    }
}

/// One rendered line of the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub spin_number: u64,
    pub label: String,
    pub css_class: String,
    pub time: String,
}

impl From<&SpinResult> for HistoryRow {
    fn from(result: &SpinResult) -> Self {
        Self {
            spin_number: result.spin_number,
            label: format!("{} - {}", result.outcome.value(), result.color.wire_name()),
            css_class: format!("color-{}", result.color.css_class()),
            time: display_time(&result.timestamp),
        }
    }
}

/// Newest-first cache of what the history table shows. The server keeps
/// the real history.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    rows: VecDeque<HistoryRow>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self {
            rows: VecDeque::with_capacity(HISTORY_LIMIT + 1),
        }
    }

    pub fn push(&mut self, result: &SpinResult) {
        self.rows.push_front(HistoryRow::from(result));
        self.rows.truncate(HISTORY_LIMIT);
    }

    /// Replaces the view with a server history given oldest first.
    pub fn replace(&mut self, history: &[SpinResult]) {
        self.rows.clear();
        let start = history.len().saturating_sub(HISTORY_LIMIT);
        for result in &history[start..] {
            self.push(result);
        }
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        self.rows.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
