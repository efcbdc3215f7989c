use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ApiError;

/// Slot value the backend lands on. The integer is what travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum Outcome {
    Blue = 1,
    Purple = 2,
    Yellow = 3,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Blue, Outcome::Purple, Outcome::Yellow];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn color(self) -> Color {
        match self {
            Outcome::Blue => Color::Blue,
            Outcome::Purple => Color::Purple,
            Outcome::Yellow => Color::Yellow,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Outcome::Blue),
            2 => Ok(Outcome::Purple),
            3 => Ok(Outcome::Yellow),
            other => Err(format!("unknown roulette outcome {}", other)),
        }
    }
}

/// Wheel colors. The backend names them in Spanish; styling uses English class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Color {
    #[serde(rename = "azul")]
    Blue,
    #[serde(rename = "morado")]
    Purple,
    #[serde(rename = "amarillo")]
    Yellow,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Blue, Color::Purple, Color::Yellow];

    pub fn wire_name(self) -> &'static str {
        match self {
            Color::Blue => "azul",
            Color::Purple => "morado",
            Color::Yellow => "amarillo",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
        }
    }
}

/// One authoritative spin, as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpinResult {
    pub spin_number: u64,
    #[serde(rename = "result")]
    pub outcome: Outcome,
    pub color: Color,
    /// ISO-8601 local time of the server, usually without an offset.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ColorCounts {
    #[serde(default, rename = "azul")]
    pub blue: u64,
    #[serde(default, rename = "morado")]
    pub purple: u64,
    #[serde(default, rename = "amarillo")]
    pub yellow: u64,
}

impl ColorCounts {
    pub fn get(&self, color: Color) -> u64 {
        match color {
            Color::Blue => self.blue,
            Color::Purple => self.purple,
            Color::Yellow => self.yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ColorPercentages {
    #[serde(default, rename = "azul")]
    pub blue: f64,
    #[serde(default, rename = "morado")]
    pub purple: f64,
    #[serde(default, rename = "amarillo")]
    pub yellow: f64,
}

impl ColorPercentages {
    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::Blue => self.blue,
            Color::Purple => self.purple,
            Color::Yellow => self.yellow,
        }
    }
}

/// Snapshot recomputed by the server on every call. An empty game only
/// carries `total_spins` and an empty `color_counts`, hence the defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_spins: u64,
    #[serde(default)]
    pub results_shown: u64,
    #[serde(default)]
    pub color_counts: ColorCounts,
    #[serde(default)]
    pub percentages: ColorPercentages,
    #[serde(default)]
    pub spins_since_last_purple: u64,
    #[serde(default)]
    pub spins_since_last_yellow: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorOdds {
    pub outcome: Outcome,
    pub color: Color,
    pub probability: f64,
}

// === API Types ===

#[derive(Debug, Clone, PartialEq)]
pub struct SpinReply {
    pub result: SpinResult,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    /// Oldest first, exactly as the server keeps it.
    pub history: Vec<SpinResult>,
    pub statistics: Statistics,
}

#[derive(Debug, Deserialize)]
pub struct SpinResponse {
    pub success: bool,
    pub result: Option<SpinResult>,
    pub statistics: Option<Statistics>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Option<Vec<SpinResult>>,
    pub statistics: Option<Statistics>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: Option<Statistics>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ColorInfo {
    pub name: Color,
    pub probability: f64,
}

#[derive(Debug, Deserialize)]
pub struct ColorsResponse {
    pub success: bool,
    pub colors: Option<BTreeMap<String, ColorInfo>>,
    pub error: Option<String>,
}

fn accepted(success: bool, error: Option<String>) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Rejected(error))
    }
}

impl SpinResponse {
    pub fn into_reply(self) -> Result<SpinReply, ApiError> {
        accepted(self.success, self.error)?;
        Ok(SpinReply {
            result: self.result.ok_or(ApiError::MissingField("result"))?,
            statistics: self.statistics.ok_or(ApiError::MissingField("statistics"))?,
        })
    }
}

impl HistoryResponse {
    pub fn into_snapshot(self) -> Result<HistorySnapshot, ApiError> {
        accepted(self.success, self.error)?;
        Ok(HistorySnapshot {
            history: self.history.ok_or(ApiError::MissingField("history"))?,
            statistics: self.statistics.ok_or(ApiError::MissingField("statistics"))?,
        })
    }
}

impl ResetResponse {
    pub fn into_result(self) -> Result<(), ApiError> {
        accepted(self.success, self.error)?;
        if let Some(message) = self.message {
            log::info!("{}", message);
        }
        Ok(())
    }
}

impl StatisticsResponse {
    pub fn into_statistics(self) -> Result<Statistics, ApiError> {
        accepted(self.success, self.error)?;
        self.statistics.ok_or(ApiError::MissingField("statistics"))
    }
}

impl ColorsResponse {
    /// Odds table keyed by outcome, ordered blue, purple, yellow.
    pub fn into_odds(self) -> Result<Vec<ColorOdds>, ApiError> {
        accepted(self.success, self.error)?;
        let colors = self.colors.ok_or(ApiError::MissingField("colors"))?;

        let mut odds = colors
            .into_iter()
            .map(|(key, info)| -> Result<ColorOdds, ApiError> {
                let outcome = key
                    .parse::<u8>()
                    .map_err(|e| ApiError::Decode(format!("color key {:?}: {}", key, e)))
                    .and_then(|value| Outcome::try_from(value).map_err(ApiError::Decode))?;
                Ok(ColorOdds {
                    outcome,
                    color: info.name,
                    probability: info.probability,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;
        odds.sort_by_key(|entry| entry.outcome);
        Ok(odds)
    }
}
