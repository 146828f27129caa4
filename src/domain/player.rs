use super::CollectionDate;
use serde::{Deserialize, Serialize};

/// One row of the points-per-game leader box. Exists only to seed the
/// per-player fetch fan-out; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub profile_url: String,
    pub points_per_game: f64,
}

/// Everything scraped for one player before validation. Any stat can be
/// missing because the source page can omit a row or leave a cell empty.
#[derive(Debug, Clone, Default)]
pub struct RawPlayerRecord {
    pub name: String,
    pub profile_url: String,
    pub team: Option<String>,
    pub team_wins: Option<f64>,
    pub team_games_played: Option<f64>,
    pub games_started: Option<f64>,
    pub minutes_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub fouls_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub usage_rate: Option<f64>,
    pub value_over_replacement: Option<f64>,
    pub win_share: Option<f64>,
    pub box_plus_minus: Option<f64>,
    pub true_shooting_percentage: Option<f64>,
}

impl RawPlayerRecord {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
            ..Self::default()
        }
    }
}

/// Fully validated player statistics. Every field is present and finite;
/// a record that fails validation is never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub profile_url: String,
    pub team: String,
    pub team_wins: u32,
    pub team_games_played: u32,
    pub games_started: f64,
    pub minutes_per_game: f64,
    pub points_per_game: f64,
    pub assists_per_game: f64,
    pub rebounds_per_game: f64,
    pub blocks_per_game: f64,
    pub steals_per_game: f64,
    pub fouls_per_game: f64,
    pub turnovers_per_game: f64,
    pub usage_rate: f64,
    pub value_over_replacement: f64,
    pub win_share: f64,
    pub box_plus_minus: f64,
    pub true_shooting_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub value_score: f64,
    #[serde(rename = "date")]
    pub collection_date: CollectionDate,
}

impl ScoredPlayer {
    pub fn new(record: PlayerRecord, value_score: f64, collection_date: CollectionDate) -> Self {
        Self {
            record,
            value_score,
            collection_date,
        }
    }
}

/// The only entity written to durable storage: one document per player per
/// collection date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    #[serde(flatten)]
    pub scored: ScoredPlayer,
    pub rank: u32,
}

impl RankedPlayer {
    pub fn name(&self) -> &str {
        &self.scored.record.name
    }

    pub fn date(&self) -> CollectionDate {
        self.scored.collection_date
    }
}

#[cfg(test)]
impl PlayerRecord {
    /// A fully populated record with plausible season numbers.
    pub(crate) fn sample(name: &str) -> Self {
        Self {
            name: name.to_string(),
            profile_url: format!("https://stats.example.com/players/{name}.html"),
            team: "GSW".to_string(),
            team_wins: 50,
            team_games_played: 60,
            games_started: 58.0,
            minutes_per_game: 34.0,
            points_per_game: 28.0,
            assists_per_game: 6.0,
            rebounds_per_game: 5.0,
            blocks_per_game: 1.0,
            steals_per_game: 1.0,
            fouls_per_game: 2.0,
            turnovers_per_game: 3.0,
            usage_rate: 30.0,
            value_over_replacement: 4.0,
            win_share: 8.0,
            box_plus_minus: 6.0,
            true_shooting_percentage: 0.6,
        }
    }
}
