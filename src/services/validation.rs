use crate::domain::{PlayerRecord, RawPlayerRecord};
use reqwest::Url;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    NotFinite,
    OutOfRange,
    NotAbsoluteUrl,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::Missing => "missing",
            Violation::NotFinite => "not a finite number",
            Violation::OutOfRange => "out of range",
            Violation::NotAbsoluteUrl => "not an absolute url",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

/// Every violated field for one record, so a single log line carries the
/// complete diagnostic instead of just the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub player: String,
    pub violations: Vec<FieldViolation>,
}

#[cfg(test)]
impl ValidationError {
    fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for {}: ", self.player)?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", v.field, v.violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn numeric(violations: &mut Vec<FieldViolation>, field: &'static str, value: Option<f64>) -> f64 {
    match value {
        None => {
            violations.push(FieldViolation {
                field,
                violation: Violation::Missing,
            });
            f64::NAN
        }
        Some(v) if !v.is_finite() => {
            violations.push(FieldViolation {
                field,
                violation: Violation::NotFinite,
            });
            f64::NAN
        }
        Some(v) => v,
    }
}

fn bounded(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> f64 {
    let v = numeric(violations, field, value);
    if v.is_finite() && !(min..=max).contains(&v) {
        violations.push(FieldViolation {
            field,
            violation: Violation::OutOfRange,
        });
    }
    v
}

fn non_negative(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: Option<f64>,
) -> f64 {
    bounded(violations, field, value, 0.0, f64::MAX)
}

/// The single gate between scraped and scoreable data: every declared field
/// must be present and finite, the profile reference a well-formed absolute
/// URL. Violations are collected across all fields before the verdict.
pub fn validate(raw: &RawPlayerRecord) -> Result<PlayerRecord, ValidationError> {
    let mut violations = Vec::new();

    if raw.name.trim().is_empty() {
        violations.push(FieldViolation {
            field: "name",
            violation: Violation::Missing,
        });
    }

    if Url::parse(&raw.profile_url).is_err() {
        violations.push(FieldViolation {
            field: "profileUrl",
            violation: Violation::NotAbsoluteUrl,
        });
    }

    if raw.team.as_deref().map_or(true, |t| t.trim().is_empty()) {
        violations.push(FieldViolation {
            field: "team",
            violation: Violation::Missing,
        });
    }

    let team_wins = non_negative(&mut violations, "teamWins", raw.team_wins);
    let team_games_played = non_negative(&mut violations, "teamGamesPlayed", raw.team_games_played);
    let games_started = non_negative(&mut violations, "gamesStarted", raw.games_started);
    let minutes_per_game = non_negative(&mut violations, "minutesPerGame", raw.minutes_per_game);
    let points_per_game = non_negative(&mut violations, "pointsPerGame", raw.points_per_game);
    let assists_per_game = non_negative(&mut violations, "assistsPerGame", raw.assists_per_game);
    let rebounds_per_game = non_negative(&mut violations, "reboundsPerGame", raw.rebounds_per_game);
    let blocks_per_game = non_negative(&mut violations, "blocksPerGame", raw.blocks_per_game);
    let steals_per_game = non_negative(&mut violations, "stealsPerGame", raw.steals_per_game);
    let fouls_per_game = non_negative(&mut violations, "foulsPerGame", raw.fouls_per_game);
    let turnovers_per_game =
        non_negative(&mut violations, "turnoversPerGame", raw.turnovers_per_game);
    let usage_rate = bounded(&mut violations, "usageRate", raw.usage_rate, 0.0, 100.0);
    let value_over_replacement = numeric(
        &mut violations,
        "valueOverReplacement",
        raw.value_over_replacement,
    );
    let win_share = numeric(&mut violations, "winShare", raw.win_share);
    let box_plus_minus = numeric(&mut violations, "boxPlusMinus", raw.box_plus_minus);
    let true_shooting_percentage = bounded(
        &mut violations,
        "trueShootingPercentage",
        raw.true_shooting_percentage,
        0.0,
        1.0,
    );

    if !violations.is_empty() {
        return Err(ValidationError {
            player: raw.name.clone(),
            violations,
        });
    }

    Ok(PlayerRecord {
        name: raw.name.clone(),
        profile_url: raw.profile_url.clone(),
        team: raw.team.clone().unwrap_or_default(),
        team_wins: team_wins as u32,
        team_games_played: team_games_played as u32,
        games_started,
        minutes_per_game,
        points_per_game,
        assists_per_game,
        rebounds_per_game,
        blocks_per_game,
        steals_per_game,
        fouls_per_game,
        turnovers_per_game,
        usage_rate,
        value_over_replacement,
        win_share,
        box_plus_minus,
        true_shooting_percentage,
    })
}
