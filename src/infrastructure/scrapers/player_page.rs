use crate::error::Result;
use crate::infrastructure::extract::{extract_fields, FieldKind, FieldMap, FieldSpec};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Per-game box-score cells, keyed by the site's `data-stat` attributes.
const PER_GAME_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "minutes_per_game",
        selector: "td[data-stat='mp_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "points_per_game",
        selector: "td[data-stat='pts_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "assists_per_game",
        selector: "td[data-stat='ast_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "rebounds_per_game",
        selector: "td[data-stat='trb_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "blocks_per_game",
        selector: "td[data-stat='blk_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "steals_per_game",
        selector: "td[data-stat='stl_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "fouls_per_game",
        selector: "td[data-stat='pf_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "turnovers_per_game",
        selector: "td[data-stat='tov_per_g']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "games_started",
        selector: "td[data-stat='games_started']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "team",
        selector: "td[data-stat='team_name_abbr']",
        kind: FieldKind::Text,
    },
];

/// Advanced efficiency cells. `ts_pct` arrives as a 0–1 fraction, `usg_pct`
/// as a 0–100 percentage; both are kept as the site prints them.
const ADVANCED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "true_shooting_percentage",
        selector: "td[data-stat='ts_pct']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "usage_rate",
        selector: "td[data-stat='usg_pct']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "win_share",
        selector: "td[data-stat='ws']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "box_plus_minus",
        selector: "td[data-stat='bpm']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "value_over_replacement",
        selector: "td[data-stat='vorp']",
        kind: FieldKind::Numeric,
    },
];

static TABLE_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("table tbody tr").unwrap());

/// Finds the season's stat rows on a player profile page. The site keys each
/// season row with an element id like `per_game_stats.2026` / `advanced.2026`.
pub struct PlayerPageScraper {
    per_game_row_id: String,
    advanced_row_id: String,
}

impl PlayerPageScraper {
    pub fn new(season: u16) -> Self {
        Self {
            per_game_row_id: format!("per_game_stats.{season}"),
            advanced_row_id: format!("advanced.{season}"),
        }
    }

    fn season_row<'a>(&self, document: &'a Html, row_id: &str) -> Option<ElementRef<'a>> {
        document
            .select(&TABLE_ROWS)
            .find(|row| row.value().id() == Some(row_id))
    }

    /// Per-game stats for the season, or `None` when the player has no
    /// per-game row (the caller records a warning and the fields stay null).
    pub fn per_game_stats(&self, document: &Html) -> Result<Option<FieldMap>> {
        match self.season_row(document, &self.per_game_row_id) {
            Some(row) => Ok(Some(extract_fields(row, PER_GAME_FIELDS)?)),
            None => Ok(None),
        }
    }

    /// Advanced stats for the season, same missing-row policy as per-game.
    pub fn advanced_stats(&self, document: &Html) -> Result<Option<FieldMap>> {
        match self.season_row(document, &self.advanced_row_id) {
            Some(row) => Ok(Some(extract_fields(row, ADVANCED_FIELDS)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_PAGE: &str = r#"
        <table id="per_game_stats"><tbody>
          <tr id="per_game_stats.2025">
            <td data-stat="mp_per_g">31.0</td>
            <td data-stat="team_name_abbr">DAL</td>
          </tr>
          <tr id="per_game_stats.2026">
            <td data-stat="mp_per_g">36.2</td>
            <td data-stat="pts_per_g">33.4</td>
            <td data-stat="ast_per_g">9.1</td>
            <td data-stat="trb_per_g">9.0</td>
            <td data-stat="blk_per_g">0.5</td>
            <td data-stat="stl_per_g">1.4</td>
            <td data-stat="pf_per_g">2.5</td>
            <td data-stat="tov_per_g">4.0</td>
            <td data-stat="games_started">52</td>
            <td data-stat="team_name_abbr">LAL</td>
          </tr>
        </tbody></table>
        <table id="advanced"><tbody>
          <tr id="advanced.2026">
            <td data-stat="ts_pct">.618</td>
            <td data-stat="usg_pct">36.0</td>
            <td data-stat="ws">8.4</td>
            <td data-stat="bpm">7.9</td>
            <td data-stat="vorp">5.2</td>
          </tr>
        </tbody></table>
    "#;

    #[test]
    fn finds_the_requested_season_row() {
        let document = Html::parse_document(PROFILE_PAGE);
        let fields = PlayerPageScraper::new(2026)
            .per_game_stats(&document)
            .unwrap()
            .unwrap();

        assert_eq!(fields.number("minutes_per_game"), Some(36.2));
        assert_eq!(fields.number("games_started"), Some(52.0));
        assert_eq!(fields.text("team"), Some("LAL".to_string()));
    }

    #[test]
    fn earlier_season_rows_do_not_shadow_the_target() {
        let document = Html::parse_document(PROFILE_PAGE);
        let fields = PlayerPageScraper::new(2025)
            .per_game_stats(&document)
            .unwrap()
            .unwrap();

        assert_eq!(fields.number("minutes_per_game"), Some(31.0));
        assert_eq!(fields.text("team"), Some("DAL".to_string()));
    }

    #[test]
    fn extracts_advanced_row() {
        let document = Html::parse_document(PROFILE_PAGE);
        let fields = PlayerPageScraper::new(2026)
            .advanced_stats(&document)
            .unwrap()
            .unwrap();

        assert_eq!(fields.number("true_shooting_percentage"), Some(0.618));
        assert_eq!(fields.number("usage_rate"), Some(36.0));
        assert_eq!(fields.number("value_over_replacement"), Some(5.2));
    }

    #[test]
    fn missing_season_row_is_none() {
        let document = Html::parse_document(PROFILE_PAGE);
        let scraper = PlayerPageScraper::new(1998);

        assert!(scraper.per_game_stats(&document).unwrap().is_none());
        assert!(scraper.advanced_stats(&document).unwrap().is_none());
    }
}
