use crate::error::Result;
use crate::infrastructure::extract::{extract_fields, FieldKind, FieldSpec};
use scraper::Html;

const TEAM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "wins",
        selector: "td[data-stat='wins']",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "losses",
        selector: "td[data-stat='losses']",
        kind: FieldKind::Numeric,
    },
];

pub struct TeamPageScraper;

impl TeamPageScraper {
    /// Season win/loss totals from the team page. Either cell can be absent;
    /// games played is only derivable when both are present.
    pub fn win_loss(&self, document: &Html) -> Result<(Option<f64>, Option<f64>)> {
        let fields = extract_fields(document.root_element(), TEAM_FIELDS)?;
        Ok((fields.number("wins"), fields.number("losses")))
    }
}
