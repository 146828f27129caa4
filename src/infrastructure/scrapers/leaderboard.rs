use crate::domain::Candidate;
use crate::error::{MvpError, Result};
use once_cell::sync::Lazy;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::debug;

static LEADER_BOX: Lazy<Selector> = Lazy::new(|| Selector::parse("#leaders_pts_per_g").unwrap());
static LEADER_ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.columns tbody tr").unwrap());
static PLAYER_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("td.who a").unwrap());
static VALUE_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td.value").unwrap());

pub struct LeaderboardScraper {
    base_url: Url,
}

impl LeaderboardScraper {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MvpError::Discovery(format!("bad base url {base_url}: {e}")))?;

        Ok(Self { base_url })
    }

    /// The ranked candidate list from the points-per-game leader box, in page
    /// display order. A missing box is a discovery failure; a present box
    /// with no usable rows is an empty candidate list.
    pub fn extract_candidates(&self, document: &Html) -> Result<Vec<Candidate>> {
        let container = document.select(&LEADER_BOX).next().ok_or_else(|| {
            MvpError::Discovery("points-per-game leader box not found on leaders page".into())
        })?;

        let mut candidates = Vec::new();

        for row in container.select(&LEADER_ROWS) {
            let Some(link) = row.select(&PLAYER_LINK).next() else {
                continue;
            };

            let name = link.text().collect::<String>().trim().to_string();
            if name.is_empty() {
                continue;
            }

            let Some(href) = link.value().attr("href") else {
                continue;
            };

            let points_per_game = row
                .select(&VALUE_CELL)
                .next()
                .and_then(|cell| cell.text().collect::<String>().trim().parse::<f64>().ok());
            let Some(points_per_game) = points_per_game else {
                continue;
            };

            // The source emits site-relative profile paths.
            let profile_url = match self.base_url.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    debug!(href, error = %e, "skipping row with unresolvable profile link");
                    continue;
                }
            };

            candidates.push(Candidate {
                name,
                profile_url,
                points_per_game,
            });
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADERS_PAGE: &str = r#"
        <div id="leaders_pts_per_g" class="data_grid_box">
          <table class="columns">
            <tbody>
              <tr>
                <td class="rank">1.</td>
                <td class="who"><a href="/players/d/doncilu01.html">Luka Doncic</a></td>
                <td class="value">33.4</td>
              </tr>
              <tr>
                <td class="rank">2.</td>
                <td class="who"><a href="/players/a/antetgi01.html">Giannis Antetokounmpo</a></td>
                <td class="value">31.8</td>
              </tr>
              <tr>
                <td class="rank">3.</td>
                <td class="who"><a href="/players/e/embiijo01.html">Joel Embiid</a></td>
                <td class="value"></td>
              </tr>
            </tbody>
          </table>
        </div>
    "#;

    fn scraper() -> LeaderboardScraper {
        LeaderboardScraper::new("https://stats.example.com").unwrap()
    }

    #[test]
    fn extracts_candidates_in_display_order() {
        let document = Html::parse_document(LEADERS_PAGE);
        let candidates = scraper().extract_candidates(&document).unwrap();

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Luka Doncic", "Giannis Antetokounmpo"]);
        assert_eq!(candidates[0].points_per_game, 33.4);
    }

    #[test]
    fn resolves_relative_profile_links_to_absolute() {
        let document = Html::parse_document(LEADERS_PAGE);
        let candidates = scraper().extract_candidates(&document).unwrap();

        assert_eq!(
            candidates[0].profile_url,
            "https://stats.example.com/players/d/doncilu01.html"
        );
    }

    #[test]
    fn row_without_value_is_skipped_not_fatal() {
        let document = Html::parse_document(LEADERS_PAGE);
        let candidates = scraper().extract_candidates(&document).unwrap();

        assert!(candidates.iter().all(|c| c.name != "Joel Embiid"));
    }

    #[test]
    fn missing_container_is_a_discovery_error() {
        let document = Html::parse_document("<div id='something_else'></div>");
        let err = scraper().extract_candidates(&document).unwrap_err();

        assert!(matches!(err, MvpError::Discovery(_)));
    }

    #[test]
    fn empty_container_yields_zero_candidates() {
        let document = Html::parse_document(
            r#"<div id="leaders_pts_per_g"><table class="columns"><tbody></tbody></table></div>"#,
        );
        let candidates = scraper().extract_candidates(&document).unwrap();

        assert!(candidates.is_empty());
    }
}
