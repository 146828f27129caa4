use crate::domain::{Candidate, RawPlayerRecord};
use crate::error::{MvpError, Result};
use crate::infrastructure::{FieldMap, PageSource, PlayerPageScraper, TeamPageScraper};
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct StatFetchService<P> {
    pages: P,
    player_scraper: PlayerPageScraper,
    base_url: String,
    season: u16,
    delay: Duration,
}

impl<P: PageSource> StatFetchService<P> {
    pub fn new(pages: P, base_url: String, season: u16, delay: Duration) -> Self {
        info!("Created new Stat Fetch service");
        Self {
            pages,
            player_scraper: PlayerPageScraper::new(season),
            base_url,
            season,
            delay,
        }
    }

    fn team_url(&self, team: &str) -> String {
        format!("{}/teams/{}/{}.html", self.base_url, team, self.season)
    }

    /// Assemble one unvalidated record: the profile page yields the per-game
    /// and advanced season rows, then the team page yields win/loss context.
    /// A missing row leaves its fields unset with a warning; only a failed
    /// navigation aborts this candidate, and only this candidate.
    pub async fn fetch_player(&self, candidate: &Candidate) -> Result<RawPlayerRecord> {
        let mut raw = RawPlayerRecord::new(&candidate.name, &candidate.profile_url);

        let body = self
            .pages
            .fetch_page(&candidate.profile_url)
            .await
            .map_err(|e| fetch_error(candidate, &e))?;

        {
            let document = Html::parse_document(&body);

            match self.player_scraper.per_game_stats(&document)? {
                Some(fields) => apply_per_game(&mut raw, &fields),
                None => warn!(player = %candidate.name, season = self.season, "no per-game row"),
            }

            match self.player_scraper.advanced_stats(&document)? {
                Some(fields) => apply_advanced(&mut raw, &fields),
                None => warn!(player = %candidate.name, season = self.season, "no advanced row"),
            }
        }

        sleep(self.delay).await;

        match raw.team.clone() {
            Some(team) => {
                let url = self.team_url(&team);
                debug!(player = %candidate.name, team = %team, "loading team page");

                let body = self
                    .pages
                    .fetch_page(&url)
                    .await
                    .map_err(|e| fetch_error(candidate, &e))?;
                let document = Html::parse_document(&body);
                let (wins, losses) = TeamPageScraper.win_loss(&document)?;
                apply_team_totals(&mut raw, wins, losses);
            }
            None => {
                warn!(player = %candidate.name, "no team code scraped, skipping team page");
            }
        }

        sleep(self.delay).await;
        Ok(raw)
    }
}

fn fetch_error(candidate: &Candidate, source: &MvpError) -> MvpError {
    MvpError::Fetch {
        candidate: candidate.name.clone(),
        reason: source.to_string(),
    }
}

/// Overlay a freshly extracted value; an earlier non-null value always wins.
fn overlay(slot: &mut Option<f64>, value: Option<f64>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn apply_per_game(raw: &mut RawPlayerRecord, fields: &FieldMap) {
    overlay(&mut raw.minutes_per_game, fields.number("minutes_per_game"));
    overlay(&mut raw.points_per_game, fields.number("points_per_game"));
    overlay(&mut raw.assists_per_game, fields.number("assists_per_game"));
    overlay(&mut raw.rebounds_per_game, fields.number("rebounds_per_game"));
    overlay(&mut raw.blocks_per_game, fields.number("blocks_per_game"));
    overlay(&mut raw.steals_per_game, fields.number("steals_per_game"));
    overlay(&mut raw.fouls_per_game, fields.number("fouls_per_game"));
    overlay(&mut raw.turnovers_per_game, fields.number("turnovers_per_game"));
    overlay(&mut raw.games_started, fields.number("games_started"));

    if raw.team.is_none() {
        raw.team = fields.text("team");
    }
}

fn apply_advanced(raw: &mut RawPlayerRecord, fields: &FieldMap) {
    overlay(
        &mut raw.true_shooting_percentage,
        fields.number("true_shooting_percentage"),
    );
    overlay(&mut raw.usage_rate, fields.number("usage_rate"));
    overlay(&mut raw.win_share, fields.number("win_share"));
    overlay(&mut raw.box_plus_minus, fields.number("box_plus_minus"));
    overlay(
        &mut raw.value_over_replacement,
        fields.number("value_over_replacement"),
    );
}

fn apply_team_totals(raw: &mut RawPlayerRecord, wins: Option<f64>, losses: Option<f64>) {
    overlay(&mut raw.team_wins, wins);
    if let (Some(wins), Some(losses)) = (wins, losses) {
        overlay(&mut raw.team_games_played, Some(wins + losses));
    }
}
