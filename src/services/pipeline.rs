use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{Candidate, CollectionDate, PlayerRecord, RankedPlayer, RawPlayerRecord, ScoredPlayer};
use crate::error::Result;
use crate::infrastructure::PageSource;
use crate::services::discovery::DiscoveryService;
use crate::services::fetching::StatFetchService;
use crate::services::ranking::rank_players;
use crate::services::scoring::player_value;
use crate::services::validation;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// End-of-run accounting, logged as the batch summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub discovered: usize,
    pub fetched: usize,
    pub validated: usize,
    pub persisted: usize,
}

pub struct MvpPipeline<P> {
    store: Arc<dyn Storage>,
    discovery: DiscoveryService<P>,
    fetcher: StatFetchService<P>,
}

impl<P: PageSource> MvpPipeline<P> {
    pub fn new(config: &Config, pages: P, store: Arc<dyn Storage + 'static>) -> Result<Self> {
        let discovery = DiscoveryService::new(
            pages.clone(),
            &config.args.base_url,
            config.leaderboard_url(),
        )?;
        let fetcher = StatFetchService::new(
            pages,
            config.args.base_url.clone(),
            config.args.season,
            Duration::from_millis(config.args.delay_ms),
        );

        Ok(Self {
            store,
            discovery,
            fetcher,
        })
    }

    /// One full collection run: discover, fetch, validate, score, rank,
    /// persist. Per-candidate and per-record failures are logged and
    /// excluded; only a failed discovery aborts the run. Zero survivors is a
    /// successful empty run.
    pub async fn run(&self, date: CollectionDate) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let candidates = self.discovery.discover_leaders().await?;
        summary.discovered = candidates.len();

        let raw_records = self.fetch_all(&candidates).await;
        summary.fetched = raw_records.len();

        let records = validate_all(raw_records);
        summary.validated = records.len();

        info!("Ranking players");
        let scored: Vec<ScoredPlayer> = records
            .into_iter()
            .map(|record| {
                let value = player_value(&record);
                ScoredPlayer::new(record, value, date)
            })
            .collect();
        let ranked = rank_players(scored);

        info!("Saving daily rankings");
        summary.persisted = self.persist_all(&ranked);

        info!(
            discovered = summary.discovered,
            fetched = summary.fetched,
            validated = summary.validated,
            persisted = summary.persisted,
            date = %date,
            "collection run finished"
        );
        Ok(summary)
    }

    /// Fetch every candidate in discovery order. A candidate whose fetch
    /// fails is excluded here and appears nowhere downstream.
    async fn fetch_all(&self, candidates: &[Candidate]) -> Vec<RawPlayerRecord> {
        let bar = ProgressBar::new(candidates.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut raw_records = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            bar.set_message(candidate.name.clone());
            info!(player = %candidate.name, "fetching player stats");

            match self.fetcher.fetch_player(candidate).await {
                Ok(raw) => raw_records.push(raw),
                Err(e) => {
                    warn!(player = %candidate.name, error = %e, "candidate dropped from run")
                }
            }
            bar.inc(1);
        }

        bar.finish_and_clear();
        raw_records
    }

    fn persist_all(&self, ranked: &[RankedPlayer]) -> usize {
        let mut persisted = 0;

        for ranking in ranked {
            match self.store.insert_ranking(ranking) {
                Ok(()) => {
                    info!(player = %ranking.name(), rank = ranking.rank, "ranking row inserted");
                    persisted += 1;
                }
                Err(e) => {
                    error!(player = %ranking.name(), error = %e, "failed to insert ranking row")
                }
            }
        }

        persisted
    }
}

/// Validate every raw record, keeping successes in order. A rejected record
/// is logged with its full field diagnostic and excluded.
fn validate_all(raw_records: Vec<RawPlayerRecord>) -> Vec<PlayerRecord> {
    let mut records = Vec::with_capacity(raw_records.len());

    for raw in &raw_records {
        match validation::validate(raw) {
            Ok(record) => records.push(record),
            Err(e) => warn!(error = %e, "record dropped from run"),
        }
    }

    records
}
