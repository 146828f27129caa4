use super::{CollectionDate, RankedPlayer};
use crate::error::Result;

pub trait Storage: Send + Sync {
    /// Append one ranked record to the daily collection. One document per
    /// player per collection date; a prior date's records are never rewritten.
    fn insert_ranking(&self, ranking: &RankedPlayer) -> Result<()>;

    /// Every persisted record, most recent collection date first.
    fn all_rankings(&self) -> Result<Vec<RankedPlayer>>;

    /// Records for exactly one collection date, in stored (rank) order.
    fn rankings_for_date(&self, date: &CollectionDate) -> Result<Vec<RankedPlayer>>;

    /// One player's full history, most recent collection date first.
    fn rankings_for_player(&self, name: &str) -> Result<Vec<RankedPlayer>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const RANKINGS_COLLECTION: &'static str = "DailyMvpRankings";
}
