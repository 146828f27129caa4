mod date;
mod player;
pub(crate) mod storage;

pub use date::CollectionDate;
pub use player::{Candidate, PlayerRecord, RankedPlayer, RawPlayerRecord, ScoredPlayer};
