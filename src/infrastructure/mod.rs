pub(crate) mod extract;
mod page;
mod scrapers;
mod storage;

pub use extract::{extract_fields, FieldKind, FieldMap, FieldSpec, FieldValue};
pub use page::{HttpPageSource, PageSource};
pub use scrapers::{
    leaderboard::LeaderboardScraper, player_page::PlayerPageScraper, team_page::TeamPageScraper,
};
pub use storage::json_store::JsonDocumentStore;
