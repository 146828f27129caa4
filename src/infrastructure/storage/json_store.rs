use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{CollectionDate, RankedPlayer};
use crate::error::{MvpError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file document store: one array file per collection date inside the
/// rankings collection directory. Every operation opens and closes its own
/// file, so there is no long-lived handle to share between runs. Prior dates
/// only ever gain a file once and are never rewritten by later runs.
#[derive(Clone)]
pub struct JsonDocumentStore {
    data_dir: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn collection_dir(&self) -> PathBuf {
        self.data_dir.join(StorageKeys::RANKINGS_COLLECTION)
    }

    fn date_path(&self, date: &CollectionDate) -> PathBuf {
        self.collection_dir().join(format!("{date}.json"))
    }

    fn read_date_file(&self, path: &Path) -> Result<Vec<RankedPlayer>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Vec::new())
        }
    }

    /// Stored collection dates, most recent first.
    fn stored_dates(&self) -> Result<Vec<CollectionDate>> {
        let dir = self.collection_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(".json")) else {
                continue;
            };
            if let Ok(date) = stem.parse::<CollectionDate>() {
                dates.push(date);
            }
        }

        dates.sort();
        dates.reverse();
        Ok(dates)
    }

    fn append(&self, ranking: &RankedPlayer) -> Result<()> {
        let dir = self.collection_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = self.date_path(&ranking.date());
        let mut documents = self.read_date_file(&path)?;
        documents.push(ranking.clone());
        fs::write(path, serde_json::to_string_pretty(&documents)?)?;
        Ok(())
    }
}

impl Storage for JsonDocumentStore {
    fn insert_ranking(&self, ranking: &RankedPlayer) -> Result<()> {
        self.append(ranking).map_err(|e| {
            MvpError::Persistence(format!(
                "insert of {} for {} failed: {e}",
                ranking.name(),
                ranking.date()
            ))
        })
    }

    fn all_rankings(&self) -> Result<Vec<RankedPlayer>> {
        let mut rankings = Vec::new();
        for date in self.stored_dates()? {
            rankings.extend(self.rankings_for_date(&date)?);
        }
        Ok(rankings)
    }

    fn rankings_for_date(&self, date: &CollectionDate) -> Result<Vec<RankedPlayer>> {
        self.read_date_file(&self.date_path(date))
    }

    fn rankings_for_player(&self, name: &str) -> Result<Vec<RankedPlayer>> {
        Ok(self
            .all_rankings()?
            .into_iter()
            .filter(|ranking| ranking.name() == name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerRecord, ScoredPlayer};
    use tempfile::TempDir;

    fn ranked(name: &str, date: &str, rank: u32) -> RankedPlayer {
        RankedPlayer {
            scored: ScoredPlayer::new(
                PlayerRecord::sample(name),
                1.0 / f64::from(rank),
                date.parse().unwrap(),
            ),
            rank,
        }
    }

    #[test]
    fn insert_then_read_back_by_date() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        store.insert_ranking(&ranked("Luka Doncic", "2-17-2026", 1)).unwrap();
        store.insert_ranking(&ranked("Joel Embiid", "2-17-2026", 2)).unwrap();

        let date = "2-17-2026".parse().unwrap();
        let stored = store.rankings_for_date(&date).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name(), "Luka Doncic");
        assert_eq!(stored[1].rank, 2);
    }

    #[test]
    fn unknown_date_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        let date = "3-1-2025".parse().unwrap();
        assert!(store.rankings_for_date(&date).unwrap().is_empty());
    }

    #[test]
    fn all_rankings_come_back_most_recent_date_first() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        store.insert_ranking(&ranked("Luka Doncic", "2-16-2026", 1)).unwrap();
        store.insert_ranking(&ranked("Luka Doncic", "2-17-2026", 1)).unwrap();
        store.insert_ranking(&ranked("Luka Doncic", "12-30-2025", 1)).unwrap();

        let all = store.all_rankings().unwrap();
        let dates: Vec<String> = all.iter().map(|r| r.date().to_string()).collect();
        assert_eq!(dates, ["2-17-2026", "2-16-2026", "12-30-2025"]);
    }

    #[test]
    fn player_history_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        store.insert_ranking(&ranked("Luka Doncic", "2-16-2026", 2)).unwrap();
        store.insert_ranking(&ranked("Joel Embiid", "2-16-2026", 1)).unwrap();
        store.insert_ranking(&ranked("Luka Doncic", "2-17-2026", 1)).unwrap();

        let history = store.rankings_for_player("Luka Doncic").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date().to_string(), "2-17-2026");
        assert_eq!(history[1].rank, 2);
    }

    #[test]
    fn wire_format_uses_camel_case_and_date_string() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        store.insert_ranking(&ranked("Luka Doncic", "2-17-2026", 1)).unwrap();

        let path = dir
            .path()
            .join(StorageKeys::RANKINGS_COLLECTION)
            .join("2-17-2026.json");
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

        let doc = &raw[0];
        assert_eq!(doc["date"], "2-17-2026");
        assert_eq!(doc["rank"], 1);
        assert!(doc["valueScore"].is_number());
        assert!(doc["teamWins"].is_number());
        assert!(doc["trueShootingPercentage"].is_number());
    }
}
