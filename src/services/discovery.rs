use crate::domain::Candidate;
use crate::error::{MvpError, Result};
use crate::infrastructure::{LeaderboardScraper, PageSource};
use scraper::Html;
use std::collections::HashSet;
use tracing::{info, warn};

pub struct DiscoveryService<P> {
    pages: P,
    scraper: LeaderboardScraper,
    leaderboard_url: String,
}

impl<P: PageSource> DiscoveryService<P> {
    pub fn new(pages: P, base_url: &str, leaderboard_url: String) -> Result<Self> {
        info!("Created new Discovery service");
        Ok(Self {
            pages,
            scraper: LeaderboardScraper::new(base_url)?,
            leaderboard_url,
        })
    }

    /// Candidate list in leaderboard display order. Duplicate profile links
    /// keep their first occurrence so each profile is fetched at most once
    /// per run. Any failure here is fatal: with no leaderboard there is
    /// nothing to rank.
    pub async fn discover_leaders(&self) -> Result<Vec<Candidate>> {
        info!(url = %self.leaderboard_url, "loading leaders page");
        let body = self
            .pages
            .fetch_page(&self.leaderboard_url)
            .await
            .map_err(|e| MvpError::Discovery(format!("leaders page unreachable: {e}")))?;

        let document = Html::parse_document(&body);
        let extracted = self.scraper.extract_candidates(&document)?;

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for candidate in extracted {
            if seen.insert(candidate.profile_url.clone()) {
                candidates.push(candidate);
            } else {
                warn!(player = %candidate.name, "duplicate leaderboard entry dropped");
            }
        }

        info!(count = candidates.len(), "discovered scoring leaders");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    const BASE: &str = "https://stats.example.com";
    const LEADERS_URL: &str = "https://stats.example.com/leaders.html";

    #[derive(Clone, Default)]
    struct FakePages {
        pages: Arc<HashMap<String, String>>,
    }

    impl PageSource for FakePages {
        async fn fetch_page(&self, url: &str) -> Result<String> {
            match self.pages.get(url) {
                Some(body) => Ok(body.clone()),
                None => Err(std::io::Error::other(format!("no route to {url}")).into()),
            }
        }
    }

    fn service(body: &str) -> DiscoveryService<FakePages> {
        let pages = HashMap::from([(LEADERS_URL.to_string(), body.to_string())]);
        DiscoveryService::new(
            FakePages {
                pages: Arc::new(pages),
            },
            BASE,
            LEADERS_URL.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_profile_links_keep_the_first_occurrence() {
        let body = r#"
            <div id="leaders_pts_per_g"><table class="columns"><tbody>
              <tr><td class="who"><a href="/players/d/doncilu01.html">Luka Doncic</a></td>
                  <td class="value">33.4</td></tr>
              <tr><td class="who"><a href="/players/d/doncilu01.html">Luka Doncic</a></td>
                  <td class="value">33.4</td></tr>
              <tr><td class="who"><a href="/players/e/embiijo01.html">Joel Embiid</a></td>
                  <td class="value">31.0</td></tr>
            </tbody></table></div>
        "#;

        let candidates = service(body).discover_leaders().await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Luka Doncic");
        assert_eq!(candidates[1].name, "Joel Embiid");
    }

    #[tokio::test]
    async fn unreachable_leaders_page_maps_to_discovery_error() {
        let service = DiscoveryService::new(
            FakePages::default(),
            BASE,
            LEADERS_URL.to_string(),
        )
        .unwrap();

        let err = service.discover_leaders().await.unwrap_err();
        assert!(matches!(err, MvpError::Discovery(_)));
    }
}
