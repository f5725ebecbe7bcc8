// Concept lookup — name → title → page → document.
//
// With auto-suggest on, the name is first run through full-text search and
// the search engine's spelling suggestion (or else its top hit) becomes the
// title to fetch. The page is then fetched with redirects followed. Missing
// pages are NotFound; disambiguation pages are Ambiguous, carrying the
// articles they link to as the options to choose from.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::client::WikipediaClient;
use super::page::{document_from_extract, PagesQuery, QueryResponse, SearchQuery};
use crate::document::Document;
use crate::error::ResolveError;
use crate::resolver::ConceptResolver;

/// Upper bound on disambiguation options collected across continuation pages.
const MAX_DISAMBIGUATION_OPTIONS: usize = 500;

/// What fetching a single title produced.
#[derive(Debug)]
pub enum PageLookup {
    Found(Document),
    Missing,
    Disambiguation { title: String },
}

impl WikipediaClient {
    /// Best title for a free-text query, if the search finds anything.
    pub async fn suggest_title(&self, query: &str) -> Result<Option<String>> {
        let resp: QueryResponse<SearchQuery> = self
            .api_get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", "1"),
                ("srinfo", "suggestion"),
                ("srprop", ""),
            ])
            .await?;

        let Some(search) = resp.query else {
            return Ok(None);
        };

        let suggestion = search.searchinfo.and_then(|info| info.suggestion);
        let top_hit = search.search.into_iter().next().map(|hit| hit.title);

        debug!(query = query, suggestion = ?suggestion, top_hit = ?top_hit, "Search results");

        Ok(suggestion.or(top_hit))
    }

    /// Fetch one page's plain-text extract, following redirects.
    pub async fn fetch_page(&self, title: &str) -> Result<PageLookup> {
        let resp: QueryResponse<PagesQuery> = self
            .api_get(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("explaintext", "1"),
                ("exsectionformat", "wiki"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;

        let Some(page) = resp.query.and_then(|q| q.pages.into_iter().next()) else {
            return Ok(PageLookup::Missing);
        };

        if page.missing || page.invalid {
            return Ok(PageLookup::Missing);
        }

        if page.is_disambiguation() {
            return Ok(PageLookup::Disambiguation { title: page.title });
        }

        let extract = page.extract.unwrap_or_default();
        Ok(PageLookup::Found(document_from_extract(&page.title, &extract)))
    }

    /// Article titles linked from a disambiguation page, in page order.
    pub async fn disambiguation_options(&self, title: &str) -> Result<Vec<String>> {
        let mut options: Vec<String> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let resp: QueryResponse<PagesQuery> = {
                let mut params: Vec<(&str, &str)> = vec![
                    ("action", "query"),
                    ("prop", "links"),
                    ("plnamespace", "0"),
                    ("pllimit", "max"),
                    ("titles", title),
                ];
                if let Some(ref c) = cursor {
                    params.push(("plcontinue", c.as_str()));
                }
                self.api_get(&params).await?
            };

            if let Some(query) = resp.query {
                for page in query.pages {
                    options.extend(page.links.into_iter().filter(|l| l.ns == 0).map(|l| l.title));
                }
            }

            cursor = resp
                .continuation
                .as_ref()
                .and_then(|c| c.get("plcontinue"))
                .and_then(|v| v.as_str())
                .map(str::to_string);

            if cursor.is_none() || options.len() >= MAX_DISAMBIGUATION_OPTIONS {
                break;
            }
        }

        options.truncate(MAX_DISAMBIGUATION_OPTIONS);
        Ok(options)
    }
}

#[async_trait]
impl ConceptResolver for WikipediaClient {
    async fn resolve(&self, name: &str) -> Result<Document, ResolveError> {
        let title = if self.auto_suggest {
            self.suggest_title(name)
                .await?
                .ok_or_else(|| ResolveError::NotFound(name.to_string()))?
        } else {
            name.to_string()
        };

        match self.fetch_page(&title).await? {
            PageLookup::Found(document) => {
                info!(
                    concept = name,
                    title = %document.title,
                    sections = document.sections().len(),
                    "Fetched Wikipedia page"
                );
                Ok(document)
            }
            PageLookup::Missing => Err(ResolveError::NotFound(name.to_string())),
            PageLookup::Disambiguation { title } => {
                let options = self.disambiguation_options(&title).await?;
                Err(ResolveError::Ambiguous {
                    name: name.to_string(),
                    options,
                })
            }
        }
    }
}
