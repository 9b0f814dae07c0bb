use std::collections::HashMap;

/// The navigable page state: current page plus the two facet tokens. The
/// URL query string is the single source of truth; this struct is the
/// explicit (de)serialization pair for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub page: i64,
    pub year: Option<String>,
    pub genre: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            year: None,
            genre: None,
        }
    }
}

impl PageState {
    /// Read the state from request query parameters. Missing or unparsable
    /// values fall back to their defaults; empty facet tokens count as
    /// unset.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        let facet = |key: &str| {
            params
                .get(key)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };

        Self {
            page,
            year: facet("year"),
            genre: facet("genre"),
        }
    }

    /// Canonical query-string form. Unset facets are omitted, so the same
    /// state always serializes to the same string.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page)];
        if let Some(year) = &self.year {
            parts.push(format!("year={}", urlencoding::encode(year)));
        }
        if let Some(genre) = &self.genre {
            parts.push(format!("genre={}", urlencoding::encode(genre)));
        }
        parts.join("&")
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Selecting or clearing a facet always jumps back to the first page.
    pub fn with_year(mut self, year: Option<String>) -> Self {
        self.year = year.filter(|s| !s.is_empty());
        self.page = 1;
        self
    }

    pub fn with_genre(mut self, genre: Option<String>) -> Self {
        self.genre = genre.filter(|s| !s.is_empty());
        self.page = 1;
        self
    }
}
