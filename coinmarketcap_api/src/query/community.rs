//! Query builders for the `/content` and `/community` endpoints.

use super::common::{Pagination, Params, Query};

/// `/v1/content/latest`
#[derive(Clone, Debug, Default)]
pub struct ContentLatestQuery {
    pub pagination: Pagination,
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    /// `all`, `news` or `community`.
    pub news_type: Option<String>,
    /// `all`, `news`, `video` or `audio`.
    pub content_type: Option<String>,
    /// e.g. `GameFi`, `DeFi`.
    pub category: Option<String>,
    /// e.g. `en`, `zh`.
    pub language: Option<String>,
}

impl Query for ContentLatestQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("id", &self.id);
        params.insert("slug", &self.slug);
        params.insert("symbol", &self.symbol);
        params.insert("news_type", self.news_type.as_deref());
        params.insert("content_type", self.content_type.as_deref());
        params.insert("category", self.category.as_deref());
        params.insert("language", self.language.as_deref());
        params
    }
}

impl ContentLatestQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }

    pub fn with_news_type(mut self, news_type: &str) -> Self {
        self.news_type = Some(news_type.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }
}

/// Shared by `/v1/content/posts/top` and `/v1/content/posts/latest`.
#[derive(Clone, Debug, Default)]
pub struct PostsQuery {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    /// Cursor returned as `last_score` by the previous page.
    pub last_score: Option<String>,
}

impl Query for PostsQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("slug", self.slug.as_deref())
            .with("symbol", self.symbol.as_deref())
            .with("last_score", self.last_score.as_deref())
    }
}

impl PostsQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_last_score(mut self, last_score: &str) -> Self {
        self.last_score = Some(last_score.to_string());
        self
    }
}

/// `/v1/content/posts/comments`
#[derive(Clone, Debug, Default)]
pub struct CommentsQuery {
    pub post_id: String,
}

impl Query for CommentsQuery {
    fn to_params(&self) -> Params {
        Params::new().with("post_id", &self.post_id)
    }
}

impl CommentsQuery {
    pub fn new(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
        }
    }
}

/// Shared by the `/v1/community/trending/*` endpoints.
#[derive(Clone, Debug, Default)]
pub struct CommunityTrendingQuery {
    pub limit: Option<i64>,
}

impl Query for CommunityTrendingQuery {
    fn to_params(&self) -> Params {
        Params::new().with("limit", self.limit)
    }
}

impl CommunityTrendingQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
