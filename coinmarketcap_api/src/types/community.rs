//! News, posts and community trending types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Asset tagged on a content item.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContentAsset {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub slug: Option<String>,
}

/// A news article or video from `/v1/content/latest`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContentItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub cover: Option<String>,
    #[serde(default)]
    pub assets: Vec<ContentAsset>,
    pub created_at: Option<String>,
    pub released_at: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostOwner {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

/// A community post or comment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Post {
    pub post_id: String,
    pub owner: Option<PostOwner>,
    pub text_content: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub comment_count: Option<String>,
    pub like_count: Option<String>,
    pub repost_count: Option<String>,
    pub post_time: Option<String>,
    pub language_code: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A page of posts. Pass `last_score` back to fetch the next page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostList {
    #[serde(default)]
    pub list: Vec<Post>,
    pub last_score: Option<String>,
}

/// An entry of `/v1/community/trending/topic`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrendingTopic {
    pub rank: Option<i64>,
    pub topic: String,
}

/// An entry of `/v1/community/trending/token`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrendingToken {
    pub id: i64,
    pub name: String,
    pub symbol: Option<String>,
    pub slug: Option<String>,
    pub rank: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
