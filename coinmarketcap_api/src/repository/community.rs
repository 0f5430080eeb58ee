use crate::{
    endpoints::community as paths,
    query::{CommentsQuery, CommunityTrendingQuery, ContentLatestQuery, PostsQuery},
    types::{ContentItem, Post, PostList, Response, TrendingToken, TrendingTopic},
    Client, Error,
};

/// News and community content endpoints.
#[derive(Clone, Copy)]
pub struct CommunityRepository<'a> {
    client: &'a Client,
}

impl<'a> CommunityRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the latest news and videos.
    pub async fn content_latest(
        &self,
        query: &ContentLatestQuery,
    ) -> Result<Response<Vec<ContentItem>>, Error> {
        self.client.send(paths::CONTENT_LATEST, Some(query)).await
    }

    pub async fn posts_top(&self, query: &PostsQuery) -> Result<Response<PostList>, Error> {
        self.client.send(paths::POSTS_TOP, Some(query)).await
    }

    pub async fn posts_latest(&self, query: &PostsQuery) -> Result<Response<PostList>, Error> {
        self.client.send(paths::POSTS_LATEST, Some(query)).await
    }

    /// Fetches the comments on a post.
    pub async fn posts_comments(&self, query: &CommentsQuery) -> Result<Response<Vec<Post>>, Error> {
        self.client.send(paths::POSTS_COMMENTS, Some(query)).await
    }

    pub async fn trending_topics(
        &self,
        query: &CommunityTrendingQuery,
    ) -> Result<Response<Vec<TrendingTopic>>, Error> {
        self.client.send(paths::TRENDING_TOPICS, Some(query)).await
    }

    pub async fn trending_tokens(
        &self,
        query: &CommunityTrendingQuery,
    ) -> Result<Response<Vec<TrendingToken>>, Error> {
        self.client.send(paths::TRENDING_TOKENS, Some(query)).await
    }
}
