use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};
use tokio::sync::RwLock;

use crate::config::GraphqlSettings;
use crate::error::BlogError;
use crate::model::{NewComment, NewPost};
use crate::storage::{Store, placeholder_post, placeholder_user};

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handle shared by every request. Mutations hold the write guard from
/// their checks through the append.
pub type SharedStore = Arc<RwLock<Store>>;

pub fn share(store: Store) -> SharedStore {
    Arc::new(RwLock::new(store))
}

pub fn build_schema(store: SharedStore, settings: &GraphqlSettings) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(settings.max_depth)
        .finish()
}

pub(crate) fn shared_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

fn rejected(operation: &str, err: BlogError) -> async_graphql::Error {
    tracing::warn!(operation, "Rejected: {}", err);
    err.extend()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List users, optionally filtered by a case-insensitive match on name
    async fn users(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<User>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .search_users(query.as_deref())
            .into_iter()
            .map(|u| u.clone().into())
            .collect())
    }

    /// List posts, optionally filtered by a case-insensitive match on title or body
    async fn posts(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Post>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .search_posts(query.as_deref())
            .into_iter()
            .map(|p| p.clone().into())
            .collect())
    }

    /// List comments, optionally filtered by a case-insensitive match on text
    async fn comments(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Comment>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .search_comments(query.as_deref())
            .into_iter()
            .map(|c| c.clone().into())
            .collect())
    }

    /// A fixed sample user
    async fn me(&self) -> User {
        placeholder_user().into()
    }

    /// A fixed sample post
    async fn post(&self) -> Post {
        placeholder_post().into()
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a user; the email must not be in use
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        data: Option<CreateUserInput>,
    ) -> async_graphql::Result<User> {
        let data = data.ok_or_else(|| {
            rejected(
                "createUser",
                BlogError::Validation("data is required".to_string()),
            )
        })?;

        let mut store = shared_store(ctx)?.write().await;
        let user = store
            .create_user(data.into())
            .map_err(|e| rejected("createUser", e))?;

        tracing::info!(id = %user.id, "Created user");
        Ok(user.into())
    }

    /// Create a post by an existing user
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        published: bool,
        author: ID,
    ) -> async_graphql::Result<Post> {
        let mut store = shared_store(ctx)?.write().await;
        let post = store
            .create_post(NewPost {
                title,
                body,
                published,
                author: author.0,
            })
            .map_err(|e| rejected("createPost", e))?;

        tracing::info!(id = %post.id, author = %post.author, "Created post");
        Ok(post.into())
    }

    /// Comment on a published post as an existing user
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        author: ID,
        post: ID,
    ) -> async_graphql::Result<Comment> {
        let mut store = shared_store(ctx)?.write().await;
        let comment = store
            .create_comment(NewComment {
                text,
                author: author.0,
                post: post.0,
            })
            .map_err(|e| rejected("createComment", e))?;

        tracing::info!(id = %comment.id, post = %comment.post, "Created comment");
        Ok(comment.into())
    }
}
