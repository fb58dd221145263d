use super::schema::shared_store;
use crate::error::BlogError;
use crate::model;
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, InputObject, SimpleObject};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[ComplexObject]
impl User {
    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .posts_by_author(&self.id)
            .into_iter()
            .map(|p| p.clone().into())
            .collect())
    }

    /// Comments written by this user
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Comment>>> {
        let store = shared_store(ctx)?.read().await;
        Ok(Some(
            store
                .comments_by_author(&self.id)
                .into_iter()
                .map(|c| c.clone().into())
                .collect(),
        ))
    }
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,
    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Post {
    /// The user who wrote this post
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = shared_store(ctx)?.read().await;
        store
            .user(&self.author_id)
            .map(|u| u.clone().into())
            .ok_or_else(|| BlogError::NotFound(format!("user '{}'", self.author_id)).extend())
    }

    /// Comments left on this post
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Comment>>> {
        let store = shared_store(ctx)?.read().await;
        Ok(Some(
            store
                .comments_on_post(&self.id)
                .into_iter()
                .map(|c| c.clone().into())
                .collect(),
        ))
    }
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            body: p.body,
            published: p.published,
            author_id: p.author,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub text: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub post_id: String,
}

#[ComplexObject]
impl Comment {
    /// The user who wrote this comment
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = shared_store(ctx)?.read().await;
        store
            .user(&self.author_id)
            .map(|u| u.clone().into())
            .ok_or_else(|| BlogError::NotFound(format!("user '{}'", self.author_id)).extend())
    }

    /// The post this comment belongs to
    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Post> {
        let store = shared_store(ctx)?.read().await;
        store
            .post(&self.post_id)
            .map(|p| p.clone().into())
            .ok_or_else(|| BlogError::NotFound(format!("post '{}'", self.post_id)).extend())
    }
}

impl From<model::Comment> for Comment {
    fn from(c: model::Comment) -> Self {
        Self {
            id: ID(c.id),
            text: c.text,
            author_id: c.author,
            post_id: c.post,
        }
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<CreateUserInput> for model::NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}
