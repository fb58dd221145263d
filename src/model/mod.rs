//! Data models for the blog.
//!
//! This module defines the stored records:
//!
//! - [`User`]: an account, unique by email
//! - [`Post`]: an article written by a user
//! - [`Comment`]: a reply by a user on a post
//!
//! Records only hold reference ids (`Post::author`, `Comment::post`, ...).
//! The related records are looked up on demand by the GraphQL layer.

mod comment;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
