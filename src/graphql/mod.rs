//! GraphQL schema, resolvers and HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://127.0.0.1:4000)
//! blogql serve --port 4000
//!
//! # Execute a query from CLI
//! blogql query '{ users(query: "dani") { name posts { title } } }'
//!
//! # Execute a mutation from CLI
//! blogql mutate 'createUser(data: { name: "Ana", email: "ana@example.com" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `posts`, `comments`, `me`, `post`
//! - **Mutations**: `createUser`, `createPost`, `createComment`
//! - **Relationships**: `User.posts`, `User.comments`, `Post.author`,
//!   `Post.comments`, `Comment.author`, `Comment.post`

mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, MutationRoot, QueryRoot, SharedStore, build_schema, share};
pub use server::{router, run_server, serve};
pub use types::*;
