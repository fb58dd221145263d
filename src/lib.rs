//! # blogql - an in-memory GraphQL blog API
//!
//! blogql serves three related collections (users, posts and comments) over
//! GraphQL. Data lives only in process memory and is seeded with sample
//! records on startup.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server with GraphiQL on http://127.0.0.1:4000
//! blogql serve
//!
//! # Run a one-off query against the sample data
//! blogql query '{ posts(query: "prueba") { title author { name } } }'
//!
//! # Print the schema
//! blogql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, Post, Comment)
//! - [`storage`]: The in-memory store and seed data
//! - [`validation`]: Seed data integrity checks

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.blogql.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for users, posts and comments.
pub mod model;

/// In-memory storage layer.
pub mod storage;

pub mod validation;
