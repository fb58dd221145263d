//! In-memory storage for the blog.
//!
//! Nothing is persisted: a [`Store`] lives as long as the process and is
//! rebuilt from seed data on every start.
//!
//! ## Components
//!
//! - [`Store`]: the three collections plus their query and create operations
//! - [`Table`]: an insertion-ordered collection indexed by id
//! - [`SeedData`]: records loaded at startup, built-in or from YAML

mod seed;
mod store;
mod table;

pub use seed::{SeedData, placeholder_post, placeholder_user};
pub use store::Store;
pub use table::{Record, Table};
