//! Integrity checks for seed data.
//!
//! Records created through mutations are checked by the store itself; these
//! checks cover data that bypasses it, such as a user-supplied seed file.

use crate::error::{BlogError, Result};
use crate::storage::{Record, SeedData};
use std::collections::HashSet;

/// Rejects duplicate ids or emails and dangling `author`/`post` references.
///
/// Comments may point at unpublished posts here; only `createComment`
/// requires a published post.
pub fn validate_seed(seed: &SeedData) -> Result<()> {
    validate_unique_ids(&seed.users)?;
    validate_unique_ids(&seed.posts)?;
    validate_unique_ids(&seed.comments)?;

    let mut emails = HashSet::new();
    for user in &seed.users {
        if !emails.insert(user.email.as_str()) {
            return Err(BlogError::Validation(format!(
                "duplicate email '{}' in seed data",
                user.email
            )));
        }
    }

    let user_ids: HashSet<&str> = seed.users.iter().map(|u| u.id.as_str()).collect();
    let post_ids: HashSet<&str> = seed.posts.iter().map(|p| p.id.as_str()).collect();

    for post in &seed.posts {
        if !user_ids.contains(post.author.as_str()) {
            return Err(BlogError::Validation(format!(
                "post '{}' references unknown user '{}'",
                post.id, post.author
            )));
        }
    }

    for comment in &seed.comments {
        if !user_ids.contains(comment.author.as_str()) {
            return Err(BlogError::Validation(format!(
                "comment '{}' references unknown user '{}'",
                comment.id, comment.author
            )));
        }
        if !post_ids.contains(comment.post.as_str()) {
            return Err(BlogError::Validation(format!(
                "comment '{}' references unknown post '{}'",
                comment.id, comment.post
            )));
        }
    }

    Ok(())
}

fn validate_unique_ids<T: Record>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.id().is_empty() {
            return Err(BlogError::Validation(format!("{} id cannot be empty", T::KIND)));
        }
        if !seen.insert(record.id()) {
            return Err(BlogError::Validation(format!(
                "duplicate {} id '{}' in seed data",
                T::KIND,
                record.id()
            )));
        }
    }
    Ok(())
}
