//! Startup data for the store and the fixed `me`/`post` placeholders.

use crate::error::{BlogError, Result};
use crate::model::{Comment, Post, User};
use serde::Deserialize;
use std::path::Path;

/// Records loaded into a fresh store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BlogError::Config(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// The built-in sample: three users, four posts, four comments.
    pub fn sample() -> Self {
        Self {
            users: vec![
                User::new("1", "Dani", "datradito@gmal.com").with_age(Some(43)),
                User::new("2", "Giuli", "giuli@gmal.com"),
                User::new("3", "Santi", "santi@gmal.com").with_age(Some(8)),
            ],
            posts: vec![
                Post::new("a1", "el primerpost", "este es el texto del body", "1")
                    .with_published(true),
                Post::new("a2", "el segundo", "este es el texto del segundo", "2"),
                Post::new("a3", "el tercero", "esto es una prueba", "2").with_published(true),
                Post::new("a4", "el cuarto", "esto es una prueba cuatro", "3")
                    .with_published(true),
            ],
            comments: vec![
                Comment::new("c1", SAMPLE_TEXTS[0], "2", "a1"),
                Comment::new("c2", SAMPLE_TEXTS[1], "2", "a1"),
                Comment::new("c3", SAMPLE_TEXTS[2], "3", "a2"),
                Comment::new("c4", SAMPLE_TEXTS[3], "1", "a3"),
            ],
        }
    }
}

const SAMPLE_TEXTS: [&str; 4] = [
    "Lorem Ipsum is simply dummy text of the printing and typesetting industry. \
     Lorem Ipsum has been the ",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Mauris consequat massa nec \
     nunc tincidunt, ac dapibus ligula consequat. Praesent ornare id elit quis placerat. \
     In bibendum felis at ipsum fermentum sagittis. Nam vel nunc commodo, sollicitudin justo \
     at, efficitur velit. Curabitur in est vitae tortor varius convallis. Sed condimentum \
     commodo nibh, ut sodales purus faucibus sodales. Suspendisse porta nunc quis risus \
     elementum, a dignissim nisl lacinia. Sed sit amet varius lectus.",
    "Praesent tristique tristique risus, eget convallis turpis consequat vitae. In tempus \
     sem ac justo luctus, non bibendum odio posuere. Sed augue lorem, iaculis dictum lectus \
     at, eleifend iaculis magna. Fusce eu lectus ligula. Integer auctor massa vitae vehicula \
     malesuada. Suspendisse facilisis nulla vel diam pellentesque gravida. Vestibulum \
     suscipit libero vitae mauris malesuada fringilla.",
    "Proin feugiat mi sit amet massa egestas, vestibulum euismod massa dapibus. Nam mollis \
     nec nisl ut ornare. Nulla sed enim euismod, commodo nunc ac, iaculis ex. Aliquam \
     suscipit purus et ante auctor faucibus. Proin malesuada sed nunc a auctor. Integer sit \
     amet suscipit mauris. Donec non vestibulum magna. In tincidunt finibus ultrices. Fusce \
     est tellus, pharetra at odio nec, porttitor molestie quam. Integer eget libero eget dui \
     tincidunt dignissim. Nulla tristique euismod nulla, malesuada aliquam eros euismod ut. \
     Cras vulputate magna vitae lorem finibus, a egestas nunc vehicula.",
];

/// Returned by the `me` query. Not stored.
pub fn placeholder_user() -> User {
    User::new("123098", "Dani", "datradito@gmal.com").with_age(Some(43))
}

/// Returned by the `post` query. Not stored; its author is the seeded user `1`.
pub fn placeholder_post() -> Post {
    Post::new(
        "akdsjflakjfd",
        "el primerpost",
        "este es el texto del boy",
        "1",
    )
    .with_published(true)
}
