use super::seed::SeedData;
use super::table::{Record, Table};
use crate::{
    config::BlogConfig,
    error::{BlogError, Result},
    model::{Comment, NewComment, NewPost, NewUser, Post, User},
    validation,
};
use std::path::Path;

/// Give up on id generation after this many collisions in a row.
const MAX_ID_ATTEMPTS: usize = 1000;

/// In-memory store for users, posts and comments.
///
/// Mutations check every precondition before appending, so a rejected
/// request leaves all three tables untouched.
#[derive(Debug, Clone)]
pub struct Store {
    users: Table<User>,
    posts: Table<Post>,
    comments: Table<Comment>,
    id_length: usize,
}

impl Store {
    pub fn new(id_length: usize) -> Self {
        Self {
            users: Table::new(),
            posts: Table::new(),
            comments: Table::new(),
            id_length,
        }
    }

    pub fn from_seed(seed: SeedData, id_length: usize) -> Result<Self> {
        validation::validate_seed(&seed)?;
        Ok(Self {
            users: Table::from_rows(seed.users)?,
            posts: Table::from_rows(seed.posts)?,
            comments: Table::from_rows(seed.comments)?,
            id_length,
        })
    }

    /// Store holding the built-in sample data.
    pub fn sample() -> Result<Self> {
        Self::from_seed(SeedData::sample(), BlogConfig::default().store.id_length)
    }

    pub fn from_config(config: &BlogConfig, project_root: &Path) -> Result<Self> {
        let id_length = config.store.id_length;
        if !config.store.seed {
            return Ok(Self::new(id_length));
        }
        match config.seed_path(project_root) {
            Some(path) => {
                tracing::debug!("Loading seed data from {}", path.display());
                Self::from_seed(SeedData::load(&path)?, id_length)
            }
            None => Self::from_seed(SeedData::sample(), id_length),
        }
    }

    pub fn users(&self) -> &[User] {
        self.users.rows()
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.rows()
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.rows()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.get(id)
    }

    pub fn posts_by_author(&self, user_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.author == user_id).collect()
    }

    pub fn comments_by_author(&self, user_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.author == user_id)
            .collect()
    }

    pub fn comments_on_post(&self, post_id: &str) -> Vec<&Comment> {
        self.comments.iter().filter(|c| c.post == post_id).collect()
    }

    /// Users whose name contains `query`, ignoring case. No query lists everyone.
    pub fn search_users(&self, query: Option<&str>) -> Vec<&User> {
        match normalize_query(query) {
            None => self.users.iter().collect(),
            Some(q) => self
                .users
                .iter()
                .filter(|u| u.name.to_lowercase().contains(&q))
                .collect(),
        }
    }

    /// Posts whose title or body contains `query`, ignoring case.
    pub fn search_posts(&self, query: Option<&str>) -> Vec<&Post> {
        match normalize_query(query) {
            None => self.posts.iter().collect(),
            Some(q) => self
                .posts
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains(&q) || p.body.to_lowercase().contains(&q)
                })
                .collect(),
        }
    }

    /// Comments whose text contains `query`, ignoring case.
    pub fn search_comments(&self, query: Option<&str>) -> Vec<&Comment> {
        match normalize_query(query) {
            None => self.comments.iter().collect(),
            Some(q) => self
                .comments
                .iter()
                .filter(|c| c.text.to_lowercase().contains(&q))
                .collect(),
        }
    }

    pub fn create_user(&mut self, input: NewUser) -> Result<User> {
        if self.users.iter().any(|u| u.email == input.email) {
            return Err(BlogError::Validation(format!(
                "email '{}' is already taken",
                input.email
            )));
        }

        let id = self.generate_id(&self.users)?;
        let user = User::new(id, input.name, input.email).with_age(input.age);
        Ok(self.users.insert(user)?.clone())
    }

    pub fn create_post(&mut self, input: NewPost) -> Result<Post> {
        if !self.users.contains(&input.author) {
            return Err(BlogError::NotFound(format!("user '{}'", input.author)));
        }

        let id = self.generate_id(&self.posts)?;
        let post = Post::new(id, input.title, input.body, input.author)
            .with_published(input.published);
        Ok(self.posts.insert(post)?.clone())
    }

    pub fn create_comment(&mut self, input: NewComment) -> Result<Comment> {
        if !self.users.contains(&input.author) {
            return Err(BlogError::NotFound(format!("user '{}'", input.author)));
        }
        let published = self
            .posts
            .get(&input.post)
            .is_some_and(|post| post.published);
        if !published {
            return Err(BlogError::NotFound(format!(
                "published post '{}'",
                input.post
            )));
        }

        let id = self.generate_id(&self.comments)?;
        let comment = Comment::new(id, input.text, input.author, input.post);
        Ok(self.comments.insert(comment)?.clone())
    }

    fn generate_id<T: Record>(&self, table: &Table<T>) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = nanoid::format(
                nanoid::rngs::default,
                &nanoid::alphabet::SAFE,
                self.id_length,
            );
            if !table.contains(&id) {
                return Ok(id);
            }
        }
        Err(BlogError::Config(format!(
            "no free {} id of length {}; raise store.id_length",
            T::KIND,
            self.id_length
        )))
    }
}

fn normalize_query(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            age: None,
        }
    }

    fn new_comment(author: &str, post: &str) -> NewComment {
        NewComment {
            text: "nice".to_string(),
            author: author.to_string(),
            post: post.to_string(),
        }
    }

    #[test]
    fn test_duplicate_email_rejected_for_every_user() {
        let mut store = Store::sample().unwrap();
        let emails: Vec<String> = store.users().iter().map(|u| u.email.clone()).collect();

        for email in emails {
            let before = store.users().len();
            let err = store.create_user(new_user(&email)).unwrap_err();
            assert!(matches!(err, BlogError::Validation(_)));
            assert_eq!(store.users().len(), before);
        }
    }

    #[test]
    fn test_create_user_appends_with_unique_id() {
        let mut store = Store::sample().unwrap();
        let before = store.users().len();

        let user = store
            .create_user(NewUser {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                age: Some(30),
            })
            .unwrap();

        assert_eq!(store.users().len(), before + 1);
        assert_eq!(store.users().last(), Some(&user));
        assert_eq!(user.id.len(), 21);
        assert_eq!(user.age, Some(30));
        let ids: HashSet<&str> = store.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), store.users().len());
    }

    #[test]
    fn test_email_match_is_exact() {
        let mut store = Store::sample().unwrap();
        assert!(store.create_user(new_user("DATRADITO@gmal.com")).is_ok());
    }

    #[test]
    fn test_create_post_unknown_author() {
        let mut store = Store::sample().unwrap();
        let before = store.posts().len();

        let err = store
            .create_post(NewPost {
                title: "t".to_string(),
                body: "b".to_string(),
                published: true,
                author: "999".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, BlogError::NotFound(_)));
        assert_eq!(store.posts().len(), before);
    }

    #[test]
    fn test_create_post_links_author() {
        let mut store = Store::sample().unwrap();
        let post = store
            .create_post(NewPost {
                title: "t".to_string(),
                body: "b".to_string(),
                published: false,
                author: "3".to_string(),
            })
            .unwrap();

        assert_eq!(store.user(&post.author).unwrap().name, "Santi");
        assert!(store.posts_by_author("3").iter().any(|p| p.id == post.id));
    }

    #[test]
    fn test_create_comment_on_unpublished_post() {
        let mut store = Store::sample().unwrap();
        let before = store.comments().len();
        let err = store.create_comment(new_comment("1", "a2")).unwrap_err();
        assert!(matches!(err, BlogError::NotFound(_)));
        assert_eq!(store.comments().len(), before);
    }

    #[test]
    fn test_create_comment_checks_both_references() {
        let mut store = Store::sample().unwrap();
        assert!(matches!(
            store.create_comment(new_comment("999", "a1")),
            Err(BlogError::NotFound(_))
        ));
        assert!(matches!(
            store.create_comment(new_comment("1", "zz")),
            Err(BlogError::NotFound(_))
        ));

        let comment = store.create_comment(new_comment("1", "a1")).unwrap();
        assert_eq!(store.comments_on_post("a1").len(), 3);
        assert_eq!(store.comment(&comment.id), Some(&comment));
    }

    #[test]
    fn test_search_users_case_insensitive() {
        let store = Store::sample().unwrap();
        let names: Vec<&str> = store
            .search_users(Some("dani"))
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dani"]);

        let names: Vec<&str> = store
            .search_users(Some("I"))
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dani", "Giuli", "Santi"]);
    }

    #[test]
    fn test_search_without_query_lists_in_order() {
        let store = Store::sample().unwrap();
        let first: Vec<&str> = store.search_users(None).iter().map(|u| u.id.as_str()).collect();
        let second: Vec<&str> = store
            .search_users(Some(""))
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(first, vec!["1", "2", "3"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_posts_matches_title_or_body() {
        let store = Store::sample().unwrap();
        let by_body: Vec<&str> = store
            .search_posts(Some("PRUEBA"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(by_body, vec!["a3", "a4"]);

        let by_title: Vec<&str> = store
            .search_posts(Some("segundo"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(by_title, vec!["a2"]);
    }

    #[test]
    fn test_search_comments_per_comment() {
        let store = Store::sample().unwrap();
        let ids: Vec<&str> = store
            .search_comments(Some("lorem ipsum"))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert!(store.search_comments(Some("no such words")).is_empty());
    }

    #[test]
    fn test_relationship_lookups() {
        let store = Store::sample().unwrap();
        assert_eq!(store.posts_by_author("2").len(), 2);
        assert_eq!(store.comments_by_author("2").len(), 2);
        assert_eq!(store.comments_on_post("a1").len(), 2);
        assert!(store.comments_on_post("a4").is_empty());
    }

    #[test]
    fn test_from_config_without_seed() {
        let mut config = BlogConfig::default();
        config.store.seed = false;
        let store = Store::from_config(&config, Path::new(".")).unwrap();
        assert!(store.users().is_empty());
        assert!(store.posts().is_empty());
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_sample_loads_through_seed_checks() {
        let store = Store::sample().unwrap();
        assert_eq!(store.users().len(), 3);
        assert_eq!(store.posts().len(), 4);
        assert_eq!(store.comments().len(), 4);
        assert!(!store.post("a2").unwrap().published);
    }

    #[test]
    fn test_from_config_sample_uses_id_length() {
        let mut config = BlogConfig::default();
        config.store.id_length = 8;
        let mut store = Store::from_config(&config, Path::new(".")).unwrap();
        assert_eq!(store.users().len(), 3);
        let user = store.create_user(new_user("new@example.com")).unwrap();
        assert_eq!(user.id.len(), 8);
    }

    #[test]
    fn test_short_ids_respect_length() {
        let mut store = Store::new(4);
        let user = store.create_user(new_user("a@example.com")).unwrap();
        assert_eq!(user.id.len(), 4);
    }
}
