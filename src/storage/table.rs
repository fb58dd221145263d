use crate::error::{BlogError, Result};
use crate::model::{Comment, Post, User};
use std::collections::HashMap;

/// A record addressable by a unique string id.
pub trait Record {
    /// Singular noun used in error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Post {
    const KIND: &'static str = "post";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Comment {
    const KIND: &'static str = "comment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered collection with an id index.
///
/// Rows are append-only, so positions stored in the index never go stale.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<T>) -> Result<Self> {
        let mut table = Self::new();
        for row in rows {
            table.insert(row)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, row: T) -> Result<&T> {
        if self.index.contains_key(row.id()) {
            return Err(BlogError::Validation(format!(
                "{} id '{}' already exists",
                T::KIND,
                row.id()
            )));
        }
        let position = self.rows.len();
        self.index.insert(row.id().to_string(), position);
        self.rows.push(row);
        Ok(&self.rows[position])
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
