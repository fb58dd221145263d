use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }
}

/// Fields supplied by a `createUser` request; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}
