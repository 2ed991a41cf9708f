use serde::{Deserialize, Serialize};

use crate::util::new_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFolder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

impl BookmarkFolder {
    pub fn new(name: String) -> Self {
        BookmarkFolder {
            id: new_id(),
            name,
            bookmarks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: String, url: String) -> Self {
        Bookmark {
            id: new_id(),
            title,
            url,
        }
    }
}
