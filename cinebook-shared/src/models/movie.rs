use serde::{Deserialize, Serialize};

/// Movie document as stored in the `movies` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>, // minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub release_date: Option<String>,
}

/// Validated movie attributes, not yet assigned an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub release_date: Option<String>,
}

impl NewMovie {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            duration: self.duration,
            release_date: self.release_date,
        }
    }
}
