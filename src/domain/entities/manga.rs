use async_graphql::Enum;
use chrono::NaiveDateTime;
use phf::phf_set;

#[derive(Debug, Clone, Default)]
pub struct Manga {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub views: i64,
    pub release_date: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Sort orders for catalogue browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Enum)]
#[graphql(rename_items = "lowercase")]
pub enum MangaSort {
    #[default]
    Popular,
    Newest,
    Rating,
    Title,
}

static STATUSES: phf::Set<&'static str> = phf_set! {
    "ongoing",
    "completed",
    "hiatus",
    "cancelled",
};

/// Normalize a status filter to its stored lowercase form. Unknown statuses
/// pass through unchanged and match no rows.
pub fn normalize_status(status: &str) -> String {
    let lowered = status.to_lowercase();
    if STATUSES.contains(lowered.as_str()) {
        lowered
    } else {
        status.to_string()
    }
}
