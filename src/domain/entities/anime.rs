use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default)]
pub struct Anime {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub episodes: Option<i64>,
    pub views: i64,
    pub release_date: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
    pub created_at: NaiveDateTime,
}
