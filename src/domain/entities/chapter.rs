use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default)]
pub struct Chapter {
    pub id: i64,
    pub manga_id: i64,
    pub number: f64,
    pub title: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub next: Option<i64>,
    pub prev: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ChapterImage {
    pub id: i64,
    pub chapter_id: i64,
    pub image_url: String,
    pub page_number: i64,
}
