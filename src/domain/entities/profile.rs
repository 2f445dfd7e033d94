use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
