use async_graphql::{Context, Object, Result, SimpleObject};

use crate::{
    domain::{entities, services::schedule::ScheduleService},
    infrastructure::domain::repositories::schedule::ScheduleRepositoryImpl,
    presentation::graphql::anime::Anime,
};

#[derive(SimpleObject)]
pub struct ScheduleEntry {
    pub anime: Anime,
    pub time: Option<String>,
}

#[derive(SimpleObject)]
pub struct DaySchedule {
    pub day: String,
    pub entries: Vec<ScheduleEntry>,
}

impl From<entities::schedule::DaySchedule> for DaySchedule {
    fn from(val: entities::schedule::DaySchedule) -> Self {
        Self {
            day: val.day,
            entries: val
                .entries
                .into_iter()
                .map(|entry| ScheduleEntry {
                    anime: entry.anime.into(),
                    time: entry.time,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct ScheduleRoot;

#[Object]
impl ScheduleRoot {
    /// The broadcast week, Sunday through Saturday, one bucket per day.
    async fn schedule(&self, ctx: &Context<'_>) -> Result<Vec<DaySchedule>> {
        let svc = ctx.data::<ScheduleService<ScheduleRepositoryImpl>>()?;

        Ok(svc
            .fetch_weekly_schedule()
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
