use crate::domain::{
    entities::schedule::{group_by_day, DaySchedule},
    repositories::schedule::ScheduleRepository,
};

#[derive(Clone)]
pub struct ScheduleService<R>
where
    R: ScheduleRepository,
{
    repo: R,
}

impl<R> ScheduleService<R>
where
    R: ScheduleRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The broadcast week, one bucket per day from Sunday to Saturday.
    /// Days without airings still show up with an empty entry list.
    pub async fn fetch_weekly_schedule(&self) -> Vec<DaySchedule> {
        let entries = match self.repo.get_weekly_schedule().await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch weekly schedule: {e}");
                vec![]
            }
        };

        group_by_day(entries)
    }
}
