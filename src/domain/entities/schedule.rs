use itertools::Itertools;

use super::anime::Anime;

pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One broadcast slot, already joined to its anime.
#[derive(Debug, Clone)]
pub struct ScheduledAnime {
    pub anime: Anime,
    pub day: String,
    pub time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub day: String,
    pub entries: Vec<ScheduledAnime>,
}

/// Group broadcast slots into the seven weekdays, Sunday first. Every day is
/// present even when nothing airs; rows keep their incoming time order.
pub fn group_by_day(entries: Vec<ScheduledAnime>) -> Vec<DaySchedule> {
    let mut by_day = entries
        .into_iter()
        .into_group_map_by(|entry| entry.day.clone());

    DAYS.iter()
        .map(|day| DaySchedule {
            day: (*day).to_string(),
            entries: by_day.remove(*day).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(title: &str, day: &str, time: &str) -> ScheduledAnime {
        ScheduledAnime {
            anime: Anime {
                title: title.to_string(),
                ..Default::default()
            },
            day: day.to_string(),
            time: Some(time.to_string()),
        }
    }

    #[test]
    fn test_group_by_day_covers_whole_week() {
        let days = group_by_day(vec![]);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day, "Sunday");
        assert_eq!(days[6].day, "Saturday");
        assert!(days.iter().all(|day| day.entries.is_empty()));
    }

    #[test]
    fn test_group_by_day_slots_entries() {
        let days = group_by_day(vec![
            entry("a", "Monday", "09:00"),
            entry("b", "Friday", "12:30"),
            entry("c", "Monday", "17:00"),
        ]);

        assert_eq!(days[1].day, "Monday");
        assert_eq!(days[1].entries.len(), 2);
        assert_eq!(days[1].entries[0].anime.title, "a");
        assert_eq!(days[1].entries[1].anime.title, "c");
        assert_eq!(days[5].entries.len(), 1);
    }

    #[test]
    fn test_group_by_day_drops_unknown_days() {
        let days = group_by_day(vec![entry("a", "Someday", "09:00")]);

        assert!(days.iter().all(|day| day.entries.is_empty()));
    }
}
