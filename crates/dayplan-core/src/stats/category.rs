//! Per-category time accounting.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{DaySchedule, ScheduleCategory, TimeBlock};
use crate::registry::CategoryRegistry;
use crate::repository::ScheduleRepository;

/// Total minutes spent in one category over a window.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub category: ScheduleCategory,
    pub total_minutes: i64,
}

impl CategoryStat {
    pub fn total_hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}

/// Minutes of a single schedule filed under one category.
///
/// Block-additive: overlapping blocks each count in full.
pub fn minutes_for_category(schedule: &DaySchedule, category_id: Uuid) -> i64 {
    schedule
        .time_blocks
        .iter()
        .filter(|b| b.category_id == category_id)
        .map(TimeBlock::duration_minutes)
        .sum()
}

/// Category breakdown over a window of dates.
///
/// One row per registered category with a non-zero total, sorted descending
/// by minutes (registry order breaks ties). Categories with no time are
/// omitted, not zero-filled; minutes filed under deleted categories are not
/// reported here.
pub fn category_stats(
    dates: &[NaiveDate],
    repo: &mut ScheduleRepository,
    categories: &CategoryRegistry,
) -> Vec<CategoryStat> {
    let mut minutes_by_category: std::collections::HashMap<Uuid, i64> =
        std::collections::HashMap::new();
    for &date in dates {
        let schedule = repo.schedule(date);
        for block in &schedule.time_blocks {
            *minutes_by_category.entry(block.category_id).or_insert(0) +=
                block.duration_minutes();
        }
    }

    let mut stats: Vec<CategoryStat> = categories
        .all()
        .iter()
        .filter_map(|category| {
            let minutes = minutes_by_category.get(&category.id).copied().unwrap_or(0);
            (minutes > 0).then(|| CategoryStat {
                category: category.clone(),
                total_minutes: minutes,
            })
        })
        .collect();
    stats.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
    stats
}

/// Single-day category breakdown (used for the per-day chart).
pub fn daily_stats(
    date: NaiveDate,
    repo: &mut ScheduleRepository,
    categories: &CategoryRegistry,
) -> Vec<CategoryStat> {
    category_stats(&[date], repo, categories)
}

/// Minutes of a schedule whose blocks are filed under the category carrying
/// the overtime label.
///
/// This is the legacy accounting path, independent of the planned/actual
/// tracking values: one derives from block/category matching, the other
/// from explicit user entry. Both are surfaced simultaneously.
pub fn overtime_minutes(
    schedule: &DaySchedule,
    categories: &CategoryRegistry,
    overtime_label: &str,
) -> i64 {
    schedule
        .time_blocks
        .iter()
        .filter(|block| {
            categories
                .get(block.category_id)
                .is_some_and(|c| c.name == overtime_label)
        })
        .map(TimeBlock::duration_minutes)
        .sum()
}

/// [`overtime_minutes`] summed over a window of dates.
pub fn overtime_minutes_over(
    dates: &[NaiveDate],
    repo: &mut ScheduleRepository,
    categories: &CategoryRegistry,
    overtime_label: &str,
) -> i64 {
    dates
        .iter()
        .map(|&date| overtime_minutes(&repo.schedule(date), categories, overtime_label))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar;
    use crate::model::TimeBlock;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn setup() -> (ScheduleRepository, CategoryRegistry) {
        let repo = ScheduleRepository::open_memory().unwrap();
        let categories = CategoryRegistry::load(repo.db()).unwrap();
        (repo, categories)
    }

    fn add(repo: &mut ScheduleRepository, day: u32, category: Uuid, start_h: u32, end_h: u32) {
        repo.add_time_block(date(day), TimeBlock::new(category, start_h, 0, end_h, 0, ""))
            .unwrap();
    }

    #[test]
    fn weekly_stats_sum_matches_total_scheduled_minutes() {
        let (mut repo, categories) = setup();
        let work = categories.find_by_name("Work").unwrap().id;
        let meals = categories.find_by_name("Meals").unwrap().id;
        // 2026-08-03 is a Monday; spread blocks over the week.
        add(&mut repo, 3, work, 9, 17);
        add(&mut repo, 4, work, 9, 18);
        add(&mut repo, 4, meals, 19, 20);
        add(&mut repo, 9, meals, 12, 13);

        let week = calendar::week_dates(date(5));
        let stats = category_stats(&week, &mut repo, &categories);

        let stats_total: i64 = stats.iter().map(|s| s.total_minutes).sum();
        let schedules_total: i64 = week
            .iter()
            .map(|&d| repo.schedule(d).total_scheduled_minutes())
            .sum();
        assert_eq!(stats_total, schedules_total);
        assert_eq!(stats_total, (8 + 9 + 1 + 1) * 60);
    }

    #[test]
    fn zero_total_categories_are_omitted_and_rows_sorted_descending() {
        let (mut repo, categories) = setup();
        let work = categories.find_by_name("Work").unwrap().id;
        let sleep = categories.find_by_name("Sleep").unwrap().id;
        add(&mut repo, 3, work, 9, 11);
        add(&mut repo, 3, sleep, 0, 8);

        let stats = category_stats(&[date(3)], &mut repo, &categories);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category.id, sleep);
        assert_eq!(stats[0].total_minutes, 480);
        assert_eq!(stats[1].category.id, work);
        assert_eq!(stats[1].total_minutes, 120);
    }

    #[test]
    fn minutes_filed_under_deleted_category_disappear_from_stats() {
        let (mut repo, mut categories) = setup();
        let hobby = categories.find_by_name("Hobby").unwrap().id;
        add(&mut repo, 3, hobby, 20, 22);
        categories.remove(hobby);

        let stats = category_stats(&[date(3)], &mut repo, &categories);
        assert!(stats.is_empty());
        // The block itself is untouched and still resolvable for display.
        let schedule = repo.schedule(date(3));
        assert_eq!(schedule.time_blocks[0].category_id, hobby);
        assert_eq!(categories.display_name(hobby), "(unknown)");
    }

    #[test]
    fn overtime_by_label_is_independent_of_tracking_values() {
        let (mut repo, categories) = setup();
        let overtime = categories.find_by_name("Overtime").unwrap().id;
        let work = categories.find_by_name("Work").unwrap().id;
        add(&mut repo, 3, work, 9, 17);
        add(&mut repo, 3, overtime, 17, 19);

        let schedule = repo.schedule(date(3));
        assert_eq!(overtime_minutes(&schedule, &categories, "Overtime"), 120);
        assert_eq!(
            overtime_minutes_over(&[date(3), date(4)], &mut repo, &categories, "Overtime"),
            120
        );
        // No tracking value was ever written.
        assert!(schedule.tracking_values.is_empty());
    }

    #[test]
    fn daily_stats_is_the_single_day_window() {
        let (mut repo, categories) = setup();
        let work = categories.find_by_name("Work").unwrap().id;
        add(&mut repo, 3, work, 9, 10);
        let daily = daily_stats(date(3), &mut repo, &categories);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].total_minutes, 60);
        assert_eq!(minutes_for_category(&repo.schedule(date(3)), work), 60);
    }
}
