use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::model::Habit;

fn completion_dates(habit: &Habit) -> BTreeSet<NaiveDate> {
    habit
        .completions
        .iter()
        .filter_map(|c| NaiveDate::parse_from_str(&c.date, "%Y-%m-%d").ok())
        .collect()
}

/// Consecutive completed days ending on `today`. A habit not completed
/// today has a current streak of zero, however long yesterday's run was.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let dates = completion_dates(habit);
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

/// Longest run anywhere in the history; consecutive means exactly one
/// calendar day apart.
pub fn longest_streak(habit: &Habit) -> u32 {
    let dates = completion_dates(habit);
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(p) if date.signed_duration_since(p) == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}
