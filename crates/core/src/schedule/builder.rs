//! Preferences → ordered post slots over the 28-day horizon.

use chrono::{Days, NaiveDate, NaiveDateTime};
use contentplan_domain::constants::{
    DAILY_STEP_DAYS, EARLIEST_POST_HOUR, FALLBACK_SLOTS, FALLBACK_STEP_DAYS, HORIZON_DAYS,
    LATEST_POST_HOUR, THREE_TIMES_WEEKLY_SLOTS, THREE_TIMES_WEEKLY_STEP_DAYS, WEEKLY_STEP_DAYS,
};
use contentplan_domain::{Cadence, ContentPreference, PostSlot};
use tracing::debug;

use super::random::RandomSource;
use crate::templates::{caption_for, prompt_for};

/// Day offsets from the generation date: `count` slots spaced `step_days`
/// apart, starting at offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPattern {
    /// Number of slots.
    pub count: u32,
    /// Days between consecutive slots.
    pub step_days: u32,
}

impl SlotPattern {
    /// Slot count and spacing for `cadence`.
    pub fn for_cadence(cadence: Cadence) -> Self {
        match cadence {
            Cadence::Daily => Self { count: HORIZON_DAYS, step_days: DAILY_STEP_DAYS },
            // Roughly three per week; the count is fixed rather than derived.
            Cadence::ThreeTimesWeekly => {
                Self { count: THREE_TIMES_WEEKLY_SLOTS, step_days: THREE_TIMES_WEEKLY_STEP_DAYS }
            }
            Cadence::Weekly => {
                Self { count: HORIZON_DAYS / WEEKLY_STEP_DAYS, step_days: WEEKLY_STEP_DAYS }
            }
            Cadence::Unrecognized => Self { count: FALLBACK_SLOTS, step_days: FALLBACK_STEP_DAYS },
        }
    }

    /// Strictly increasing offsets in days.
    pub fn day_offsets(self) -> impl Iterator<Item = u32> {
        (0..self.count).map(move |index| index * self.step_days)
    }
}

/// Calendar dates for each slot of `cadence`, ascending.
pub fn plan_dates(cadence: Cadence, start: NaiveDate) -> Vec<NaiveDate> {
    SlotPattern::for_cadence(cadence)
        .day_offsets()
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .collect()
}

/// 12-hour clock string, e.g. `9:05 AM`, `12:30 PM`.
pub fn display_time(hour: u32, minute: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let clock_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock_hour}:{minute:02} {suffix}")
}

/// Build the slot sequence for `preference`, dated from `generated_at`.
///
/// Slot `i` uses category `categories[i % len]` and template seed `i`.
/// Display times are drawn from `random` and carry no ordering guarantee.
/// Never fails: an empty category list yields template text for the
/// default category.
pub fn build_schedule(
    preference: &ContentPreference,
    generated_at: NaiveDateTime,
    random: &mut dyn RandomSource,
) -> Vec<PostSlot> {
    let dates = plan_dates(preference.cadence, generated_at.date());
    let categories = &preference.content_categories;

    let slots: Vec<PostSlot> = dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let category = if categories.is_empty() {
                ""
            } else {
                categories[index % categories.len()].as_str()
            };

            let hour = random.next_in_range(EARLIEST_POST_HOUR, LATEST_POST_HOUR);
            let minute = random.next_in_range(0, 59);

            PostSlot {
                day: date.format("%A").to_string(),
                date: date.format("%b %-d").to_string(),
                time: display_time(hour, minute),
                image_prompt: prompt_for(category, index).to_string(),
                caption: caption_for(category, &preference.description, index),
            }
        })
        .collect();

    debug!(
        cadence = %preference.cadence,
        categories = categories.len(),
        slots = slots.len(),
        start = %generated_at.date(),
        "schedule built"
    );

    slots
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::schedule::random::RngSource;
    use crate::templates::prompts_for_category;

    struct Fixed(Vec<u32>);

    impl RandomSource for Fixed {
        fn next_in_range(&mut self, low: u32, _high: u32) -> u32 {
            if self.0.is_empty() {
                low
            } else {
                self.0.remove(0)
            }
        }
    }

    fn moment(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    }

    fn prefs(categories: &[&str], cadence: Cadence) -> ContentPreference {
        ContentPreference::new(
            categories.iter().copied(),
            "fresh seasonal recipes for home cooks",
            cadence,
            "home cooks",
        )
    }

    #[test]
    fn slot_counts_follow_cadence() {
        let start = moment(2025, 1, 6);
        let mut random = RngSource::seeded(1);
        let cases = [
            (Cadence::Daily, 28),
            (Cadence::ThreeTimesWeekly, 12),
            (Cadence::Weekly, 4),
            (Cadence::Unrecognized, 10),
        ];

        for (cadence, expected) in cases {
            let slots = build_schedule(&prefs(&["food"], cadence), start, &mut random);
            assert_eq!(slots.len(), expected, "{cadence}");
        }
    }

    #[test]
    fn planned_dates_strictly_increase() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        for cadence in [Cadence::Daily, Cadence::ThreeTimesWeekly, Cadence::Weekly, Cadence::Unrecognized] {
            let dates = plan_dates(cadence, start);
            assert_eq!(dates[0], start);
            assert!(dates.windows(2).all(|pair| pair[0] < pair[1]), "{cadence}");
            assert!(dates.last().unwrap() < &start.checked_add_days(Days::new(30)).unwrap());
        }
    }

    #[test]
    fn three_times_weekly_steps_every_other_day() {
        let offsets: Vec<u32> = SlotPattern::for_cadence(Cadence::ThreeTimesWeekly).day_offsets().collect();
        assert_eq!(offsets, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22]);

        let fallback: Vec<u32> = SlotPattern::for_cadence(Cadence::Unrecognized).day_offsets().collect();
        assert_eq!(fallback, vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27]);
    }

    #[test]
    fn derives_weekday_and_short_date() {
        // 2025-01-06 is a Monday.
        let slots = build_schedule(&prefs(&["food"], Cadence::Weekly), moment(2025, 1, 6), &mut Fixed(vec![]));

        assert_eq!(slots[0].day, "Monday");
        assert_eq!(slots[0].date, "Jan 6");
        assert_eq!(slots[3].date, "Jan 27");
        assert!(slots.iter().all(|slot| slot.day == "Monday"));
    }

    #[test]
    fn dates_cross_month_boundaries() {
        let slots = build_schedule(&prefs(&["food"], Cadence::Daily), moment(2024, 2, 27), &mut Fixed(vec![]));
        let dates: Vec<&str> = slots.iter().take(4).map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["Feb 27", "Feb 28", "Feb 29", "Mar 1"]);
    }

    #[test]
    fn display_time_uses_twelve_hour_clock() {
        assert_eq!(display_time(8, 5), "8:05 AM");
        assert_eq!(display_time(12, 0), "12:00 PM");
        assert_eq!(display_time(20, 59), "8:59 PM");
        assert_eq!(display_time(0, 30), "12:30 AM");
    }

    #[test]
    fn injected_random_source_controls_times() {
        let mut random = Fixed(vec![14, 7, 9, 45]);
        let slots = build_schedule(&prefs(&["food"], Cadence::Weekly), moment(2025, 1, 6), &mut random);
        assert_eq!(slots[0].time, "2:07 PM");
        assert_eq!(slots[1].time, "9:45 AM");
    }

    #[test]
    fn times_stay_within_posting_window() {
        let mut random = RngSource::from_entropy();
        let slots = build_schedule(&prefs(&["tech"], Cadence::Daily), moment(2025, 5, 1), &mut random);
        for slot in &slots {
            let (clock, suffix) = slot.time.split_once(' ').unwrap();
            let hour: u32 = clock.split(':').next().unwrap().parse().unwrap();
            let hour24 = match (suffix, hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                (_, h) => h + 12,
            };
            assert!((8..=20).contains(&hour24), "{}", slot.time);
        }
    }

    #[test]
    fn categories_rotate_round_robin() {
        let slots = build_schedule(
            &prefs(&["food", "travel"], Cadence::Daily),
            moment(2025, 1, 6),
            &mut Fixed(vec![]),
        );

        assert_eq!(slots[0].image_prompt, prompt_for("food", 0));
        assert_eq!(slots[1].image_prompt, prompt_for("travel", 1));
        assert_eq!(slots[2].image_prompt, prompt_for("food", 2));
        assert_eq!(
            slots[4].caption,
            "Elevating everyday food moments with fresh seasonal recipes for home. #lifestyle #growth"
        );
        assert_eq!(slots[5].caption, "Dedicated to fresh seasonal recipes for home. Who else is on this journey? 👇");
        assert!(prompts_for_category("travel").contains(&slots[3].image_prompt.as_str()));
    }

    #[test]
    fn same_seed_same_schedule() {
        let preference = prefs(&["beauty", "fitness"], Cadence::ThreeTimesWeekly);
        let a = build_schedule(&preference, moment(2025, 6, 1), &mut RngSource::seeded(9));
        let b = build_schedule(&preference, moment(2025, 6, 1), &mut RngSource::seeded(9));
        assert_eq!(a, b);
    }
}
