use time::{Date, Month};

pub const HORIZON_MONTHS: usize = 36;
pub const ANCHOR_YEAR: i32 = 2026;
pub const ANCHOR_MONTH: Month = Month::January;

// Meetings per buyer per year, indexed by calendar year relative to the
// anchor. Extending the horizon means extending this table.
const MEETINGS_PER_BUYER_PER_YEAR: [f64; 3] = [3.0, 6.0, 10.0];

pub fn month_start(month_index: usize) -> Date {
    let months_from_january = ANCHOR_MONTH as usize - 1 + month_index;
    let year = ANCHOR_YEAR + (months_from_january / 12) as i32;
    let month = Month::try_from((months_from_january % 12 + 1) as u8)
        .expect("month number is always in 1..=12");

    Date::from_calendar_date(year, month, 1).expect("first of month is always a valid date")
}

pub fn activity_rate(year: i32) -> f64 {
    let offset = year - ANCHOR_YEAR;
    assert!(
        (0..MEETINGS_PER_BUYER_PER_YEAR.len() as i32).contains(&offset),
        "year {year} has no activity rate tier"
    );

    MEETINGS_PER_BUYER_PER_YEAR[offset as usize] / 12.0
}
