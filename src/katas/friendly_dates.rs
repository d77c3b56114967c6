use crate::utils::error::{KataError, Result};
use chrono::{Datelike, NaiveDate};

const KATA: &str = "friendly-dates";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        KataError::invalid_input(KATA, format!("'{}' is not a YYYY-MM-DD date: {}", input, e))
    })
}

/// 一年後的同一天；2/29 落在平年時改用 2/28
fn one_year_after(date: NaiveDate) -> NaiveDate {
    date.with_year(date.year() + 1)
        .or_else(|| NaiveDate::from_ymd_opt(date.year() + 1, date.month(), 28))
        .unwrap_or(NaiveDate::MAX)
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

fn month_day(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), ordinal(date.day()))
}

fn full_date(date: NaiveDate) -> String {
    format!("{}, {}", month_day(date), date.year())
}

pub fn make_friendly_dates(start: &str, end: &str, current_year: i32) -> Result<Vec<String>> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    if end < start {
        return Err(KataError::invalid_input(
            KATA,
            format!("range ends ({}) before it starts ({})", end, start),
        ));
    }

    if start == end {
        return Ok(vec![full_date(start)]);
    }

    let within_year = end < one_year_after(start);

    let start_text = if within_year && start.year() == current_year {
        month_day(start)
    } else {
        full_date(start)
    };

    let end_text = if !within_year {
        full_date(end)
    } else if start.year() == end.year() && start.month() == end.month() {
        ordinal(end.day())
    } else {
        month_day(end)
    };

    Ok(vec![start_text, end_text])
}
