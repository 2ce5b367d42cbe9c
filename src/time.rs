//! The time expression sub-grammar.
//!
//! Recognized phrases (tokens joined by single spaces):
//! * anchors: `today`, `tonight`, `tomorrow`, `noon`
//! * clock times: `at 5pm`, `at 5:30am`
//! * a day followed by a clock time: `today at 5pm`, `tomorrow at 9am`, `on friday at 7:15pm`
//! * a weekday on its own: `on sunday`
//!
//! Parsing yields a [`TimeSpec`], which is only turned into a timestamp once a
//! reference time ("now") is supplied through [`TimeSpec::resolve`].

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RecognizerError, Result};

lazy_static! {
    // hour and minute are validated after capture, the period is mandatory
    static ref CLOCK_TIME: Regex = Regex::new(
        r"^(?:(?P<day>today|tomorrow|on [a-z]+) )?at (?P<hour>[0-9]{1,2})(?::(?P<minute>[0-9]{2}))?(?P<period>am|pm)$"
    ).unwrap();
    // a phrase still waiting for its clock time
    static ref PENDING_CLOCK_TIME: Regex = Regex::new(
        r"^(?:(?P<day>today|tomorrow|on [a-z]+) )?at$"
    ).unwrap();
}

/// Anchor words and the (day, hour) they stand for.
const ANCHORS: [(&str, Day, u32); 4] = [
    ("today", Day::Today, 14),
    ("tonight", Day::Today, 18),
    ("tomorrow", Day::Tomorrow, 9),
    ("noon", Day::Today, 12),
];

// weekdays without a clock time fall back to the same hour as "today"
const DEFAULT_HOUR: u32 = 14;

// ------------- Day -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Tomorrow,
    Next(Weekday),
}

impl Day {
    fn parse(phrase: &str) -> Option<Self> {
        match phrase {
            "today" => Some(Day::Today),
            "tomorrow" => Some(Day::Tomorrow),
            _ => phrase
                .strip_prefix("on ")
                .and_then(|weekday| weekday.parse::<Weekday>().ok())
                .map(Day::Next),
        }
    }
    fn default_hour(&self) -> u32 {
        match self {
            Day::Tomorrow => 9,
            _ => DEFAULT_HOUR,
        }
    }
    /// Days between `today` and this day. A weekday equal to today's means next week.
    pub fn days_after(&self, today: Weekday) -> i64 {
        match self {
            Day::Today => 0,
            Day::Tomorrow => 1,
            Day::Next(weekday) => {
                let ahead = (weekday.num_days_from_monday() + 7 - today.num_days_from_monday()) % 7;
                if ahead == 0 { 7 } else { i64::from(ahead) }
            }
        }
    }
}

// ------------- TimeSpec -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    day: Day,
    hour: u32,
    minute: u32,
}

impl TimeSpec {
    pub fn new(day: Day, hour: u32, minute: u32) -> Self {
        Self { day, hour, minute }
    }
    pub fn day(&self) -> Day {
        self.day
    }
    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    /// `now` moved to the target day with hour and minute replaced.
    // Hours are added to midnight rather than set, so the hour 24 that
    // "12pm" produces rolls over into the next day instead of failing.
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        let date = now.date() + Duration::days(self.day.days_after(now.weekday()));
        date.and_time(NaiveTime::MIN)
            + Duration::hours(i64::from(self.hour))
            + Duration::minutes(i64::from(self.minute))
            + Duration::seconds(i64::from(now.second()))
            + Duration::nanoseconds(i64::from(now.nanosecond()))
    }
}

/// Parses a complete time expression. `None` when the tokens are not one.
pub fn parse(tokens: &[String]) -> Option<TimeSpec> {
    let phrase = tokens.join(" ");
    if let Some((_, day, hour)) = ANCHORS.iter().find(|(anchor, _, _)| *anchor == phrase) {
        return Some(TimeSpec::new(*day, *hour, 0));
    }
    if let Some(captures) = CLOCK_TIME.captures(&phrase) {
        let day = match captures.name("day") {
            Some(day) => Day::parse(day.as_str())?,
            None => Day::Today,
        };
        let hour: u32 = captures["hour"].parse().ok()?;
        let minute: u32 = match captures.name("minute") {
            Some(minute) => minute.as_str().parse().ok()?,
            None => 0,
        };
        if hour > 23 || minute > 59 {
            return None;
        }
        // no special case for 12pm or 12am
        let hour = if &captures["period"] == "pm" && (1..=12).contains(&hour) {
            hour + 12
        } else {
            hour
        };
        return Some(TimeSpec::new(day, hour, minute));
    }
    Day::parse(&phrase).map(|day| TimeSpec::new(day, day.default_hour(), 0))
}

/// True for proper prefixes of a longer expression, such as `at` or `on sunday at`.
pub fn is_pending(tokens: &[String]) -> bool {
    let phrase = tokens.join(" ");
    if phrase == "on" {
        return true;
    }
    match PENDING_CLOCK_TIME.captures(&phrase) {
        Some(captures) => captures
            .name("day")
            .is_none_or(|day| Day::parse(day.as_str()).is_some()),
        None => false,
    }
}

/// Resolves the tokens against `now`, failing with the offending tokens.
pub fn normalize(tokens: &[String], now: NaiveDateTime) -> Result<NaiveDateTime> {
    parse(tokens)
        .map(|spec| spec.resolve(now))
        .ok_or_else(|| RecognizerError::MalformedTimeExpression {
            tokens: tokens.to_vec(),
        })
}
