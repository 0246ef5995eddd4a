use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLocale {
    #[default]
    En,
    PtBr,
}

#[derive(Debug, Error)]
#[error("unsupported display locale `{0}`")]
pub struct UnknownLocale(String);

impl FromStr for DisplayLocale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "pt" | "pt-br" => Ok(Self::PtBr),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

impl DisplayLocale {
    pub fn today_label(self) -> &'static str {
        match self {
            Self::En => "Today",
            Self::PtBr => "Hoje",
        }
    }

    fn weekday_abbrev(self, weekday: Weekday) -> &'static str {
        match self {
            Self::En => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
            Self::PtBr => match weekday {
                Weekday::Mon => "seg",
                Weekday::Tue => "ter",
                Weekday::Wed => "qua",
                Weekday::Thu => "qui",
                Weekday::Fri => "sex",
                Weekday::Sat => "sáb",
                Weekday::Sun => "dom",
            },
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Moves `date` by whole calendar days. Stays put at chrono's date bounds.
pub fn shift_day(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

/// Label shown above the goal list: the locale's "today" word, or
/// `dd/mm • weekday`.
///
/// The date is pinned to 12:00 before formatting; the same value is the
/// remote query key, so the label must never drift to a neighbouring day.
pub fn format_for_display(date: NaiveDate, today: NaiveDate, locale: DisplayLocale) -> String {
    if date == today {
        return locale.today_label().to_string();
    }

    let Some(midday) = date.and_hms_opt(12, 0, 0) else {
        return date_key(date);
    };
    format!(
        "{} • {}",
        midday.format("%d/%m"),
        locale.weekday_abbrev(midday.weekday())
    )
}
