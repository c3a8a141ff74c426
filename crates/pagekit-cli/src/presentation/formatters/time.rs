use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime};

/// Locale used for month names; unlisted languages read English
fn locale_for(lang: &str) -> Locale {
    match lang {
        "de" => Locale::de_DE,
        "es" => Locale::es_ES,
        "fr" => Locale::fr_FR,
        "it" => Locale::it_IT,
        "ja" => Locale::ja_JP,
        "ko" => Locale::ko_KR,
        "nl" => Locale::nl_NL,
        "pl" => Locale::pl_PL,
        "pt" => Locale::pt_BR,
        "ru" => Locale::ru_RU,
        "tr" => Locale::tr_TR,
        "uk" => Locale::uk_UA,
        "zh" => Locale::zh_CN,
        _ => Locale::en_US,
    }
}

/// Interpretation of an upstream ISO-8601 timestamp
enum EventTime {
    /// Carries an offset, shown as-is
    Zoned(DateTime<FixedOffset>),
    /// Local wall-clock time with no offset
    Floating(DateTime<FixedOffset>),
}

impl EventTime {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Zoned(date));
        }
        if let Ok(naive) = raw.parse::<NaiveDateTime>() {
            return Some(Self::Floating(naive.and_utc().fixed_offset()));
        }
        let naive = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?;
        Some(Self::Floating(naive.and_utc().fixed_offset()))
    }

    fn date(&self) -> &DateTime<FixedOffset> {
        match self {
            Self::Zoned(date) | Self::Floating(date) => date,
        }
    }
}

/// Long date with 24-hour time, e.g. "January 5, 2026, 16:00"
///
/// The time is shown in the event's own offset. Timestamps that do not parse
/// are printed verbatim.
pub fn format_event_datetime(raw: &str, lang: &str) -> String {
    match EventTime::parse(raw) {
        Some(time) => time
            .date()
            .format_localized("%B %-d, %Y, %H:%M", locale_for(lang))
            .to_string(),
        None => raw.to_string(),
    }
}

/// Short date, e.g. "Jan 5, 2026"
pub fn format_event_date(raw: &str, lang: &str) -> String {
    match EventTime::parse(raw) {
        Some(time) => time
            .date()
            .format_localized("%b %-d, %Y", locale_for(lang))
            .to_string(),
        None => raw.to_string(),
    }
}

/// Offset label shown next to the long date, e.g. "UTC+01:00"
///
/// `None` when the timestamp has no offset of its own.
pub fn format_offset(raw: &str) -> Option<String> {
    match EventTime::parse(raw)? {
        EventTime::Zoned(date) => Some(format!("UTC{}", date.format("%:z"))),
        EventTime::Floating(_) => None,
    }
}
