//! Quote-of-the-day selection for the footer bar.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

const MILLIS_PER_DAY: u64 = 86_400_000;

pub const QUOTES: &[&str] = &[
    "One day at a time.",
    "Progress, not perfection.",
    "Easy does it.",
    "First things first.",
    "Keep coming back.",
    "Live and let live.",
    "This too shall pass.",
    "Just for today.",
];

/// Quote shown on day `day` since the Unix epoch. Stable for a whole day.
#[must_use]
pub fn quote_for_day(day: u64) -> &'static str {
    let len = QUOTES.len() as u64;
    // `len` is non-zero and the remainder fits in usize.
    #[allow(clippy::cast_possible_truncation)]
    let index = (day % len) as usize;
    QUOTES[index]
}

/// Days elapsed since the Unix epoch, per the local clock.
pub fn current_day() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = js_sys::Date::now() as u64;
        millis / MILLIS_PER_DAY
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        millis / MILLIS_PER_DAY
    }
}
