//! Wall-clock helpers for greetings and journal dates.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Greeting for a local hour of day (0..=23).
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Local hour of day; noon outside the browser.
pub fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

/// `YYYY-MM-DD` from calendar parts.
#[must_use]
pub fn format_iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_iso_date(1970, 1, 1)
    }
}

/// Milliseconds since the epoch, used for locally unique ids.
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
