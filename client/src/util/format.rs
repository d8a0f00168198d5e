//! Display formatting for stored timestamps.
//!
//! The store hands back RFC 3339 strings; `datetime-local` inputs produce
//! `YYYY-MM-DDTHH:MM`; `timestamp` columns without a zone may carry
//! fractional seconds. All are shown in the offset they were stored with.
//! Anything unparsable is shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(at.date(), at.time()));
    }
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| {
            PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"))
        })
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .ok()
}

/// `"dd Month, HH:mm - HH:mm"` for a reservation's start and end.
#[must_use]
pub fn format_reservation_window(start: &str, end: &str) -> String {
    let formatted = parse_timestamp(start).zip(parse_timestamp(end)).and_then(|(from, to)| {
        let head = from
            .format(format_description!("[day] [month repr:long], [hour]:[minute]"))
            .ok()?;
        let tail = to.format(format_description!("[hour]:[minute]")).ok()?;
        Some(format!("{head} - {tail}"))
    });
    formatted.unwrap_or_else(|| format!("{start} - {end}"))
}

/// `dd/mm/yyyy`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|at| at.format(format_description!("[day]/[month]/[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}
