use time::OffsetDateTime;

/// Current wall-clock time in UTC.
///
/// Single source for "now" so the job stamps processed_at consistently.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Formats a timestamp as RFC 3339 for logs and serialized records.
pub fn format_rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| ts.to_string())
}
