use chrono::{DateTime, Local};

/// Fixed, locale-independent rendering used for the log file and listings.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_local(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_format_local_parses_back() {
        let rendered = format_local(&Local::now());
        assert!(NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT).is_ok());
    }
}
