use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-supplied log date: reserved keywords, a relative offset
/// (-Nd), or a plain YYYY-MM-DD. Anything else is rejected rather than
/// guessed at.
pub fn parse_log_date(input: &str) -> Result<NaiveDate> {
    parse_log_date_from(input, today())
}

// Anchored variant so tests don't depend on the wall clock.
fn parse_log_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    // Relative format: -Nd (N days ago). N must be plain digits so a
    // doubled sign can't silently resolve to a future date.
    if let Some(rest) = input.strip_prefix('-') {
        if let Some(num_str) = rest.strip_suffix('d') {
            if num_str.is_empty() || !num_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(anyhow!("Invalid relative date: {}", input));
            }
            let count: i64 = num_str
                .parse()
                .map_err(|_| anyhow!("Invalid relative date: {}", input))?;
            return Ok(today - Duration::days(count));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_log_date_from("today", anchor()).unwrap(), anchor());
        assert_eq!(parse_log_date_from("tod", anchor()).unwrap(), anchor());
        assert_eq!(
            parse_log_date_from("yesterday", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(
            parse_log_date_from("-3d", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }

    #[test]
    fn test_double_signed_relative_days_rejected() {
        // "--3d" must error, not resolve three days forward.
        assert!(parse_log_date_from("--3d", anchor()).is_err());
        assert!(parse_log_date_from("-+3d", anchor()).is_err());
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_log_date_from("2024-01-31", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        assert!(parse_log_date_from("2024-02-30", anchor()).is_err());
        assert!(parse_log_date_from("2024-13-01", anchor()).is_err());
        assert!(parse_log_date_from("soon", anchor()).is_err());
    }
}
