use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    /// 8-digit calendar format used by the KNMI CSV date column
    pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";
    /// Format used for console previews and plot axes
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Parse an 8-digit `YYYYMMDD` field into a midnight timestamp.
    pub fn parse_compact_date(raw: &str) -> Result<NaiveDateTime> {
        let trimmed = raw.trim();
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(anyhow!("not an 8-digit YYYYMMDD value: '{}'", raw));
        }
        let date = NaiveDate::parse_from_str(trimmed, Self::COMPACT_DATE_FORMAT)
            .map_err(|e| anyhow!("invalid calendar date '{}': {}", raw, e))?;
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("invalid calendar date '{}'", raw))
    }

    /// Reformat a timestamp back to its 8-digit form.
    pub fn to_compact_date(t: NaiveDateTime) -> String {
        t.format(Self::COMPACT_DATE_FORMAT).to_string()
    }

    /// Display form used in previews (date only; the series has no intraday
    /// resolution on load).
    pub fn to_display_date(t: NaiveDateTime) -> String {
        t.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_date_round_trip() {
        for raw in ["20060701", "19991231", "20080229"] {
            let parsed = TimeUtils::parse_compact_date(raw).unwrap();
            assert_eq!(TimeUtils::to_compact_date(parsed), raw);
        }
    }

    #[test]
    fn test_compact_date_rejects_malformed_input() {
        assert!(TimeUtils::parse_compact_date("2006-07-01").is_err());
        assert!(TimeUtils::parse_compact_date("2006071").is_err());
        assert!(TimeUtils::parse_compact_date("20061332").is_err()); // month 13
        assert!(TimeUtils::parse_compact_date("abcdefgh").is_err());
    }
}
