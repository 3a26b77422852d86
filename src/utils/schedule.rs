//! 排课日期推导

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// 推导排课窗口内的全部上课时刻
///
/// 从 start（含）到 end（不含）逐日步进，命中目标星期的日期保留
/// start 的时分秒作为上课时刻。星期名无法解析时不命中任何日期。
pub fn session_dates(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    day_of_week: &str,
) -> Vec<DateTime<Utc>> {
    let Ok(target) = day_of_week.parse::<Weekday>() else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut current = start;
    while current < end {
        if current.weekday() == target {
            dates.push(current);
        }
        current += Duration::days(1);
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_two_mondays_in_two_week_window() {
        // 2024-01-01 是周一；窗口到 01-15（不含）共两个周一
        let dates = session_dates(utc(2024, 1, 1, 9), utc(2024, 1, 15, 9), "Monday");
        assert_eq!(dates, vec![utc(2024, 1, 1, 9), utc(2024, 1, 8, 9)]);
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let dates = session_dates(utc(2024, 1, 1, 14), utc(2024, 1, 9, 0), "Wednesday");
        assert_eq!(dates, vec![utc(2024, 1, 3, 14)]);
    }

    #[test]
    fn test_start_day_not_matching_is_skipped() {
        // 窗口首日是周一，目标是周五
        let dates = session_dates(utc(2024, 1, 1, 9), utc(2024, 1, 8, 9), "Friday");
        assert_eq!(dates, vec![utc(2024, 1, 5, 9)]);
    }

    #[test]
    fn test_end_is_exclusive() {
        // 01-08 正好等于窗口终点，不应生成
        let dates = session_dates(utc(2024, 1, 1, 9), utc(2024, 1, 8, 9), "Monday");
        assert_eq!(dates, vec![utc(2024, 1, 1, 9)]);
    }

    #[test]
    fn test_empty_or_inverted_window() {
        assert!(session_dates(utc(2024, 1, 1, 9), utc(2024, 1, 1, 9), "Monday").is_empty());
        assert!(session_dates(utc(2024, 1, 15, 9), utc(2024, 1, 1, 9), "Monday").is_empty());
    }

    #[test]
    fn test_unparsable_day_name_matches_nothing() {
        assert!(session_dates(utc(2024, 1, 1, 9), utc(2024, 2, 1, 9), "Someday").is_empty());
        assert!(session_dates(utc(2024, 1, 1, 9), utc(2024, 2, 1, 9), "").is_empty());
    }

    #[test]
    fn test_every_generated_date_matches_weekday() {
        let dates = session_dates(utc(2024, 1, 1, 9), utc(2024, 3, 1, 9), "Thursday");
        assert!(!dates.is_empty());
        assert!(dates.iter().all(|d| d.weekday() == Weekday::Thu));
    }
}
