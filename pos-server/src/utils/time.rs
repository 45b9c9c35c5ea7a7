//! 时间工具函数：业务时区转换
//!
//! Reports and history filters take calendar dates in the restaurant's
//! time zone; the ledger stores Unix millis. All conversions happen here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析 IANA 时区名称，失败返回 UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!("Invalid timezone '{}': {}, falling back to UTC", name, e);
        Tz::UTC
    })
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 本地时间 → Unix millis (业务时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
fn local_to_millis(naive: NaiveDateTime, tz: Tz) -> i64 {
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期开始 (00:00:00) → Unix millis (业务时区)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    local_to_millis(date.and_time(NaiveTime::MIN), tz)
}

/// 日期结束 → 次日 00:00:00 的 Unix millis (业务时区)
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// Unix millis → 业务时区本地时间
pub fn to_local(millis: i64, tz: Tz) -> DateTime<Tz> {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default();
    tz.from_utc_datetime(&utc.naive_utc())
}

/// 业务时区的"今天"
pub fn local_date(millis: i64, tz: Tz) -> NaiveDate {
    to_local(millis, tz).date_naive()
}

/// `[今天 00:00, 明天 00:00)` (业务时区)
pub fn today_range(now: i64, tz: Tz) -> (i64, i64) {
    let today = local_date(now, tz);
    (day_start_millis(today, tz), day_end_millis(today, tz))
}

/// 可选的 `from` / `to` 日期参数 → 毫秒区间
///
/// `to` 日期包含在内 (结束于次日零点)。
pub fn date_range_millis(
    from: Option<&str>,
    to: Option<&str>,
    tz: Tz,
) -> AppResult<(Option<i64>, Option<i64>)> {
    let from = from.map(parse_date).transpose()?;
    let to = to.map(parse_date).transpose()?;
    if let (Some(f), Some(t)) = (from, to)
        && f > t
    {
        return Err(AppError::validation(format!(
            "Start date {} is after end date {}",
            f, t
        )));
    }
    Ok((
        from.map(|d| day_start_millis(d, tz)),
        to.map(|d| day_end_millis(d, tz)),
    ))
}
