//! 展示格式模块
//!
//! 表格里的日期与金额格式化：
//! - `format_datetime`: RFC 3339 时间串 → `DD/MM/YYYY HH:mm`
//! - `format_money`: 金额 → `$0.00`

use chrono::{DateTime, NaiveDateTime};

/// 表格日期格式
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// 格式化服务端返回的时间串
///
/// 保留时间串自带的时区偏移，不做本地时区换算。
/// 无法解析时原样返回。
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    // 部分接口返回不带时区的 ISO 时间
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// 可选时间串，缺失时显示破折号
pub fn format_optional_datetime(raw: Option<&str>) -> String {
    raw.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

#[inline]
pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_datetime("2025-07-01T10:30:00Z"), "01/07/2025 10:30");
        assert_eq!(
            format_datetime("2025-07-04T14:00:00.000+02:00"),
            "04/07/2025 14:00"
        );
    }

    #[test]
    fn test_format_naive_and_invalid() {
        assert_eq!(format_datetime("2025-07-02T09:15:00"), "02/07/2025 09:15");
        assert_eq!(format_datetime("ayer"), "ayer");
        assert_eq!(format_optional_datetime(None), "-");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(10.0), "$10.00");
        assert_eq!(format_money(3.456), "$3.46");
    }
}
