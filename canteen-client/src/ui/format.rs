//! Display formatting for money and timestamps

use chrono::NaiveDateTime;

pub const CURRENCY: &str = "₹";

/// `₹` followed by the amount with exactly two decimals
pub fn format_price(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY, amount)
}

/// Amount as entered, without padding decimals (`₹50`, `₹12.5`)
pub fn format_price_plain(amount: f64) -> String {
    format!("{}{}", CURRENCY, amount)
}

/// Indian English short date, e.g. `19 Oct 2026`
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%d %b %Y").to_string()
}

/// Indian English 12-hour time, e.g. `01:05 pm`
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%I:%M %P").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_price_always_two_decimals() {
        assert_eq!(format_price(50.0), "₹50.00");
        assert_eq!(format_price(12.5), "₹12.50");
        assert_eq!(format_price(0.0), "₹0.00");
        assert_eq!(format_price(99.999), "₹100.00");

        for amount in [0.1, 1.0, 15.25, 1234.5678, 1e6] {
            let formatted = format_price(amount);
            assert!(formatted.starts_with(CURRENCY));
            let decimals = formatted.rsplit('.').next().unwrap();
            assert_eq!(decimals.len(), 2, "{formatted}");
        }
    }

    #[test]
    fn test_plain_price() {
        assert_eq!(format_price_plain(50.0), "₹50");
        assert_eq!(format_price_plain(12.5), "₹12.5");
    }

    #[test]
    fn test_date_and_time() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(13, 5, 42)
            .unwrap();
        assert_eq!(format_date(&at), "19 Oct 2026");
        assert_eq!(format_time(&at), "01:05 pm");

        let morning = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_date(&morning), "02 Jan 2026");
        assert_eq!(format_time(&morning), "09:30 am");
    }
}
