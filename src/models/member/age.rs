use chrono::{Datelike, NaiveDate};

/// Whole years between `birth_date` (`YYYY-MM-DD`) and `today`.
///
/// `None` for an empty or unparseable date, or a birth date after `today`.
pub fn calculate_age(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let birth = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").ok()?;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn birthday_not_yet_reached_subtracts_a_year() {
        assert_eq!(calculate_age("2000-06-15", d(2024, 6, 14)), Some(23));
        assert_eq!(calculate_age("2000-06-15", d(2024, 6, 15)), Some(24));
    }

    #[test]
    fn invalid_and_future_dates_have_no_age() {
        assert_eq!(calculate_age("", d(2024, 1, 1)), None);
        assert_eq!(calculate_age("15/06/2000", d(2024, 1, 1)), None);
        assert_eq!(calculate_age("2030-01-01", d(2024, 1, 1)), None);
    }
}
