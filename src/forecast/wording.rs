//! Russian phrases that depend on the forecast window length.

/// "1 час", "3 часа", "12 часов", "21 час" ...
#[must_use]
pub fn hours(n: u32) -> String {
    let unit = match (n % 10, n % 100) {
        (_, 11..=14) => "часов",
        (1, _) => "час",
        (2..=4, _) => "часа",
        _ => "часов",
    };
    format!("{n} {unit}")
}

/// Heading above the forecast table.
#[must_use]
pub fn window_heading(window_hours: u32) -> String {
    format!("Прогноз на {}", hours(window_hours))
}

/// Shown instead of the table when no hourly point falls into the window.
#[must_use]
pub fn no_forecast(window_hours: u32) -> String {
    let n = window_hours;
    let phrase = if n % 10 == 1 && n % 100 != 11 {
        format!("ближайший {}", hours(n))
    } else {
        format!("ближайшие {}", hours(n))
    };
    format!("Данные прогноза на {phrase} отсутствуют")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_plurals() {
        assert_eq!(hours(1), "1 час");
        assert_eq!(hours(3), "3 часа");
        assert_eq!(hours(6), "6 часов");
        assert_eq!(hours(11), "11 часов");
        assert_eq!(hours(12), "12 часов");
        assert_eq!(hours(21), "21 час");
        assert_eq!(hours(24), "24 часа");
        assert_eq!(hours(112), "112 часов");
    }

    #[test]
    fn test_default_window_wording() {
        assert_eq!(window_heading(12), "Прогноз на 12 часов");
        assert_eq!(
            no_forecast(12),
            "Данные прогноза на ближайшие 12 часов отсутствуют"
        );
    }

    #[test]
    fn test_wording_follows_window_length() {
        assert_eq!(window_heading(6), "Прогноз на 6 часов");
        assert_eq!(
            no_forecast(6),
            "Данные прогноза на ближайшие 6 часов отсутствуют"
        );
        assert_eq!(
            no_forecast(1),
            "Данные прогноза на ближайший 1 час отсутствуют"
        );
        assert_eq!(
            no_forecast(24),
            "Данные прогноза на ближайшие 24 часа отсутствуют"
        );
    }
}
