use crate::constants::messages::UNKNOWN_WEATHER;

/// Russian description for a WMO weather interpretation code as reported by
/// Open-Meteo.
#[must_use]
pub const fn describe(code: i64) -> &'static str {
    match code {
        0 => "Ясно",
        1 => "В основном ясно",
        2 => "Переменная облачность",
        3 => "Пасмурно",
        45 => "Туман",
        48 => "Инейный туман",
        51 => "Лёгкая морось",
        53 => "Умеренная морось",
        55 => "Сильная морось",
        56 | 66 => "Лёгкий ледяной дождь",
        57 | 67 => "Сильный ледяной дождь",
        61 => "Лёгкий дождь",
        63 => "Умеренный дождь",
        65 => "Сильный дождь",
        71 => "Лёгкий снегопад",
        73 => "Умеренный снегопад",
        75 => "Сильный снегопад",
        77 => "Снежные крупинки",
        80 => "Ливень",
        81 => "Умеренный ливень",
        82 => "Сильный ливень",
        85 => "Слабый снег с дождём",
        86 => "Сильный снег с дождём",
        95 => "Гроза",
        96 => "Гроза с лёгким градом",
        99 => "Гроза с сильным градом",
        _ => UNKNOWN_WEATHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(describe(0), "Ясно");
        assert_eq!(describe(3), "Пасмурно");
        assert_eq!(describe(45), "Туман");
        assert_eq!(describe(65), "Сильный дождь");
        assert_eq!(describe(99), "Гроза с сильным градом");
    }

    #[test]
    fn test_freezing_variants_share_descriptions() {
        assert_eq!(describe(56), describe(66));
        assert_eq!(describe(57), describe(67));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(describe(4), "Неизвестно");
        assert_eq!(describe(-1), "Неизвестно");
        assert_eq!(describe(100), "Неизвестно");
    }
}
