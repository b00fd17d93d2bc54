pub const LAST_CITY_COOKIE: &str = "last_city";

pub mod messages {

    pub const EMPTY_CITY: &str = "Название города не может быть пустым";

    pub const CITY_NOT_FOUND: &str = "Город не найден";

    pub const UNKNOWN_WEATHER: &str = "Неизвестно";
}

pub mod forecast {

    pub const DEFAULT_WINDOW_HOURS: u32 = 12;

    pub const DEFAULT_TIMEZONE: &str = "UTC";

    pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
}

pub mod cookies {
    pub const LAST_CITY_MAX_AGE_DAYS: i64 = 7;
}
