//! `last_city` cookie: remembers the most recent successful search so the
//! form can be pre-filled on the next visit.

use axum::http::{HeaderMap, header};
use cookie::{Cookie, SameSite};

use crate::constants::LAST_CITY_COOKIE;
use crate::constants::cookies::LAST_CITY_MAX_AGE_DAYS;

/// Percent-decoded `last_city` value from the request cookies, if any.
#[must_use]
pub fn last_city(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|c| c.name() == LAST_CITY_COOKIE)
        .and_then(|c| urlencoding::decode(c.value()).ok().map(|v| v.into_owned()))
        .filter(|city| !city.is_empty())
}

/// `Set-Cookie` value storing `city` for seven days.
#[must_use]
pub fn last_city_cookie(city: &str, secure: bool) -> String {
    Cookie::build((LAST_CITY_COOKIE, urlencoding::encode(city).into_owned()))
        .path("/")
        .max_age(time::Duration::days(LAST_CITY_MAX_AGE_DAYS))
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
        .to_string()
}
