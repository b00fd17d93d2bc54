//! Server-rendered pages: the search form, the forecast and the error view.

use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::forecast::wording;
use crate::models::weather::{CurrentWeather, WeatherReport};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = encode_text(title),
    ))
}

pub fn form_page(last_city: Option<&str>) -> Html<String> {
    let value = encode_double_quoted_attribute(last_city.unwrap_or_default());

    let body = format!(
        r#"<h1>Прогноз погоды</h1>
<form action="/weather" method="post" autocomplete="off">
    <label for="city-input">Введите название города</label>
    <div class="autocomplete">
        <input id="city-input" type="text" name="city" value="{value}" required>
        <ul id="suggestions"></ul>
    </div>
    <button type="submit">Узнать погоду</button>
</form>
<p><a href="/stats">Статистика запросов</a></p>
<script src="/static/autocomplete.js"></script>"#
    );

    layout("Прогноз погоды", &body)
}

fn format_temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |t| format!("{t:.1} °C"))
}

fn current_block(current: &CurrentWeather) -> String {
    let mut out = String::from("<section class=\"current\">\n<h2>Сейчас</h2>\n<ul>\n");

    if let Some(description) = &current.weather_description {
        let _ = writeln!(out, "<li>{}</li>", encode_text(description));
    }
    if current.temperature.is_some() {
        let _ = writeln!(
            out,
            "<li>Температура: {}</li>",
            format_temperature(current.temperature)
        );
    }
    if let Some(speed) = current.windspeed {
        let _ = writeln!(out, "<li>Ветер: {speed:.1} км/ч</li>");
    }

    out.push_str("</ul>\n</section>\n");
    out
}

pub fn weather_page(report: &WeatherReport) -> Html<String> {
    let city = encode_text(&report.city);
    let mut body = format!("<h1>Погода в городе {city}</h1>\n");

    body.push_str(&current_block(&report.current_weather));

    let _ = writeln!(
        body,
        "<section class=\"forecast\">\n<h2>{}</h2>",
        wording::window_heading(report.window_hours)
    );
    if report.message.is_empty() {
        body.push_str("<table>\n<tr><th>Время</th><th>Температура</th></tr>\n");
        for entry in &report.forecast {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                encode_text(&entry.time),
                format_temperature(entry.temperature)
            );
        }
        body.push_str("</table>\n");
    } else {
        let _ = writeln!(body, "<p class=\"message\">{}</p>", encode_text(&report.message));
    }
    let _ = writeln!(
        body,
        "<p class=\"timezone\">Часовой пояс: {}</p>\n</section>",
        encode_text(&report.timezone)
    );

    body.push_str("<p><a href=\"/\">Назад</a></p>");

    layout(&format!("Погода: {}", report.city), &body)
}

pub fn error_page(city: &str, message: &str) -> Html<String> {
    let mut body = String::from("<h1>Ошибка</h1>\n");
    if !city.is_empty() {
        let _ = writeln!(body, "<p class=\"city\">{}</p>", encode_text(city));
    }
    let _ = writeln!(body, "<p class=\"error\">{}</p>", encode_text(message));
    body.push_str("<p><a href=\"/\">Назад</a></p>");

    layout("Ошибка", &body)
}
