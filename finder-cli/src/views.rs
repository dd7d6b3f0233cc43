//! Text rendering for the input and result views.

use finder_core::{CityQuery, WeatherSnapshot};

pub fn loading() -> &'static str {
    "Loading..."
}

pub fn unavailable() -> &'static str {
    "Weather data not available. Please try again."
}

/// The populated result card: native unit plus derived Fahrenheit to two
/// decimals, humidity, wind speed, and condition text.
pub fn card(city: &CityQuery, snapshot: &WeatherSnapshot) -> String {
    format!(
        "Weather in {city}\n\
         Temperature: {temp}°C / {temp_f:.2}°F\n\
         Humidity: {humidity}%\n\
         Wind Speed: {wind} m/s\n\
         Condition: {condition}\n\
         Observed: {observed}",
        temp = snapshot.temperature_c,
        temp_f = snapshot.temperature_f(),
        humidity = snapshot.humidity_pct,
        wind = snapshot.wind_speed_mps,
        condition = snapshot.condition,
        observed = snapshot.observation_time.format("%Y-%m-%d %H:%M UTC"),
    )
}
