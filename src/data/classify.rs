//! Classification tables for weather codes and marine readings
//!
//! Maps raw WMO weather codes, wave heights and sea surface temperatures to
//! human-readable descriptions and icons. Every function here is total: any
//! input yields a value, unknown codes fall back to a sentinel.

use serde::Serialize;

/// Description returned for codes outside the WMO table
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Icon returned for codes outside the WMO table
pub const DEFAULT_WEATHER_ICON: &str = "\u{1F324}"; // 🌤

/// WMO weather interpretation codes understood by the app
pub const KNOWN_WEATHER_CODES: [i32; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

/// Human-readable description of a WMO weather code
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_DESCRIPTION,
    }
}

/// Icon for a WMO weather code
///
/// Groups follow the description table. Codes that fall inside a group's
/// numeric span but are not defined (e.g. 52) get the default icon, the
/// same way they get the "Unknown" description.
pub fn weather_icon(code: i32) -> &'static str {
    match code {
        0 => "\u{2600}",                       // ☀
        1..=3 => "\u{26C5}",                   // ⛅
        45 | 48 => "\u{1F32B}",                // 🌫
        51 | 53 | 55 | 56 | 57 => "\u{1F326}", // 🌦
        61 | 63 | 65 | 66 | 67 => "\u{1F327}", // 🌧
        71 | 73 | 75 | 77 => "\u{1F328}",      // 🌨
        80..=82 => "\u{1F326}",                // 🌦
        85 | 86 => "\u{1F328}",                // 🌨
        95 | 96 | 99 => "\u{26C8}",            // ⛈
        _ => DEFAULT_WEATHER_ICON,
    }
}

/// Severity band for a wave height in meters
///
/// Bands are half-open `[lower, upper)`; the last one is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WaveBand {
    /// [0, 0.5)
    Calm,
    /// [0.5, 1.0)
    Small,
    /// [1.0, 2.0)
    Moderate,
    /// [2.0, 3.0)
    Large,
    /// [3.0, 4.0)
    VeryLarge,
    /// [4.0, inf)
    Extreme,
}

impl WaveBand {
    /// Classifies a wave height. Negative heights land in `Calm`.
    pub fn from_height(height: f64) -> Self {
        if height < 0.5 {
            WaveBand::Calm
        } else if height < 1.0 {
            WaveBand::Small
        } else if height < 2.0 {
            WaveBand::Moderate
        } else if height < 3.0 {
            WaveBand::Large
        } else if height < 4.0 {
            WaveBand::VeryLarge
        } else {
            WaveBand::Extreme
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WaveBand::Calm => "Calm",
            WaveBand::Small => "Small waves",
            WaveBand::Moderate => "Moderate waves",
            WaveBand::Large => "Large waves",
            WaveBand::VeryLarge => "Very large waves",
            WaveBand::Extreme => "Extreme waves",
        }
    }

    /// Wave count grows with severity; everything from 3m up shares the warning icon
    pub fn icon(self) -> &'static str {
        match self {
            WaveBand::Calm => "\u{3030}",                           // 〰
            WaveBand::Small => "\u{1F30A}",                         // 🌊
            WaveBand::Moderate => "\u{1F30A}\u{1F30A}",             // 🌊🌊
            WaveBand::Large => "\u{1F30A}\u{1F30A}\u{1F30A}",       // 🌊🌊🌊
            WaveBand::VeryLarge | WaveBand::Extreme => "\u{1F30A}\u{26A0}", // 🌊⚠
        }
    }
}

/// Description of a wave height in meters
pub fn wave_height_description(height: f64) -> &'static str {
    WaveBand::from_height(height).description()
}

/// Icon for a wave height in meters
pub fn wave_icon(height: f64) -> &'static str {
    WaveBand::from_height(height).icon()
}

/// Icon for a sea surface temperature in Celsius
pub fn sea_temperature_icon(temp: f64) -> &'static str {
    if temp < 5.0 {
        "\u{1F9CA}" // 🧊
    } else if temp < 15.0 {
        "\u{2744}" // ❄
    } else if temp < 20.0 {
        "\u{1F321}" // 🌡
    } else if temp < 25.0 {
        "\u{1F30A}" // 🌊
    } else {
        "\u{1F525}" // 🔥
    }
}
