use crate::curve::Rgb;
use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of day columns in every snapshot: yesterday, today and four days ahead.
pub const DAY_COUNT: usize = 6;

/// Column holding "today" in every daily sequence.
pub const TODAY: usize = 1;

/// Accepted forecast temperatures, in degrees.
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = -100..=100;

// Current conditions for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub city: String,
    pub date_week: String,
    pub temp: i32,
    pub advisory: String,
    pub pm25: i32,
    pub humidity: i32,
    pub quality: String,
}

// Six parallel day-indexed sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub weeks: Vec<String>,
    pub dates: Vec<String>,
    pub types: Vec<String>,
    pub aqi: Vec<i32>,
    pub high: Vec<i32>,
    pub low: Vec<i32>,
    pub wind_directions: Vec<String>,
    pub wind_forces: Vec<i32>,
}

impl DailyForecast {
    fn validate(&self) -> Result<()> {
        let lengths = [
            ("weeks", self.weeks.len()),
            ("dates", self.dates.len()),
            ("types", self.types.len()),
            ("aqi", self.aqi.len()),
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("windDirections", self.wind_directions.len()),
            ("windForces", self.wind_forces.len()),
        ];
        for (what, len) in lengths {
            if len != DAY_COUNT {
                return Err(WidgetError::invalid_input(what, DAY_COUNT, len));
            }
        }
        for (what, temps) in [("high", &self.high), ("low", &self.low)] {
            if let Some(&t) = temps.iter().find(|&&t| !TEMPERATURE_RANGE.contains(&t)) {
                return Err(WidgetError::OutOfRange {
                    what,
                    value: i64::from(t),
                });
            }
        }
        Ok(())
    }
}

/// One city's weather for "now" plus its six-day window. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct WeatherSnapshot {
    #[serde(flatten)]
    current: CurrentConditions,
    #[serde(flatten)]
    daily: DailyForecast,
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(flatten)]
    current: CurrentConditions,
    #[serde(flatten)]
    daily: DailyForecast,
}

impl TryFrom<RawSnapshot> for WeatherSnapshot {
    type Error = WidgetError;

    fn try_from(raw: RawSnapshot) -> Result<Self> {
        WeatherSnapshot::new(raw.current, raw.daily)
    }
}

impl WeatherSnapshot {
    pub fn new(current: CurrentConditions, daily: DailyForecast) -> Result<Self> {
        daily.validate()?;
        Ok(Self { current, daily })
    }

    pub fn city(&self) -> &str {
        &self.current.city
    }

    pub fn date_week(&self) -> &str {
        &self.current.date_week
    }

    pub fn temp(&self) -> i32 {
        self.current.temp
    }

    pub fn advisory(&self) -> &str {
        &self.current.advisory
    }

    pub fn pm25(&self) -> i32 {
        self.current.pm25
    }

    pub fn humidity(&self) -> i32 {
        self.current.humidity
    }

    pub fn quality(&self) -> &str {
        &self.current.quality
    }

    pub fn weeks(&self) -> &[String] {
        &self.daily.weeks
    }

    pub fn dates(&self) -> &[String] {
        &self.daily.dates
    }

    pub fn types(&self) -> &[String] {
        &self.daily.types
    }

    pub fn aqi(&self) -> &[i32] {
        &self.daily.aqi
    }

    pub fn high(&self) -> &[i32] {
        &self.daily.high
    }

    pub fn low(&self) -> &[i32] {
        &self.daily.low
    }

    pub fn wind_directions(&self) -> &[String] {
        &self.daily.wind_directions
    }

    pub fn wind_forces(&self) -> &[i32] {
        &self.daily.wind_forces
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQuality {
    Good,
    Fair,
    LightPollution,
    MediumPollution,
    HeavyPollution,
    SeverePollution,
}

impl AirQuality {
    /// Buckets an AQI value. Ranges overlap at 50/100/150/200 and the first
    /// matching bucket, in ascending order, wins.
    pub fn from_index(aqi: i32) -> Self {
        match aqi {
            v if (0..=50).contains(&v) => AirQuality::Good,
            v if (50..=100).contains(&v) => AirQuality::Fair,
            v if (100..=150).contains(&v) => AirQuality::LightPollution,
            v if (150..=200).contains(&v) => AirQuality::MediumPollution,
            v if (200..=300).contains(&v) => AirQuality::HeavyPollution,
            _ => AirQuality::SeverePollution,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Fair => "Fair",
            AirQuality::LightPollution => "Light Pollution",
            AirQuality::MediumPollution => "Medium Pollution",
            AirQuality::HeavyPollution => "Heavy Pollution",
            AirQuality::SeverePollution => "Severe Pollution",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            AirQuality::Good => Rgb(121, 184, 0),
            AirQuality::Fair => Rgb(255, 187, 23),
            AirQuality::LightPollution => Rgb(255, 87, 97),
            AirQuality::MediumPollution => Rgb(235, 17, 27),
            AirQuality::HeavyPollution => Rgb(170, 0, 0),
            AirQuality::SeverePollution => Rgb(110, 0, 0),
        }
    }
}

/// Label shown above a day column. The first three columns always read
/// "Yesterday", "Today" and "Tomorrow" whatever weekday is stored.
pub fn day_label(slot: usize, stored: &str) -> &str {
    match slot {
        0 => "Yesterday",
        1 => "Today",
        2 => "Tomorrow",
        _ => stored,
    }
}

// Weather type name to icon glyph; unknown names get the "undefined" icon
pub fn type_icon(type_name: &str) -> &'static str {
    match type_name {
        "Sunny" => "☀",
        "Cloudy" => "☁",
        "Drizzling" => "🌦",
        "Rain" | "Medium Rain" | "Big Rain" => "🌧",
        "Heavy Rain" | "Big Heavy Rain" | "Extreme Heavy Rain" => "🌧",
        "Thunderstorm" | "Hail" => "⛈",
        "Ice Rain" | "Rain with Snow" => "🌨",
        "Snow" | "Light Snow" | "Medium Snow" => "🌨",
        "Big Snow" | "Heavy Snow" => "❄",
        "Haze" | "Fog" => "🌫",
        _ => "?",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn merced() -> WeatherSnapshot {
        WeatherSnapshot::new(
            CurrentConditions {
                city: "Merced".to_string(),
                date_week: "2024/04/26 Friday".to_string(),
                temp: 16,
                advisory: "Great for Outdoor Activities".to_string(),
                pm25: 92,
                humidity: 55,
                quality: "Good".to_string(),
            },
            DailyForecast {
                weeks: ["Thursday", "Friday", "Saturday", "Sunday", "Monday", "Tuesday"]
                    .map(String::from)
                    .to_vec(),
                dates: ["04/25", "04/26", "04/27", "04/28", "04/29", "04/30"]
                    .map(String::from)
                    .to_vec(),
                types: ["Sunny", "Sunny", "Cloudy", "Sunny", "Cloudy", "Drizzling"]
                    .map(String::from)
                    .to_vec(),
                aqi: vec![12, 45, 156, 88, 23, 9],
                high: vec![20, 26, 22, 28, 25, 30],
                low: vec![5, 9, 6, 12, 11, 14],
                wind_directions: ["N Wind", "N Wind", "NW Wind", "S Wind", "NW Wind", "NE Wind"]
                    .map(String::from)
                    .to_vec(),
                wind_forces: vec![5, 10, 8, 12, 15, 18],
            },
        )
        .expect("fixture snapshot is valid")
    }

    /// The Merced fixture under another city name.
    pub(crate) fn named(city: &str) -> WeatherSnapshot {
        let mut snapshot = merced();
        snapshot.current.city = city.to_string();
        snapshot
    }

    #[test]
    fn test_snapshot_preserves_sequences() {
        let snapshot = merced();
        assert_eq!(
            snapshot.weeks(),
            &["Thursday", "Friday", "Saturday", "Sunday", "Monday", "Tuesday"]
        );
        assert_eq!(
            snapshot.dates(),
            &["04/25", "04/26", "04/27", "04/28", "04/29", "04/30"]
        );
        assert_eq!(
            snapshot.types(),
            &["Sunny", "Sunny", "Cloudy", "Sunny", "Cloudy", "Drizzling"]
        );
        assert_eq!(snapshot.aqi(), &[12, 45, 156, 88, 23, 9]);
        assert_eq!(snapshot.high(), &[20, 26, 22, 28, 25, 30]);
        assert_eq!(snapshot.low(), &[5, 9, 6, 12, 11, 14]);
        assert_eq!(
            snapshot.wind_directions(),
            &["N Wind", "N Wind", "NW Wind", "S Wind", "NW Wind", "NE Wind"]
        );
        assert_eq!(snapshot.wind_forces(), &[5, 10, 8, 12, 15, 18]);
    }

    #[test]
    fn test_snapshot_rejects_unplottable_temperature() {
        let snapshot = merced();
        let mut daily = snapshot.daily.clone();
        daily.high = vec![1_000_000_000, 1_000_000_000, 1_000_000_000, 0, 0, 0];
        let err = WeatherSnapshot::new(snapshot.current.clone(), daily).unwrap_err();
        assert!(matches!(
            err,
            WidgetError::OutOfRange {
                what: "high",
                value: 1_000_000_000
            }
        ));

        let mut daily = snapshot.daily.clone();
        daily.low[4] = -101;
        assert!(WeatherSnapshot::new(snapshot.current.clone(), daily).is_err());

        let mut daily = snapshot.daily.clone();
        daily.low = vec![-100; DAY_COUNT];
        daily.high = vec![100; DAY_COUNT];
        assert!(WeatherSnapshot::new(snapshot.current.clone(), daily).is_ok());
    }

    #[test]
    fn test_snapshot_rejects_short_sequence() {
        let snapshot = merced();
        let mut daily = snapshot.daily.clone();
        daily.low.pop();
        let err = WeatherSnapshot::new(snapshot.current.clone(), daily).unwrap_err();
        assert!(matches!(
            err,
            WidgetError::InvalidInput {
                what: "low",
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_air_quality_buckets() {
        assert_eq!(AirQuality::from_index(0), AirQuality::Good);
        assert_eq!(AirQuality::from_index(50), AirQuality::Good);
        assert_eq!(AirQuality::from_index(51), AirQuality::Fair);
        assert_eq!(AirQuality::from_index(100), AirQuality::Fair);
        assert_eq!(AirQuality::from_index(101), AirQuality::LightPollution);
        assert_eq!(AirQuality::from_index(150), AirQuality::LightPollution);
        assert_eq!(AirQuality::from_index(156), AirQuality::MediumPollution);
        assert_eq!(AirQuality::from_index(200), AirQuality::MediumPollution);
        assert_eq!(AirQuality::from_index(300), AirQuality::HeavyPollution);
        assert_eq!(AirQuality::from_index(301), AirQuality::SeverePollution);
        assert_eq!(AirQuality::from_index(-1), AirQuality::SeverePollution);
        assert_eq!(AirQuality::from_index(301).label(), "Severe Pollution");
    }

    #[test]
    fn test_day_label_override() {
        assert_eq!(day_label(0, "Sunday"), "Yesterday");
        assert_eq!(day_label(1, "Monday"), "Today");
        assert_eq!(day_label(2, "Tuesday"), "Tomorrow");
        assert_eq!(day_label(3, "Wednesday"), "Wednesday");
        assert_eq!(day_label(5, "Friday"), "Friday");
    }

    #[test]
    fn test_type_icon_falls_back_to_undefined() {
        assert_eq!(type_icon("Sunny"), "☀");
        assert_eq!(type_icon("Volcanic Ash"), type_icon("undefined"));
    }
}
