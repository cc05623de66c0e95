use crate::error::Result;
use crate::weather::{CurrentConditions, DailyForecast, WeatherSnapshot};
use chrono::{Duration, NaiveDate};
use std::path::PathBuf;

/// Source of the snapshots that populate the forecast store.
pub trait SnapshotProvider {
    fn fetch_snapshots(&self) -> Result<Vec<WeatherSnapshot>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Demo,
    File(PathBuf),
}

/// Fixed snapshots, handy as test fixtures.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticProvider(pub Vec<WeatherSnapshot>);

#[cfg(test)]
impl SnapshotProvider for StaticProvider {
    fn fetch_snapshots(&self) -> Result<Vec<WeatherSnapshot>> {
        Ok(self.0.clone())
    }
}

/// Built-in demo cities centred on 2024-04-26.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

struct DemoCity {
    city: &'static str,
    temp: i32,
    advisory: &'static str,
    pm25: i32,
    humidity: i32,
    quality: &'static str,
    types: [&'static str; 6],
    aqi: [i32; 6],
    high: [i32; 6],
    low: [i32; 6],
    wind_directions: [&'static str; 6],
    wind_forces: [i32; 6],
}

const DEMO_CITIES: [DemoCity; 4] = [
    DemoCity {
        city: "Merced",
        temp: 16,
        advisory: "Great for Outdoor Activities",
        pm25: 92,
        humidity: 55,
        quality: "Good",
        types: ["Sunny", "Sunny", "Cloudy", "Sunny", "Cloudy", "Drizzling"],
        aqi: [12, 45, 156, 88, 23, 9],
        high: [20, 26, 22, 28, 25, 30],
        low: [5, 9, 6, 12, 11, 14],
        wind_directions: ["N Wind", "N Wind", "NW Wind", "S Wind", "NW Wind", "NE Wind"],
        wind_forces: [5, 10, 8, 12, 15, 18],
    },
    DemoCity {
        city: "Fresno",
        temp: 21,
        advisory: "Low Risk, Stay Hydrated",
        pm25: 48,
        humidity: 38,
        quality: "Fair",
        types: ["Sunny", "Sunny", "Sunny", "Cloudy", "Haze", "Sunny"],
        aqi: [61, 75, 102, 140, 210, 96],
        high: [24, 27, 29, 31, 30, 28],
        low: [10, 12, 13, 15, 14, 12],
        wind_directions: ["W Wind", "NW Wind", "NW Wind", "N Wind", "N Wind", "W Wind"],
        wind_forces: [3, 4, 6, 6, 5, 3],
    },
    DemoCity {
        city: "San Francisco",
        temp: 13,
        advisory: "Moderate Risk, Dress in Layers",
        pm25: 18,
        humidity: 81,
        quality: "Good",
        types: ["Fog", "Cloudy", "Drizzling", "Rain", "Cloudy", "Fog"],
        aqi: [22, 18, 30, 15, 41, 50],
        high: [16, 15, 14, 13, 15, 17],
        low: [10, 10, 9, 9, 10, 11],
        wind_directions: ["W Wind", "W Wind", "SW Wind", "S Wind", "W Wind", "W Wind"],
        wind_forces: [12, 14, 18, 22, 16, 11],
    },
    DemoCity {
        city: "Lake Tahoe",
        temp: -2,
        advisory: "High Risk, Keep Warm",
        pm25: 7,
        humidity: 67,
        quality: "Good",
        types: ["Light Snow", "Snow", "Heavy Snow", "Cloudy", "Sunny", "Sunny"],
        aqi: [8, 5, 4, 11, 19, 27],
        high: [3, 1, -1, 2, 6, 8],
        low: [-6, -8, -11, -9, -5, -3],
        wind_directions: ["SW Wind", "SW Wind", "S Wind", "N Wind", "NE Wind", "E Wind"],
        wind_forces: [9, 14, 20, 11, 6, 4],
    },
];

impl DemoProvider {
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 26).unwrap_or(NaiveDate::MIN)
    }

    fn snapshot(city: &DemoCity, today: NaiveDate) -> Result<WeatherSnapshot> {
        // Column 0 is yesterday
        let days: Vec<NaiveDate> = (-1..=4).map(|offset| today + Duration::days(offset)).collect();
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

        WeatherSnapshot::new(
            CurrentConditions {
                city: city.city.to_string(),
                date_week: today.format("%Y/%m/%d %A").to_string(),
                temp: city.temp,
                advisory: city.advisory.to_string(),
                pm25: city.pm25,
                humidity: city.humidity,
                quality: city.quality.to_string(),
            },
            DailyForecast {
                weeks: days.iter().map(|d| d.format("%A").to_string()).collect(),
                dates: days.iter().map(|d| d.format("%m/%d").to_string()).collect(),
                types: owned(&city.types),
                aqi: city.aqi.to_vec(),
                high: city.high.to_vec(),
                low: city.low.to_vec(),
                wind_directions: owned(&city.wind_directions),
                wind_forces: city.wind_forces.to_vec(),
            },
        )
    }
}

impl SnapshotProvider for DemoProvider {
    fn fetch_snapshots(&self) -> Result<Vec<WeatherSnapshot>> {
        let today = Self::today();
        DEMO_CITIES
            .iter()
            .map(|city| Self::snapshot(city, today))
            .collect()
    }
}

pub fn to_json(snapshots: &[WeatherSnapshot]) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshots)?)
}

pub fn from_json(json: &str) -> Result<Vec<WeatherSnapshot>> {
    Ok(serde_json::from_str(json)?)
}

// Loads the initial snapshots for the widget
pub async fn load_snapshots(source: DataSource) -> std::result::Result<Vec<WeatherSnapshot>, String> {
    match source {
        DataSource::Demo => {
            tracing::info!("Loading built-in demo snapshots");
            DemoProvider.fetch_snapshots().map_err(|e| e.to_string())
        }
        DataSource::File(path) => {
            tracing::info!("Loading snapshots from {}", path.display());
            let json = tokio::fs::read_to_string(&path).await.map_err(|e| {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                e.to_string()
            })?;
            from_json(&json).map_err(|e| {
                tracing::error!("Failed to parse {}: {}", path.display(), e);
                e.to_string()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::tests::named;
    use crate::weather::{DAY_COUNT, TODAY};
    use std::io::Write;

    #[test]
    fn test_demo_snapshots() {
        let snapshots = DemoProvider.fetch_snapshots().unwrap();
        assert_eq!(snapshots.len(), 4);

        let merced = &snapshots[0];
        assert_eq!(merced.city(), "Merced");
        assert_eq!(merced.date_week(), "2024/04/26 Friday");
        assert_eq!(merced.weeks()[TODAY], "Friday");
        assert_eq!(merced.dates(), &["04/25", "04/26", "04/27", "04/28", "04/29", "04/30"]);
        assert_eq!(merced.high(), &[20, 26, 22, 28, 25, 30]);

        for snapshot in &snapshots {
            assert_eq!(snapshot.weeks().len(), DAY_COUNT);
            assert_eq!(snapshot.wind_forces().len(), DAY_COUNT);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let snapshots = DemoProvider.fetch_snapshots().unwrap();
        let json = to_json(&snapshots).unwrap();
        assert!(json.contains("\"dateWeek\": \"2024/04/26 Friday\""));
        assert_eq!(from_json(&json).unwrap(), snapshots);
    }

    #[test]
    fn test_json_rejects_mismatched_sequences() {
        let snapshots = DemoProvider.fetch_snapshots().unwrap();
        let mut value = serde_json::to_value(&snapshots[..1]).unwrap();
        value[0]["high"] = serde_json::json!([1, 2, 3]);
        let err = from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("high has length 3"));
    }

    #[test]
    fn test_static_provider_returns_its_snapshots() {
        let provider = StaticProvider(vec![named("Modesto"), named("Visalia")]);
        let snapshots = provider.fetch_snapshots().unwrap();
        let cities: Vec<&str> = snapshots.iter().map(|s| s.city()).collect();
        assert_eq!(cities, vec!["Modesto", "Visalia"]);
        assert!(StaticProvider::default().fetch_snapshots().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_snapshots_from_file() {
        let snapshots = DemoProvider.fetch_snapshots().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(to_json(&snapshots[1..3]).unwrap().as_bytes())
            .unwrap();

        let loaded = load_snapshots(DataSource::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].city(), "Fresno");
    }

    #[tokio::test]
    async fn test_load_snapshots_missing_file() {
        let result = load_snapshots(DataSource::File(PathBuf::from(
            "/nonexistent/weather-widget/snapshots.json",
        )))
        .await;
        assert!(result.is_err());
    }
}
