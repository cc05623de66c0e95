use crate::curve::SeriesKind;
use crate::weather::{day_label, type_icon, AirQuality, WeatherSnapshot, DAY_COUNT, TODAY};

#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot {
    pub week: String,
    pub date: String,
    pub type_icon: &'static str,
    pub type_name: String,
    pub air_quality: AirQuality,
    pub wind_direction: String,
    pub wind_force: String,
}

impl Default for DaySlot {
    fn default() -> Self {
        Self {
            week: String::new(),
            date: String::new(),
            type_icon: type_icon("undefined"),
            type_name: String::new(),
            air_quality: AirQuality::Good,
            wind_direction: String::new(),
            wind_force: String::new(),
        }
    }
}

/// Everything the widget shows. Written by the refresh cycle, read by the
/// view and the curve canvases.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub date: String,
    pub city: String,
    pub temp: String,
    pub advisory: String,
    pub pm25: String,
    pub humidity: String,
    pub quality: String,

    // today headline
    pub type_icon: &'static str,
    pub type_name: String,
    pub low_high: String,
    pub wind_direction: String,
    pub wind_force: String,

    pub days: [DaySlot; DAY_COUNT],
    pub high_temps: Vec<i32>,
    pub low_temps: Vec<i32>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            date: String::new(),
            city: String::new(),
            temp: "--°".to_string(),
            advisory: String::new(),
            pm25: String::new(),
            humidity: String::new(),
            quality: String::new(),
            type_icon: type_icon("undefined"),
            type_name: String::new(),
            low_high: String::new(),
            wind_direction: String::new(),
            wind_force: String::new(),
            days: Default::default(),
            high_temps: Vec::new(),
            low_temps: Vec::new(),
        }
    }
}

fn wind_force_label(force: i32) -> String {
    format!("Level{}", force)
}

impl DisplayState {
    /// Copies one snapshot into every display field.
    pub fn refresh(&mut self, snapshot: &WeatherSnapshot) {
        self.date = snapshot.date_week().to_string();
        self.city = snapshot.city().to_string();
        self.temp = format!("{}°", snapshot.temp());
        self.advisory = format!("Sickness Likelihood: {}", snapshot.advisory());
        self.pm25 = snapshot.pm25().to_string();
        self.humidity = format!("{}%", snapshot.humidity());
        self.quality = snapshot.quality().to_string();

        let today_type = &snapshot.types()[TODAY];
        self.type_icon = type_icon(today_type);
        self.type_name = today_type.clone();
        self.low_high = format!("{}~{}°", snapshot.low()[TODAY], snapshot.high()[TODAY]);
        self.wind_direction = snapshot.wind_directions()[TODAY].clone();
        self.wind_force = wind_force_label(snapshot.wind_forces()[TODAY]);

        for (i, slot) in self.days.iter_mut().enumerate() {
            slot.week = day_label(i, &snapshot.weeks()[i]).to_string();
            slot.date = snapshot.dates()[i].clone();
            slot.type_icon = type_icon(&snapshot.types()[i]);
            slot.type_name = snapshot.types()[i].clone();
            slot.air_quality = AirQuality::from_index(snapshot.aqi()[i]);
            slot.wind_direction = snapshot.wind_directions()[i].clone();
            slot.wind_force = wind_force_label(snapshot.wind_forces()[i]);
        }

        self.high_temps = SeriesKind::High.temps(snapshot).to_vec();
        self.low_temps = SeriesKind::Low.temps(snapshot).to_vec();
    }

    pub fn temps(&self, kind: SeriesKind) -> &[i32] {
        match kind {
            SeriesKind::High => &self.high_temps,
            SeriesKind::Low => &self.low_temps,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.city.is_empty()
    }
}
