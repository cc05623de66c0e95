use crate::app::{Message, WeatherWidget};
use crate::curve::SurfaceId;
use crate::curve_canvas::{TemperatureCurve, COLUMN_SPACING, CURVE_HEIGHT, PANEL_BACKGROUND};
use crate::display::{DaySlot, DisplayState};
use crate::weather::DAY_COUNT;
use iced::{
    alignment, theme,
    widget::{canvas::Canvas, column, container, row, text, Space},
    Alignment, Border, Color, Element, Length, Theme,
};

// Solid background with white text
struct Tinted(Color);

impl container::StyleSheet for Tinted {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(self.0.into()),
            border: Border::with_radius(4.0),
            ..Default::default()
        }
    }
}

pub fn tinted(color: Color) -> theme::Container {
    theme::Container::Custom(Box::new(Tinted(color)))
}

pub fn create_status_display(app: &WeatherWidget) -> Element<Message> {
    let status_text = if app.loading {
        text("Loading weather data...").size(18)
    } else if let Some(error) = &app.error {
        text(format!("Error: {}", error))
            .size(16)
            .style(Color::from_rgb(1.0, 0.6, 0.6))
    } else {
        text("No data available").size(16)
    };

    container(status_text)
        .padding(20)
        .center_x()
        .center_y()
        .width(Length::Fill)
        .height(Length::Fixed(150.0))
        .into()
}

fn info_tile<'a>(title: &'a str, value: &'a str, detail: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(12),
            text(value).size(18),
            text(detail).size(12),
        ]
        .spacing(2)
        .align_items(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(tinted(PANEL_BACKGROUND))
    .into()
}

pub fn create_today_panel(display: &DisplayState) -> Element<Message> {
    let icon = text(display.type_icon)
        .size(96)
        .shaping(text::Shaping::Advanced);

    let headline = column![
        text(&display.temp).size(64),
        text(&display.city).size(18),
        text(&display.type_name).size(18),
        text(&display.low_high).size(18),
    ]
    .spacing(4);

    let advisory = container(text(&display.advisory).size(14))
        .padding(10)
        .width(Length::Fill)
        .style(tinted(PANEL_BACKGROUND));

    let tiles = row![
        info_tile("Wind", &display.wind_direction, &display.wind_force),
        info_tile("PM2.5", &display.pm25, ""),
        info_tile("Humidity", &display.humidity, ""),
        info_tile("Air Quality", &display.quality, ""),
    ]
    .spacing(6);

    column![
        row![icon, headline]
            .spacing(12)
            .align_items(Alignment::Center),
        Space::with_height(Length::Fixed(8.0)),
        advisory,
        tiles,
    ]
    .spacing(10)
    .into()
}

// One row of six equally wide cells, matching the curve column geometry
fn day_row<'a, F>(display: &'a DisplayState, cell: F) -> Element<'a, Message>
where
    F: Fn(&'a DaySlot) -> Element<'a, Message>,
{
    let mut cells = row![].spacing(COLUMN_SPACING);
    for slot in display.days.iter().take(DAY_COUNT) {
        cells = cells.push(container(cell(slot)).width(Length::Fill).center_x());
    }
    cells.into()
}

fn cell_text(content: &str) -> Element<Message> {
    text(content)
        .size(14)
        .horizontal_alignment(alignment::Horizontal::Center)
        .into()
}

fn create_curve(surface: SurfaceId, display: &DisplayState) -> Element<Message> {
    Canvas::new(TemperatureCurve::new(surface, display))
        .width(Length::Fill)
        .height(Length::Fixed(CURVE_HEIGHT))
        .into()
}

pub fn create_forecast_panel(display: &DisplayState) -> Element<Message> {
    let weeks = day_row(display, |slot| cell_text(&slot.week));
    let dates = day_row(display, |slot| cell_text(&slot.date));

    let types = day_row(display, |slot| {
        container(
            column![
                text(slot.type_icon)
                    .size(28)
                    .shaping(text::Shaping::Advanced),
                text(&slot.type_name).size(13),
            ]
            .spacing(2)
            .align_items(Alignment::Center),
        )
        .padding([6, 4])
        .width(Length::Fill)
        .center_x()
        .style(tinted(PANEL_BACKGROUND))
        .into()
    });

    let air_quality = day_row(display, |slot| {
        container(cell_text(slot.air_quality.label()))
            .padding(8)
            .width(Length::Fill)
            .center_x()
            .style(tinted(slot.air_quality.color().into()))
            .into()
    });

    let curves = column![
        create_curve(SurfaceId::HighCurve, display),
        create_curve(SurfaceId::LowCurve, display),
    ]
    .spacing(0);

    let wind = day_row(display, |slot| {
        container(
            column![cell_text(&slot.wind_direction), cell_text(&slot.wind_force)]
                .spacing(2)
                .align_items(Alignment::Center),
        )
        .padding([6, 4])
        .width(Length::Fill)
        .center_x()
        .style(tinted(PANEL_BACKGROUND))
        .into()
    });

    column![weeks, dates, types, air_quality, curves, wind]
        .spacing(16)
        .into()
}
