use crate::app::{Message, WeatherWidget};
use crate::components;
use iced::{
    theme,
    widget::{button, column, container, mouse_area, row, text, Space},
    Alignment, Color, Element, Length,
};

pub const WIDGET_BACKGROUND: Color = Color {
    r: 50.0 / 255.0,
    g: 115.0 / 255.0,
    b: 165.0 / 255.0,
    a: 1.0,
};

pub fn view(app: &WeatherWidget) -> Element<Message> {
    let header = create_header(app);

    let body: Element<Message> = if app.display.has_data() {
        let today_panel = components::create_today_panel(&app.display);
        let forecast_panel = components::create_forecast_panel(&app.display);

        row![
            container(today_panel).width(Length::FillPortion(2)),
            container(forecast_panel).width(Length::FillPortion(4)),
        ]
        .spacing(16)
        .into()
    } else {
        components::create_status_display(app)
    };

    let content = column![header, body].spacing(10).padding(18);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(components::tinted(WIDGET_BACKGROUND))
        .into()
}

fn create_header(app: &WeatherWidget) -> Element<Message> {
    let date = text(&app.display.date).size(26);

    let updated = match &app.last_updated {
        Some(updated) => text(format!("Updated: {}", updated.format("%I:%M:%S %p"))),
        None => text(""),
    }
    .size(12)
    .style(Color::from_rgb(0.8, 0.8, 0.8));

    let exit_button = button(text("Exit").size(14))
        .on_press(Message::Exit)
        .padding([4, 12])
        .style(theme::Button::Secondary);

    // the window has no title bar, so the header is the drag handle
    let header = row![
        column![date, updated].spacing(2),
        Space::with_width(Length::Fill),
        exit_button
    ]
    .align_items(Alignment::Center);

    mouse_area(header).on_press(Message::DragWindow).into()
}
