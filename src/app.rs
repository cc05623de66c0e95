use crate::config::WidgetConfig;
use crate::display::DisplayState;
use crate::error::Result;
use crate::provider;
use crate::store::ForecastStore;
use crate::view;
use crate::weather::WeatherSnapshot;
use chrono::{DateTime, Local};
use iced::{time, window, Application, Command, Element, Subscription, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    SnapshotsLoaded(std::result::Result<Vec<WeatherSnapshot>, String>),
    Tick(Instant),
    DragWindow,
    Exit,
}

pub struct WeatherWidget {
    pub config: WidgetConfig,
    pub store: ForecastStore,
    pub display: DisplayState,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl WeatherWidget {
    pub fn with_config(config: WidgetConfig) -> Self {
        let store = ForecastStore::new(Vec::new(), config.wrap_policy);
        Self {
            config,
            store,
            display: DisplayState::default(),
            loading: true,
            error: None,
            last_updated: None,
        }
    }

    pub fn load(&mut self, snapshots: Vec<WeatherSnapshot>) -> Result<()> {
        self.store = ForecastStore::new(snapshots, self.config.wrap_policy);
        tracing::info!(
            "Loaded {} snapshot(s), wrap policy {:?}",
            self.store.len(),
            self.config.wrap_policy
        );
        let snapshot = self.store.current()?;
        self.display.refresh(snapshot);
        self.last_updated = Some(Local::now());
        Ok(())
    }

    /// One refresh cycle: select the next city and copy it into the display.
    /// On failure the display keeps its previous contents.
    pub fn tick(&mut self) -> Result<()> {
        let snapshot = self.store.advance()?;
        self.display.refresh(snapshot);
        self.last_updated = Some(Local::now());
        tracing::debug!(
            index = self.store.index(),
            city = %self.display.city,
            "Refreshed display, repainting curves"
        );
        Ok(())
    }
}

impl Application for WeatherWidget {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = WidgetConfig;

    fn new(config: WidgetConfig) -> (WeatherWidget, Command<Message>) {
        let source = config.data_source.clone();
        let app = WeatherWidget::with_config(config);
        let command = Command::perform(provider::load_snapshots(source), Message::SnapshotsLoaded);
        (app, command)
    }

    fn title(&self) -> String {
        String::from("Weather Widget")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SnapshotsLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(snapshots) => {
                        if let Err(e) = self.load(snapshots) {
                            tracing::warn!("No snapshot to show: {}", e);
                            self.error = Some(e.to_string());
                        } else {
                            self.error = None;
                        }
                    }
                    Err(error) => {
                        self.error = Some(error);
                    }
                }
                Command::none()
            }
            Message::Tick(_) => {
                if let Err(e) = self.tick() {
                    if e.is_precondition_violation() {
                        tracing::warn!("Skipping refresh: {}", e);
                    } else {
                        tracing::error!("Refresh failed: {}", e);
                    }
                }
                Command::none()
            }
            Message::DragWindow => window::drag(window::Id::MAIN),
            Message::Exit => window::close(window::Id::MAIN),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.store.is_empty() {
            Subscription::none()
        } else {
            time::every(self.config.refresh_interval()).map(Message::Tick)
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}
