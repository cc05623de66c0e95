use crate::app::Message;
use crate::curve::{self, DrawingSurface, Rgb, StrokeKind, SurfaceId};
use crate::display::DisplayState;
use crate::weather::DAY_COUNT;
use iced::{
    widget::canvas::{self, Frame, Path, Stroke, Text},
    Color, Point, Rectangle, Theme,
};

/// Horizontal gap between day columns, shared by the grid rows and the curves.
pub const COLUMN_SPACING: f32 = 6.0;
pub const CURVE_HEIGHT: f32 = 80.0;
pub const PANEL_BACKGROUND: Color = Color {
    r: 54.0 / 255.0,
    g: 93.0 / 255.0,
    b: 122.0 / 255.0,
    a: 1.0,
};

static DOT_DASH: [f32; 2] = [1.0, 3.0];

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgb8(rgb.0, rgb.1, rgb.2)
    }
}

/// Horizontal centre of each of the six equally wide day columns.
pub fn column_centers(width: f32, spacing: f32) -> [i32; DAY_COUNT] {
    let gaps = spacing * (DAY_COUNT - 1) as f32;
    let column_width = ((width - gaps) / DAY_COUNT as f32).max(0.0);
    let mut centers = [0; DAY_COUNT];
    for (i, center) in centers.iter_mut().enumerate() {
        *center = (i as f32 * (column_width + spacing) + column_width / 2.0).round() as i32;
    }
    centers
}

struct FrameSurface<'a> {
    frame: &'a mut Frame,
    height: i32,
}

fn to_point(p: curve::Point) -> Point {
    Point::new(p.x as f32, p.y as f32)
}

impl DrawingSurface for FrameSurface<'_> {
    fn height(&self) -> i32 {
        self.height
    }

    fn fill_circle(&mut self, center: curve::Point, radius: i32, color: Rgb) {
        self.frame
            .fill(&Path::circle(to_point(center), radius as f32), Color::from(color));
    }

    fn draw_text(&mut self, position: curve::Point, content: &str, color: Rgb) {
        self.frame.fill_text(Text {
            content: content.to_string(),
            position: to_point(position),
            size: 12.0.into(),
            color: color.into(),
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Left,
            vertical_alignment: iced::alignment::Vertical::Bottom,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::Advanced,
        });
    }

    fn draw_line(
        &mut self,
        from: curve::Point,
        to: curve::Point,
        stroke: StrokeKind,
        width: i32,
        color: Rgb,
    ) {
        let solid = Stroke::default()
            .with_color(color.into())
            .with_width(width as f32);
        let stroke = match stroke {
            StrokeKind::Solid => solid,
            StrokeKind::Dotted => Stroke {
                line_dash: canvas::LineDash {
                    segments: &DOT_DASH,
                    offset: 0,
                },
                ..solid
            },
        };
        self.frame
            .stroke(&Path::line(to_point(from), to_point(to)), stroke);
    }
}

/// Canvas program for one curve area. The series comes from the surface table.
pub struct TemperatureCurve {
    surface: SurfaceId,
    temps: Vec<i32>,
}

impl TemperatureCurve {
    pub fn new(surface: SurfaceId, display: &DisplayState) -> Self {
        let temps = curve::series_for(surface)
            .map(|kind| display.temps(kind).to_vec())
            .unwrap_or_default();
        Self { surface, temps }
    }
}

impl canvas::Program<Message> for TemperatureCurve {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), PANEL_BACKGROUND);

        let Some(kind) = curve::series_for(self.surface) else {
            return vec![frame.into_geometry()];
        };
        if self.temps.is_empty() {
            return vec![frame.into_geometry()];
        }

        let x_positions = column_centers(bounds.width, COLUMN_SPACING);
        let mut surface = FrameSurface {
            frame: &mut frame,
            height: bounds.height as i32,
        };
        match curve::render_curve(&mut surface, &self.temps, &x_positions, &kind.style()) {
            Ok(geometry) => {
                tracing::debug!(surface = ?self.surface, mean = geometry.mean, "Painted curve")
            }
            Err(e) => tracing::warn!("Skipping {:?} frame: {}", self.surface, e),
        }

        vec![frame.into_geometry()]
    }
}
