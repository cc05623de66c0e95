//! Temperature curve geometry and drawing.
//!
//! A curve maps one six-day temperature series onto the height of a drawing
//! surface, centred on the truncated integer mean of the series, and draws a
//! dot plus a degree label at every day column followed by the segments
//! joining consecutive days. The yesterday-to-today segment is dotted.

use crate::error::{Result, WidgetError};
use crate::weather::{WeatherSnapshot, DAY_COUNT};

/// Vertical pixels per degree of difference from the mean.
pub const SCALE: i32 = 3;
pub const POINT_RADIUS: i32 = 3;
/// Label offset up and to the left of its dot.
pub const TEXT_OFFSET_X: i32 = 12;
pub const TEXT_OFFSET_Y: i32 = 10;
pub const PEN_WIDTH: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveStyle {
    pub color: Rgb,
    pub pen_width: i32,
    pub point_radius: i32,
    pub dotted_first_segment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    High,
    Low,
}

impl SeriesKind {
    pub fn style(&self) -> CurveStyle {
        let color = match self {
            SeriesKind::High => Rgb(255, 170, 0),
            SeriesKind::Low => Rgb(0, 255, 255),
        };
        CurveStyle {
            color,
            pen_width: PEN_WIDTH,
            point_radius: POINT_RADIUS,
            dotted_first_segment: true,
        }
    }

    pub fn temps<'a>(&self, snapshot: &'a WeatherSnapshot) -> &'a [i32] {
        match self {
            SeriesKind::High => snapshot.high(),
            SeriesKind::Low => snapshot.low(),
        }
    }
}

/// Drawing areas that host a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    HighCurve,
    LowCurve,
}

const CURVE_SURFACES: [(SurfaceId, SeriesKind); 2] = [
    (SurfaceId::HighCurve, SeriesKind::High),
    (SurfaceId::LowCurve, SeriesKind::Low),
];

/// Which series a surface renders.
pub fn series_for(surface: SurfaceId) -> Option<SeriesKind> {
    CURVE_SURFACES
        .iter()
        .find(|(id, _)| *id == surface)
        .map(|(_, kind)| *kind)
}

/// A 2D target the curve can be drawn on.
pub trait DrawingSurface {
    fn height(&self) -> i32;
    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb);
    fn draw_text(&mut self, position: Point, content: &str, color: Rgb);
    fn draw_line(&mut self, from: Point, to: Point, stroke: StrokeKind, width: i32, color: Rgb);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveGeometry {
    pub mean: i32,
    pub points: [Point; DAY_COUNT],
}

// Integer mean of the series, truncated toward zero. Summed in i64 so large
// readings cannot overflow.
fn truncated_mean(temps: &[i32; DAY_COUNT]) -> i64 {
    temps.iter().map(|&t| i64::from(t)).sum::<i64>() / DAY_COUNT as i64
}

pub fn compute_geometry(temps: &[i32], x_positions: &[i32], height: i32) -> Result<CurveGeometry> {
    let temps: &[i32; DAY_COUNT] = temps
        .try_into()
        .map_err(|_| WidgetError::invalid_input("temps", DAY_COUNT, temps.len()))?;
    if x_positions.len() != DAY_COUNT {
        return Err(WidgetError::invalid_input(
            "x positions",
            DAY_COUNT,
            x_positions.len(),
        ));
    }

    let mean = truncated_mean(temps);
    let center = i64::from(height / 2);
    let mut points = [Point::new(0, 0); DAY_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        let y = center - (i64::from(temps[i]) - mean) * i64::from(SCALE);
        let y = i32::try_from(y).map_err(|_| WidgetError::OutOfRange {
            what: "temperature",
            value: i64::from(temps[i]),
        })?;
        *point = Point::new(x_positions[i], y);
    }

    // the mean lies between the smallest and largest reading
    let mean = i32::try_from(mean).map_err(|_| WidgetError::OutOfRange {
        what: "mean temperature",
        value: mean,
    })?;
    Ok(CurveGeometry { mean, points })
}

/// Draws one temperature series: dots, then labels, then segments.
pub fn render_curve<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    temps: &[i32],
    x_positions: &[i32],
    style: &CurveStyle,
) -> Result<CurveGeometry> {
    let geometry = compute_geometry(temps, x_positions, surface.height())?;

    for (point, temp) in geometry.points.iter().zip(temps) {
        surface.fill_circle(*point, style.point_radius, style.color);
        surface.draw_text(
            Point::new(
                point.x.saturating_sub(TEXT_OFFSET_X),
                point.y.saturating_sub(TEXT_OFFSET_Y),
            ),
            &format!("{}°", temp),
            style.color,
        );
    }

    for (i, pair) in geometry.points.windows(2).enumerate() {
        let stroke = if i == 0 && style.dotted_first_segment {
            StrokeKind::Dotted
        } else {
            StrokeKind::Solid
        };
        surface.draw_line(pair[0], pair[1], stroke, style.pen_width, style.color);
    }

    Ok(geometry)
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: i32,
        color: Rgb,
    },
    Text {
        position: Point,
        content: String,
        color: Rgb,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeKind,
        width: i32,
        color: Rgb,
    },
}

/// Surface that records draw calls instead of painting them.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub height: i32,
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            commands: Vec::new(),
        }
    }
}

#[cfg(test)]
impl DrawingSurface for RecordingSurface {
    fn height(&self) -> i32 {
        self.height
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, position: Point, content: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            position,
            content: content.to_string(),
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: StrokeKind, width: i32, color: Rgb) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke,
            width,
            color,
        });
    }
}
