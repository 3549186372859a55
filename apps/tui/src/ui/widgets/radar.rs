use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use ufo_radar::radar::{RadarGeometry, FADE_MAX};
use ufo_radar::Position;

const FADE_BUCKETS: usize = 16;
const CURSOR_ARM: f64 = 12.0;

/// Green marker colour at the given fade, as the dot would look over black.
pub fn fade_color(fade: u8) -> Color {
    let green = fade;
    let blue = (u16::from(fade) * 100 / u16::from(FADE_MAX)) as u8;
    Color::Rgb(0, green, blue)
}

const fn fade_bucket(fade: u8) -> usize {
    fade as usize * FADE_BUCKETS / (FADE_MAX as usize + 1)
}

fn bucket_fade(bucket: usize) -> u8 {
    let top = (bucket + 1) * (FADE_MAX as usize + 1) / FADE_BUCKETS - 1;
    top as u8
}

/// Radar surface has y growing downward; the canvas grows upward.
fn to_canvas(geometry: RadarGeometry, position: Position) -> (f64, f64) {
    (position.x, 2.0f64.mul_add(geometry.center.y, -position.y))
}

pub fn render_radar_scope(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" UFO Sightings Map ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 6 {
        return;
    }

    if app.session.store().is_empty() {
        let paragraph = Paragraph::new("No sightings inside the radar")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    // Terminal cells are roughly twice as tall as wide
    let height = inner.height.min(inner.width / 2).max(1);
    let width = (height * 2).min(inner.width);
    let square = Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + (inner.height - height) / 2,
        width,
        height,
    };

    let snapshot = app.session.snapshot();
    let geometry = app.session.geometry();
    let margin = geometry.radius * 1.05;

    let mut buckets: Vec<Vec<(f64, f64)>> = vec![Vec::new(); FADE_BUCKETS];
    for point in snapshot.points.iter().filter(|point| point.visible) {
        buckets[fade_bucket(point.fade)].push(to_canvas(geometry, point.position));
    }
    let cursor_color = if app.hovered().is_empty() {
        Color::Gray
    } else {
        Color::Yellow
    };

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                let (center_x, center_y) = to_canvas(geometry, geometry.center);

                for i in 1..=4 {
                    ctx.draw(&Circle {
                        x: center_x,
                        y: center_y,
                        radius: geometry.radius * (f64::from(i) / 4.0),
                        color: if i == 4 { Color::Green } else { Color::DarkGray },
                    });
                }

                ctx.draw(&CanvasLine {
                    x1: center_x,
                    y1: center_y - geometry.radius,
                    x2: center_x,
                    y2: center_y + geometry.radius,
                    color: Color::DarkGray,
                });
                ctx.draw(&CanvasLine {
                    x1: center_x - geometry.radius,
                    y1: center_y,
                    x2: center_x + geometry.radius,
                    y2: center_y,
                    color: Color::DarkGray,
                });

                ctx.layer();

                let (sweep_x, sweep_y) = to_canvas(
                    geometry,
                    geometry.point_at(snapshot.sweep_angle, geometry.radius),
                );
                ctx.draw(&CanvasLine {
                    x1: center_x,
                    y1: center_y,
                    x2: sweep_x,
                    y2: sweep_y,
                    color: Color::LightGreen,
                });

                for (bucket, coords) in buckets.iter().enumerate() {
                    if coords.is_empty() {
                        continue;
                    }
                    ctx.draw(&Points {
                        coords,
                        color: fade_color(bucket_fade(bucket)),
                    });
                }

                ctx.layer();

                let (cursor_x, cursor_y) = to_canvas(geometry, app.cursor);
                ctx.draw(&CanvasLine {
                    x1: cursor_x - CURSOR_ARM,
                    y1: cursor_y,
                    x2: cursor_x + CURSOR_ARM,
                    y2: cursor_y,
                    color: cursor_color,
                });
                ctx.draw(&CanvasLine {
                    x1: cursor_x,
                    y1: cursor_y - CURSOR_ARM,
                    x2: cursor_x,
                    y2: cursor_y + CURSOR_ARM,
                    color: cursor_color,
                });
            })
            .x_bounds([geometry.center.x - margin, geometry.center.x + margin])
            .y_bounds([geometry.center.y - margin, geometry.center.y + margin]),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_buckets_cover_full_range() {
        assert_eq!(fade_bucket(0), 0);
        assert_eq!(fade_bucket(255), FADE_BUCKETS - 1);
        assert_eq!(bucket_fade(FADE_BUCKETS - 1), 255);
        assert_eq!(bucket_fade(0), 15);
    }

    #[test]
    fn fade_color_scales_green_and_blue() {
        assert_eq!(fade_color(255), Color::Rgb(0, 255, 100));
        assert_eq!(fade_color(0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn canvas_mirrors_vertical_axis_about_center() {
        let geometry = RadarGeometry::default();
        assert_eq!(to_canvas(geometry, Position::new(500.0, 100.0)), (500.0, 900.0));
        assert_eq!(to_canvas(geometry, geometry.center), (500.0, 500.0));
    }
}
