//! Rendering for the seat board.
//!
//! The whole frame is one canvas whose bounds are the configured viewport:
//! screen banner at the top, seats in the middle, counters, legend and help
//! in the footer band.

pub mod canvas;
pub mod theme;

pub use canvas::{CanvasMapping, CanvasSeatPainter, Disc, FilledRect};

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context};
use ratatui::Frame;

use crate::app::App;
use crate::hall::SeatCounts;
use crate::layout::ViewportConfig;
use crate::store::SeatStore;
use theme::*;

/// Banner label.
pub const SCREEN_LABEL: &str = "SCREEN";

/// Help line shown in the footer.
pub const HELP_TEXT: &str = "Click seats to toggle   •   R = reset   •   Q / Esc = save & quit";

const BANNER_INSET: f64 = 80.0;
const BANNER_FROM_TOP: f64 = 70.0;
const BANNER_HEIGHT: f64 = 28.0;
const LEGEND_DOT_RADIUS: f64 = 8.0;

/// Render the board into the full frame and remember the canvas area for
/// click mapping.
pub fn render<S: SeatStore>(frame: &mut Frame, app: &mut App<S>) {
    let area = frame.area();
    app.set_canvas_area(area);

    let viewport = app.hall.viewport().clone();
    let mapping = CanvasMapping::new(area, &viewport);
    let step = mapping.dot_step();
    if step <= 0.0 {
        return;
    }

    let hall = &app.hall;
    let counts = hall.counts();
    let status = app.status();

    let canvas = Canvas::default()
        .background_color(COLOR_BG)
        .marker(Marker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(|ctx| {
            draw_screen_banner(ctx, &viewport, &mapping, step);
            ctx.layer();

            let mut painter = CanvasSeatPainter::new(ctx, step);
            hall.draw(&mut painter);
            ctx.layer();

            draw_footer(ctx, &viewport, &mapping, step, counts, status);
        });

    frame.render_widget(canvas, area);
}

fn draw_screen_banner(ctx: &mut Context, viewport: &ViewportConfig, mapping: &CanvasMapping, step: f64) {
    let top_y = viewport.height / 2.0 - BANNER_FROM_TOP;
    ctx.draw(&FilledRect {
        x: -viewport.width / 2.0 + BANNER_INSET,
        y: top_y,
        width: viewport.width - 2.0 * BANNER_INSET,
        height: BANNER_HEIGHT,
        color: COLOR_SCREEN,
        step,
    });

    let label = Span::styled(
        SCREEN_LABEL,
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    );
    let x = centered_x(mapping, SCREEN_LABEL);
    ctx.print(x, top_y + BANNER_HEIGHT / 2.0, Line::from(label));
}

fn draw_footer(
    ctx: &mut Context,
    viewport: &ViewportConfig,
    mapping: &CanvasMapping,
    step: f64,
    counts: SeatCounts,
    status: Option<&str>,
) {
    let bottom = -viewport.height / 2.0;
    let left = -viewport.width / 2.0;

    ctx.print(
        left + 20.0,
        bottom + 30.0,
        Line::from(Span::styled(
            counter_text(counts),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
    );

    let legend_x = viewport.width / 2.0 - 220.0;
    let legend_y = bottom + 40.0;
    draw_legend_dot(ctx, legend_x, legend_y, step, COLOR_SEAT_FREE, "Free");
    draw_legend_dot(ctx, legend_x + 110.0, legend_y, step, COLOR_SEAT_SOLD, "Sold");

    let (text, color) = match status {
        Some(message) => (message, COLOR_ERROR),
        None => (HELP_TEXT, COLOR_NOTE),
    };
    ctx.print(
        centered_x(mapping, text),
        bottom + 30.0,
        Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
    );
}

fn draw_legend_dot(ctx: &mut Context, x: f64, y: f64, step: f64, color: Color, label: &'static str) {
    let center = crate::layout::Point::new(x, y);
    ctx.draw(&Disc {
        center,
        radius: LEGEND_DOT_RADIUS,
        color,
        step,
    });
    ctx.draw(&Circle {
        x,
        y,
        radius: LEGEND_DOT_RADIUS,
        color: COLOR_SEAT_OUTLINE,
    });
    ctx.print(
        x + 18.0,
        y - 6.0,
        Line::from(Span::styled(label, Style::default().fg(COLOR_TEXT))),
    );
}

/// `Free: N   Sold: M`
pub fn counter_text(counts: SeatCounts) -> String {
    format!("Free: {}   Sold: {}", counts.free, counts.sold)
}

/// Left x of `text` so that it is centered on the vertical axis.
fn centered_x(mapping: &CanvasMapping, text: &str) -> f64 {
    let columns = text.chars().count() as f64;
    -(columns / 2.0) * mapping.cell_width()
}
