use crate::app::state::AppState;
use crate::ui::theme::{blend, Theme};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::Block;

/// Paint the section background: the particle field when visible, a plain
/// fill otherwise. Section widgets draw on top without clearing, so the
/// field shows through the gaps.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let fade = state.particle_fade.value();
    let field = match state.particles.as_ref() {
        Some(field) if fade > 0.0 && area.width > 0 && area.height > 0 => field,
        _ => {
            frame.render_widget(Block::default().style(theme.base()), area);
            return;
        }
    };

    let (w, h) = field.size();
    let (w, h) = (f64::from(w), f64::from(h));
    let particles = field.particles();
    let links = field.links();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.bg)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            for link in &links {
                let (a, b) = (&particles[link.a], &particles[link.b]);
                let alpha = 0.4 * link.strength * fade;
                ctx.draw(&CanvasLine::new(
                    f64::from(a.x),
                    h - f64::from(a.y),
                    f64::from(b.x),
                    h - f64::from(b.y),
                    blend(theme.bg, theme.accent_violet, alpha),
                ));
            }
            ctx.layer();
            for p in particles {
                // Bigger particles read brighter
                let alpha = (p.opacity * (0.6 + p.size * 0.2) * fade).min(1.0);
                let (x, y) = (f64::from(p.x), h - f64::from(p.y));
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color: blend(theme.bg, theme.particle, alpha),
                });
            }
        });
    frame.render_widget(canvas, area);
}
