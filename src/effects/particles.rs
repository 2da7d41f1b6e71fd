//! Drifting particle field drawn behind the portfolio sections.
//!
//! Coordinates are in terminal cells with the origin at the top-left.
//! Particles bounce off the edges, twinkle between the configured opacity
//! bounds, and pairs closer than the link distance are joined by a line.
//! The pointer repulses nearby particles with a short impulse that decays
//! to nothing over `repulse_secs`.

use crate::config::ParticleConfig;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// 1.0 to 3.0.
    pub size: f32,
    pub opacity: f32,
    fading: bool,
    /// Repulse velocity at full strength, and seconds of it left.
    kick: (f32, f32),
    kick_left: f32,
}

impl Particle {
    pub fn is_repulsed(&self) -> bool {
        self.kick_left > 0.0
    }
}

/// A link between two particles, `strength` is 1.0 when they touch and
/// falls to 0.0 at the link distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub strength: f32,
}

pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: u16, height: u16, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(config.limit),
            width: f32::from(width.max(1)),
            height: f32::from(height.max(1)),
            rng: StdRng::seed_from_u64(seed),
            config,
        };
        for _ in 0..field.config.limit {
            let x = field.rng.random_range(0.0..field.width);
            let y = field.rng.random_range(0.0..field.height);
            let p = field.spawn(x, y);
            field.particles.push(p);
        }
        field
    }

    fn spawn(&mut self, x: f32, y: f32) -> Particle {
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = self.config.speed * self.rng.random_range(0.5..1.0);
        let (lo, hi) = self.opacity_bounds();
        Particle {
            x,
            y,
            vx: angle.cos() * speed,
            // Cells are roughly twice as tall as wide.
            vy: angle.sin() * speed * 0.5,
            size: self.rng.random_range(1.0..3.0),
            opacity: self.rng.random_range(lo..=hi),
            fading: self.rng.random(),
            kick: (0.0, 0.0),
            kick_left: 0.0,
        }
    }

    fn opacity_bounds(&self) -> (f32, f32) {
        let lo = self.config.min_opacity.clamp(0.0, 1.0);
        let hi = self.config.max_opacity.clamp(lo, 1.0);
        (lo, hi)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Rescale to a new area, keeping relative positions.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (w, h) = (f32::from(width.max(1)), f32::from(height.max(1)));
        if (w, h) == (self.width, self.height) {
            return;
        }
        let (sx, sy) = (w / self.width, h / self.height);
        for p in &mut self.particles {
            p.x = (p.x * sx).min(w);
            p.y = (p.y * sy).min(h);
        }
        self.width = w;
        self.height = h;
    }

    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        let (lo, hi) = self.opacity_bounds();
        let twinkle = (hi - lo).max(f32::EPSILON) * dt;
        let (w, h) = (self.width, self.height);
        let kick_secs = self.repulse_secs();

        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            if p.kick_left > 0.0 {
                let used = dt.min(p.kick_left);
                // Midpoint of the linear decay over this step.
                let scale = (p.kick_left - used * 0.5) / kick_secs;
                p.x += p.kick.0 * scale * used;
                p.y += p.kick.1 * scale * used;
                p.kick_left -= used;
            }
            bounce(&mut p.x, &mut p.vx, w);
            bounce(&mut p.y, &mut p.vy, h);

            if p.fading {
                p.opacity -= twinkle;
                if p.opacity <= lo {
                    p.opacity = lo;
                    p.fading = false;
                }
            } else {
                p.opacity += twinkle;
                if p.opacity >= hi {
                    p.opacity = hi;
                    p.fading = true;
                }
            }
        }
    }

    /// Add `push_quantity` particles around a point, evicting the oldest
    /// ones to stay within the limit.
    pub fn push(&mut self, x: f32, y: f32) {
        let x = x.clamp(0.0, self.width);
        let y = y.clamp(0.0, self.height);
        for _ in 0..self.config.push_quantity {
            let p = self.spawn(x, y);
            self.particles.push(p);
        }
        let overflow = self.particles.len().saturating_sub(self.config.limit);
        self.particles.drain(..overflow);
    }

    /// Push every particle within `repulse_distance` of the pointer
    /// radially outward, so it ends up roughly on the edge of the radius.
    pub fn repulse(&mut self, x: f32, y: f32) {
        let radius = self.config.repulse_distance;
        if radius <= 0.0 {
            return;
        }
        let secs = self.repulse_secs();
        for i in 0..self.particles.len() {
            let (dx, dy) = {
                let p = &self.particles[i];
                // Same aspect correction as links.
                (p.x - x, (p.y - y) * 2.0)
            };
            let d = (dx * dx + dy * dy).sqrt();
            if d >= radius {
                continue;
            }
            let (ux, uy) = if d > f32::EPSILON {
                (dx / d, dy / d)
            } else {
                let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
                (angle.cos(), angle.sin())
            };
            // A linearly decaying impulse covers half of v * secs.
            let speed = 2.0 * (radius - d) / secs;
            let p = &mut self.particles[i];
            p.kick = (ux * speed, uy * speed * 0.5);
            p.kick_left = secs;
        }
    }

    fn repulse_secs(&self) -> f32 {
        self.config.repulse_secs.max(0.05)
    }

    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        if max <= 0.0 {
            return Vec::new();
        }
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                // Undo the vertical squash so links are round, not oval.
                let dx = a.x - b.x;
                let dy = (a.y - b.y) * 2.0;
                let d = (dx * dx + dy * dy).sqrt();
                if d < max {
                    links.push(Link {
                        a: i,
                        b: j,
                        strength: 1.0 - d / max,
                    });
                }
            }
        }
        links
    }
}

fn bounce(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > max {
        *pos = 2.0 * max - *pos;
        *vel = -vel.abs();
    }
    *pos = pos.clamp(0.0, max);
}
