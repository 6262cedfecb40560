//! Decorative drifting particle field behind the hero view.
//!
//! Positions live in normalized 0..1 space and wrap at the edges. The
//! pointer tilts the whole field a few cells, echoing a parallax background.
//! Purely cosmetic: if there is no room, nothing is drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::ui::theme::Palette;

const PARTICLE_COUNT: usize = 48;
const GLYPHS: [char; 4] = ['·', '•', '∘', '+'];
/// Maximum pointer-driven offset, in cells.
const MAX_TILT: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    dim: bool,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    particles: Vec<Particle>,
    tilt_x: f32,
    tilt_y: f32,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Backdrop {
    /// Deterministic field; a small LCG spreads the particles around.
    pub fn new() -> Self {
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32
        };

        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                x: next(),
                y: next(),
                vx: (next() - 0.5) * 0.02,
                vy: (next() - 0.5) * 0.012,
                glyph: GLYPHS[i % GLYPHS.len()],
                dim: i % 3 != 0,
            })
            .collect();

        Self {
            particles,
            tilt_x: 0.0,
            tilt_y: 0.0,
        }
    }

    /// Advance the drift by `dt_ms` of wall time.
    pub fn advance(&mut self, dt_ms: u64) {
        let dt = dt_ms as f32 / 1000.0;
        for p in &mut self.particles {
            p.x = (p.x + p.vx * dt).rem_euclid(1.0);
            p.y = (p.y + p.vy * dt).rem_euclid(1.0);
        }
    }

    /// Update the tilt from a pointer position within the full frame.
    pub fn set_pointer(&mut self, column: u16, row: u16, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        let nx = column as f32 / width as f32;
        let ny = row as f32 / height as f32;
        self.tilt_x = (nx - 0.5) * 2.0 * MAX_TILT;
        self.tilt_y = (0.5 - ny) * 2.0 * MAX_TILT;
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for p in &self.particles {
            let x = p.x * (area.width - 1) as f32 + self.tilt_x;
            let y = p.y * (area.height - 1) as f32 + self.tilt_y;
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (x as u16, y as u16);
            if x >= area.width || y >= area.height {
                continue;
            }
            let mut style = Style::default().fg(palette.muted);
            if p.dim {
                style = style.add_modifier(Modifier::DIM);
            }
            buf.set_string(area.x + x, area.y + y, p.glyph.to_string(), style);
        }
    }
}
