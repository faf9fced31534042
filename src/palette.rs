/// Colour type shared by the core and the rendering collaborator.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 255 = opaque.
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale every channel by `factor` (clamped to `0.0..=1.0`).
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
            a: self.a,
        }
    }

    /// Linear blend: `t = 0.0` gives `self`, `t = 1.0` gives `other`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

// ── Neon palette ─────────────────────────────────────────────────────────────

pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
pub const NEON_GREEN: Rgba = Rgba::rgb(57, 255, 20);
pub const NEON_BLUE: Rgba = Rgba::rgb(4, 217, 255);
pub const NEON_PINK: Rgba = Rgba::rgb(255, 20, 147);
pub const DARK_BLUE: Rgba = Rgba::rgb(8, 28, 65);
pub const SPACE_BLUE: Rgba = Rgba::rgb(15, 15, 35);
pub const GOLD: Rgba = Rgba::rgb(255, 215, 0);
pub const RED: Rgba = Rgba::rgb(255, 50, 50);
pub const SHIELD_FILL: Rgba = Rgba::rgb(0, 150, 0);
pub const SHIELD_DEPLETED: Rgba = Rgba::rgb(50, 0, 0);

/// Colours an explosion particle may take.
pub const EXPLOSION_COLORS: [Rgba; 4] = [NEON_PINK, NEON_BLUE, CYAN, GOLD];
