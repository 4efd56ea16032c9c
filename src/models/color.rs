//! Display colors for expense items
//!
//! Every item gets a color derived from its category's base color, nudged by
//! a hash of the item's name. Items in one category look related but stay
//! distinguishable, and the same name always yields the same color.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryType;

/// Color used when a category has no registry entry
const FALLBACK_BASE: Hsl = Hsl {
    hue: 0.0,
    saturation: 0.0,
    lightness: 0.8,
};

const SATURATION_RANGE: (f32, f32) = (0.4, 0.75);
const LIGHTNESS_RANGE: (f32, f32) = (0.7, 0.85);

/// Hue, saturation and lightness, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Convert to an opaque RGBA color
    pub fn to_color(&self) -> Color {
        let Hsl {
            hue: h,
            saturation: s,
            lightness: l,
        } = *self;

        let (r, g, b) = if s <= 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Color {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: u8::MAX,
        }
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// An RGBA color ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Hex form without alpha, e.g. `#f2a3c1`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Derive the display color of an item from its category and name
pub fn color_for(category: CategoryType, name: &str) -> Color {
    derive_hsl(category, name).to_color()
}

/// The HSL triple behind [`color_for`]
pub fn derive_hsl(category: CategoryType, name: &str) -> Hsl {
    let base = category.base_color().unwrap_or(FALLBACK_BASE);
    let variation = name_variation(name);

    Hsl {
        hue: (base.hue + variation * 0.1).rem_euclid(1.0),
        saturation: (base.saturation + variation * 0.1)
            .clamp(SATURATION_RANGE.0, SATURATION_RANGE.1),
        lightness: (base.lightness + variation * 0.05)
            .clamp(LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1),
    }
}

/// Per-name offset in [-0.5, 0.5)
fn name_variation(name: &str) -> f32 {
    (stable_hash(name) % 1000) as f32 / 1000.0 - 0.5
}

/// 32-bit FNV-1a; identical across runs and platforms
fn stable_hash(name: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    name.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(PRIME)
    })
}
