//! Ground tile textures
//!
//! Grass, road, and water are a flat fill with a sprinkle of speckle pixels
//! to break up the color; rail gets sleepers and a pair of horizontal rails
//! over sandy ground.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use rand::Rng;

use super::save_texture;
use crate::constants::{NOISE_DOTS, TILE_SIZE};

// Rail colors
const SAND: Rgba<u8> = Rgba([210, 180, 140, 255]);
const SLEEPER: Rgba<u8> = Rgba([101, 67, 33, 255]);
const STEEL: Rgba<u8> = Rgba([169, 169, 169, 255]);

/// Base fill and speckle color for one scatter tile
pub struct TileSpec {
    pub name: &'static str,
    pub base: Rgba<u8>,
    pub speckle: Rgba<u8>,
}

/// Ground tiles rendered as a flat fill plus speckles
pub const SCATTER_TILES: [TileSpec; 3] = [
    TileSpec {
        name: "grass",
        base: Rgba([34, 139, 34, 255]),
        speckle: Rgba([50, 205, 50, 255]),
    },
    TileSpec {
        name: "road",
        base: Rgba([60, 60, 60, 255]),
        speckle: Rgba([80, 80, 80, 255]),
    },
    TileSpec {
        name: "water",
        base: Rgba([0, 191, 255, 255]),
        speckle: Rgba([135, 206, 250, 255]),
    },
];

/// Render all ground tiles into `dir`. Returns the file count.
pub fn run(dir: &Path) -> usize {
    let mut rng = rand::thread_rng();
    for spec in &SCATTER_TILES {
        save_texture(dir, spec.name, &scatter_tile(spec, &mut rng));
    }
    save_texture(dir, "rail", &rail());
    SCATTER_TILES.len() + 1
}

/// Flat fill with `NOISE_DOTS` single-pixel speckles at random positions.
pub fn scatter_tile(spec: &TileSpec, rng: &mut impl Rng) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, spec.base);

    // Re-roll positions that already hold a speckle so the finished tile
    // always differs from the base fill in exactly NOISE_DOTS pixels.
    let mut placed = 0;
    while placed < NOISE_DOTS {
        let x = rng.gen_range(0..TILE_SIZE);
        let y = rng.gen_range(0..TILE_SIZE);
        if *img.get_pixel(x, y) == spec.base {
            img.put_pixel(x, y, spec.speckle);
            placed += 1;
        }
    }

    img
}

/// Sandy ground, two full-height sleeper columns, two horizontal rails.
pub fn rail() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, SAND);

    // Sleepers
    draw_filled_rect_mut(&mut img, Rect::at(4, 0).of_size(4, TILE_SIZE), SLEEPER);
    draw_filled_rect_mut(&mut img, Rect::at(24, 0).of_size(4, TILE_SIZE), SLEEPER);

    // Rails run over the sleepers
    draw_filled_rect_mut(&mut img, Rect::at(0, 8).of_size(TILE_SIZE, 2), STEEL);
    draw_filled_rect_mut(&mut img, Rect::at(0, 22).of_size(TILE_SIZE, 2), STEEL);

    img
}
