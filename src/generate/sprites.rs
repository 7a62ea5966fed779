//! Player and obstacle sprites
//!
//! Everything is flat rectangles on a transparent canvas; the log grain is
//! the only place a line primitive shows up.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use super::save_texture;
use crate::constants::{CAR_WIDTH, LANE_HEIGHT, LOG_WIDTH, TILE_SIZE, TRAIN_WIDTH};

// Colors
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const ORANGE: Rgba<u8> = Rgba([255, 165, 0, 255]);
const GLASS: Rgba<u8> = Rgba([200, 240, 255, 255]); // Window blue
const WOOD: Rgba<u8> = Rgba([139, 69, 19, 255]);
const GRAIN: Rgba<u8> = Rgba([101, 67, 33, 255]);
const TRAIN_BODY: Rgba<u8> = Rgba([80, 80, 80, 255]);

/// Car body colors, one texture per entry
const CAR_COLORS: [(&str, Rgba<u8>); 3] = [
    ("car_red", RED),
    ("car_blue", Rgba([30, 90, 255, 255])),
    ("car_yellow", Rgba([255, 200, 0, 255])),
];

/// Render the chicken and every obstacle sprite into `dir`.
/// Returns the file count.
pub fn run(dir: &Path) -> usize {
    save_texture(dir, "chicken", &chicken());
    for (name, body) in CAR_COLORS {
        save_texture(dir, name, &car(body));
    }
    save_texture(dir, "log", &log());
    save_texture(dir, "train", &train());
    CAR_COLORS.len() + 3
}

/// The player: white body, red comb, orange beak and legs.
pub fn chicken() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, TRANSPARENT);

    draw_filled_rect_mut(&mut img, Rect::at(8, 8).of_size(16, 16), WHITE); // body
    draw_filled_rect_mut(&mut img, Rect::at(12, 4).of_size(8, 4), RED); // comb
    draw_filled_rect_mut(&mut img, Rect::at(24, 12).of_size(4, 4), ORANGE); // beak
    draw_filled_rect_mut(&mut img, Rect::at(20, 10).of_size(2, 2), BLACK); // eye
    draw_filled_rect_mut(&mut img, Rect::at(10, 24).of_size(2, 4), ORANGE); // legs
    draw_filled_rect_mut(&mut img, Rect::at(20, 24).of_size(2, 4), ORANGE);

    img
}

/// A side-view car: colored body shell, glass canopy, two wheels.
pub fn car(body: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(CAR_WIDTH, LANE_HEIGHT, TRANSPARENT);

    draw_filled_rect_mut(&mut img, Rect::at(4, 8).of_size(52, 16), body);
    draw_filled_rect_mut(&mut img, Rect::at(10, 10).of_size(40, 12), GLASS);
    draw_filled_rect_mut(&mut img, Rect::at(8, 22).of_size(8, 8), BLACK);
    draw_filled_rect_mut(&mut img, Rect::at(44, 22).of_size(8, 8), BLACK);

    img
}

/// A floating log: wood slab with three darker grain marks.
pub fn log() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(LOG_WIDTH, LANE_HEIGHT, TRANSPARENT);

    draw_filled_rect_mut(&mut img, Rect::at(0, 4).of_size(LOG_WIDTH, 24), WOOD);
    for x in [10, 50, 90] {
        grain_line(&mut img, x as f32);
    }

    img
}

/// Two-pixel wide vertical grain mark spanning the slab.
fn grain_line(img: &mut RgbaImage, x: f32) {
    draw_line_segment_mut(img, (x, 4.0), (x, 27.0), GRAIN);
    draw_line_segment_mut(img, (x + 1.0, 4.0), (x + 1.0, 27.0), GRAIN);
}

/// One whole train lane: gray body, red stripe, a window every 40 px.
pub fn train() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(TRAIN_WIDTH, LANE_HEIGHT, TRANSPARENT);

    draw_filled_rect_mut(&mut img, Rect::at(0, 2).of_size(TRAIN_WIDTH, 28), TRAIN_BODY);
    draw_filled_rect_mut(&mut img, Rect::at(0, 10).of_size(TRAIN_WIDTH, 4), RED);

    // Windows last, over the stripe
    for x in (0..TRAIN_WIDTH as i32).step_by(40) {
        draw_filled_rect_mut(&mut img, Rect::at(x + 10, 5).of_size(20, 10), GLASS);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chicken_layout() {
        let img = chicken();
        assert_eq!(img.dimensions(), (TILE_SIZE, TILE_SIZE));

        // Corners stay clear of the body
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(31, 31), TRANSPARENT);

        assert_eq!(*img.get_pixel(16, 16), WHITE); // body
        assert_eq!(*img.get_pixel(16, 5), RED); // comb
        assert_eq!(*img.get_pixel(25, 13), ORANGE); // beak
        assert_eq!(*img.get_pixel(21, 11), BLACK); // eye
        assert_eq!(*img.get_pixel(10, 26), ORANGE); // left leg
        assert_eq!(*img.get_pixel(21, 26), ORANGE); // right leg
    }

    #[test]
    fn car_variants_share_one_layout() {
        for (name, body) in CAR_COLORS {
            let img = car(body);
            assert_eq!(img.dimensions(), (CAR_WIDTH, LANE_HEIGHT), "{}", name);

            assert_eq!(*img.get_pixel(0, 0), TRANSPARENT, "{}", name);
            assert_eq!(*img.get_pixel(5, 9), body, "{} shell", name);
            assert_eq!(*img.get_pixel(30, 15), GLASS, "{} canopy", name);
            assert_eq!(*img.get_pixel(12, 25), BLACK, "{} front wheel", name);
            assert_eq!(*img.get_pixel(48, 25), BLACK, "{} rear wheel", name);
        }
    }

    #[test]
    fn log_slab_and_grain() {
        let img = log();
        assert_eq!(img.dimensions(), (LOG_WIDTH, LANE_HEIGHT));

        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(30, 16), WOOD);
        for x in [10u32, 50, 90] {
            assert_eq!(*img.get_pixel(x, 16), GRAIN, "grain at x={}", x);
            assert_eq!(*img.get_pixel(x + 1, 16), GRAIN, "grain at x={}", x + 1);
        }
    }

    #[test]
    fn train_stripe_and_windows() {
        let img = train();
        assert_eq!(img.dimensions(), (TRAIN_WIDTH, LANE_HEIGHT));

        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT); // above the body
        assert_eq!(*img.get_pixel(5, 20), TRAIN_BODY);
        assert_eq!(*img.get_pixel(0, 11), RED); // stripe shows between windows

        // First and last window; windows overwrite the stripe
        assert_eq!(*img.get_pixel(15, 8), GLASS);
        assert_eq!(*img.get_pixel(15, 11), GLASS);
        assert_eq!(*img.get_pixel(775, 8), GLASS);
    }
}
