//! Asset generation modules
//!
//! One draw routine per texture; `run` renders the full set:
//! - Ground tiles: grass, road, water, rail
//! - Sprites: chicken, car variants, log, train

pub mod sprites;
pub mod tiles;

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::constants::OUTPUT_DIR;

/// Render every texture into `dir`, creating it if needed.
/// Returns the number of files written.
pub fn generate_all(dir: &Path) -> usize {
    fs::create_dir_all(dir).unwrap_or_else(|e| {
        panic!(
            "\n\nERROR: Could not create output directory '{}': {}\n",
            dir.display(),
            e
        )
    });

    tiles::run(dir) + sprites::run(dir)
}

/// Entry point used by the `generate_assets` binary.
pub fn run() {
    println!("Generating sprite textures...");
    println!("  Output: {}/", OUTPUT_DIR);
    println!();

    let written = generate_all(Path::new(OUTPUT_DIR));

    println!("\nGenerated {} textures.", written);
}

/// Write one canvas as `<dir>/<name>.png`, replacing any existing file.
pub(crate) fn save_texture(dir: &Path, name: &str, img: &RgbaImage) {
    let path = dir.join(format!("{name}.png"));
    img.save(&path)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write '{}': {}\n", path.display(), e));
    println!("  Created: {}", path.display());
}
