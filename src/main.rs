//! Sprite generator for the crossy game
//!
//! Renders every tile and obstacle texture the game needs and writes them
//! to `assets/` as PNG files.
//!
//! Run with: `cargo run --bin generate_assets`

fn main() {
    println!("=== Crossy Asset Generator ===\n");
    crossy_assets::generate::run();
}
