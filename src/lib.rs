//! Crossy assets - procedural sprite textures for a crossy-road style game
//!
//! Every tile and sprite the game draws is rendered from flat rectangle,
//! line, and single-pixel fills, then written out as a PNG. There is no
//! runtime component; the `generate_assets` binary renders the full set
//! once and exits.

pub mod constants;
pub mod generate;

// Re-export commonly used values for convenience
pub use constants::*;
