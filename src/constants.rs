//! Tunable constants for the sprite generator
//!
//! All canvas sizes and output settings are defined here for easy tweaking.

// =============================================================================
// OUTPUT
// =============================================================================

/// Relative directory every texture is written into
pub const OUTPUT_DIR: &str = "assets";

// =============================================================================
// CANVAS SIZES
// =============================================================================

/// Square ground tiles and the chicken share one edge length
pub const TILE_SIZE: u32 = 32;
/// Height of every obstacle strip (one lane)
pub const LANE_HEIGHT: u32 = 32;

pub const CAR_WIDTH: u32 = 60;
pub const LOG_WIDTH: u32 = 100;
/// The train spans a whole lane in one piece
pub const TRAIN_WIDTH: u32 = 800;

// =============================================================================
// TILE NOISE
// =============================================================================

/// Speckle pixels scattered on each grass/road/water tile
pub const NOISE_DOTS: usize = 20;
