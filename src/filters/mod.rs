//! Filter implementations behind the dispatcher.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//!
//! Channel count is inferred from input array dimensions.
//!
//! ## Architecture
//!
//! - **Size preserving** - Every filter returns the input (H, W)
//! - **Alpha preservation** - Alpha channel (if present) is kept, except by blur
//! - **Grayscale handling** - Color-dependent filters (sepia) are no-ops for grayscale
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale, brightness/contrast, invert
//! - **Color science**: modulate (sepia)
//! - **Spatial**: gaussian blur, unsharp mask, emboss
//! - **Edge detection**: tensor edge detector with min-max normalization

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod color_science;
pub mod blur;
pub mod sharpen;
pub mod stylize;
pub mod edge;
