//! Integration tests for pixproc crates.
//!
//! This crate contains end-to-end tests that drive `pixproc-ops` through
//! `pixproc-core` images, plus the deterministic fixtures they share.

use pixproc_core::{Image, Pixel};

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 4x4 opaque gradient: `(col * 32, row * 32, (col + row) * 16, 255)`.
pub fn gradient_4x4() -> Image {
    let pixels = (0..4u32)
        .flat_map(|row| {
            (0..4u32).map(move |col| {
                Pixel::new((col * 32) as u8, (row * 32) as u8, ((col + row) * 16) as u8, 255)
            })
        })
        .collect();
    Image::from_pixels(4, 4, pixels).expect("4x4 gradient")
}

/// Deterministic pattern with every channel (alpha included) varying.
pub fn pattern(width: u32, height: u32) -> Image {
    let pixels = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                Pixel::new(
                    ((row * 37 + col * 11) % 256) as u8,
                    (((row * 5) ^ (col * 29)) & 0xFF) as u8,
                    ((row * col * 13) % 256) as u8,
                    (((row * width + col) * 5) % 256) as u8,
                )
            })
        })
        .collect();
    Image::from_pixels(width, height, pixels).expect("pattern dimensions")
}

#[cfg(test)]
mod golden;
