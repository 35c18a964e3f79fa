//! Procedural drawing of the app icon: a white magnifying glass over a
//! vertical coral gradient.

use crate::raster::{self, BoundingBox, Point};
use anyhow::{ensure, Result};
use image::{Rgba, RgbaImage};
use std::f32::consts::FRAC_PI_4;

/// Side of the icon written to the asset catalog.
pub const DEFAULT_SIZE: u32 = 1024;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Colors used by the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Gradient color at row 0 (#D97757)
    pub top: [u8; 3],
    /// Gradient color at the last row (#C45836)
    pub bottom: [u8; 3],
    /// Fill for the hole of the ring
    pub inner: Rgba<u8>,
    /// Ring and handle
    pub glass: Rgba<u8>,
    /// Translucent highlight on the lens
    pub highlight: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        let top = [217, 119, 87];
        let bottom = [196, 88, 54];
        Self {
            top,
            bottom,
            inner: mix(top, bottom, 0.05),
            glass: WHITE,
            highlight: Rgba([255, 255, 255, 60]),
        }
    }
}

impl Palette {
    /// Gradient color for row `y` of a canvas `size` rows tall.
    pub fn gradient_at(&self, y: u32, size: u32) -> Rgba<u8> {
        let t = y as f32 / size as f32;
        let channel = |i: usize| {
            let top = self.top[i] as f32;
            let bottom = self.bottom[i] as f32;
            (top + (bottom - top) * t) as u8
        };
        Rgba([channel(0), channel(1), channel(2), 255])
    }
}

/// Interpolate `weight` of the way from `from` to `to`, truncating each channel.
fn mix(from: [u8; 3], to: [u8; 3], weight: f32) -> Rgba<u8> {
    let channel = |i: usize| (from[i] as f32 * (1.0 - weight) + to[i] as f32 * weight) as u8;
    Rgba([channel(0), channel(1), channel(2), 255])
}

/// Layout of the magnifying glass, all lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub center: Point,
    /// Radius of the middle of the ring band
    pub glass_radius: f32,
    pub ring_width: f32,
    pub handle_width: f32,
    pub handle_length: f32,
    /// Distance of the highlight from the center along both axes
    pub highlight_offset: f32,
    pub highlight_radius: f32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        let size = size as f32;
        let glass_radius = size * 0.24;
        Self {
            center: Point::new(size * 0.42, size * 0.42),
            glass_radius,
            ring_width: size * 0.055,
            handle_width: size * 0.07,
            handle_length: size * 0.28,
            highlight_offset: glass_radius * 0.25,
            highlight_radius: glass_radius * 0.15,
        }
    }

    pub fn outer_radius(&self) -> f32 {
        self.glass_radius + self.ring_width / 2.0
    }

    pub fn inner_radius(&self) -> f32 {
        self.glass_radius - self.ring_width / 2.0
    }

    /// Where the handle leaves the ring, at 45 degrees below-right of the center.
    pub fn handle_start(&self) -> Point {
        let (sin, cos) = FRAC_PI_4.sin_cos();
        Point::new(
            self.center.x + self.glass_radius * cos,
            self.center.y + self.glass_radius * sin,
        )
    }

    pub fn handle_end(&self) -> Point {
        let (sin, cos) = FRAC_PI_4.sin_cos();
        let start = self.handle_start();
        Point::new(
            start.x + self.handle_length * cos,
            start.y + self.handle_length * sin,
        )
    }

    pub fn highlight_center(&self) -> Point {
        Point::new(
            self.center.x - self.highlight_offset,
            self.center.y - self.highlight_offset,
        )
    }
}

/// Render the icon as a `size`×`size` RGBA image.
pub fn render(size: u32) -> Result<RgbaImage> {
    ensure!(size > 0, "icon size must be positive");

    let palette = Palette::default();
    let geometry = Geometry::for_size(size);
    let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);

    for y in 0..size {
        raster::fill_row(&mut canvas, y, palette.gradient_at(y, size));
    }

    // Ring by overdraw: solid outer disc, then the hole on top of it
    raster::fill_ellipse(
        &mut canvas,
        BoundingBox::around(geometry.center, geometry.outer_radius()),
        palette.glass,
    );
    raster::fill_ellipse(
        &mut canvas,
        BoundingBox::around(geometry.center, geometry.inner_radius()),
        palette.inner,
    );

    let handle_end = geometry.handle_end();
    raster::draw_thick_line(
        &mut canvas,
        geometry.handle_start(),
        handle_end,
        geometry.handle_width as u32,
        palette.glass,
    );
    raster::fill_ellipse(
        &mut canvas,
        BoundingBox::around(handle_end, geometry.handle_width / 2.0),
        palette.glass,
    );

    let mut shine = RgbaImage::from_pixel(size, size, TRANSPARENT);
    raster::fill_ellipse(
        &mut shine,
        BoundingBox::around(geometry.highlight_center(), geometry.highlight_radius),
        palette.highlight,
    );
    image::imageops::overlay(&mut canvas, &shine, 0, 0);

    Ok(canvas)
}
