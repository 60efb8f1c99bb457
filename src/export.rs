//! Flattens a skeleton onto a plain canvas.

use image::{Rgb, RgbImage};

use crate::render::{self, DrawCommand, Overlay, Style};
use crate::skeleton::{Color, Skeleton};

/// Draws every edge, then every keypoint, on a black `size`×`size` image.
/// Index labels and the background photo are left out.
pub fn flatten(skeleton: &Skeleton, style: &Style, size: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, rgb(Color::BLACK));
    for command in render::scene(skeleton, style, Overlay::EXPORT) {
        rasterize(&mut img, &command);
    }
    img
}

pub fn rasterize(img: &mut RgbImage, command: &DrawCommand) {
    match command {
        DrawCommand::Line {
            from,
            to,
            color,
            width,
        } => draw_line_on_image(img, from.x, from.y, to.x, to.y, *width, rgb(*color)),
        DrawCommand::Disc {
            center,
            radius,
            color,
        } => fill_disc(img, center.x, center.y, *radius, rgb(*color)),
        // needs a font rasterizer; only shown on screen
        DrawCommand::Label { .. } => {}
    }
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn put_clipped(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    if x >= 0 && x < w && y >= 0 && y < h {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line_on_image(
    img: &mut RgbImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    thickness: f32,
    color: Rgb<u8>,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len = (dx * dx + dy * dy).sqrt();
    let steps = (len * 2.0) as i32;
    let half_t = (thickness / 2.0).max(0.5) as i32;

    for i in 0..=steps {
        let t = i as f32 / steps.max(1) as f32;
        let cx = (x0 + dx * t).round() as i32;
        let cy = (y0 + dy * t).round() as i32;
        for oy in -half_t..=half_t {
            for ox in -half_t..=half_t {
                put_clipped(img, cx + ox, cy + oy, color);
            }
        }
    }
}

fn fill_disc(img: &mut RgbImage, cx: f32, cy: f32, radius: f32, color: Rgb<u8>) {
    let r = radius.ceil() as i32;
    let (ix, iy) = (cx.round() as i32, cy.round() as i32);
    let r2 = radius * radius;
    for oy in -r..=r {
        for ox in -r..=r {
            if (ox * ox + oy * oy) as f32 <= r2 {
                put_clipped(img, ix + ox, iy + oy, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
