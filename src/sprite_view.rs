use std::path::Path;

use eframe::egui;
use tracing::info;

use crate::sprite::Sprite;
use crate::{Error, Result};

/// Owns the sprite texture. The bitmap is uploaded once and reused every frame.
pub struct SpriteView {
    texture: egui::TextureHandle,
}

impl SpriteView {
    /// Load an image file (PNG or JPEG) and upload it as a texture.
    pub fn from_file(ctx: &egui::Context, path: &Path) -> Result<Self> {
        let img = load_image(path)?;
        info!(path = %path.display(), size = ?img.size, "loaded sprite image");
        Ok(Self::from_image(ctx, img))
    }

    /// Use a generated `size` x `size` bitmap.
    pub fn placeholder(ctx: &egui::Context, size: usize) -> Self {
        info!(size, "using generated sprite image");
        Self::from_image(ctx, generate_image(size, size))
    }

    fn from_image(ctx: &egui::Context, img: egui::ColorImage) -> Self {
        let texture = ctx.load_texture("sprite_tex", img, egui::TextureOptions::LINEAR);
        Self { texture }
    }

    /// Texture size in points.
    pub fn size(&self) -> egui::Vec2 {
        self.texture.size_vec2()
    }

    /// Paint the sprite at its current position. `origin` is the canvas
    /// top-left in screen coordinates.
    pub fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, sprite: &Sprite) {
        let min = origin + egui::vec2(sprite.position.x, sprite.position.y);
        let rect = egui::Rect::from_min_size(min, egui::vec2(sprite.width, sprite.height));
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(self.texture.id(), rect, uv, egui::Color32::WHITE);
    }
}

pub fn load_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path).map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Shaded disc on a transparent background, lit from the top-left.
pub fn generate_image(w: usize, h: usize) -> egui::ColorImage {
    let mut pixels = vec![0u8; w * h * 4];

    let center_x = w as f32 * 0.5;
    let center_y = h as f32 * 0.5;
    let radius = (w.min(h) as f32 * 0.5 - 1.0).max(1.0);

    for y in 0..h {
        for x in 0..w {
            let fx = (x as f32 + 0.5 - center_x) / radius;
            let fy = (y as f32 + 0.5 - center_y) / radius;
            let dist2 = fx * fx + fy * fy;
            if dist2 >= 1.0 {
                continue;
            }
            let idx = (y * w + x) * 4;
            let depth = (1.0 - dist2).sqrt();
            let light = (0.35 + 0.65 * (depth - 0.4 * (fx + fy)).clamp(0.0, 1.0)).min(1.0);
            let rim = if dist2 > 0.85 { 0.7 } else { 1.0 };
            pixels[idx] = (60.0 * light * rim) as u8;
            pixels[idx + 1] = (160.0 * light * rim) as u8;
            pixels[idx + 2] = (235.0 * light * rim) as u8;
            pixels[idx + 3] = 255;
        }
    }

    egui::ColorImage::from_rgba_unmultiplied([w, h], &pixels)
}
