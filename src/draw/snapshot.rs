//! Rendered raster of the canvas at one instant.

use super::color::Color;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tiny_skia::{ColorU8, IntSize, Pixmap};

/// A rendered RGBA surface.
///
/// Pixels are stored premultiplied by tiny-skia; every accessor here hands out straight
/// (demultiplied) values.
#[derive(Clone)]
pub struct Snapshot {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Snapshot {
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reads one pixel; `None` outside the surface.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        let [r, g, b, a] = self.rgba_at(x, y)?;
        Some(Color::from_rgba8(r, g, b, a))
    }

    fn rgba_at(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        // Pixmap::pixel wraps columns into the next row, so bound both axes here.
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        let px = self.pixmap.pixel(x as u32, y as u32)?.demultiply();
        Some([px.red(), px.green(), px.blue(), px.alpha()])
    }

    /// Copies a `w`×`h` region whose top-left is `(x, y)`.
    ///
    /// The region may hang off the surface; those pixels come back transparent. Returns
    /// `None` for an empty region.
    pub fn crop(&self, x: i64, y: i64, w: u32, h: u32) -> Option<RgbaImage> {
        if w == 0 || h == 0 {
            return None;
        }
        let mut out = RgbaImage::new(w, h);
        for (dx, dy, pixel) in out.enumerate_pixels_mut() {
            if let Some(rgba) = self.rgba_at(x + dx as i64, y + dy as i64) {
                *pixel = Rgba(rgba);
            }
        }
        Some(out)
    }

    /// Full surface with the alpha channel dropped, as handed to encoders.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let [r, g, b, _] = self.rgba_at(x as i64, y as i64).unwrap_or([0, 0, 0, 0]);
            Rgb([r, g, b])
        })
    }
}

/// Converts a straight-alpha image into a premultiplied pixmap.
pub(crate) fn pixmap_from_image(image: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let mut data = Vec::with_capacity(image.as_raw().len());
    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        let premultiplied = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[
            premultiplied.red(),
            premultiplied.green(),
            premultiplied.blue(),
            premultiplied.alpha(),
        ]);
    }
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Snapshot {
        let image = RgbaImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        Snapshot::from_pixmap(pixmap_from_image(&image).unwrap())
    }

    #[test]
    fn pixel_reads_straight_color() {
        let snapshot = checker();
        assert_eq!(snapshot.pixel(0, 0), Some(Color::from_rgba8(255, 0, 0, 255)));
        assert_eq!(snapshot.pixel(1, 0), Some(Color::from_rgba8(0, 0, 255, 255)));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let snapshot = checker();
        assert!(snapshot.pixel(4, 0).is_none());
        assert!(snapshot.pixel(0, 3).is_none());
        assert!(snapshot.pixel(-1, 1).is_none());
    }

    #[test]
    fn crop_off_surface_is_transparent() {
        let snapshot = checker();
        let region = snapshot.crop(3, 2, 2, 2).unwrap();
        assert_eq!(region.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(region.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn empty_crop_is_none() {
        assert!(checker().crop(0, 0, 0, 2).is_none());
    }

    #[test]
    fn rgb_export_keeps_dimensions() {
        let rgb = checker().to_rgb_image();
        assert_eq!(rgb.dimensions(), (4, 3));
        assert_eq!(rgb.get_pixel(2, 0).0, [255, 0, 0]);
    }
}
