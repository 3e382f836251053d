// std
use std::path::Path;
// others
use image::{ImageError, Rgb, RgbImage};
// crate
use crate::core::util::{clamp_t, gamma_correct, Float, Spectrum};

/// Image-space pixel buffer. Radiance stays linear and unbounded in
/// the buffer; clamping to `[0, 1]` and sRGB encoding happen once, at
/// [`write_image`] time.
///
/// Pixel `(j, i)` is column `j`, row `i`, with `(0, 0)` in the upper
/// left corner.
///
/// [`write_image`]: struct.Film.html#method.write_image
pub struct Film {
    x_resolution: u32,
    y_resolution: u32,
    pixels: Vec<Spectrum>,
}

impl Film {
    pub fn new(x_resolution: u32, y_resolution: u32) -> Self {
        Film {
            x_resolution,
            y_resolution,
            pixels: vec![Spectrum::default(); (x_resolution * y_resolution) as usize],
        }
    }
    pub fn x_resolution(&self) -> u32 {
        self.x_resolution
    }
    pub fn y_resolution(&self) -> u32 {
        self.y_resolution
    }
    pub fn pixel(&self, j: u32, i: u32) -> Spectrum {
        self.pixels[(i * self.x_resolution + j) as usize]
    }
    pub fn set_pixel(&mut self, j: u32, i: u32, color: Spectrum) {
        self.pixels[(i * self.x_resolution + j) as usize] = color;
    }
    /// Write the buffer as an 8-bit image (format chosen from the
    /// file extension, typically PNG).
    pub fn write_image(&self, path: &Path) -> Result<(), ImageError> {
        let mut image = RgbImage::new(self.x_resolution, self.y_resolution);
        for (j, i, pixel) in image.enumerate_pixels_mut() {
            let color = self.pixel(j, i);
            *pixel = Rgb([
                quantize(color[0]),
                quantize(color[1]),
                quantize(color[2]),
            ]);
        }
        image.save(path)
    }
}

fn quantize(v: Float) -> u8 {
    clamp_t(255.0 * gamma_correct(clamp_t(v, 0.0, 1.0)) + 0.5, 0.0, 255.0) as u8
}
