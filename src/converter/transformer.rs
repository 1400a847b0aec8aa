use image::{DynamicImage, RgbImage};

pub struct RgbTransformer;

impl RgbTransformer {
    pub fn new() -> Self {
        RgbTransformer
    }

    /// Normalizes any decoded raster to three 8-bit channels. Alpha is
    /// discarded, grayscale and palette representations are expanded.
    pub fn transform(&self, image: &DynamicImage) -> RgbImage {
        image.to_rgb8()
    }
}

impl Default for RgbTransformer {
    fn default() -> Self {
        Self::new()
    }
}
