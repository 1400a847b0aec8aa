use std::io::{BufRead, Seek};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::Error;
use crate::Result;

pub struct WebPDecoder<R> {
    reader: R,
}

impl<R: BufRead + Seek> WebPDecoder<R> {
    pub fn new(reader: R) -> Self {
        WebPDecoder { reader }
    }

    pub fn decode(self, source_path: &Path) -> Result<DynamicImage> {
        ImageReader::with_format(self.reader, ImageFormat::WebP)
            .decode()
            .map_err(|e| {
                Error::UnableToDecodeSourceImage(source_path.to_str().unwrap().to_owned(), e)
            })
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use std::path::Path;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    use super::WebPDecoder;
    use crate::error::Error;

    fn encode_webp(width: u32, height: u32) -> Cursor<Vec<u8>> {
        let mut raster = RgbImage::new(width, height);
        for (x, y, pixel) in raster.enumerate_pixels_mut() {
            *pixel = Rgb([(x % 256) as u8, (y % 256) as u8, 128]);
        }
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(raster)
            .write_to(&mut bytes, ImageFormat::WebP)
            .expect("Failed to encode WebP fixture");
        bytes.set_position(0);
        bytes
    }

    #[test]
    fn decode_valid_webp() {
        let decoder = WebPDecoder::new(encode_webp(4, 3));
        let image = decoder
            .decode(Path::new("fixture.webp"))
            .expect("Decoding failed");
        let raster = image.to_rgb8();
        assert_eq!(raster.dimensions(), (4, 3));
    }

    #[test]
    fn decode_invalid_bytes() {
        let decoder = WebPDecoder::new(Cursor::new(b"not a webp image".to_vec()));
        let result = decoder.decode(Path::new("broken.webp"));
        if let Err(Error::UnableToDecodeSourceImage(path, _)) = result {
            assert_eq!(path, "broken.webp");
            return;
        }
        panic!("Malformed source image not detected");
    }
}
