use std::io::{Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Error;
use crate::Result;

pub struct PngEncoder<'a, W> {
    writer: &'a mut W,
}

impl<'a, W: Write + Seek> PngEncoder<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        PngEncoder { writer }
    }

    pub fn encode(&mut self, raster: &RgbImage, output_path: &Path) -> Result<()> {
        raster
            .write_to(self.writer, ImageFormat::Png)
            .map_err(|e| {
                Error::UnableToEncodeOutputImage(output_path.to_str().unwrap().to_owned(), e)
            })?;
        // flush so write errors surface here, not at drop
        self.writer.flush().map_err(|e| {
            Error::FailedToWriteOutputImage(output_path.to_str().unwrap().to_owned(), e)
        })
    }
}
