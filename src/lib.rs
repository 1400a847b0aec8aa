use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use converter::{
    decoder::WebPDecoder, encoder::PngEncoder, scanner::DirectoryScanner,
    transformer::RgbTransformer,
};
use error::Error;

mod cli;
pub mod converter;
mod error;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_directory: PathBuf,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_str().unwrap().to_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_str().unwrap().to_owned(), e)
        })
}

pub fn convert_webp_directory(arguments: &Arguments) -> Result<()> {
    let scanner = DirectoryScanner::new(converter::SOURCE_EXTENSION);
    let source_paths = scanner.scan(&arguments.input_directory)?;
    log::info!(
        "found {} WebP file(s) in '{}'",
        source_paths.len(),
        arguments.input_directory.display()
    );
    for source_path in source_paths {
        let output_path = convert_webp_file(&source_path)?;
        println!("{}", output_path.display());
    }
    Ok(())
}

fn convert_webp_file(source_path: &Path) -> Result<PathBuf> {
    let input_file = open_input_file(source_path)?;
    let decoder = WebPDecoder::new(BufReader::new(input_file));
    let image = decoder.decode(source_path)?;
    logger::log_decoded_image(source_path, &image);
    let raster = RgbTransformer::new().transform(&image);
    let output_path = converter::derive_output_path(source_path);
    let output_file = open_output_file(&output_path)?;
    let mut output_file_writer = BufWriter::new(&output_file);
    let mut encoder = PngEncoder::new(&mut output_file_writer);
    encoder.encode(&raster, &output_path)?;
    Ok(output_path)
}
