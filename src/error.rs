use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputDirectoryNotFound(String),
    NoReadPermissionForInputDirectory(String),
    UnableToReadInputDirectory(String, std::io::Error),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToDecodeSourceImage(String, image::ImageError),
    UnableToEncodeOutputImage(String, image::ImageError),
    FailedToWriteOutputImage(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputDirectoryNotFound(path) => {
                write!(f, "Input directory '{}' not found", path)
            }
            Self::NoReadPermissionForInputDirectory(path) => {
                write!(
                    f,
                    "Unable to read input directory '{}'. Permission denied.",
                    path
                )
            }
            Self::UnableToReadInputDirectory(path, error) => {
                write!(f, "Unable to read input directory '{}': {}", path, error)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToDecodeSourceImage(path, error) => {
                write!(f, "Unable to decode source image '{}': {}", path, error)
            }
            Self::UnableToEncodeOutputImage(path, error) => {
                write!(f, "Unable to encode output image '{}': {}", path, error)
            }
            Self::FailedToWriteOutputImage(path, error) => {
                write!(f, "Failed to write output image '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
