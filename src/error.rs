use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub enum PlotError {
    Io(std::io::Error),
    Image(image::ImageError),
    Csv(csv::Error),
    Parse { line: usize, message: String },
}

impl Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "io error: {}", err),
            PlotError::Image(err) => write!(f, "could not encode image: {}", err),
            PlotError::Csv(err) => write!(f, "malformed table: {}", err),
            PlotError::Parse { line, message } => {
                write!(f, "malformed table at line {}: {}", line, message)
            }
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Image(err) => Some(err),
            PlotError::Csv(err) => Some(err),
            PlotError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<image::ImageError> for PlotError {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}

impl From<csv::Error> for PlotError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
