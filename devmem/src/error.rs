#[derive(Debug)]
pub enum Error {
    Open(std::io::Error),
    Map(std::io::Error)
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Open(err) => write!(f, "Unable to open the physical memory device: {err}"),
            Error::Map(err) => write!(f, "Unable to map the physical range: {err}")
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open(err)
            | Error::Map(err) => Some(err)
        }
    }
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    Misaligned { offset: usize },
    OutOfRange { offset: usize, window: usize }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessError::Misaligned { offset } => {
                write!(f, "Offset {offset:#x} is not word-aligned")
            }
            AccessError::OutOfRange { offset, window } => {
                write!(f, "Offset {offset:#x} is outside the {window:#x}-byte window")
            }
        }
    }
}

impl std::error::Error for AccessError {}
