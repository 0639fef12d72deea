#[derive(Debug)]
pub enum Error {
    Mapping(devmem::error::Error),
    Register(devmem::error::AccessError),
    UnalignedAddress { address: u64 },
    Timeout { last_status: u32 }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Mapping(err) => write!(f, "Unable to map the register window: {err}"),
            Error::Register(err) => write!(f, "Invalid register access: {err}"),
            Error::UnalignedAddress { address } => {
                write!(f, "Transfer address {address:#x} is not word-aligned")
            }
            Error::Timeout { last_status } => {
                write!(f, "Transfer never reached idle, last status {last_status:#010x}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Mapping(err) => Some(err),
            Error::Register(err) => Some(err),
            Error::UnalignedAddress { .. }
            | Error::Timeout { .. } => None
        }
    }
}
