// MIT/Apache2 License

use std::{fmt, io};

/// Sum error type for chalkclip operations.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// Attempted to run an unsupported operation.
    NotSupported(NotSupportedOp),
    /// A named dimension could not be found in the resources.
    MissingDimension(String),
    /// A named string could not be found in the resources.
    MissingString(String),
    /// A named dimension resolved to a value that cannot be used for layout.
    InvalidDimension { name: String, value: f32 },
    /// The backing buffer for a surface could not be allocated.
    SurfaceAllocation { width: u32, height: u32 },
    /// `restore()` was called more times than `save()`.
    RestoreUnderflow,
    /// The surface could not be encoded as a PNG.
    Png(String),
    /// An I/O error occurred.
    Io(io::Error),
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotSupportedOp {
    Text,
    Transforms,
    PathClipping,
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(io) => Some(io),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::NotSupported(nsop) => {
                write!(f, "Surface does not support feature \"{:?}\"", nsop)
            }
            Self::MissingDimension(name) => write!(f, "No dimension named \"{}\"", name),
            Self::MissingString(name) => write!(f, "No string named \"{}\"", name),
            Self::InvalidDimension { name, value } => {
                write!(f, "Dimension \"{}\" has unusable value {}", name, value)
            }
            Self::SurfaceAllocation { width, height } => {
                write!(f, "Could not allocate a {}x{} surface", width, height)
            }
            Self::RestoreUnderflow => f.write_str("Underflow in restore: no matching save"),
            Self::Png(msg) => write!(f, "PNG encoding failed: {}", msg),
            Self::Io(io) => fmt::Display::fmt(io, f),
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(io: io::Error) -> Self {
        Self::Io(io)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_resource() {
        let err = Error::MissingDimension("rectInset".to_string());
        assert_eq!(err.to_string(), "No dimension named \"rectInset\"");

        let err = Error::NotSupported(NotSupportedOp::Text);
        assert_eq!(err.to_string(), "Surface does not support feature \"Text\"");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "gone");
    }
}
