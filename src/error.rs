use core::fmt::{self, Debug, Display, Formatter};

/// Errors returned by the driver. `E` is the error type of the underlying `DisplayInterface`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Error<E> {
    /// A drawing, flush or control call was made before `Display::init` completed.
    NotInitialized,

    /// `Display::init` was called on a display that has already been brought up.
    AlreadyInitialized,

    /// An argument was outside the range the controller or the shape accepts.
    InvalidArgument,

    /// The transport reported a failure. The transfer is not retried.
    Transport(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

impl<E: Debug> Debug for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("NotInitialized"),
            Self::AlreadyInitialized => f.write_str("AlreadyInitialized"),
            Self::InvalidArgument => f.write_str("InvalidArgument"),
            Self::Transport(err) => f.debug_tuple("Transport").field(err).finish(),
        }
    }
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "display has not been initialized"),
            Self::AlreadyInitialized => write!(f, "display is already initialized"),
            Self::InvalidArgument => write!(f, "argument out of range"),
            Self::Transport(err) => write!(f, "transport error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: Debug> std::error::Error for Error<E> {}
