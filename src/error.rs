use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every decoder in this crate either returns a fully populated structure or one of these
/// variants. There is no partial-success reporting: a resource that fails anywhere inside its
/// layout is reported as a whole, and the caller is expected to move on to the next resource.
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::OutOfBounds`] - A read, seek or declared length ran past the end of the buffer
/// - [`Error::Malformed`] - The data violates the layout of the resource in some other way
/// - [`Error::Empty`] - An empty buffer or section table was provided
/// - [`Error::LimitExceeded`] - A count read from the stream exceeds the configured cap
///
/// ## Identification Errors
/// - [`Error::SignatureMismatch`] - A 4-byte magic value did not match
/// - [`Error::KeyMismatch`] - A version-info key string did not match its expected literal
/// - [`Error::NotSupported`] - No decoder exists for the requested resource kind
///
/// ## Address Translation Errors
/// - [`Error::InvalidRva`] - The relative virtual address was zero
/// - [`Error::RvaNotMapped`] - No section maps the relative virtual address
///
/// # Examples
///
/// ```rust
/// use rsrcscope::{resources::decode_accelerators, Error};
///
/// match decode_accelerators(&[0u8; 15]) {
///     Ok(entries) => println!("{} accelerators", entries.len()),
///     Err(Error::Malformed { message, .. }) => eprintln!("not an accelerator table: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The data is damaged and could not be decoded.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while decoding.
    ///
    /// Declared counts and lengths inside resource blobs are never trusted; any read that would
    /// cross the end of the buffer yields this error instead.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// This resource type is not supported.
    #[error("This resource type is not supported")]
    NotSupported,

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// A 4-byte magic value did not match the expected signature.
    #[error("Signature mismatch - expected 0x{expected:08X}, found 0x{found:08X}")]
    SignatureMismatch {
        /// The signature the decoder requires
        expected: u32,
        /// The signature that was read
        found: u32,
    },

    /// A version-info block key did not match the literal required at that position.
    #[error("Key mismatch - expected '{expected}', found '{found}'")]
    KeyMismatch {
        /// The key the decoder requires
        expected: &'static str,
        /// The key that was read
        found: String,
    },

    /// A count read from the stream exceeds the limit configured in
    /// [`crate::DecoderConfig`].
    #[error("Declared {what} count {declared} exceeds the limit of {limit}")]
    LimitExceeded {
        /// What was being counted
        what: &'static str,
        /// The count declared in the stream
        declared: u64,
        /// The configured limit
        limit: u64,
    },

    /// The relative virtual address 0 can not be translated.
    #[error("A relative virtual address of 0 can not be translated")]
    InvalidRva,

    /// No section of the section table maps the relative virtual address.
    #[error("RVA 0x{0:08X} is not mapped by any section")]
    RvaNotMapped(u32),
}
