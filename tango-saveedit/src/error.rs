#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirtyReason {
    Navicust,
    Modcards,
}

impl std::fmt::Display for DirtyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirtyReason::Navicust => write!(f, "navicust must be rebuilt first"),
            DirtyReason::Modcards => write!(f, "modcards must be rebuilt first"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid size: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unrecognized game marker: {0:02x?}")]
    UnrecognizedGameMarker(Vec<u8>),

    #[error("invalid checksum: {actual:08x} not in {expected:08x?}")]
    ChecksumMismatch { actual: u32, expected: Vec<u32> },

    #[error("invalid shift: {0}")]
    InvalidShift(usize),

    #[error("format error: {0}")]
    Format(String),

    #[error("out of range: {offset:#x}+{len} exceeds {size:#x}")]
    OutOfRange { offset: usize, len: usize, size: usize },

    #[error("{what} index {index} out of range (max {count})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },

    #[error("stale derived state: {}", join_reasons(.0))]
    StaleDerivedState(Vec<DirtyReason>),

    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error("unknown rom: {0:?}")]
    UnknownRom(String),

    #[error("{0}")]
    Detect(#[from] tango_gamedb::DetectError),

    #[error("no known format matched:\n{}", join_sniff_errors(.0))]
    SniffFailed(Vec<(&'static str, Error)>),
}

fn join_reasons(reasons: &[DirtyReason]) -> String {
    reasons.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
}

fn join_sniff_errors(errors: &[(&'static str, Error)]) -> String {
    errors
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::format("unexpected end of data"),
            _ => Error::Format(err.to_string()),
        }
    }
}
