use crate::render::PADDING_MARKER;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    BadAlignment {
        field: String,
        align: usize,
    },
    ReservedMarker {
        field: String,
    },
    DuplicateMarker {
        marker: char,
        first: String,
        second: String,
    },
    Overlap {
        field: String,
        offset: usize,
    },
    TooWide {
        total_size: usize,
        max_width: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadAlignment { field, align } => write!(
                f,
                "field `{}` has alignment {}, which is not a power of two",
                field, align
            ),
            Error::ReservedMarker { field } => write!(
                f,
                "field `{}` uses the marker '{}', which is reserved for padding",
                field, PADDING_MARKER
            ),
            Error::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "fields `{}` and `{}` both use the marker '{}'",
                first, second, marker
            ),
            Error::Overlap { field, offset } => write!(
                f,
                "field `{}` tags byte {}, which is already tagged or out of bounds",
                field, offset
            ),
            Error::TooWide {
                total_size,
                max_width,
            } => write!(
                f,
                "record is {} bytes, wider than the {} byte diagram limit",
                total_size, max_width
            ),
        }
    }
}

impl std::error::Error for Error {}
