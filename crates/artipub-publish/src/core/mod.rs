//! Pure transformations: URL handling, header construction, status
//! classification.

mod headers;
mod status;
mod target;

pub use headers::{
    CONTENT_LENGTH, X_CHECKSUM_MD5, X_CHECKSUM_SHA1, X_CHECKSUM_SHA256, checksum_header,
    upload_headers,
};
pub use status::{CREATED, interpret_status};
pub use target::{parse_proxy, parse_target, with_parameters};
