use artipub_verify::{Algorithm, DigestSet};

pub const X_CHECKSUM_MD5: &str = "X-Checksum-Md5";
pub const X_CHECKSUM_SHA1: &str = "X-Checksum-Sha1";
pub const X_CHECKSUM_SHA256: &str = "X-Checksum-Sha256";
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Header carrying the checksum of `algorithm`.
pub fn checksum_header(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Md5 => X_CHECKSUM_MD5,
        Algorithm::Sha1 => X_CHECKSUM_SHA1,
        Algorithm::Sha256 => X_CHECKSUM_SHA256,
    }
}

/// One checksum header per digest, then `Content-Length`.
pub fn upload_headers(digests: &DigestSet, content_length: u64) -> Vec<(String, String)> {
    digests
        .iter()
        .map(|(algorithm, hex)| (checksum_header(algorithm).to_string(), hex.to_string()))
        .chain(std::iter::once((CONTENT_LENGTH.to_string(), content_length.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use artipub_verify::DigestAccumulator;

    #[test]
    fn test_upload_headers_for_abc() {
        let mut acc = DigestAccumulator::default();
        acc.update(b"abc");
        let headers = upload_headers(&acc.finalize(), 3);

        assert_eq!(
            headers,
            vec![
                (X_CHECKSUM_MD5.to_string(), "900150983cd24fb0d6963f7d28e17f72".to_string()),
                (
                    X_CHECKSUM_SHA1.to_string(),
                    "a9993e364706816aba3e25717850c26c9cd0d89d".to_string()
                ),
                (CONTENT_LENGTH.to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_sha256_header_when_tracked() {
        let acc = DigestAccumulator::new(&Algorithm::ALL).unwrap();
        let headers = upload_headers(&acc.finalize(), 0);
        assert!(headers.iter().any(|(k, v)| {
            k == X_CHECKSUM_SHA256
                && v == "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        }));
        assert_eq!(headers.len(), 4);
    }
}
