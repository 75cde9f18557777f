use std::fmt;

use digest::Digest;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Adapter turning any RustCrypto [`Digest`] into a [`Hasher`].
pub struct DigestHasher<D>(D);

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }
}

pub type Md5Hasher = DigestHasher<md5::Md5>;
pub type Sha1Hasher = DigestHasher<sha1::Sha1>;
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

/// Checksum algorithms understood by artifact repositories.
///
/// MD5 and SHA-1 are carried for compatibility with the repository's
/// checksum headers, not for their security properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
        }
    }

    pub fn hasher(&self) -> AlgorithmHasher {
        match self {
            Algorithm::Md5 => AlgorithmHasher::Md5(Md5Hasher::new()),
            Algorithm::Sha1 => AlgorithmHasher::Sha1(Sha1Hasher::new()),
            Algorithm::Sha256 => AlgorithmHasher::Sha256(Sha256Hasher::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Running state of one [`Algorithm`].
pub enum AlgorithmHasher {
    Md5(Md5Hasher),
    Sha1(Sha1Hasher),
    Sha256(Sha256Hasher),
}

impl Hasher for AlgorithmHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            AlgorithmHasher::Md5(h) => h.update(data),
            AlgorithmHasher::Sha1(h) => h.update(data),
            AlgorithmHasher::Sha256(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            AlgorithmHasher::Md5(h) => h.finalize(),
            AlgorithmHasher::Sha1(h) => h.finalize(),
            AlgorithmHasher::Sha256(h) => h.finalize(),
        }
    }
}
