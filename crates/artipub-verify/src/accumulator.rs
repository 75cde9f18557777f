use std::collections::BTreeMap;

use crate::hasher::{Algorithm, AlgorithmHasher, Hasher};
use crate::{Result, VerifyError};

/// Feeds every chunk to one running hasher per selected algorithm.
///
/// `finalize` consumes the accumulator, so a digest set can only be produced
/// once and no chunk can arrive after it.
pub struct DigestAccumulator {
    hashers: Vec<(Algorithm, AlgorithmHasher)>,
    bytes:   u64,
}

impl Default for DigestAccumulator {
    /// MD5 and SHA-1, the pair every upload carries.
    fn default() -> Self {
        Self {
            hashers: vec![
                (Algorithm::Md5, Algorithm::Md5.hasher()),
                (Algorithm::Sha1, Algorithm::Sha1.hasher()),
            ],
            bytes:   0,
        }
    }
}

impl DigestAccumulator {
    /// Track the given algorithms. Duplicates are tracked once.
    pub fn new(algorithms: &[Algorithm]) -> Result<Self> {
        let mut hashers: Vec<(Algorithm, AlgorithmHasher)> = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            if hashers.iter().all(|(a, _)| a != algorithm) {
                hashers.push((*algorithm, algorithm.hasher()));
            }
        }

        if hashers.is_empty() {
            return Err(VerifyError::NoAlgorithms);
        }

        Ok(Self { hashers, bytes: 0 })
    }

    pub fn update(&mut self, chunk: &[u8]) {
        for (_, hasher) in &mut self.hashers {
            hasher.update(chunk);
        }
        self.bytes += chunk.len() as u64;
    }

    /// Number of bytes fed so far.
    pub fn bytes(&self) -> u64 { self.bytes }

    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.hashers.iter().map(|(a, _)| *a)
    }

    pub fn finalize(self) -> DigestSet {
        let digests = self
            .hashers
            .into_iter()
            .map(|(algorithm, hasher)| (algorithm, hex::encode(hasher.finalize())))
            .collect();

        DigestSet {
            digests,
            bytes: self.bytes,
        }
    }
}

/// Hex-lowercase digests of one complete input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSet {
    digests: BTreeMap<Algorithm, String>,
    bytes:   u64,
}

impl DigestSet {
    pub fn get(&self, algorithm: Algorithm) -> Option<&str> {
        self.digests.get(&algorithm).map(String::as_str)
    }

    pub fn md5(&self) -> Option<&str> { self.get(Algorithm::Md5) }

    pub fn sha1(&self) -> Option<&str> { self.get(Algorithm::Sha1) }

    pub fn sha256(&self) -> Option<&str> { self.get(Algorithm::Sha256) }

    /// Total number of bytes that went into the digests.
    pub fn bytes(&self) -> u64 { self.bytes }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &str)> {
        self.digests.iter().map(|(a, d)| (*a, d.as_str()))
    }

    pub fn len(&self) -> usize { self.digests.len() }

    pub fn is_empty(&self) -> bool { self.digests.is_empty() }
}
