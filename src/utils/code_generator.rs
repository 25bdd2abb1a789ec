//! Short code generation and format validation.
//!
//! Codes are drawn uniformly from a 36-symbol alphabet. With the default length
//! of 6 that gives 36^6 ≈ 2.2×10^9 possible codes. The generator does not
//! guarantee uniqueness; [`crate::application::services::LinkService`] checks
//! candidates against the store.

use rand::Rng;

/// Symbols a short code is made of.
pub const CODE_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code.
    fn generate(&self) -> String;
}

/// Uniformly random fixed-length codes over [`CODE_ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` is exactly `length` characters from [`CODE_ALPHABET`].
pub fn is_valid_code(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
