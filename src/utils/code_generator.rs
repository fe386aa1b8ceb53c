//! Short code generation.
//!
//! Codes are 6 characters drawn independently and uniformly from a
//! 62-symbol alphanumeric alphabet, giving 62^6 (about 5.7 * 10^10) possible
//! codes. The generator only guarantees the shape of a code; uniqueness is
//! enforced by the registry.

use rand::Rng;

/// Symbols a code may contain.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in every generated code.
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// Injected into the registry so tests can supply deterministic sequences.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code.
    fn generate(&self) -> String;
}

/// Production generator backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(&mut rand::rng())
    }
}

/// Generates a code using the given RNG.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(&mut rand::rng());
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
