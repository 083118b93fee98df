//! Secret providers
//!
//! The game never picks a secret itself: it asks a [`SecretProvider`] for one
//! when a session starts.

mod random;

pub use random::RandomSecretProvider;

use crate::core::{Mode, Secret};
use thiserror::Error;

/// Failure to produce a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("no {length}-letter words available")]
    NoWordsOfLength { length: usize },

    #[error("provider returned '{secret}', which is not a valid {mode} secret of length {length}")]
    ContractViolation {
        mode: Mode,
        length: usize,
        secret: String,
    },
}

/// Source of secrets for new sessions
pub trait SecretProvider {
    /// Produce a secret of `length` characters from the mode's alphabet
    ///
    /// Number secrets must not start with `0`. Word secrets must be an
    /// uppercase word of exactly `length` letters.
    ///
    /// # Errors
    /// Returns `ProviderError` if no secret can be produced for the request.
    fn generate(&mut self, mode: Mode, length: usize) -> Result<Secret, ProviderError>;
}

impl<P: SecretProvider + ?Sized> SecretProvider for &mut P {
    fn generate(&mut self, mode: Mode, length: usize) -> Result<Secret, ProviderError> {
        (**self).generate(mode, length)
    }
}

/// Provider that always hands out the same secret
///
/// Used for scripted games and tests. The secret is returned as-is, so a
/// secret that doesn't fit the session's config is caught when the session
/// starts.
#[derive(Debug, Clone)]
pub struct FixedSecretProvider {
    secret: Secret,
}

impl FixedSecretProvider {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Secret::new(secret),
        }
    }
}

impl SecretProvider for FixedSecretProvider {
    fn generate(&mut self, _mode: Mode, _length: usize) -> Result<Secret, ProviderError> {
        Ok(self.secret.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_provider_repeats_secret() {
        let mut provider = FixedSecretProvider::new("crane");
        let first = provider.generate(Mode::Word, 5).unwrap();
        let second = provider.generate(Mode::Word, 5).unwrap();
        assert_eq!(first.text(), "CRANE");
        assert_eq!(first, second);
    }

    #[test]
    fn provider_usable_through_mut_reference() {
        fn generate_with<P: SecretProvider>(mut provider: P) -> Secret {
            provider.generate(Mode::Number, 4).unwrap()
        }

        let mut provider = FixedSecretProvider::new("1234");
        assert_eq!(generate_with(&mut provider).text(), "1234");
    }
}
