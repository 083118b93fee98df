//! Random secret generation

use super::{ProviderError, SecretProvider};
use crate::core::{Mode, Secret};
use crate::wordlists::Lexicon;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Provider drawing random digit strings and random lexicon words
///
/// Generic over the random source so simulations and tests can seed it.
pub struct RandomSecretProvider<'a, R = ThreadRng> {
    lexicon: &'a Lexicon,
    rng: R,
}

impl<'a> RandomSecretProvider<'a, ThreadRng> {
    /// Create a provider backed by the thread-local generator
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_rng(lexicon, rand::rng())
    }
}

impl<'a, R: Rng> RandomSecretProvider<'a, R> {
    /// Create a provider with an explicit random source
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use traffic_light::core::Mode;
    /// use traffic_light::provider::{RandomSecretProvider, SecretProvider};
    /// use traffic_light::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let mut provider = RandomSecretProvider::with_rng(&lexicon, StdRng::seed_from_u64(7));
    ///
    /// let secret = provider.generate(Mode::Number, 4).unwrap();
    /// assert!(Mode::Number.is_valid_secret(&secret.text(), 4));
    /// ```
    pub const fn with_rng(lexicon: &'a Lexicon, rng: R) -> Self {
        Self { lexicon, rng }
    }

    /// Leading digit 1-9, then digits 0-9
    fn random_number(&mut self, length: usize) -> Secret {
        let text: String = (0..length)
            .map(|position| {
                let low = if position == 0 { 1 } else { 0 };
                let digit: u8 = self.rng.random_range(low..=9);
                char::from(b'0' + digit)
            })
            .collect();

        Secret::new(&text)
    }

    fn random_word(&mut self, length: usize) -> Result<Secret, ProviderError> {
        self.lexicon
            .words_of_length(length)
            .choose(&mut self.rng)
            .map(|word| Secret::new(word))
            .ok_or(ProviderError::NoWordsOfLength { length })
    }
}

impl<R: Rng> SecretProvider for RandomSecretProvider<'_, R> {
    fn generate(&mut self, mode: Mode, length: usize) -> Result<Secret, ProviderError> {
        debug!(%mode, length, "Generating secret");

        match mode {
            Mode::Number => Ok(self.random_number(length)),
            Mode::Word => self.random_word(length),
        }
    }
}
