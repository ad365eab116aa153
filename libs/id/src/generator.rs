//! Identifier assembly.

use tracing::trace;

use crate::options::GenerationOptions;
use crate::source::{Clock, RandomSource, SystemClock, ThreadRandom};

/// Base-36 alphabet the random segment is drawn from.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates identifiers from an injected clock and random source.
///
/// ```ignore
/// let mut ids = IdGenerator::with_sources(FixedClock(1_725_026_144_072), FixedDraws::new([0]));
/// let id = ids.generate(&GenerationOptions::new().with_random_length(3));
/// assert_eq!(id, "1725026144072.000");
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator<C = SystemClock, R = ThreadRandom> {
    clock: C,
    random: R,
}

impl IdGenerator {
    /// Creates a generator backed by the system clock and thread rng.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(SystemClock, ThreadRandom::default())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: RandomSource> IdGenerator<C, R> {
    /// Creates a generator from explicit sources.
    pub fn with_sources(clock: C, random: R) -> Self {
        Self { clock, random }
    }

    /// Builds one identifier.
    ///
    /// Components are joined in the order prefix, timestamp, random segment,
    /// suffix. Absent components are skipped entirely, so no empty
    /// placeholders end up between separators.
    pub fn generate(&mut self, options: &GenerationOptions) -> String {
        let timestamp = options
            .include_timestamp()
            .then(|| self.clock.now_millis().to_string());

        let random = self.random_segment(options.random_length());
        let random = (!random.is_empty()).then(|| options.case_option().apply(&random));

        trace!(
            prefix = options.prefix().is_some(),
            timestamp = timestamp.is_some(),
            random_length = options.random_length(),
            suffix = options.suffix().is_some(),
            case = %options.case_option(),
            "generating id"
        );

        let parts: Vec<&str> = [
            options.prefix(),
            timestamp.as_deref(),
            random.as_deref(),
            options.suffix(),
        ]
        .into_iter()
        .flatten()
        .collect();

        parts.join(options.separator())
    }

    /// Draws `len` characters uniformly from [`ALPHABET`].
    pub fn random_segment(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABET[self.random.next_index(ALPHABET.len())] as char)
            .collect()
    }
}

/// Generates an identifier using the system clock and thread rng.
pub fn generate(options: &GenerationOptions) -> String {
    IdGenerator::new().generate(options)
}

/// Generates an identifier with default options, e.g. `1725026144072.8rp09zp5ewa4z`.
pub fn generate_default() -> String {
    generate(&GenerationOptions::default())
}
