use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Upper bound on `count * max_len`, the worst-case pool size in bytes.
pub const MAX_TOTAL_BYTES: usize = 1 << 30;

/// Shape of the generated test strings.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of strings to generate
    pub count: usize,
    /// Shortest string length (inclusive)
    pub min_len: usize,
    /// Longest string length (inclusive)
    pub max_len: usize,
    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            count: 10_000,
            min_len: 1,
            max_len: 2_000,
            seed: None,
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            anyhow::bail!("min_len must be at least 1");
        }
        if self.min_len > self.max_len {
            anyhow::bail!(
                "min_len ({}) must not exceed max_len ({})",
                self.min_len,
                self.max_len
            );
        }
        match self.count.checked_mul(self.max_len) {
            Some(total) if total <= MAX_TOTAL_BYTES => {}
            _ => anyhow::bail!(
                "{} strings of up to {} bytes exceed the {}-byte limit",
                self.count,
                self.max_len,
                MAX_TOTAL_BYTES
            ),
        }
        Ok(())
    }
}

/// A pool of test strings to be joined into one.
#[derive(Default)]
pub struct StringBuilder {
    strings: Vec<String>,
}

impl StringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool with `config.count` runs of `'a'` of random length.
    pub fn generate_test_data(&mut self, config: &GenConfig) -> Result<()> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.strings.clear();
        self.strings
            .try_reserve(config.count)
            .with_context(|| format!("Failed to allocate {} test strings", config.count))?;
        for _ in 0..config.count {
            let len = rng.gen_range(config.min_len..=config.max_len);
            self.strings.push("a".repeat(len));
        }
        Ok(())
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn total_len(&self) -> usize {
        self.strings.iter().map(String::len).sum()
    }

    /// Concatenate the pool into a single string.
    ///
    /// The output is sized up front, so it is allocated exactly once.
    pub fn data(&self) -> String {
        let mut out = String::with_capacity(self.total_len());
        for s in &self.strings {
            out.push_str(s);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize, seed: u64) -> GenConfig {
        GenConfig { count, seed: Some(seed), ..GenConfig::default() }
    }

    #[test]
    fn test_generate_lengths_in_range() {
        let mut sb = StringBuilder::new();
        sb.generate_test_data(&seeded(500, 1)).unwrap();
        assert_eq!(sb.strings().len(), 500);
        for s in sb.strings() {
            assert!((1..=2_000).contains(&s.len()));
            assert!(s.bytes().all(|b| b == b'a'));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = StringBuilder::new();
        let mut b = StringBuilder::new();
        a.generate_test_data(&seeded(50, 99)).unwrap();
        b.generate_test_data(&seeded(50, 99)).unwrap();
        assert_eq!(a.strings(), b.strings());
    }

    #[test]
    fn test_regenerate_replaces_pool() {
        let mut sb = StringBuilder::new();
        sb.generate_test_data(&seeded(20, 3)).unwrap();
        sb.generate_test_data(&seeded(5, 4)).unwrap();
        assert_eq!(sb.strings().len(), 5);
    }

    #[test]
    fn test_data_concatenates_in_order() {
        let sb = StringBuilder { strings: vec!["ab".into(), "".into(), "cde".into()] };
        let out = sb.data();
        assert_eq!(out, "abcde");
        assert_eq!(StringBuilder::new().data(), "");
    }

    #[test]
    fn test_fixed_length() {
        let mut sb = StringBuilder::new();
        let config = GenConfig { count: 10, min_len: 7, max_len: 7, seed: Some(0) };
        sb.generate_test_data(&config).unwrap();
        assert_eq!(sb.total_len(), 70);
        assert_eq!(sb.data().len(), 70);
    }

    #[test]
    fn test_invalid_config() {
        let mut sb = StringBuilder::new();
        let zero = GenConfig { min_len: 0, ..GenConfig::default() };
        assert!(sb.generate_test_data(&zero).is_err());
        let inverted = GenConfig { min_len: 10, max_len: 5, ..GenConfig::default() };
        assert!(sb.generate_test_data(&inverted).is_err());
    }

    #[test]
    fn test_oversized_config_is_rejected() {
        let mut sb = StringBuilder::new();
        let huge_count = GenConfig { count: usize::MAX, seed: Some(1), ..GenConfig::default() };
        assert!(sb.generate_test_data(&huge_count).is_err());
        let huge_len = GenConfig { count: 1, max_len: usize::MAX, seed: Some(1), ..GenConfig::default() };
        assert!(sb.generate_test_data(&huge_len).is_err());
        let over_limit = GenConfig {
            count: MAX_TOTAL_BYTES / 2_000 + 1,
            seed: Some(1),
            ..GenConfig::default()
        };
        assert!(over_limit.validate().is_err());
        assert!(sb.strings().is_empty());

        // Right at the limit is still accepted.
        let at_limit = GenConfig { count: MAX_TOTAL_BYTES / 2_000, ..GenConfig::default() };
        assert!(at_limit.validate().is_ok());
    }
}
