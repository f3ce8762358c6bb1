/// How the machine treats behaviour that the reference interpreter silently tolerates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Unknown instructions leave the PC where it is and the stack index wraps at 16.
    Lenient,
    /// Unknown instructions and stack over/underflow are reported as errors.
    Strict,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Lenient
    }
}

/// # Config
/// Knobs fixed for the lifetime of a `Chip8`.
///
/// * `mode` see `Mode`
/// * `seed` seeds the generator behind `CXNN`; `None` draws a seed from the OS
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub seed: Option<u64>,
}

impl Config {
    pub fn strict() -> Self {
        Config {
            mode: Mode::Strict,
            ..Config::default()
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Config {
            seed: Some(seed),
            ..self
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Lenient);
        assert_eq!(config.seed, None);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_strict_keeps_seed() {
        let config = Config::strict().with_seed(7);
        assert!(config.is_strict());
        assert_eq!(config.seed, Some(7));
    }
}
