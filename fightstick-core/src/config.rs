//! Run configuration: echo factor, poll interval and sweep mode.

use crate::timing::ticks_for;

/// Traversal used by the raster printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepMode {
    /// One row at a time, with a neutral tick between consecutive moves.
    #[default]
    Simple,
    /// Two rows at a time with a fixed up/down micro-pattern.
    ZigZag,
}

/// Error type for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Echo factor must be at least 1.
    ZeroEchoFactor,
    /// Poll interval must be at least 1 ms.
    ZeroPollInterval,
    /// The zig-zag pattern only lands on row-pair boundaries for even widths.
    OddZigZagWidth,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroEchoFactor => write!(f, "echo factor must be at least 1"),
            Self::ZeroPollInterval => write!(f, "poll interval must be at least 1 ms"),
            Self::OddZigZagWidth => write!(f, "zig-zag sweep needs an even bitmap width"),
        }
    }
}

/// Fixed parameters of one run.
///
/// Built once at start-up and never mutated. `Config::new` is a `const fn`
/// so firmware can validate its configuration at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    echo_factor: u8,
    poll_interval_ms: u8,
    sweep_mode: SweepMode,
}

impl Config {
    /// Two replays per report at the 8 ms poll floor, simple sweep.
    pub const DEFAULT: Self = Self {
        echo_factor: 2,
        poll_interval_ms: 8,
        sweep_mode: SweepMode::Simple,
    };

    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroEchoFactor`] or
    /// [`ConfigError::ZeroPollInterval`] for zero values.
    pub const fn new(
        echo_factor: u8,
        poll_interval_ms: u8,
        sweep_mode: SweepMode,
    ) -> Result<Self, ConfigError> {
        if echo_factor == 0 {
            return Err(ConfigError::ZeroEchoFactor);
        }
        if poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(Self {
            echo_factor,
            poll_interval_ms,
            sweep_mode,
        })
    }

    /// Replays that follow every fresh report.
    #[inline]
    #[must_use]
    pub const fn echo_factor(&self) -> u8 {
        self.echo_factor
    }

    /// Host poll interval in milliseconds, as advertised by the transport.
    #[inline]
    #[must_use]
    pub const fn poll_interval_ms(&self) -> u8 {
        self.poll_interval_ms
    }

    #[inline]
    #[must_use]
    pub const fn sweep_mode(&self) -> SweepMode {
        self.sweep_mode
    }

    /// Fresh-report ticks covering `ms` milliseconds under this configuration.
    #[inline]
    #[must_use]
    pub const fn ticks_for(&self, ms: u32) -> u32 {
        ticks_for(ms, self.echo_factor, self.poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_zero_echo() {
        assert_eq!(
            Config::new(0, 8, SweepMode::Simple),
            Err(ConfigError::ZeroEchoFactor)
        );
    }

    #[test]
    fn test_config_rejects_zero_poll() {
        assert_eq!(
            Config::new(1, 0, SweepMode::ZigZag),
            Err(ConfigError::ZeroPollInterval)
        );
    }

    #[test]
    fn test_config_accessors() {
        let config = Config::new(3, 16, SweepMode::ZigZag).unwrap();
        assert_eq!(config.echo_factor(), 3);
        assert_eq!(config.poll_interval_ms(), 16);
        assert_eq!(config.sweep_mode(), SweepMode::ZigZag);
        assert_eq!(config.ticks_for(4800), 100);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config, Config::new(2, 8, SweepMode::Simple).unwrap());
        assert_eq!(config.ticks_for(2000), 125);
    }

    #[test]
    fn test_config_validates_in_const_context() {
        const CONFIG: Config = match Config::new(1, 8, SweepMode::Simple) {
            Ok(config) => config,
            Err(_) => panic!("invalid config"),
        };
        assert_eq!(CONFIG.echo_factor(), 1);
    }
}
