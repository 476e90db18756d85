// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount-time carousel configuration.

use core::error::Error;
use core::fmt;

/// Caller-supplied configuration, immutable for the lifetime of one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Number of logical items, must be at least 1.
    pub item_count: usize,
    /// Auto-advance period in host ticks, must be positive. There is no
    /// "disabled" sentinel; a non-positive interval is a configuration
    /// error, not a way to switch auto-advance off.
    pub interval_ticks: u64,
    /// Physical page to start on; wrapped into the doubled range.
    pub start_physical_index: usize,
}

impl CarouselConfig {
    /// Creates a configuration starting on the first page.
    #[must_use]
    pub const fn new(item_count: usize, interval_ticks: u64) -> Self {
        Self {
            item_count,
            interval_ticks,
            start_physical_index: 0,
        }
    }

    /// Checks the fail-fast invariants, before any timer or surface state
    /// is created.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyItems`] if `item_count` is zero.
    /// - [`ConfigError::NonPositiveInterval`] if `interval_ticks` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count == 0 {
            return Err(ConfigError::EmptyItems);
        }
        if self.interval_ticks == 0 {
            return Err(ConfigError::NonPositiveInterval);
        }
        Ok(())
    }
}

/// Rejected carousel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The item sequence was empty.
    EmptyItems,
    /// The auto-advance interval was not positive.
    NonPositiveInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyItems => write!(f, "carousel requires at least one item"),
            Self::NonPositiveInterval => {
                write!(f, "auto-advance interval must be a positive number of ticks")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{CarouselConfig, ConfigError};

    #[test]
    fn valid_configuration_passes() {
        assert_eq!(CarouselConfig::new(1, 1).validate(), Ok(()));
        let config = CarouselConfig {
            item_count: 5,
            interval_ticks: 3_000,
            start_physical_index: 7,
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_items_fail_fast() {
        assert_eq!(
            CarouselConfig::new(0, 5_000).validate(),
            Err(ConfigError::EmptyItems)
        );
    }

    #[test]
    fn zero_interval_fails_fast() {
        assert_eq!(
            CarouselConfig::new(3, 0).validate(),
            Err(ConfigError::NonPositiveInterval)
        );
    }
}
