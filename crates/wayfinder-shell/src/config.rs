//! Shell configuration and setup-time validation.
//!
//! Steady-state navigation never fails; out-of-range requests degrade to
//! guarded no-ops. The one fail-fast category is configuration validity at
//! construction: a declared navigation family that exceeds the host's
//! addressable slots must abort initialization rather than silently
//! truncate.

use thiserror::Error;
use wayfinder_core::{AnyNavigationItem, ScreenHandle};

/// Default cap on addressable root items a host container exposes.
pub const MAX_FAMILY_LEN: usize = 5;

/// Construction-time parameters for a [`crate::Shell`].
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Screen installed at the root when the shell starts.
    pub initial_screen: ScreenHandle,
    /// Default chrome visibility passed to the initial `set_root`.
    pub chrome_hidden: bool,
    /// Maximum number of addressable slots a family may occupy.
    pub max_family_len: usize,
    /// Families the host will be asked to present, validated at
    /// construction.
    pub families: Vec<Vec<AnyNavigationItem>>,
}

impl ShellConfig {
    /// Config with the given initial screen and default limits.
    pub fn new(initial_screen: ScreenHandle) -> Self {
        Self {
            initial_screen,
            chrome_hidden: true,
            max_family_len: MAX_FAMILY_LEN,
            families: Vec::new(),
        }
    }

    /// Declare a navigation family the host will present.
    #[must_use]
    pub fn with_family(mut self, items: Vec<AnyNavigationItem>) -> Self {
        self.families.push(items);
        self
    }

    /// Check every declared family against the slot cap.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_family_len == 0 {
            return Err(ConfigError::NoSlots);
        }
        for family in &self.families {
            if family.len() > self.max_family_len {
                return Err(ConfigError::FamilyTooLarge {
                    len: family.len(),
                    max: self.max_family_len,
                });
            }
        }
        Ok(())
    }
}

/// Errors detected while validating a [`ShellConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A declared family does not fit the addressable slots.
    #[error("navigation family has {len} items, exceeding the {max} addressable slots")]
    FamilyTooLarge {
        /// Items in the offending family.
        len: usize,
        /// Configured slot cap.
        max: usize,
    },

    /// The slot cap itself is unusable.
    #[error("max_family_len must be at least 1")]
    NoSlots,
}

#[cfg(test)]
mod tests {
    use wayfinder_core::{NavAction, NavigationItem};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Slot(u8);

    impl NavigationItem for Slot {
        fn activation(&self) -> Option<NavAction> {
            None
        }

        fn family(&self) -> Vec<Self> {
            (0..6).map(Slot).collect()
        }
    }

    fn family(len: u8) -> Vec<AnyNavigationItem> {
        (0..len).map(|n| AnyNavigationItem::new(Slot(n))).collect()
    }

    #[test]
    fn families_within_the_cap_validate() {
        let config = ShellConfig::new(ScreenHandle::inert())
            .with_family(family(5))
            .with_family(family(2));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn an_oversized_family_aborts_initialization() {
        let config = ShellConfig::new(ScreenHandle::inert()).with_family(family(6));
        assert_eq!(
            config.validate(),
            Err(ConfigError::FamilyTooLarge { len: 6, max: MAX_FAMILY_LEN })
        );
    }

    #[test]
    fn a_zero_slot_cap_is_rejected() {
        let mut config = ShellConfig::new(ScreenHandle::inert());
        config.max_family_len = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoSlots));
    }
}
