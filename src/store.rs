use crate::error::{Result, WidgetError};
use crate::weather::WeatherSnapshot;

/// Cycle length used by `WrapPolicy::Legacy`.
pub const LEGACY_WRAP_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Wrap after the last loaded snapshot.
    #[default]
    Populated,
    /// Wrap after index 3 regardless of how many snapshots are loaded.
    Legacy,
}

/// Loaded snapshots plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct ForecastStore {
    snapshots: Vec<WeatherSnapshot>,
    index: usize,
    policy: WrapPolicy,
}

impl ForecastStore {
    pub fn new(snapshots: Vec<WeatherSnapshot>, policy: WrapPolicy) -> Self {
        Self {
            snapshots,
            index: 0,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn cycle_len(&self) -> usize {
        match self.policy {
            WrapPolicy::Populated => self.snapshots.len(),
            WrapPolicy::Legacy => LEGACY_WRAP_LEN,
        }
    }

    /// Moves the selection forward, wrapping at the cycle length, and returns
    /// the newly selected snapshot.
    pub fn advance(&mut self) -> Result<&WeatherSnapshot> {
        if self.snapshots.is_empty() {
            return Err(WidgetError::EmptyStore);
        }
        self.index = (self.index + 1) % self.cycle_len();
        self.current()
    }

    pub fn current(&self) -> Result<&WeatherSnapshot> {
        if self.snapshots.is_empty() {
            return Err(WidgetError::EmptyStore);
        }
        self.snapshots
            .get(self.index)
            .ok_or(WidgetError::SelectionOutOfRange {
                index: self.index,
                len: self.snapshots.len(),
            })
    }
}
