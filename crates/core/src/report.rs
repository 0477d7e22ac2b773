//! Occupancy summary for a packed shelf.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Derived snapshot of how full a shelf is.
///
/// Reports are computed on demand from the current pile layout and never
/// stored; two reports taken without an intervening insertion are equal.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackReport {
    /// Number of cartons placed.
    pub carton_count: usize,

    /// Number of piles opened.
    pub pile_count: usize,

    /// Shelf width consumed by piles.
    pub used_width: f64,

    /// Shelf width still available for new piles.
    pub remaining_width: f64,

    /// Total carton volume over shelf volume (0.0 - 1.0).
    pub utilization: f64,
}

impl PackReport {
    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Returns true when no cartons have been placed.
    pub fn is_empty(&self) -> bool {
        self.carton_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = PackReport::default();
        assert!(report.is_empty());
        assert_eq!(report.utilization_percent(), "0.0%");
    }

    #[test]
    fn test_utilization_percent() {
        let report = PackReport {
            carton_count: 6,
            pile_count: 1,
            used_width: 20.0,
            remaining_width: 80.0,
            utilization: 0.2,
        };
        assert!(!report.is_empty());
        assert_eq!(report.utilization_percent(), "20.0%");
    }
}
