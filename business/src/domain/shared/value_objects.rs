use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range during which a price entry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl ValidityWindow {
    /// Creates a window, returning `None` when `to` is before `from`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if to < from {
            return None;
        }
        Some(Self { from, to })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Both ends are inclusive, so windows sharing a single day overlap.
    pub fn overlaps(&self, other: &ValidityWindow) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl std::fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(from: NaiveDate, to: NaiveDate) -> ValidityWindow {
        ValidityWindow::new(from, to).unwrap()
    }

    #[test]
    fn should_reject_window_when_end_before_start() {
        assert!(ValidityWindow::new(date(2025, 9, 1), date(2025, 8, 31)).is_none());
    }

    #[test]
    fn should_accept_single_day_window() {
        let w = window(date(2025, 9, 1), date(2025, 9, 1));
        assert_eq!(w.from(), w.to());
    }

    #[test]
    fn should_detect_nested_windows_as_overlapping() {
        let outer = window(date(2025, 8, 1), date(2025, 12, 31));
        let inner = window(date(2025, 9, 1), date(2025, 10, 31));

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn should_treat_shared_boundary_day_as_overlap() {
        let first = window(date(2025, 8, 1), date(2025, 8, 31));
        let second = window(date(2025, 8, 31), date(2025, 9, 30));

        assert!(first.overlaps(&second));
    }

    #[test]
    fn should_not_overlap_when_windows_are_adjacent() {
        let first = window(date(2025, 8, 1), date(2025, 8, 31));
        let second = window(date(2025, 9, 1), date(2025, 9, 30));

        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn should_contain_both_boundaries() {
        let w = window(date(2025, 8, 1), date(2025, 8, 31));

        assert!(w.contains(date(2025, 8, 1)));
        assert!(w.contains(date(2025, 8, 31)));
        assert!(!w.contains(date(2025, 9, 1)));
    }

    #[test]
    fn should_display_window_as_inclusive_range() {
        let w = window(date(2025, 8, 1), date(2025, 8, 31));
        assert_eq!(w.to_string(), "[2025-08-01, 2025-08-31]");
    }
}
