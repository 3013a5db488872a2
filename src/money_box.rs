use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Banknote face values a machine can hold, largest first. The dispensing
/// algorithm walks this order, so it must stay descending.
pub const DENOMINATIONS: [u64; 4] = [5000, 1000, 500, 100];

#[derive(Debug, Error)]
pub enum MoneyBoxError {
    #[error("Cannot pay out {requested} exactly, {available} held in notes")]
    ExactChangeUnavailable { requested: u64, available: u64 },
    #[error("Requested notes exceed the available stock")]
    InsufficientNotes,
}

/// Note counts per denomination, in [`DENOMINATIONS`] order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCounts([u32; DENOMINATIONS.len()]);

impl NoteCounts {
    pub fn new(counts: [u32; DENOMINATIONS.len()]) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> [u32; DENOMINATIONS.len()] {
        self.0
    }

    /// Pairs of (denomination, count), largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        DENOMINATIONS.iter().copied().zip(self.0)
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(value, count)| value * u64::from(count)).sum()
    }
}

/// The machine's physical note inventory. Total held value only changes
/// through [`deposit`](Self::deposit), [`withdraw`](Self::withdraw) and
/// [`remove`](Self::remove), and always equals the sum of notes modeled
/// as accepted or dispensed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoneyBox {
    available: NoteCounts,
}

impl MoneyBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stocked(notes: NoteCounts) -> Self {
        Self { available: notes }
    }

    pub fn available(&self) -> NoteCounts {
        self.available
    }

    pub fn total(&self) -> u64 {
        self.available.total()
    }

    /// Breaks `amount` into available notes, greedy largest-first: each
    /// denomination contributes `min(stock, remaining / value)` notes.
    /// The plan is computed against current stock and committed only when
    /// it covers the amount exactly; on failure the stock is untouched.
    ///
    /// Greedy minimizes the note count only under unlimited stock; with
    /// finite stock it is a fixed policy, not an optimizer.
    pub fn withdraw(&mut self, amount: u64) -> Result<NoteCounts, MoneyBoxError> {
        let mut plan = [0u32; DENOMINATIONS.len()];
        let mut remaining = amount;
        for (planned, (value, stock)) in plan.iter_mut().zip(self.available.iter()) {
            let take = u64::from(stock).min(remaining / value) as u32;
            *planned = take;
            remaining -= u64::from(take) * value;
        }
        if remaining != 0 {
            return Err(MoneyBoxError::ExactChangeUnavailable {
                requested: amount,
                available: self.total(),
            });
        }
        for (stock, take) in self.available.0.iter_mut().zip(plan) {
            *stock -= take;
        }
        Ok(NoteCounts(plan))
    }

    /// Accepts the notes into stock and returns their total value.
    pub fn deposit(&mut self, notes: &NoteCounts) -> u64 {
        for (stock, count) in self.available.0.iter_mut().zip(notes.0) {
            *stock += count;
        }
        notes.total()
    }

    /// Exact inverse of [`deposit`](Self::deposit): takes precisely the
    /// given notes back out, or fails without touching the stock.
    pub fn remove(&mut self, notes: &NoteCounts) -> Result<(), MoneyBoxError> {
        let covered = self
            .available
            .0
            .iter()
            .zip(notes.0)
            .all(|(stock, count)| *stock >= count);
        if !covered {
            return Err(MoneyBoxError::InsufficientNotes);
        }
        for (stock, count) in self.available.0.iter_mut().zip(notes.0) {
            *stock -= count;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_counts_total_sums_by_denomination() {
        let notes = NoteCounts::new([1, 1, 1, 1]);
        assert_eq!(notes.total(), 6600);
        assert_eq!(NoteCounts::default().total(), 0);
    }

    #[test]
    fn greedy_takes_largest_notes_first() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([1, 1, 1, 1]));

        let notes = money_box.withdraw(1600).unwrap();
        assert_eq!(notes, NoteCounts::new([0, 1, 1, 1]));
        assert_eq!(money_box.available(), NoteCounts::new([1, 0, 0, 0]));
        assert_eq!(money_box.total(), 5000);
    }

    #[test]
    fn stock_limits_each_denomination() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([0, 2, 3, 10]));

        let notes = money_box.withdraw(4100).unwrap();
        assert_eq!(notes, NoteCounts::new([0, 2, 3, 6]));
        assert_eq!(money_box.available(), NoteCounts::new([0, 0, 0, 4]));
    }

    #[test]
    fn infeasible_amount_fails_without_touching_stock() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([0, 0, 0, 3]));

        let err = money_box.withdraw(1000).unwrap_err();
        assert!(matches!(
            err,
            MoneyBoxError::ExactChangeUnavailable {
                requested: 1000,
                available: 300,
            }
        ));
        assert_eq!(money_box.available(), NoteCounts::new([0, 0, 0, 3]));
    }

    #[test]
    fn exhausted_large_notes_fall_through_to_smaller_ones() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([0, 1, 1, 10]));

        let notes = money_box.withdraw(1500).unwrap();
        assert_eq!(notes, NoteCounts::new([0, 1, 1, 0]));

        let notes = money_box.withdraw(800).unwrap();
        assert_eq!(notes, NoteCounts::new([0, 0, 0, 8]));
        assert_eq!(money_box.available(), NoteCounts::new([0, 0, 0, 2]));
    }

    #[test]
    fn zero_amount_dispenses_no_notes() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([1, 1, 1, 1]));
        let notes = money_box.withdraw(0).unwrap();
        assert_eq!(notes, NoteCounts::default());
        assert_eq!(money_box.total(), 6600);
    }

    #[test]
    fn amounts_not_in_whole_notes_fail() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([10, 10, 10, 10]));
        let err = money_box.withdraw(150).unwrap_err();
        assert!(matches!(
            err,
            MoneyBoxError::ExactChangeUnavailable { requested: 150, .. }
        ));
        assert_eq!(money_box.available(), NoteCounts::new([10, 10, 10, 10]));
    }

    #[test]
    fn deposit_then_withdraw_round_trips_the_stock() {
        let mut money_box = MoneyBox::new();
        let deposited = NoteCounts::new([2, 1, 0, 3]);

        let total = money_box.deposit(&deposited);
        assert_eq!(total, 11300);
        assert_eq!(money_box.total(), 11300);

        let dispensed = money_box.withdraw(total).unwrap();
        assert_eq!(dispensed, deposited);
        assert_eq!(money_box.available(), NoteCounts::default());
    }

    #[test]
    fn remove_reverses_a_deposit_exactly() {
        let mut money_box = MoneyBox::stocked(NoteCounts::new([1, 0, 0, 0]));
        let notes = NoteCounts::new([0, 2, 0, 1]);

        money_box.deposit(&notes);
        money_box.remove(&notes).unwrap();
        assert_eq!(money_box.available(), NoteCounts::new([1, 0, 0, 0]));

        let err = money_box.remove(&NoteCounts::new([2, 0, 0, 0])).unwrap_err();
        assert!(matches!(err, MoneyBoxError::InsufficientNotes));
        assert_eq!(money_box.available(), NoteCounts::new([1, 0, 0, 0]));
    }
}
