use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::{
    cards::{CardError, CardOps},
    money_box::{MoneyBox, MoneyBoxError, NoteCounts},
};

#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Amount must be a whole, non-negative number of currency units, got {0}")]
    InvalidAmount(Decimal),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    MoneyBox(#[from] MoneyBoxError),
}

/// A physical machine. It owns its note inventory for its whole lifetime;
/// one mutable borrow at a time is what serializes access to the box.
#[derive(Debug, Default)]
pub struct CashMachine {
    money_box: MoneyBox,
}

impl CashMachine {
    pub fn new(money_box: MoneyBox) -> Self {
        Self { money_box }
    }

    pub fn money_box(&self) -> &MoneyBox {
        &self.money_box
    }
}

/// Orchestrates card authorization against the physical note inventory.
/// Each operation is atomic from the caller's point of view: a failed
/// second phase is compensated before the error is surfaced.
pub struct CashMachineService<C> {
    cards: C,
}

impl<C: CardOps> CashMachineService<C> {
    pub fn new(cards: C) -> Self {
        Self { cards }
    }

    /// Debit first, dispense second. When the box cannot make exact
    /// change, the debit is compensated by re-crediting the account
    /// before the failure is reported.
    pub fn withdraw(
        &self,
        machine: &mut CashMachine,
        number: &str,
        pin: &str,
        amount: Decimal,
    ) -> Result<NoteCounts, MachineError> {
        let units = whole_units(amount)?;
        self.cards.withdraw(number, pin, amount)?;
        match machine.money_box.withdraw(units) {
            Ok(notes) => {
                debug!(%amount, "dispensed notes");
                Ok(notes)
            }
            Err(err) => {
                warn!(%amount, %err, "cannot dispense, re-crediting the account");
                if let Err(refund_err) = self.cards.deposit(number, pin, amount) {
                    error!(%amount, %refund_err, "re-credit after failed dispense failed");
                }
                Err(err.into())
            }
        }
    }

    /// Notes go into the box first, then the account is credited with
    /// their value. A failed credit takes the accepted notes back out.
    pub fn deposit(
        &self,
        machine: &mut CashMachine,
        number: &str,
        pin: &str,
        notes: NoteCounts,
    ) -> Result<Decimal, MachineError> {
        let total = machine.money_box.deposit(&notes);
        let amount = Decimal::from(total);
        match self.cards.deposit(number, pin, amount) {
            Ok(balance) => Ok(balance),
            Err(err) => {
                warn!(%amount, %err, "credit failed, returning the accepted notes");
                if let Err(remove_err) = machine.money_box.remove(&notes) {
                    error!(%remove_err, "could not return notes after failed credit");
                }
                Err(err.into())
            }
        }
    }

    pub fn check_balance(
        &self,
        _machine: &CashMachine,
        number: &str,
        pin: &str,
    ) -> Result<Decimal, MachineError> {
        Ok(self.cards.balance(number, pin)?)
    }

    pub fn change_pin(
        &self,
        number: &str,
        old_pin: &str,
        new_pin: &str,
    ) -> Result<bool, MachineError> {
        Ok(self.cards.change_pin(number, old_pin, new_pin)?)
    }
}

/// The box deals in whole currency units; negative or fractional amounts
/// are rejected before any side effect.
fn whole_units(amount: Decimal) -> Result<u64, MachineError> {
    if amount.is_sign_negative() || !amount.fract().is_zero() {
        return Err(MachineError::InvalidAmount(amount));
    }
    amount.to_u64().ok_or(MachineError::InvalidAmount(amount))
}
