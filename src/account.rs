use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AccountId = u64;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Not enough money")]
    InsufficientFunds,
}

/// A bank account: an id and the money it holds. Id `0` marks an account
/// that has not been saved yet; the store assigns a real id on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    amount: Decimal,
}

impl Account {
    pub fn new(amount: Decimal) -> Self {
        Self { id: 0, amount }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub(crate) fn assign_id(&mut self, id: AccountId) {
        self.id = id;
    }

    pub fn deposit(&mut self, amount: Decimal) -> Decimal {
        self.amount += amount;
        self.amount
    }

    /// Fails iff `amount` exceeds the balance; taking exactly the full
    /// balance succeeds and leaves zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        if amount > self.amount {
            return Err(AccountError::InsufficientFunds);
        }
        self.amount -= amount;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::{FromPrimitive, Zero};

    use super::*;

    #[test]
    fn deposit_then_withdraw_round_trips() {
        let mut acc = Account::new(Decimal::from_u32(100).unwrap());
        acc.deposit(Decimal::from_u32(40).unwrap());
        let balance = acc.withdraw(Decimal::from_u32(40).unwrap()).unwrap();
        assert_eq!(balance, Decimal::from_u32(100).unwrap());
        assert_eq!(acc.amount(), Decimal::from_u32(100).unwrap());
    }

    #[test]
    fn withdraw_full_balance_leaves_zero() {
        let mut acc = Account::new(Decimal::from_u32(100).unwrap());
        let balance = acc.withdraw(Decimal::from_u32(100).unwrap()).unwrap();
        assert_eq!(balance, Decimal::zero());
    }

    #[test]
    fn withdraw_more_than_balance_fails() {
        let mut acc = Account::new(Decimal::from_u32(100).unwrap());
        let err = acc.withdraw(Decimal::from_u32(101).unwrap()).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds));
        assert_eq!(err.to_string(), "Not enough money");
        // failed withdrawal leaves the balance untouched
        assert_eq!(acc.amount(), Decimal::from_u32(100).unwrap());
    }

    #[test]
    fn fresh_account_is_unsaved() {
        let acc = Account::new(Decimal::from_u32(1000).unwrap());
        assert_eq!(acc.id(), 0);
        assert_eq!(acc.amount(), Decimal::from_u32(1000).unwrap());
    }
}
