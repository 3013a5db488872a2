use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId},
    store::{AccountStore, StoreError},
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Account-level operations offered to the card service and, through it,
/// to the cash machine.
pub trait AccountOps {
    /// Persists a fresh account and returns it carrying its assigned id.
    /// The initial amount is taken as given, without validation.
    fn create_account(&self, amount: Decimal) -> Result<Account, LedgerError>;

    fn deposit(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError>;

    fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError>;

    fn balance(&self, id: AccountId) -> Result<Decimal, LedgerError>;

    fn account(&self, id: AccountId) -> Result<Account, LedgerError>;
}

/// Ledger over a backing store. Balance mutations hold a per-account lock
/// across their read-modify-write, so the insufficiency check cannot
/// interleave with another writer on the same account.
pub struct AccountLedger<S> {
    store: S,
    locks: Mutex<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl<S: AccountStore> AccountLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::default(),
        }
    }

    fn account_lock(&self, id: AccountId) -> Arc<Mutex<()>> {
        self.locks.lock().entry(id).or_default().clone()
    }
}

impl<S: AccountStore> AccountOps for AccountLedger<S> {
    fn create_account(&self, amount: Decimal) -> Result<Account, LedgerError> {
        Ok(self.store.save_account(Account::new(amount))?)
    }

    fn deposit(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        let lock = self.account_lock(id);
        let _serialized = lock.lock();
        let mut account = self.store.account(id)?;
        let balance = account.deposit(amount);
        self.store.save_account(account)?;
        Ok(balance)
    }

    fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        let lock = self.account_lock(id);
        let _serialized = lock.lock();
        let mut account = self.store.account(id)?;
        let balance = account.withdraw(amount)?;
        self.store.save_account(account)?;
        Ok(balance)
    }

    fn balance(&self, id: AccountId) -> Result<Decimal, LedgerError> {
        Ok(self.store.account(id)?.amount())
    }

    fn account(&self, id: AccountId) -> Result<Account, LedgerError> {
        Ok(self.store.account(id)?)
    }
}
