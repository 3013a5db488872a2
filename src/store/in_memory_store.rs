use std::collections::HashMap;

use parking_lot::Mutex;

use super::{AccountStore, CardStore, StoreError};
use crate::{
    account::{Account, AccountId},
    card::Card,
};

struct Table<T> {
    rows: HashMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory account storage. Ids are assigned sequentially from 1, so id
/// `0` stays reserved for unsaved entities.
#[derive(Default)]
pub struct InMemoryAccounts {
    table: Mutex<Table<Account>>,
}

impl AccountStore for InMemoryAccounts {
    fn save_account(&self, mut account: Account) -> Result<Account, StoreError> {
        let mut table = self.table.lock();
        if account.id() == 0 {
            let id = table.assign_id();
            account.assign_id(id);
        }
        table.rows.insert(account.id(), account.clone());
        Ok(account)
    }

    fn account(&self, id: AccountId) -> Result<Account, StoreError> {
        self.table
            .lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::AccountNotFound(id))
    }
}

/// In-memory card storage, keyed by card id, looked up by number.
#[derive(Default)]
pub struct InMemoryCards {
    table: Mutex<Table<Card>>,
}

impl CardStore for InMemoryCards {
    fn save_card(&self, mut card: Card) -> Result<Card, StoreError> {
        let mut table = self.table.lock();
        if card.id() == 0 {
            let id = table.assign_id();
            card.assign_id(id);
        }
        table.rows.insert(card.id(), card.clone());
        Ok(card)
    }

    fn card_by_number(&self, number: &str) -> Result<Card, StoreError> {
        self.table
            .lock()
            .rows
            .values()
            .find(|card| card.number() == number)
            .cloned()
            .ok_or(StoreError::CardNotFound)
    }
}
