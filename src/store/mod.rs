use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    card::Card,
};

pub mod in_memory_store;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown account id {0}")]
    AccountNotFound(AccountId),
    #[error("No card found")]
    CardNotFound,
}

/// Key-value collaborator holding accounts. Implementations must be safe
/// to call from several threads through `&self`.
pub trait AccountStore {
    /// Saves the account, assigning an id if it has none yet, and returns
    /// the stored state.
    fn save_account(&self, account: Account) -> Result<Account, StoreError>;

    fn account(&self, id: AccountId) -> Result<Account, StoreError>;
}

/// Key-value collaborator holding cards, looked up by card number.
pub trait CardStore {
    fn save_card(&self, card: Card) -> Result<Card, StoreError>;

    fn card_by_number(&self, number: &str) -> Result<Card, StoreError>;
}
