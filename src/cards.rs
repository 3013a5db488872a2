use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountId,
    card::Card,
    ledger::{AccountOps, LedgerError},
    store::{CardStore, StoreError},
};

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Pincode is incorrect")]
    IncorrectPin,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Card-facing operations. Everything that touches a balance goes through
/// authentication first.
pub trait CardOps {
    /// Stores a card for the account with the digest of `pin`. Account
    /// existence is not checked; the caller is trusted.
    fn create_card(
        &self,
        number: &str,
        account_id: AccountId,
        pin: &str,
    ) -> Result<Card, CardError>;

    fn balance(&self, number: &str, pin: &str) -> Result<Decimal, CardError>;

    fn deposit(&self, number: &str, pin: &str, amount: Decimal) -> Result<Decimal, CardError>;

    fn withdraw(&self, number: &str, pin: &str, amount: Decimal) -> Result<Decimal, CardError>;

    /// Re-keys the card under the new PIN. A wrong old PIN is an error,
    /// not a `false` return.
    fn change_pin(&self, number: &str, old_pin: &str, new_pin: &str) -> Result<bool, CardError>;
}

pub struct CardService<C, A> {
    cards: C,
    ledger: A,
}

impl<C: CardStore, A: AccountOps> CardService<C, A> {
    pub fn new(cards: C, ledger: A) -> Self {
        Self { cards, ledger }
    }

    pub fn ledger(&self) -> &A {
        &self.ledger
    }

    fn authenticate(&self, number: &str, pin: &str) -> Result<Card, CardError> {
        let card = self.cards.card_by_number(number)?;
        if !card.matches_pin(pin) {
            return Err(CardError::IncorrectPin);
        }
        Ok(card)
    }
}

impl<C: CardStore, A: AccountOps> CardOps for CardService<C, A> {
    fn create_card(
        &self,
        number: &str,
        account_id: AccountId,
        pin: &str,
    ) -> Result<Card, CardError> {
        Ok(self.cards.save_card(Card::new(number, account_id, pin))?)
    }

    fn balance(&self, number: &str, pin: &str) -> Result<Decimal, CardError> {
        let card = self.authenticate(number, pin)?;
        Ok(self.ledger.balance(card.account_id())?)
    }

    fn deposit(&self, number: &str, pin: &str, amount: Decimal) -> Result<Decimal, CardError> {
        let card = self.authenticate(number, pin)?;
        Ok(self.ledger.deposit(card.account_id(), amount)?)
    }

    fn withdraw(&self, number: &str, pin: &str, amount: Decimal) -> Result<Decimal, CardError> {
        let card = self.authenticate(number, pin)?;
        Ok(self.ledger.withdraw(card.account_id(), amount)?)
    }

    fn change_pin(&self, number: &str, old_pin: &str, new_pin: &str) -> Result<bool, CardError> {
        let mut card = self.authenticate(number, old_pin)?;
        card.set_pin(new_pin);
        self.cards.save_card(card)?;
        Ok(true)
    }
}
