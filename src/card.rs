use serde::{Deserialize, Serialize};

use crate::{account::AccountId, pin};

pub type CardId = u64;

/// A card binding a card number to an account. Only the digest of the PIN
/// is kept; verification digests the candidate and compares, so the
/// plaintext PIN is never stored or compared directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    number: String,
    account_id: AccountId,
    pin_digest: String,
}

impl Card {
    pub fn new(number: impl Into<String>, account_id: AccountId, pin: &str) -> Self {
        Self {
            id: 0,
            number: number.into(),
            account_id,
            pin_digest: pin::digest(pin),
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn pin_digest(&self) -> &str {
        &self.pin_digest
    }

    pub fn matches_pin(&self, pin: &str) -> bool {
        pin::digest(pin) == self.pin_digest
    }

    pub fn set_pin(&mut self, pin: &str) {
        self.pin_digest = pin::digest(pin);
    }

    pub(crate) fn assign_id(&mut self, id: CardId) {
        self.id = id;
    }
}
