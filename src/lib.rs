/// Bank account entity and its balance rules.
pub mod account;

/// Card entity binding a card number to an account and a PIN digest.
pub mod card;

/// Card service: authenticates a card and PIN pair, then delegates
/// balance changes to the [`ledger`].
pub mod cards;

/// Account ledger built on top of the storage collaborator.
/// Serializes balance mutations per account.
pub mod ledger;

/// Cash machine orchestration: card authorization on one side, the
/// physical note inventory on the other.
pub mod machine;

/// Note inventory per denomination, plus the greedy breakdown of an
/// amount into available notes.
pub mod money_box;

/// One-way PIN digesting shared by card creation and verification.
pub mod pin;

/// Storage collaborator interface, plus "in memory" implementation.
///
/// NOTE: The in-memory stores are enough for the simulation, but the
/// traits are the integration point for a real persistence layer.
pub mod store;
