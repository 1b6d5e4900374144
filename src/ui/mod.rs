pub mod ledger;
pub mod messages;
