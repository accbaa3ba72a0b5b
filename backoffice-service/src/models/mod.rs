//! Domain models for backoffice-service.

pub mod bank;
pub mod credit;
pub mod lead;
pub mod mutation;
pub mod records;

pub use bank::{Bank, Profile};
pub use credit::{CreditMutation, CreditReport};
pub use lead::Lead;
pub use mutation::{MutationKind, MutationRow};
pub use records::{
    AdjustmentRecord, DepositRecord, ExpenseRecord, PendingDepositRecord, TransferRecord,
    WithdrawalRecord,
};
