pub mod credit;
pub mod deposits;
pub mod leads;
pub mod mutations;

pub use credit::{CreditAmountRequest, CreditQuery, CreditReportResponse};
pub use deposits::{AssignPendingDepositRequest, CreateDepositRequest, DepositCreatedResponse};
pub use leads::{CreateLeadRequest, LeadListResponse, LeadsQuery};
pub use mutations::{MutationListResponse, MutationQuery, MutationRowResponse};
