use crate::domain::AccountDetail;

/// Produced only when an operation succeeds; mirrors `Operation` case for case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    Deposit {
        destination: AccountDetail,
    },
    Withdraw {
        origin: AccountDetail,
    },
    Transfer {
        origin: AccountDetail,
        destination: AccountDetail,
    },
}
