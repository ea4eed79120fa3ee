use serde::Serialize;

pub type AccountId = i64;

/// Integer units. May go negative; withdrawals are not floored at zero.
pub type Balance = i64;

/// Point-in-time copy of one account. Never tracks later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountDetail {
    pub id: AccountId,
    pub balance: Balance,
}

impl AccountDetail {
    pub fn new(id: AccountId, balance: Balance) -> Self {
        Self { id, balance }
    }
}
