use crate::domain::{AccountId, Balance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit {
        destination: AccountId,
        amount: Balance,
    },
    Withdraw {
        origin: AccountId,
        amount: Balance,
    },
    Transfer {
        origin: AccountId,
        destination: AccountId,
        amount: Balance,
    },
}

impl Operation {
    /// Accounts the operation reads or writes, origin first.
    pub fn accounts(&self) -> Vec<AccountId> {
        match *self {
            Operation::Deposit { destination, .. } => vec![destination],
            Operation::Withdraw { origin, .. } => vec![origin],
            Operation::Transfer {
                origin,
                destination,
                ..
            } => vec![origin, destination],
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Operation::Deposit {
                destination,
                amount,
            } => write!(f, "deposit,destination={},amount={}", destination, amount),
            Operation::Withdraw { origin, amount } => {
                write!(f, "withdraw,origin={},amount={}", origin, amount)
            }
            Operation::Transfer {
                origin,
                destination,
                amount,
            } => write!(
                f,
                "transfer,origin={},destination={},amount={}",
                origin, destination, amount
            ),
        }
    }
}

/// One decoded input row. `Reset` is not an `Operation`: it clears the ledger
/// instead of touching specific accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Operation),
    Reset,
}
