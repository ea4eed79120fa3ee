use futures::Stream;

use crate::domain::{AccountDetail, AccountId, Balance, Command, Error, Window};

pub trait OperationStream {
    type CommandStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CommandStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

/// Owner of the account-balance mapping. Every method takes `&self`;
/// implementations serialize access internally.
pub trait BalanceStore {
    fn reset(&self);

    fn balance(&self, id: AccountId) -> Option<Balance>;

    /// Runs `step` against the balances of `ids` with every other store call
    /// excluded. Writes made through the window become visible together once
    /// `step` returns, and not at all if it panics.
    fn mutate<T, F>(&self, ids: &[AccountId], step: F) -> T
    where
        F: FnOnce(&mut Window) -> T;

    /// All accounts in ascending id order, read under one consistent view.
    fn snapshot(&self) -> Vec<AccountDetail>;
}
