use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::domain::{
    AccountDetail, AccountId, Balance, BalanceStore, Command, Error, Operation, OperationResult,
    Window,
    traits::{DeadLetterQueue, OperationStream},
};

/// Counts of what a replay did with each input row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub not_found: usize,
    pub rejected: usize,
    pub resets: usize,
}

/// Applies operations to a ledger store. Shareable across threads when the
/// store is; all methods take `&self`.
#[derive(Debug, Default)]
pub struct Engine<S>
where
    S: BalanceStore,
{
    store: S,
}

impl<S> Engine<S>
where
    S: BalanceStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
        info!("ledger reset");
    }

    pub fn balance(&self, id: AccountId) -> Option<Balance> {
        self.store.balance(id)
    }

    pub fn accounts(&self) -> Vec<AccountDetail> {
        self.store.snapshot()
    }

    /// Applies `op` atomically. `None` means a referenced origin account has
    /// never been credited; the ledger is left untouched in that case.
    pub fn process(&self, op: Operation) -> Option<OperationResult> {
        let result = self
            .store
            .mutate(&op.accounts(), |window| Self::apply(op, window));

        match &result {
            Some(result) => debug!(%op, ?result, "operation applied"),
            None => warn!(%op, "origin account not found"),
        }
        result
    }

    /// Drains `ingestion` in order. Rows that cannot be decoded or that hit a
    /// missing origin go to `dlq`; replay itself never stops early.
    pub async fn replay<I, D>(&self, ingestion: &mut I, dlq: &D) -> ReplaySummary
    where
        I: OperationStream,
        D: DeadLetterQueue,
    {
        let mut commands = ingestion.stream();
        let mut summary = ReplaySummary::default();

        while let Some(command) = commands.next().await {
            match command {
                Ok(Command::Reset) => {
                    self.reset();
                    summary.resets += 1;
                }
                Ok(Command::Apply(op)) => match self.process(op) {
                    Some(_) => summary.applied += 1,
                    None => {
                        summary.not_found += 1;
                        dlq.report(&Error::AccountNotFound(op));
                    }
                },
                Err(e) => {
                    summary.rejected += 1;
                    dlq.report(&e);
                }
            }
        }

        info!(
            applied = summary.applied,
            not_found = summary.not_found,
            rejected = summary.rejected,
            resets = summary.resets,
            "replay finished"
        );
        summary
    }

    fn apply(op: Operation, window: &mut Window) -> Option<OperationResult> {
        match op {
            Operation::Deposit {
                destination,
                amount,
            } => Some(Self::deposit(window, destination, amount)),
            Operation::Withdraw { origin, amount } => Self::withdraw(window, origin, amount),
            Operation::Transfer {
                origin,
                destination,
                amount,
            } => Self::transfer(window, origin, destination, amount),
        }
    }

    fn deposit(window: &mut Window, destination: AccountId, amount: Balance) -> OperationResult {
        let balance = window.balance(destination).unwrap_or(0).wrapping_add(amount);
        window.set(destination, balance);

        OperationResult::Deposit {
            destination: AccountDetail::new(destination, balance),
        }
    }

    fn withdraw(window: &mut Window, origin: AccountId, amount: Balance) -> Option<OperationResult> {
        let balance = window.balance(origin)?.wrapping_sub(amount);
        window.set(origin, balance);

        Some(OperationResult::Withdraw {
            origin: AccountDetail::new(origin, balance),
        })
    }

    fn transfer(
        window: &mut Window,
        origin: AccountId,
        destination: AccountId,
        amount: Balance,
    ) -> Option<OperationResult> {
        let origin_before = window.balance(origin)?;

        // Money leaves and re-enters the same account.
        if origin == destination {
            let detail = AccountDetail::new(origin, origin_before);
            return Some(OperationResult::Transfer {
                origin: detail,
                destination: detail,
            });
        }

        let destination_before = window.balance(destination).unwrap_or(0);
        let origin_after = origin_before.wrapping_sub(amount);
        let destination_after = destination_before.wrapping_add(amount);

        window.set(origin, origin_after);
        window.set(destination, destination_after);

        Some(OperationResult::Transfer {
            origin: AccountDetail::new(origin, origin_after),
            destination: AccountDetail::new(destination, destination_after),
        })
    }
}
