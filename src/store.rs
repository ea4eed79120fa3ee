use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use crate::domain::{AccountDetail, AccountId, Balance, BalanceStore, Window};

/// In-memory ledger guarded by a single reader/writer lock.
///
/// Reads share the lock; `mutate` and `reset` hold it exclusively. Every
/// operation touches at most two accounts and does no I/O, so one lock over
/// the whole map is enough.
#[derive(Default, Debug)]
pub struct LedgerStore {
    balances: RwLock<HashMap<AccountId, Balance>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.balances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.read().is_empty()
    }
}

impl BalanceStore for LedgerStore {
    fn reset(&self) {
        let mut balances = self.balances.write();
        trace!(accounts = balances.len(), "clearing ledger");
        balances.clear();
    }

    fn balance(&self, id: AccountId) -> Option<Balance> {
        self.balances.read().get(&id).copied()
    }

    fn mutate<T, F>(&self, ids: &[AccountId], step: F) -> T
    where
        F: FnOnce(&mut Window) -> T,
    {
        let mut balances = self.balances.write();
        let mut window = Window::open(ids, |id| balances.get(&id).copied());

        // A panic in `step` drops the window unapplied.
        let out = step(&mut window);

        window.commit(|id, balance| {
            balances.insert(id, balance);
        });
        out
    }

    fn snapshot(&self) -> Vec<AccountDetail> {
        let mut accounts: Vec<AccountDetail> = self
            .balances
            .read()
            .iter()
            .map(|(&id, &balance)| AccountDetail::new(id, balance))
            .collect();
        accounts.sort_unstable_by_key(|account| account.id);
        accounts
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::LedgerStore;
    use crate::domain::{AccountDetail, BalanceStore};

    #[test]
    fn unknown_account_has_no_balance() {
        let store = LedgerStore::new();
        assert_eq!(store.balance(42), None);
        assert!(store.is_empty());
    }

    #[test]
    fn mutate_commits_staged_writes() {
        let store = LedgerStore::new();

        let seen = store.mutate(&[1, 2], |window| {
            window.set(1, 100);
            window.set(2, -5);
            window.balance(1)
        });

        assert_eq!(seen, Some(100));
        assert_eq!(store.balance(1), Some(100));
        assert_eq!(store.balance(2), Some(-5));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn untouched_accounts_are_not_created() {
        let store = LedgerStore::new();
        store.mutate(&[1, 2], |window| window.set(1, 10));

        assert_eq!(store.balance(2), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn panicking_step_leaves_ledger_unchanged() {
        let store = LedgerStore::new();
        store.mutate(&[1], |window| window.set(1, 100));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            store.mutate(&[1, 2], |window| {
                window.set(1, 0);
                window.set(2, 100);
                if window.balance(2).is_some() {
                    panic!("step aborted halfway");
                }
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(store.balance(1), Some(100));
        assert_eq!(store.balance(2), None);
        // The lock is not poisoned; later calls still work.
        store.mutate(&[2], |window| window.set(2, 1));
        assert_eq!(store.balance(2), Some(1));
    }

    #[test]
    fn reset_clears_every_account() {
        let store = LedgerStore::new();
        store.mutate(&[1, 2], |window| {
            window.set(1, 1);
            window.set(2, 2);
        });

        store.reset();

        assert_eq!(store.balance(1), None);
        assert_eq!(store.balance(2), None);
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_is_sorted_by_id() {
        let store = LedgerStore::new();
        store.mutate(&[30, -2, 7], |window| {
            window.set(30, 3);
            window.set(-2, 1);
            window.set(7, 2);
        });

        assert_eq!(
            store.snapshot(),
            vec![
                AccountDetail::new(-2, 1),
                AccountDetail::new(7, 2),
                AccountDetail::new(30, 3),
            ]
        );
    }
}
