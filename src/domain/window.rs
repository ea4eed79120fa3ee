use crate::domain::{AccountId, Balance};

#[derive(Debug)]
struct Slot {
    id: AccountId,
    balance: Option<Balance>,
    dirty: bool,
}

/// Staged view over the accounts a single `mutate` call declared.
///
/// Reads see the values loaded when the window was opened plus any writes
/// already staged through it. Nothing reaches the store until `commit`.
#[derive(Debug)]
pub struct Window {
    slots: Vec<Slot>,
}

impl Window {
    /// Loads each distinct id once; repeated ids share one slot.
    pub fn open<L>(ids: &[AccountId], mut lookup: L) -> Self
    where
        L: FnMut(AccountId) -> Option<Balance>,
    {
        let mut slots: Vec<Slot> = Vec::with_capacity(ids.len());
        for &id in ids {
            if slots.iter().any(|slot| slot.id == id) {
                continue;
            }
            slots.push(Slot {
                id,
                balance: lookup(id),
                dirty: false,
            });
        }
        Self { slots }
    }

    pub fn balance(&self, id: AccountId) -> Option<Balance> {
        let slot = self.slots.iter().find(|slot| slot.id == id);
        debug_assert!(slot.is_some(), "account {} was not declared", id);
        slot.and_then(|slot| slot.balance)
    }

    pub fn set(&mut self, id: AccountId, balance: Balance) {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.balance = Some(balance);
                slot.dirty = true;
            }
            None => {
                debug_assert!(false, "account {} was not declared", id);
                self.slots.push(Slot {
                    id,
                    balance: Some(balance),
                    dirty: true,
                });
            }
        }
    }

    /// Hands every staged write to `sink`, in declaration order.
    pub fn commit<S>(self, mut sink: S)
    where
        S: FnMut(AccountId, Balance),
    {
        for slot in self.slots {
            if let (true, Some(balance)) = (slot.dirty, slot.balance) {
                sink(slot.id, balance);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Window;

    #[test]
    fn reads_see_staged_writes() {
        let balances = HashMap::from([(1, 100)]);
        let mut window = Window::open(&[1, 2], |id| balances.get(&id).copied());

        assert_eq!(window.balance(1), Some(100));
        assert_eq!(window.balance(2), None);

        window.set(2, 5);
        assert_eq!(window.balance(2), Some(5));
    }

    #[test]
    fn commit_emits_only_written_accounts() {
        let mut window = Window::open(&[1, 2, 3], |id| Some(id * 10));
        window.set(3, 1);
        window.set(1, 7);

        let mut written = Vec::new();
        window.commit(|id, balance| written.push((id, balance)));
        assert_eq!(written, vec![(1, 7), (3, 1)]);
    }

    #[test]
    fn duplicate_ids_share_a_slot() {
        let mut lookups = 0;
        let mut window = Window::open(&[4, 4], |_| {
            lookups += 1;
            Some(50)
        });
        assert_eq!(lookups, 1);

        window.set(4, 40);
        assert_eq!(window.balance(4), Some(40));

        let mut written = Vec::new();
        window.commit(|id, balance| written.push((id, balance)));
        assert_eq!(written, vec![(4, 40)]);
    }
}
