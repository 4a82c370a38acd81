// Barrier over a fixed set of independently completing dependencies.
//
// Assets finish loading in any order. A group that needs several of them
// keeps a `Join` keyed by asset, marks every completion and calls `poll`
// after each one. `poll` reports `true` exactly once, on the first call
// where every key has been marked.

use smallvec::SmallVec;

pub struct Join<K> {
    slots: SmallVec<[(K, bool); 4]>,
    fired: bool,
}

impl<K: PartialEq + Copy> Join<K> {
    pub fn new(keys: &[K]) -> Self {
        let mut slots: SmallVec<[(K, bool); 4]> = SmallVec::new();
        for k in keys {
            if !slots.iter().any(|(existing, _)| existing == k) {
                slots.push((*k, false));
            }
        }
        Self {
            slots,
            fired: false,
        }
    }

    /// Mark `key` as present. Returns `false` if the key is not part of
    /// this join.
    pub fn mark(&mut self, key: K) -> bool {
        match self.slots.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => {
                slot.1 = true;
                true
            }
            None => false,
        }
    }

    /// Keys still waiting, in declaration order. Empty once fired.
    pub fn missing(&self) -> impl Iterator<Item = K> + '_ {
        let fired = self.fired;
        self.slots
            .iter()
            .filter(move |(_, present)| !fired && !present)
            .map(|(k, _)| *k)
    }

    /// `true` the first time every dependency is present, `false` on every
    /// other call.
    pub fn poll(&mut self) -> bool {
        if self.fired || self.slots.iter().any(|(_, present)| !present) {
            return false;
        }
        self.fired = true;
        true
    }
}
