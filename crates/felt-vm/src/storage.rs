use felt_vm_utils::ordered_hash_map::OrderedHashMap;

use crate::felt::Felt252;
use crate::ids::SlotId;

#[cfg(test)]
#[path = "storage_test.rs"]
mod test;

/// The storage slots of a single contract instance.
///
/// Slots live for the lifetime of the instance and are mutated only through
/// the storage expressions of an evaluated function body. Storage mutation is
/// the only persistent side effect a function body can have.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StorageSlots {
    /// The values of the slots written so far.
    slots: OrderedHashMap<SlotId, Felt252>,
}
impl StorageSlots {
    /// Returns the last value written to `slot`, or zero for a slot that was
    /// never written.
    pub fn read(&self, slot: &SlotId) -> Felt252 {
        self.slots.get(slot).copied().unwrap_or_default()
    }

    /// Replaces the value stored in `slot`.
    pub fn write(&mut self, slot: SlotId, value: Felt252) {
        self.slots.insert(slot, value);
    }
}
