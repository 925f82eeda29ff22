use thiserror::Error;

use crate::data::block::BlockType;

pub const SLOT_COUNT: usize = 5;
pub const SLOT_CAPACITY: u32 = 64;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InventoryError {
    #[error("every inventory slot is full")]
    Full,
    #[error("every inventory slot is empty")]
    Empty,
}

/// Fixed row of block counters. Slots aren't tied to a block type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: [u32; SLOT_COUNT],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given slot counts. Panics if any is over capacity.
    pub fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        assert!(
            slots.iter().all(|c| *c <= SLOT_CAPACITY),
            "Slot count over capacity!"
        );
        Self { slots }
    }

    pub fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.slots
    }

    pub fn count(&self, slot: usize) -> Option<u32> {
        self.slots.get(slot).copied()
    }

    /// Add one block to the first slot with room, returning that slot's index.
    /// The block type doesn't affect which slot is used.
    pub fn deposit(&mut self, _block_type: BlockType) -> Result<usize, InventoryError> {
        let (slot, count) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, count)| **count < SLOT_CAPACITY)
            .ok_or(InventoryError::Full)?;

        *count += 1;
        Ok(slot)
    }

    /// Take one block from the first non-empty slot, returning that slot's index
    pub fn withdraw(&mut self) -> Result<usize, InventoryError> {
        let (slot, count) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, count)| **count > 0)
            .ok_or(InventoryError::Empty)?;

        *count -= 1;
        Ok(slot)
    }

    pub fn has_any(&self) -> bool {
        self.slots.iter().any(|c| *c > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Inventory, InventoryError, SLOT_CAPACITY, SLOT_COUNT};
    use crate::data::block::BlockType;

    #[test]
    fn test_deposit_fills_in_order() {
        let mut inventory = Inventory::new();
        assert!(!inventory.has_any());

        for _ in 0..SLOT_CAPACITY {
            assert_eq!(inventory.deposit(BlockType::Stone), Ok(0));
        }
        // Type makes no difference to the slot
        assert_eq!(inventory.deposit(BlockType::Dirt), Ok(1));
        assert_eq!(inventory.slots(), &[64, 1, 0, 0, 0]);
        assert!(inventory.has_any());
    }

    #[test]
    fn test_deposit_full() {
        let mut inventory = Inventory::from_slots([SLOT_CAPACITY; SLOT_COUNT]);
        assert_eq!(inventory.deposit(BlockType::Dirt), Err(InventoryError::Full));
        assert_eq!(inventory.slots(), &[SLOT_CAPACITY; SLOT_COUNT]);
    }

    #[test]
    fn test_withdraw() {
        let mut inventory = Inventory::from_slots([0, 0, 2, 0, 1]);
        assert_eq!(inventory.withdraw(), Ok(2));
        assert_eq!(inventory.withdraw(), Ok(2));
        assert_eq!(inventory.withdraw(), Ok(4));
        assert!(!inventory.has_any());

        assert_eq!(inventory.withdraw(), Err(InventoryError::Empty));
        assert_eq!(inventory.slots(), &[0; SLOT_COUNT]);
    }

    #[test]
    fn test_counts_stay_in_range() {
        let mut inventory = Inventory::new();
        for i in 0..(SLOT_CAPACITY as usize * SLOT_COUNT + 10) {
            let _ = inventory.deposit(BlockType::Dirt);
            if i % 3 == 0 {
                let _ = inventory.withdraw();
            }
            assert!(inventory.slots().iter().all(|c| *c <= SLOT_CAPACITY));
        }
        assert_eq!(inventory.count(SLOT_COUNT), None);
    }

    #[test]
    #[should_panic]
    fn test_over_capacity() {
        Inventory::from_slots([65, 0, 0, 0, 0]);
    }
}
