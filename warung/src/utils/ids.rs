//! Sequential id allocation
//!
//! Catalog entries and orders each get their ids from an allocator owned by
//! the managing struct, so id assignment is explicit state rather than a
//! process-wide counter. Ids start at 1 and are never reused within a run.

/// Monotonic id source
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator whose first id is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_next_id_saturates_at_the_ceiling() {
        let mut ids = IdAllocator { next: u32::MAX };
        assert_eq!(ids.next_id(), u32::MAX);
        assert_eq!(ids.next_id(), u32::MAX);
    }
}
