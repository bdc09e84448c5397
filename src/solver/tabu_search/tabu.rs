use std::collections::{HashMap, VecDeque};

use crate::domain::types::Placement;

/// Canonical order-sensitive encoding of a placement. Bit patterns keep
/// membership at exact value equality: a placement is tabu only when
/// every slot matches an entry slot for slot.
type PlacementKey = Vec<(u64, u64)>;

fn placement_key(placement: &Placement) -> PlacementKey {
    placement
        .units
        .iter()
        .map(|c| (c.lat.to_bits(), c.lon.to_bits()))
        .collect()
}

/// Bounded FIFO memory of recently adopted placements. The deque holds
/// insertion order for eviction; the map holds entry counts for O(1)
/// membership tests. Only adopted best-neighbors are recorded, never
/// every candidate considered.
#[derive(Debug)]
pub struct TabuList {
    order: VecDeque<PlacementKey>,
    members: HashMap<PlacementKey, usize>,
    capacity: usize,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            members: HashMap::new(),
            capacity,
        }
    }

    pub fn contains(&self, placement: &Placement) -> bool {
        self.members.contains_key(&placement_key(placement))
    }

    /// Record an adopted placement, evicting the oldest entries past
    /// capacity (strict FIFO).
    pub fn insert(&mut self, placement: &Placement) {
        let key = placement_key(placement);
        *self.members.entry(key.clone()).or_insert(0) += 1;
        self.order.push_back(key);

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                if let Some(count) = self.members.get_mut(&oldest) {
                    *count -= 1;
                    if *count == 0 {
                        self.members.remove(&oldest);
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
