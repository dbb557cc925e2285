use glam::DVec2;

pub const TRAIL_CAPACITY: usize = 400;

/// Most recent bob positions, oldest first. Storage is allocated once and
/// the oldest point is overwritten when full.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<DVec2>,
    // Index of the oldest point once `points` is full.
    head: usize,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Trail::with_capacity(TRAIL_CAPACITY)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Trail {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DVec2> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    pub fn latest(&self) -> Option<DVec2> {
        self.iter().next_back()
    }
}
