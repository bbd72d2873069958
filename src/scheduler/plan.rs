//! Partitioning of an input sequence into consecutive batches.

use std::num::NonZeroUsize;
use std::ops::Range;

/// How `total_items` inputs split into batches of `batch_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total_items: usize,
    batch_size: NonZeroUsize,
}

/// One contiguous slice of the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRange {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    batch_count: usize,
}

impl BatchPlan {
    pub fn new(total_items: usize, batch_size: NonZeroUsize) -> Self {
        Self {
            total_items,
            batch_size,
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    pub fn batch_count(&self) -> usize {
        self.total_items.div_ceil(self.batch_size.get())
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Ranges in input order. The last one may be shorter than `batch_size`.
    pub fn ranges(&self) -> impl Iterator<Item = BatchRange> + '_ {
        let batch_count = self.batch_count();
        let size = self.batch_size.get();
        (0..batch_count).map(move |index| {
            let start = index * size;
            BatchRange {
                index,
                start,
                end: (start + size).min(self.total_items),
                batch_count,
            }
        })
    }
}

impl BatchRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.batch_count
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(total: usize, size: usize) -> BatchPlan {
        BatchPlan::new(total, NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn test_uneven_partition() {
        let plan = plan(5, 2);
        assert_eq!(plan.batch_count(), 3);

        let ranges: Vec<_> = plan.ranges().map(|r| r.as_range()).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..5]);

        let last = plan.ranges().last().unwrap();
        assert!(last.is_last());
        assert_eq!(last.len(), 1);
    }

    #[test]
    fn test_exact_multiple() {
        let plan = plan(6, 3);
        assert_eq!(plan.batch_count(), 2);
        assert!(plan.ranges().all(|r| r.len() == 3));
        assert_eq!(plan.ranges().filter(|r| r.is_last()).count(), 1);
    }

    #[test]
    fn test_empty_input_has_no_batches() {
        let plan = plan(0, 4);
        assert!(plan.is_empty());
        assert_eq!(plan.batch_count(), 0);
        assert_eq!(plan.ranges().count(), 0);
    }

    #[test]
    fn test_batch_larger_than_input() {
        let plan = plan(3, 10);
        let ranges: Vec<_> = plan.ranges().collect();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].as_range(), 0..3);
        assert!(ranges[0].is_last());
    }
}
