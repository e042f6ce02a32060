/// Sorted, deduplicated integer keys. Fixed once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coordinates {
    keys: Vec<i64>,
}

impl Coordinates {
    /// O(n log n)
    pub fn new<Iter: IntoIterator<Item = i64>>(iter: Iter) -> Self {
        let mut keys: Vec<_> = iter.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<i64> {
        self.keys.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<i64> {
        self.keys.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.keys
    }

    /// O(log n)
    pub fn position(&self, key: i64) -> Option<usize> {
        self.keys.binary_search(&key).ok()
    }

    /// O(log n)
    #[inline]
    pub fn contains(&self, key: i64) -> bool {
        self.position(key).is_some()
    }

    /// Largest coordinate strictly below `key`.
    ///
    /// O(log n)
    pub fn predecessor(&self, key: i64) -> Option<i64> {
        let i = self.keys.partition_point(|&k| k < key);
        i.checked_sub(1).map(|i| self.keys[i])
    }
}

impl std::iter::FromIterator<i64> for Coordinates {
    fn from_iter<Iter: IntoIterator<Item = i64>>(iter: Iter) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let c = Coordinates::new(vec![5, -3, 5, 100, 0, -3]);
        assert_eq!(c.as_slice(), &[-3, 0, 5, 100]);
        assert_eq!(c.len(), 4);
        assert_eq!(c.first(), Some(-3));
        assert_eq!(c.last(), Some(100));
    }

    #[test]
    fn predecessor_is_strict() {
        let c: Coordinates = vec![10, 20, 1_000_000].into_iter().collect();
        assert_eq!(c.predecessor(10), None);
        assert_eq!(c.predecessor(11), Some(10));
        assert_eq!(c.predecessor(20), Some(10));
        assert_eq!(c.predecessor(i64::MAX), Some(1_000_000));
        assert_eq!(c.predecessor(i64::MIN), None);
    }

    #[test]
    fn position_only_for_declared_keys() {
        let c = Coordinates::new(vec![2, 4, 8]);
        assert_eq!(c.position(4), Some(1));
        assert_eq!(c.position(5), None);
        assert!(c.contains(8));
        assert!(!Coordinates::default().contains(0));
        assert!(Coordinates::default().is_empty());
    }
}
