//! Memoized derived [`View`]s.

/// Derived sequence of items, recomputed only when its key changes.
///
/// The key is expected to capture everything the sequence depends on: the
/// source collection revision, filters and sort order.
#[derive(Debug)]
pub struct View<K, T> {
    /// Key and items of the last computation.
    cached: Option<(K, Vec<T>)>,

    /// Number of computations performed so far.
    computations: u64,
}

impl<K, T> Default for View<K, T> {
    fn default() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, T> View<K, T> {
    /// Returns the items for the provided `key`, computing them with the
    /// provided function only if the `key` differs from the last one.
    pub fn get(&mut self, key: K, compute: impl FnOnce() -> Vec<T>) -> &[T] {
        let fresh = matches!(&self.cached, Some((k, _)) if *k == key);
        if !fresh {
            self.computations += 1;
            self.cached = Some((key, compute()));
        }
        self.cached.as_ref().map_or(&[][..], |(_, items)| items.as_slice())
    }

    /// Returns the number of computations performed by this [`View`].
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Drops the memoized items, so the next [`View::get()`] recomputes them.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod spec {
    use super::View;

    #[test]
    fn recomputes_only_on_key_change() {
        let mut view = View::<(u64, &str), u32>::default();

        assert_eq!(view.get((1, "a"), || vec![1, 2]), &[1, 2]);
        assert_eq!(view.get((1, "a"), || unreachable!()), &[1, 2]);
        assert_eq!(view.computations(), 1);

        assert_eq!(view.get((2, "a"), || vec![3]), &[3]);
        assert_eq!(view.get((2, "b"), || vec![4]), &[4]);
        assert_eq!(view.computations(), 3);

        view.invalidate();
        assert_eq!(view.get((2, "b"), || vec![5]), &[5]);
        assert_eq!(view.computations(), 4);
    }
}
