//! A trait for capabilities that observe union operations.

/// A callback invoked whenever two previously distinct components are merged.
///
/// Listeners run synchronously on the thread performing the union, in registration order.
/// Registering the same listener multiple times invokes it once per registration on every merge.
/// A no-op union (both nodes already in the same component) never notifies.
///
/// The blanket impl below lets call sites pass plain closures:
///
/// ```
/// use disjoint_set::DisjointSet;
///
/// let mut sets = DisjointSet::new(4)?;
/// sets.add_union_listener(|new_root: usize, absorbed_root: usize| {
///     println!("{absorbed_root} absorbed into {new_root}");
/// });
/// sets.union(0, 1)?;
/// # Ok::<(), disjoint_set::Error>(())
/// ```
pub trait UnionListener {
    /// Called after the structure has been updated for a merge.
    ///
    /// `new_root` is the representative of the merged component, `absorbed_root` the former
    /// representative of the component that was attached beneath it.
    fn on_union(&mut self, new_root: usize, absorbed_root: usize);
}

impl<F: FnMut(usize, usize)> UnionListener for F {
    fn on_union(&mut self, new_root: usize, absorbed_root: usize) {
        self(new_root, absorbed_root)
    }
}
