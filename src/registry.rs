//! Binding registry and the discovery trigger.
//!
//! Discovery passes run whenever the page grows, often redundantly. The
//! registry makes them idempotent: an element gets at most one binding for
//! as long as it stays on the page.

use std::collections::BTreeMap;

use crate::page::{ElementId, Page};

/// Per-element bindings keyed by element identity.
///
/// An id present in the registry is bound; discovery skips it.
#[derive(Debug)]
pub struct BindingRegistry<B> {
    bindings: BTreeMap<ElementId, B>,
}

impl<B> Default for BindingRegistry<B> {
    fn default() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }
}

impl<B> BindingRegistry<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` with the binding returned by `build`, unless it is already
    /// bound. `build` may return `None` to skip the element for now; it is
    /// then retried on the next pass.
    ///
    /// Returns whether a new binding was created.
    pub fn bind_with(&mut self, id: ElementId, build: impl FnOnce() -> Option<B>) -> bool {
        if self.bindings.contains_key(&id) {
            return false;
        }
        match build() {
            Some(binding) => {
                self.bindings.insert(id, binding);
                true
            }
            None => false,
        }
    }

    pub fn is_bound(&self, id: ElementId) -> bool {
        self.bindings.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&B> {
        self.bindings.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut B> {
        self.bindings.get_mut(&id)
    }

    /// First binding matching `pred`.
    pub fn find_mut(&mut self, mut pred: impl FnMut(&B) -> bool) -> Option<&mut B> {
        self.bindings.values_mut().find(|b| pred(b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &B)> + '_ {
        self.bindings.iter().map(|(&id, b)| (id, b))
    }

    /// Drop the binding for `id`, returning it.
    pub fn forget(&mut self, id: ElementId) -> Option<B> {
        self.bindings.remove(&id)
    }

    /// Keep only bindings for which `keep` holds. Returns how many went.
    pub fn retain(&mut self, mut keep: impl FnMut(ElementId, &B) -> bool) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|&id, binding| {
            let kept = keep(id, binding);
            if !kept {
                log::debug!("dropping binding for {id}");
            }
            kept
        });
        before - self.bindings.len()
    }

    /// Drop bindings whose element left the page. Returns how many went.
    pub fn prune(&mut self, page: &dyn Page) -> usize {
        self.retain(|id, _| page.contains(id))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Something that can re-run discovery on demand.
///
/// A mutation watcher (a DOM observer, a Floem effect, a test) drives this;
/// the watcher itself lives outside the crate.
pub trait DiscoveryTrigger {
    /// Scan the page and bind every new element. Returns the count of new
    /// bindings. Safe to call any number of times.
    fn rescan_now(&mut self) -> usize;
}

/// One observed change to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationBatch {
    pub added_nodes: usize,
}

/// Feed observed mutations to a trigger: one rescan per batch that added
/// nodes, anywhere in the document. Returns the total of new bindings.
pub fn on_mutations(trigger: &mut impl DiscoveryTrigger, batches: &[MutationBatch]) -> usize {
    batches
        .iter()
        .filter(|batch| batch.added_nodes > 0)
        .map(|_| trigger.rescan_now())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn bind_with_is_idempotent() {
        let mut registry = BindingRegistry::new();
        let id = ElementId(7);
        let mut builds = 0;

        assert!(registry.bind_with(id, || {
            builds += 1;
            Some("first")
        }));
        assert!(!registry.bind_with(id, || {
            builds += 1;
            Some("second")
        }));
        assert_eq!(builds, 1);
        assert_eq!(registry.get(id), Some(&"first"));
    }

    #[test]
    fn skipped_elements_are_retried() {
        let mut registry: BindingRegistry<u8> = BindingRegistry::new();
        let id = ElementId(1);
        assert!(!registry.bind_with(id, || None));
        assert!(!registry.is_bound(id));
        assert!(registry.bind_with(id, || Some(1)));
    }

    #[test]
    fn retain_drops_rejected_bindings() {
        let mut registry = BindingRegistry::new();
        registry.bind_with(ElementId(1), || Some(10));
        registry.bind_with(ElementId(2), || Some(20));

        assert_eq!(registry.retain(|_, &value| value > 15), 1);
        assert!(!registry.is_bound(ElementId(1)));
        assert_eq!(registry.get(ElementId(2)), Some(&20));
    }

    #[test]
    fn prune_drops_removed_elements() {
        let mut page = MemoryPage::new();
        let kept = page.add_color_input(None, "");
        let gone = page.add_color_input(None, "");
        let mut registry = BindingRegistry::new();
        registry.bind_with(kept, || Some(()));
        registry.bind_with(gone, || Some(()));

        page.remove(gone);
        assert_eq!(registry.prune(&page), 1);
        assert!(registry.is_bound(kept));
        assert!(!registry.is_bound(gone));
    }

    struct Counter(usize);

    impl DiscoveryTrigger for Counter {
        fn rescan_now(&mut self) -> usize {
            self.0 += 1;
            0
        }
    }

    #[test]
    fn only_batches_with_added_nodes_rescan() {
        let mut counter = Counter(0);
        let batches = [
            MutationBatch { added_nodes: 0 },
            MutationBatch { added_nodes: 3 },
            MutationBatch { added_nodes: 1 },
        ];
        on_mutations(&mut counter, &batches);
        assert_eq!(counter.0, 2);
    }
}
