//! Host page abstraction.
//!
//! The synchronizers never touch a document directly. They ask a [`Page`]
//! the few questions discovery needs, and report their results as binding
//! state keyed by [`ElementId`].

use std::collections::BTreeMap;
use std::fmt;

/// Identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only queries over a host document.
pub trait Page {
    /// Every native color input, in document order.
    fn color_inputs(&self) -> Vec<ElementId>;

    /// Current value of an input. Empty when unset or unknown.
    fn value(&self, input: ElementId) -> String;

    /// Parent element, if any.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Nearest ancestor (or the element itself) carrying `class`.
    fn closest(&self, element: ElementId, class: &str) -> Option<ElementId>;

    /// Every element carrying `class`, in document order.
    fn with_class(&self, class: &str) -> Vec<ElementId>;

    /// First native color input below `container`.
    fn color_input_in(&self, container: ElementId) -> Option<ElementId>;

    /// First element below `container` carrying `class`.
    fn class_in(&self, container: ElementId, class: &str) -> Option<ElementId>;

    /// Whether the element is still part of the document.
    fn contains(&self, element: ElementId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Container,
    ColorInput,
    TextInput,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<ElementId>,
    kind: NodeKind,
    classes: Vec<String>,
    value: String,
}

/// A page held in memory, for tests and hosts without a real document.
///
/// Document order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryPage {
    nodes: BTreeMap<ElementId, Node>,
    next_id: u64,
    added_since_take: usize,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        &mut self,
        parent: Option<ElementId>,
        kind: NodeKind,
        classes: &[&str],
        value: &str,
    ) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.added_since_take += 1;
        self.nodes.insert(
            id,
            Node {
                parent,
                kind,
                classes: classes.iter().map(|c| c.to_string()).collect(),
                value: value.to_string(),
            },
        );
        id
    }

    /// Add a plain container element.
    pub fn add_container(&mut self, parent: Option<ElementId>, classes: &[&str]) -> ElementId {
        self.insert(parent, NodeKind::Container, classes, "")
    }

    /// Add a native color input with an initial value (may be empty).
    pub fn add_color_input(&mut self, parent: Option<ElementId>, value: &str) -> ElementId {
        self.insert(parent, NodeKind::ColorInput, &[], value)
    }

    /// Add a text input.
    pub fn add_text_input(
        &mut self,
        parent: Option<ElementId>,
        classes: &[&str],
        value: &str,
    ) -> ElementId {
        self.insert(parent, NodeKind::TextInput, classes, value)
    }

    /// Overwrite an input's value. Returns false for unknown elements.
    pub fn set_value(&mut self, element: ElementId, value: &str) -> bool {
        match self.nodes.get_mut(&element) {
            Some(node) => {
                node.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove an element and everything below it. Returns the removed count.
    pub fn remove(&mut self, element: ElementId) -> usize {
        let doomed: Vec<ElementId> = self
            .nodes
            .keys()
            .copied()
            .filter(|&id| self.is_within(id, element))
            .collect();
        for id in &doomed {
            self.nodes.remove(id);
        }
        doomed.len()
    }

    /// Nodes added since the last call, as a mutation watcher would report.
    pub fn take_added(&mut self) -> usize {
        std::mem::take(&mut self.added_since_take)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `element` is `ancestor` or lies below it.
    fn is_within(&self, element: ElementId, ancestor: ElementId) -> bool {
        self.ancestry(element).any(|id| id == ancestor)
    }

    /// `element` followed by its ancestors, nearest first.
    fn ancestry(&self, element: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(
            self.nodes.contains_key(&element).then_some(element),
            |id| self.nodes.get(id).and_then(|node| node.parent),
        )
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn descendants(&self, container: ElementId) -> impl Iterator<Item = (ElementId, &Node)> + '_ {
        self.nodes
            .iter()
            .filter(move |&(&id, _)| id != container && self.is_within(id, container))
            .map(|(&id, node)| (id, node))
    }
}

impl Page for MemoryPage {
    fn color_inputs(&self) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.kind == NodeKind::ColorInput)
            .map(|(&id, _)| id)
            .collect()
    }

    fn value(&self, input: ElementId) -> String {
        self.nodes
            .get(&input)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|node| node.parent)
    }

    fn closest(&self, element: ElementId, class: &str) -> Option<ElementId> {
        self.ancestry(element).find(|&id| self.has_class(id, class))
    }

    fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.nodes
            .keys()
            .copied()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    fn color_input_in(&self, container: ElementId) -> Option<ElementId> {
        self.descendants(container)
            .find(|(_, node)| node.kind == NodeKind::ColorInput)
            .map(|(id, _)| id)
    }

    fn class_in(&self, container: ElementId, class: &str) -> Option<ElementId> {
        self.descendants(container)
            .find(|(_, node)| node.classes.iter().any(|c| c == class))
            .map(|(id, _)| id)
    }

    fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }
}
