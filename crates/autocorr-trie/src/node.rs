// Trie node layout

use autocorr_core::character::SLOT_COUNT;

/// One prefix position in the trie.
///
/// A node owns its children exclusively; the trie is a tree, never a graph.
/// `frequency` is only meaningful when `is_word` is set, and is then at
/// least 1.
#[derive(Debug)]
pub struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; SLOT_COUNT],
    pub(crate) is_word: bool,
    pub(crate) frequency: u32,
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        Self {
            children: [const { None }; SLOT_COUNT],
            is_word: false,
            frequency: 0,
        }
    }

    /// Whether some inserted word ends exactly at this node.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Occurrence count of the word ending here, or 0 if none does.
    pub fn frequency(&self) -> u32 {
        if self.is_word { self.frequency } else { 0 }
    }

    /// The child in `slot`, if that prefix exists.
    pub fn child(&self, slot: usize) -> Option<&TrieNode> {
        self.children.get(slot)?.as_deref()
    }

    /// Number of populated child slots.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Return the child in `slot`, creating it first if needed.
    ///
    /// The flag tells whether a node was allocated.
    pub(crate) fn child_or_insert(&mut self, slot: usize) -> (&mut TrieNode, bool) {
        let created = self.children[slot].is_none();
        let child = self.children[slot]
            .get_or_insert_with(|| Box::new(TrieNode::new()))
            .as_mut();
        (child, created)
    }

    /// Detach every child, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}
