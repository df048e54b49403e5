// Depth-first iteration over stored words
//
// The traversal keeps its own stack of (node, next slot) frames instead of
// recursing, and rebuilds the current prefix in a single String.

use autocorr_core::character::{SLOT_CHARS, SLOT_COUNT};

use crate::node::TrieNode;

struct Frame<'a> {
    node: &'a TrieNode,
    next_slot: usize,
}

/// Iterator over `(word, frequency)` pairs in slot order
/// (`a`..=`z`, then the apostrophe). A word is yielded before any longer
/// word it prefixes.
pub struct Words<'a> {
    root: Option<&'a TrieNode>,
    stack: Vec<Frame<'a>>,
    prefix: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            prefix: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = (String, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(Frame {
                node: root,
                next_slot: 0,
            });
            if root.is_word {
                return Some((String::new(), root.frequency));
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            let mut found = None;
            while frame.next_slot < SLOT_COUNT {
                let slot = frame.next_slot;
                frame.next_slot += 1;
                if let Some(child) = node.children[slot].as_deref() {
                    found = Some((slot, child));
                    break;
                }
            }

            match found {
                Some((slot, child)) => {
                    self.prefix.push(SLOT_CHARS[slot]);
                    self.stack.push(Frame {
                        node: child,
                        next_slot: 0,
                    });
                    if child.is_word {
                        return Some((self.prefix.clone(), child.frequency));
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}
