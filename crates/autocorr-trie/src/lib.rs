//! Word-frequency trie.
//!
//! Stores every known word together with the number of times it occurred in
//! the loaded corpus. Each node has one child slot per alphabet symbol
//! (`a`..=`z` case-folded, plus the apostrophe), so lookups take time
//! proportional to the word length and never allocate.
//!
//! # Architecture
//!
//! - [`node`] -- the 27-ary node layout
//! - [`trie`] -- [`WordTrie`]: insert-or-increment, lookup, size, teardown
//! - [`iter`] -- depth-first iteration over stored words (explicit stack)

pub mod iter;
pub mod node;
pub mod trie;

pub use iter::Words;
pub use node::TrieNode;
pub use trie::WordTrie;
