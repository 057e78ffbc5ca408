//! This crate implements a Binary Search Tree (BST) whose nodes are linked
//! upward as well as downward.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one value and has up to two
//! child `Node`s, constrained by the invariants that give the structure its
//! name:
//!
//! 1. Every `Node` in a `Node`'s left subtree holds a value less than its own.
//! 2. Every `Node` in a `Node`'s right subtree holds a value greater than its own.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching only ever has to follow one child per step, so lookups cost
//! `O(height)`, and visiting the left subtree, then a node, then its right
//! subtree yields the values in ascending order. Nothing here rebalances,
//! though: insert values in sorted order and the "tree" degenerates into a
//! linked list with `O(n)` lookups.
//!
//! ## Parent links
//!
//! On top of the two child links, every node in this crate's tree keeps a
//! non-owning link to its parent. That third link is what makes node-relative
//! queries cheap: a cursor sitting on any node can find the node's in-order
//! successor or predecessor by climbing, without a search from the root, and
//! deletion can splice a node out of the middle of the tree by rewiring the
//! links around it in place.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;

#[cfg(test)]
mod test;
