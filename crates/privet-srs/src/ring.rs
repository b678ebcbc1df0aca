//! The per-user question ring.
//!
//! Nodes live in a `Vec` and point at each other through `next` indices
//! into that same `Vec`. Storage order never changes after creation; only
//! the links and `head` move.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{WordCatalog, WordId},
    error::SrsError,
};

/// Scheduling state of one word for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub word_id: WordId,
    /// Lifetime correct answers
    pub score: i32,
    /// Lifetime answers
    pub attempts: i32,
    pub session_score: i32,
    pub session_attempts: i32,
    /// Number of other questions to show before this one comes back
    pub m_value: i32,
    /// Index of the following node
    pub next: usize,
}

impl QuestionNode {
    pub fn new(word_id: WordId, next: usize) -> Self {
        Self {
            word_id,
            score: 0,
            attempts: 0,
            session_score: 0,
            session_attempts: 0,
            m_value: 1,
            next,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRing {
    nodes: Vec<QuestionNode>,
    head: usize,
}

impl QuestionRing {
    /// Create a fresh ring over `catalog`, linked in catalog order.
    pub fn new(catalog: &WordCatalog) -> Self {
        let len = catalog.len();
        let nodes = catalog
            .iter()
            .enumerate()
            .map(|(i, word)| QuestionNode::new(word.id, (i + 1) % len))
            .collect();

        Self { nodes, head: 0 }
    }

    /// Rebuild a ring from stored parts, rejecting anything that breaks the
    /// ring invariants.
    pub fn from_parts(nodes: Vec<QuestionNode>, head: usize) -> Result<Self, SrsError> {
        let len = nodes.len();

        if len == 0 {
            return if head == 0 {
                Ok(Self { nodes, head })
            } else {
                Err(SrsError::CorruptRing(format!(
                    "head {head} set on an empty ring"
                )))
            };
        }

        if head >= len {
            return Err(SrsError::CorruptRing(format!(
                "head {head} out of range for {len} nodes"
            )));
        }

        for (i, node) in nodes.iter().enumerate() {
            if node.next >= len {
                return Err(SrsError::CorruptRing(format!(
                    "node {i} links to {} out of {len} nodes",
                    node.next
                )));
            }
            if node.m_value < 1 {
                return Err(SrsError::CorruptRing(format!(
                    "node {i} has interval {}",
                    node.m_value
                )));
            }
        }

        let ring = Self { nodes, head };
        if !ring.is_single_cycle() {
            return Err(SrsError::CorruptRing(
                "links do not form a single cycle".to_string(),
            ));
        }

        Ok(ring)
    }

    pub fn into_parts(self) -> (Vec<QuestionNode>, usize) {
        (self.nodes, self.head)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the node currently due.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Nodes in storage order.
    pub fn nodes(&self) -> &[QuestionNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&QuestionNode> {
        self.nodes.get(index)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [QuestionNode] {
        &mut self.nodes
    }

    pub fn head_node(&self) -> Result<&QuestionNode, SrsError> {
        self.nodes.get(self.head).ok_or(SrsError::EmptyRing)
    }

    /// Make `to_index` the due node.
    ///
    /// # Panics
    ///
    /// Panics if `to_index` is not a node index.
    pub fn advance_head(&mut self, to_index: usize) {
        assert!(
            to_index < self.nodes.len(),
            "head index {to_index} out of range"
        );
        self.head = to_index;
    }

    /// Point `node_index` at `new_next`. Keeping the ring a single cycle is
    /// the caller's job.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn relink(&mut self, node_index: usize, new_next: usize) {
        assert!(
            new_next < self.nodes.len(),
            "link target {new_next} out of range"
        );
        self.nodes[node_index].next = new_next;
    }

    /// Index of the node whose `next` is `index`.
    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.nodes.iter().position(|node| node.next == index)
    }

    /// Walk the links starting at `from`, yielding at most `len` indices.
    pub fn traverse(&self, from: usize) -> Traverse<'_> {
        Traverse {
            ring: self,
            cursor: (from < self.nodes.len()).then_some(from),
            remaining: self.nodes.len(),
        }
    }

    /// Whether the links visit every node exactly once and close the loop.
    pub fn is_single_cycle(&self) -> bool {
        let len = self.nodes.len();
        if len == 0 {
            return true;
        }

        let mut seen = vec![false; len];
        let mut cursor = 0;
        for _ in 0..len {
            if cursor >= len || seen[cursor] {
                return false;
            }
            seen[cursor] = true;
            cursor = self.nodes[cursor].next;
        }

        cursor == 0
    }
}

/// Iterator returned by [`QuestionRing::traverse`].
#[derive(Debug)]
pub struct Traverse<'a> {
    ring: &'a QuestionRing,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Traverse<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.ring.nodes.get(current).map(|node| node.next);
        Some(current)
    }
}
