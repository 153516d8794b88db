//! Structural wrappers over the element arena.
//!
//! Every container implements [`Structure`], which is all the document
//! builder needs: a type tag, the arena, the entry points and a layout.
use std::fmt;
use std::str::FromStr;

use crate::element::{Arena, ElementId};
use crate::error::{Result, VizError};

pub mod array;
pub mod list;
pub mod tree;

pub use array::{Array, ArrayConfig};
pub use list::{LinkedList, ListKind};
pub use tree::{BinarySearchTree, BinaryTree};

pub const NEXT: &str = "next";
pub const PREV: &str = "prev";
pub const LEFT: &str = "left";
pub const RIGHT: &str = "right";

/// How the document builder walks a structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Linear scan of the arena in offset order.
    Grid { extents: Vec<usize> },
    /// Breadth-first walk of roles from the entry points.
    Graph,
}

/// Traversal capability shared by all containers.
pub trait Structure {
    type Payload;

    /// Tag naming the structure for the renderer, e.g. `"Array"`.
    fn type_tag(&self) -> &str;
    fn arena(&self) -> &Arena<Self::Payload>;
    fn entry_points(&self) -> Vec<ElementId>;
    fn layout(&self) -> Layout {
        Layout::Graph
    }
}

/// Structure variants understood by the document builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    Array,
    SinglyLinkedList,
    DoublyLinkedList,
    CircularSinglyLinkedList,
    CircularDoublyLinkedList,
    BinaryTree,
    BinarySearchTree,
}

impl StructureType {
    pub const ALL: [StructureType; 7] = [
        StructureType::Array,
        StructureType::SinglyLinkedList,
        StructureType::DoublyLinkedList,
        StructureType::CircularSinglyLinkedList,
        StructureType::CircularDoublyLinkedList,
        StructureType::BinaryTree,
        StructureType::BinarySearchTree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::Array => "Array",
            StructureType::SinglyLinkedList => "SinglyLinkedList",
            StructureType::DoublyLinkedList => "DoublyLinkedList",
            StructureType::CircularSinglyLinkedList => "CircularSinglyLinkedList",
            StructureType::CircularDoublyLinkedList => "CircularDoublyLinkedList",
            StructureType::BinaryTree => "BinaryTree",
            StructureType::BinarySearchTree => "BinarySearchTree",
        }
    }
}

impl FromStr for StructureType {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        StructureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| VizError::UnsupportedStructure(s.to_string()))
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
