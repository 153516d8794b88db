//! structviz-core: element/graph model and renderer JSON for data structures
//!
//! This crate focuses on a small, well-factored surface:
//! - Validated colors and per-node / per-link visual attributes
//! - Elements in an arena, linked by named roles (`next`, `prev`, `left`, ...)
//! - Containers: 1–3D arrays, singly/doubly/circular lists, binary trees, BSTs
//! - One traversal that visits each element once, cycles included, and emits
//!   the `{"nodes": [...], "links": [...]}` document
//! - A `Transport` seam for handing documents to a renderer
//!
pub mod color;
pub mod container;
pub mod element;
pub mod error;
pub mod serialize;
pub mod transport;
pub mod visual;

pub use color::Color;
pub use container::{
    Array, ArrayConfig, BinarySearchTree, BinaryTree, Layout, LinkedList, ListKind, Structure,
    StructureType,
};
pub use element::{Arena, Element, ElementId, Link};
pub use error::{Result, VizError};
pub use serialize::{Document, LinkEntry, NodeEntry, RenderOpts, build_representation};
pub use transport::{FileTransport, Transport, visualize};
pub use visual::{ElementVisual, LinkVisual, Shape};
