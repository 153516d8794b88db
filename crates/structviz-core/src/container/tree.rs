use super::{LEFT, RIGHT, Structure, StructureType};
use crate::element::{Arena, Element, ElementId};
use crate::error::{Result, VizError};

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryTree<P = ()> {
    arena: Arena<P>,
    root: Option<ElementId>,
}

impl<P> Default for BinaryTree<P> {
    fn default() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }
}

impl<P> BinaryTree<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node; the first node inserted becomes the root.
    pub fn insert_node(&mut self, element: Element<P>) -> ElementId {
        let id = self.arena.insert(element);
        self.root.get_or_insert(id);
        id
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn set_root(&mut self, id: Option<ElementId>) -> Result<()> {
        if let Some(id) = id {
            self.arena.try_get(id)?;
        }
        self.root = id;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn left(&self, id: ElementId) -> Option<ElementId> {
        self.arena.get(id)?.target(LEFT)
    }

    pub fn right(&self, id: ElementId) -> Option<ElementId> {
        self.arena.get(id)?.target(RIGHT)
    }

    pub fn set_left(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.arena.connect(parent, LEFT, child, None)
    }

    pub fn set_right(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.arena.connect(parent, RIGHT, child, None)
    }

    pub fn clear_left(&mut self, parent: ElementId) -> Result<()> {
        self.arena.disconnect(parent, LEFT).map(|_| ())
    }

    pub fn clear_right(&mut self, parent: ElementId) -> Result<()> {
        self.arena.disconnect(parent, RIGHT).map(|_| ())
    }

    pub fn element(&self, id: ElementId) -> Option<&Element<P>> {
        self.arena.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element<P>> {
        self.arena.get_mut(id)
    }
}

impl<P> Structure for BinaryTree<P> {
    type Payload = P;

    fn type_tag(&self) -> &str {
        StructureType::BinaryTree.as_str()
    }

    fn arena(&self) -> &Arena<P> {
        &self.arena
    }

    fn entry_points(&self) -> Vec<ElementId> {
        self.root.into_iter().collect()
    }
}

/// Binary tree ordered by key. Keys steer `insert`/`search` only.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySearchTree<K, P = ()> {
    tree: BinaryTree<P>,
    keys: Vec<K>,
}

impl<K: Ord, P> Default for BinarySearchTree<K, P> {
    fn default() -> Self {
        Self {
            tree: BinaryTree::new(),
            keys: Vec::new(),
        }
    }
}

impl<K: Ord, P> BinarySearchTree<K, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts below the matching leaf: smaller keys go left, the rest right.
    pub fn insert(&mut self, key: K, element: Element<P>) -> Result<ElementId> {
        let mut parent = None;
        let mut cur = self.tree.root();
        let mut steps = 0;
        while let Some(id) = cur {
            // a path longer than the node count means a rewired cycle
            steps += 1;
            if steps > self.keys.len() {
                return Err(VizError::InvalidValue {
                    field: "tree",
                    value: format!("cycle below node {}", id),
                });
            }
            let go_left = key < *self.key_of(id)?;
            parent = Some((id, go_left));
            cur = if go_left {
                self.tree.left(id)
            } else {
                self.tree.right(id)
            };
        }
        let id = self.tree.insert_node(element);
        self.keys.push(key);
        match parent {
            Some((p, true)) => self.tree.set_left(p, id)?,
            Some((p, false)) => self.tree.set_right(p, id)?,
            None => {}
        }
        Ok(id)
    }

    pub fn search(&self, key: &K) -> Option<ElementId> {
        let mut cur = self.tree.root();
        for _ in 0..self.keys.len() {
            let id = cur?;
            let k = self.keys.get(id.index())?;
            cur = match key.cmp(k) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => self.tree.left(id),
                std::cmp::Ordering::Greater => self.tree.right(id),
            };
        }
        None
    }

    pub fn key(&self, id: ElementId) -> Option<&K> {
        self.keys.get(id.index())
    }

    fn key_of(&self, id: ElementId) -> Result<&K> {
        self.keys.get(id.index()).ok_or(VizError::UnknownElement(id.index()))
    }

    /// Node handles in ascending key order.
    pub fn in_order(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.keys.len());
        let mut stack = Vec::new();
        let mut cur = self.tree.root();
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                // a malformed (cyclic) tree would never drain
                if out.len() + stack.len() > self.keys.len() {
                    return out;
                }
                stack.push(id);
                cur = self.tree.left(id);
            }
            if let Some(id) = stack.pop() {
                out.push(id);
                cur = self.tree.right(id);
            }
        }
        out
    }

    pub fn tree(&self) -> &BinaryTree<P> {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn root(&self) -> Option<ElementId> {
        self.tree.root()
    }

    pub fn left(&self, id: ElementId) -> Option<ElementId> {
        self.tree.left(id)
    }

    pub fn right(&self, id: ElementId) -> Option<ElementId> {
        self.tree.right(id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element<P>> {
        self.tree.element(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element<P>> {
        self.tree.element_mut(id)
    }
}

impl<K, P> Structure for BinarySearchTree<K, P> {
    type Payload = P;

    fn type_tag(&self) -> &str {
        StructureType::BinarySearchTree.as_str()
    }

    fn arena(&self) -> &Arena<P> {
        &self.tree.arena
    }

    fn entry_points(&self) -> Vec<ElementId> {
        self.tree.root.into_iter().collect()
    }
}
