// Singly, doubly and circularly linked lists over an arena.
// `push_back` keeps each variant's wiring intact; for circular lists that means
// tail.next == head (and head.prev == tail for the doubly variant).
// `set_next`/`set_prev` rewire freely and leave invariants to the caller.
use super::{NEXT, PREV, Structure, StructureType};
use crate::element::{Arena, Element, ElementId};
use crate::error::{Result, VizError};
use crate::visual::LinkVisual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListKind {
    #[default]
    Singly,
    Doubly,
    CircularSingly,
    CircularDoubly,
}

impl ListKind {
    pub fn is_doubly(&self) -> bool {
        matches!(self, ListKind::Doubly | ListKind::CircularDoubly)
    }

    pub fn is_circular(&self) -> bool {
        matches!(self, ListKind::CircularSingly | ListKind::CircularDoubly)
    }

    pub fn structure_type(&self) -> StructureType {
        match self {
            ListKind::Singly => StructureType::SinglyLinkedList,
            ListKind::Doubly => StructureType::DoublyLinkedList,
            ListKind::CircularSingly => StructureType::CircularSinglyLinkedList,
            ListKind::CircularDoubly => StructureType::CircularDoublyLinkedList,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedList<P = ()> {
    kind: ListKind,
    arena: Arena<P>,
    head: Option<ElementId>,
    tail: Option<ElementId>,
}

impl<P> LinkedList<P> {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn from_elements(kind: ListKind, elements: impl IntoIterator<Item = Element<P>>) -> Self {
        let mut list = Self::new(kind);
        for el in elements {
            list.push_back(el);
        }
        list
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Nodes reachable from the head along `next`.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Elements owned by the list, including detached ones.
    pub fn owned_len(&self) -> usize {
        self.arena.len()
    }

    pub fn head(&self) -> Option<ElementId> {
        self.head
    }

    pub fn tail(&self) -> Option<ElementId> {
        self.tail
    }

    pub fn push_back(&mut self, element: Element<P>) -> ElementId {
        let id = self.arena.insert(element);
        let doubly = self.kind.is_doubly();
        let head = *self.head.get_or_insert(id);
        if let Some(tail) = self.tail
            && let Some(t) = self.arena.get_mut(tail)
        {
            t.link(NEXT, id, None);
        }
        if let Some(tail) = self.tail
            && doubly
            && let Some(n) = self.arena.get_mut(id)
        {
            n.link(PREV, tail, None);
        }
        if self.kind.is_circular() {
            if let Some(n) = self.arena.get_mut(id) {
                n.link(NEXT, head, None);
            }
            if doubly && let Some(h) = self.arena.get_mut(head) {
                h.link(PREV, id, None);
            }
        }
        self.tail = Some(id);
        id
    }

    /// Adds an element without wiring it; link it with `set_next`/`set_prev`.
    pub fn insert_detached(&mut self, element: Element<P>) -> ElementId {
        self.arena.insert(element)
    }

    pub fn set_head(&mut self, id: Option<ElementId>) -> Result<()> {
        if let Some(id) = id {
            self.arena.try_get(id)?;
        }
        self.head = id;
        Ok(())
    }

    pub fn set_tail(&mut self, id: Option<ElementId>) -> Result<()> {
        if let Some(id) = id {
            self.arena.try_get(id)?;
        }
        self.tail = id;
        Ok(())
    }

    pub fn next(&self, id: ElementId) -> Option<ElementId> {
        self.arena.get(id)?.target(NEXT)
    }

    pub fn prev(&self, id: ElementId) -> Option<ElementId> {
        self.arena.get(id)?.target(PREV)
    }

    pub fn set_next(&mut self, id: ElementId, next: Option<ElementId>) -> Result<()> {
        match next {
            Some(n) => self.arena.connect(id, NEXT, n, None),
            None => self.arena.disconnect(id, NEXT).map(|_| ()),
        }
    }

    pub fn set_prev(&mut self, id: ElementId, prev: Option<ElementId>) -> Result<()> {
        match prev {
            Some(p) => self.arena.connect(id, PREV, p, None),
            None => self.arena.disconnect(id, PREV).map(|_| ()),
        }
    }

    pub fn set_link_visual(&mut self, id: ElementId, role: &str, visual: LinkVisual) -> Result<()> {
        let el = self.arena.try_get_mut(id)?;
        let slot = el.link_visual_mut(role).ok_or_else(|| VizError::InvalidValue {
            field: "role",
            value: format!("{} (no link on element {})", role, id),
        })?;
        *slot = visual;
        Ok(())
    }

    pub fn element(&self, id: ElementId) -> Option<&Element<P>> {
        self.arena.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element<P>> {
        self.arena.get_mut(id)
    }

    /// Follows `next` from the head, stopping when the head comes round again.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element<P>)> + '_ {
        let mut cur = self.head;
        let mut steps = 0;
        std::iter::from_fn(move || {
            let id = cur?;
            if (steps > 0 && Some(id) == self.head) || steps >= self.arena.len() {
                return None;
            }
            steps += 1;
            cur = self.next(id);
            self.arena.get(id).map(|e| (id, e))
        })
    }
}

impl<P> Structure for LinkedList<P> {
    type Payload = P;

    fn type_tag(&self) -> &str {
        self.kind.structure_type().as_str()
    }

    fn arena(&self) -> &Arena<P> {
        &self.arena
    }

    fn entry_points(&self) -> Vec<ElementId> {
        self.head.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(kind: ListKind, n: usize) -> LinkedList<usize> {
        LinkedList::from_elements(kind, (0..n).map(|i| Element::new(i).with_label(i.to_string())))
    }

    #[test]
    fn singly_chain() {
        let list = numbered(ListKind::Singly, 3);
        let head = list.head().unwrap();
        let second = list.next(head).unwrap();
        assert_eq!(*list.element(second).unwrap().payload(), 1);
        assert!(list.prev(second).is_none());
        assert!(list.next(list.tail().unwrap()).is_none());
        let payloads: Vec<usize> = list.iter().map(|(_, e)| *e.payload()).collect();
        assert_eq!(payloads, vec![0, 1, 2]);
    }

    #[test]
    fn circular_doubly_closes_both_ways() {
        let list = numbered(ListKind::CircularDoubly, 4);
        let head = list.head().unwrap();
        let tail = list.tail().unwrap();
        assert_eq!(list.next(tail), Some(head));
        assert_eq!(list.prev(head), Some(tail));
        assert_eq!(list.iter().count(), 4);
        assert_eq!(list.type_tag(), "CircularDoublyLinkedList");
    }

    #[test]
    fn single_circular_node_points_at_itself() {
        let list = numbered(ListKind::CircularSingly, 1);
        let head = list.head().unwrap();
        assert_eq!(list.next(head), Some(head));
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    fn link_visual_on_missing_role_fails() {
        let mut list = numbered(ListKind::Singly, 1);
        let a = list.head().unwrap();
        let mut thick = LinkVisual::default();
        thick.set_thickness(5.0).unwrap();
        let err = list.set_link_visual(a, NEXT, thick).unwrap_err();
        assert!(matches!(err, VizError::InvalidValue { field: "role", .. }));
        assert!(list.element(a).unwrap().get_link(NEXT).is_none());

        let mut list = numbered(ListKind::Singly, 2);
        let a = list.head().unwrap();
        list.set_link_visual(a, NEXT, thick).unwrap();
        assert_eq!(list.element(a).unwrap().get_link(NEXT).unwrap().visual.thickness(), 5.0);
    }

    #[test]
    fn detached_elements_are_owned_but_not_counted() {
        let mut list = numbered(ListKind::Doubly, 3);
        list.insert_detached(Element::new(9));
        assert_eq!(list.len(), 3);
        assert_eq!(list.owned_len(), 4);
        let empty: LinkedList = LinkedList::new(ListKind::Singly);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn manual_rewiring() {
        let mut list: LinkedList = LinkedList::new(ListKind::Doubly);
        let a = list.insert_detached(Element::default());
        let b = list.insert_detached(Element::default());
        list.set_head(Some(a)).unwrap();
        list.set_next(a, Some(b)).unwrap();
        list.set_prev(b, Some(a)).unwrap();
        assert_eq!(list.next(a), Some(b));
        list.set_next(a, None).unwrap();
        assert!(list.next(a).is_none());
        assert!(list.set_head(Some(ElementId(7))).is_err());
    }

    #[test]
    fn iter_stops_on_cycle_not_through_head() {
        let mut list = numbered(ListKind::Singly, 3);
        let head = list.head().unwrap();
        let second = list.next(head).unwrap();
        let tail = list.tail().unwrap();
        list.set_next(tail, Some(second)).unwrap();
        assert_eq!(list.iter().count(), 3);
    }
}
