// Elements and the arena that owns them.
// Links are non-owning: a role maps to an `ElementId` inside the same arena.
// Role order is insertion order; re-linking a role replaces it in place.
use std::fmt;

use crate::error::{Result, VizError};
use crate::visual::{ElementVisual, LinkVisual};

/// Handle to an element inside one container's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub target: ElementId,
    pub visual: LinkVisual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element<P = ()> {
    identity: Option<String>,
    label: String,
    payload: P,
    visual: ElementVisual,
    links: Vec<(String, Link)>,
}

impl<P: Default> Default for Element<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P> Element<P> {
    pub fn new(payload: P) -> Self {
        Self {
            identity: None,
            label: String::new(),
            payload,
            visual: ElementVisual::default(),
            links: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_visual(mut self, visual: ElementVisual) -> Self {
        self.visual = visual;
        self
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Assigns the JSON node key. An identity can only be assigned once.
    pub fn set_identity(&mut self, key: impl Into<String>) -> Result<()> {
        let key = key.into();
        if let Some(cur) = &self.identity {
            return Err(VizError::InvalidValue {
                field: "identity",
                value: format!("{} (already assigned '{}')", key, cur),
            });
        }
        self.identity = Some(key);
        Ok(())
    }

    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }
    pub fn set_payload(&mut self, payload: P) -> P {
        std::mem::replace(&mut self.payload, payload)
    }

    pub fn visual(&self) -> &ElementVisual {
        &self.visual
    }
    pub fn visual_mut(&mut self) -> &mut ElementVisual {
        &mut self.visual
    }
    pub fn set_visual(&mut self, visual: ElementVisual) {
        self.visual = visual;
    }

    /// Establishes or replaces the outgoing link named `role`.
    pub fn link(&mut self, role: &str, target: ElementId, visual: Option<LinkVisual>) {
        let visual = visual.unwrap_or_default();
        match self.links.iter_mut().find(|(r, _)| r == role) {
            Some((_, slot)) => *slot = Link { target, visual },
            None => self.links.push((role.to_string(), Link { target, visual })),
        }
    }

    pub fn unlink(&mut self, role: &str) -> Option<Link> {
        let pos = self.links.iter().position(|(r, _)| r == role)?;
        Some(self.links.remove(pos).1)
    }

    pub fn get_link(&self, role: &str) -> Option<&Link> {
        self.links.iter().find(|(r, _)| r == role).map(|(_, l)| l)
    }

    pub fn link_visual_mut(&mut self, role: &str) -> Option<&mut LinkVisual> {
        self.links
            .iter_mut()
            .find(|(r, _)| r == role)
            .map(|(_, l)| &mut l.visual)
    }

    pub fn target(&self, role: &str) -> Option<ElementId> {
        self.get_link(role).map(|l| l.target)
    }

    /// Populated role names, in the order they were first linked.
    pub fn roles(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.iter().map(|(r, _)| r.as_str())
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &Link)> + '_ {
        self.links.iter().map(|(r, l)| (r.as_str(), l))
    }
}

/// Owns every element of one container.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena<P = ()> {
    elements: Vec<Element<P>>,
}

impl<P> Default for Arena<P> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<P> Arena<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element<P>) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        id.0 < self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element<P>> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element<P>> {
        self.elements.get_mut(id.0)
    }

    pub(crate) fn try_get(&self, id: ElementId) -> Result<&Element<P>> {
        self.get(id).ok_or(VizError::UnknownElement(id.0))
    }

    pub(crate) fn try_get_mut(&mut self, id: ElementId) -> Result<&mut Element<P>> {
        self.elements
            .get_mut(id.0)
            .ok_or(VizError::UnknownElement(id.0))
    }

    pub(crate) fn replace(&mut self, id: ElementId, element: Element<P>) -> Result<Element<P>> {
        let slot = self.try_get_mut(id)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Links `from --role--> to`, after checking both handles belong here.
    pub fn connect(
        &mut self,
        from: ElementId,
        role: &str,
        to: ElementId,
        visual: Option<LinkVisual>,
    ) -> Result<()> {
        if !self.contains(to) {
            return Err(VizError::UnknownElement(to.0));
        }
        self.try_get_mut(from)?.link(role, to, visual);
        Ok(())
    }

    pub fn disconnect(&mut self, from: ElementId, role: &str) -> Result<Option<Link>> {
        Ok(self.try_get_mut(from)?.unlink(role))
    }

    /// The element's JSON key: its assigned identity, else its arena index.
    pub fn name_of(&self, id: ElementId) -> Option<String> {
        let el = self.get(id)?;
        Some(match el.identity() {
            Some(key) => key.to_string(),
            None => id.0.to_string(),
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> {
        (0..self.elements.len()).map(ElementId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element<P>)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementId(i), e))
    }
}
