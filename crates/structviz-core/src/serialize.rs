// Document builder: walks a structure once per element and emits the
// `{"nodes": [...], "links": [...]}` document the renderer consumes.
// - Grid layouts (arrays) are scanned in offset order; the renderer rebuilds
//   the grid from that order plus `dims`.
// - Graph layouts are walked breadth-first from the entry points. A link entry
//   is emitted for every populated role before the visited check, so cycles
//   and shared nodes produce all their links but only one node entry.
use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::color::Color;
use crate::container::{Layout, Structure, StructureType};
use crate::element::{Arena, Element, ElementId};
use crate::error::{Result, VizError};
use crate::visual::Shape;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeEntry {
    pub name: String,
    pub label: String,
    pub color: Color,
    pub shape: Shape,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
    pub color: Color,
    pub thickness: f64,
    pub opacity: f64,
    #[serde(skip)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<Vec<usize>>,
    #[serde(skip)]
    pub structure: Option<StructureType>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOpts {
    pub pretty: bool,
}

impl Document {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            dims: None,
            structure: None,
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self, opts: RenderOpts) -> Result<String> {
        let s = if opts.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(s)
    }

    pub fn node(&self, name: &str) -> Option<&NodeEntry> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn links_with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a LinkEntry> + 'a {
        self.links.iter().filter(move |l| l.role == role)
    }
}

struct Builder<'a, P> {
    arena: &'a Arena<P>,
    names: HashMap<ElementId, String>,
    owners: HashMap<String, ElementId>,
    doc: Document,
}

impl<'a, P> Builder<'a, P> {
    fn new(arena: &'a Arena<P>, structure: StructureType) -> Self {
        let mut doc = Document::empty();
        doc.structure = Some(structure);
        Self {
            arena,
            names: HashMap::new(),
            owners: HashMap::new(),
            doc,
        }
    }

    fn element(&self, id: ElementId) -> Result<&'a Element<P>> {
        self.arena
            .get(id)
            .ok_or(VizError::UnknownElement(id.index()))
    }

    /// Resolves the JSON key for `id`, rejecting keys claimed by another element.
    fn name(&mut self, id: ElementId) -> Result<String> {
        if let Some(n) = self.names.get(&id) {
            return Ok(n.clone());
        }
        let name = self
            .arena
            .name_of(id)
            .ok_or(VizError::UnknownElement(id.index()))?;
        if let Some(&other) = self.owners.get(&name)
            && other != id
        {
            return Err(VizError::DuplicateIdentity(name));
        }
        self.owners.insert(name.clone(), id);
        self.names.insert(id, name.clone());
        Ok(name)
    }

    fn emit_node(&mut self, id: ElementId) -> Result<()> {
        let el = self.element(id)?;
        let name = self.name(id)?;
        trace!(element = %name, "visit");
        let v = el.visual();
        self.doc.nodes.push(NodeEntry {
            name,
            label: el.label().to_string(),
            color: v.color(),
            shape: v.shape(),
            size: v.size(),
            opacity: v.opacity(),
        });
        Ok(())
    }

    /// Emits one link entry per populated role of `id`; returns the targets.
    fn emit_links(&mut self, id: ElementId) -> Result<Vec<ElementId>> {
        let el = self.element(id)?;
        let source = self.name(id)?;
        let mut targets = Vec::new();
        for (role, link) in el.links() {
            // dangling handles fail here rather than at emit_node
            self.element(link.target)?;
            let target = self.name(link.target)?;
            self.doc.links.push(LinkEntry {
                source: source.clone(),
                target,
                color: link.visual.color(),
                thickness: link.visual.thickness(),
                opacity: link.visual.opacity(),
                role: role.to_string(),
            });
            targets.push(link.target);
        }
        Ok(targets)
    }

    fn scan_grid(&mut self, extents: Vec<usize>) -> Result<()> {
        let arena = self.arena;
        for id in arena.ids() {
            self.emit_node(id)?;
        }
        for id in arena.ids() {
            self.emit_links(id)?;
        }
        if !arena.is_empty() {
            self.doc.dims = Some(extents);
        }
        Ok(())
    }

    fn walk_graph(&mut self, entries: Vec<ElementId>) -> Result<()> {
        let mut visited: HashSet<ElementId> = HashSet::new();
        let mut queue: VecDeque<ElementId> = VecDeque::new();
        for entry in entries {
            if visited.insert(entry) {
                queue.push_back(entry);
            }
        }
        while let Some(id) = queue.pop_front() {
            self.emit_node(id)?;
            for target in self.emit_links(id)? {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Document {
        self.doc
    }
}

/// Builds the renderer document for `structure`.
///
/// Fails with [`VizError::UnsupportedStructure`] for unknown type tags,
/// [`VizError::DuplicateIdentity`] when two elements share a key and
/// [`VizError::UnknownElement`] for links leaving the structure's arena.
pub fn build_representation<S>(structure: &S) -> Result<Document>
where
    S: Structure + ?Sized,
{
    let tag = structure.type_tag();
    let kind: StructureType = tag.parse()?;
    let arena = structure.arena();
    let mut b = Builder::new(arena, kind);
    match structure.layout() {
        Layout::Grid { extents } => b.scan_grid(extents)?,
        Layout::Graph => b.walk_graph(structure.entry_points())?,
    }
    let doc = b.finish();
    debug!(
        structure = tag,
        nodes = doc.nodes.len(),
        links = doc.links.len(),
        "built representation"
    );
    Ok(doc)
}
