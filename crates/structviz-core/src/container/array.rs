// 1–3 dimensional array of elements over one contiguous arena.
// Row-major: offset = x + y*dim_x + z*dim_x*dim_y.
use serde::Deserialize;

use super::{Layout, Structure, StructureType};
use crate::element::{Arena, Element, ElementId};
use crate::error::{Result, VizError};
use crate::visual::LinkVisual;

/// Per-axis extents; the number of dimensions is `extents.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArrayConfig {
    pub extents: Vec<i64>,
}

impl ArrayConfig {
    pub fn new(extents: impl Into<Vec<i64>>) -> Self {
        Self {
            extents: extents.into(),
        }
    }

    /// Checks dimensionality and extents, returning `(extents, size)`.
    pub fn validate(&self) -> Result<(Vec<usize>, usize)> {
        let n = self.extents.len();
        if !(1..=3).contains(&n) {
            return Err(VizError::InvalidDimension(format!(
                "{} dimensions requested, expected 1 to 3",
                n
            )));
        }
        let mut extents = Vec::with_capacity(n);
        let mut size: usize = 1;
        for (axis, &e) in self.extents.iter().enumerate() {
            let e = usize::try_from(e).map_err(|_| {
                VizError::InvalidDimension(format!("negative extent {} on axis {}", e, axis))
            })?;
            size = size
                .checked_mul(e)
                .ok_or_else(|| VizError::InvalidDimension("array size overflows".into()))?;
            extents.push(e);
        }
        Ok((extents, size))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Array<P = ()> {
    extents: Vec<usize>,
    arena: Arena<P>,
}

impl<P: Default> Array<P> {
    /// Allocates every cell eagerly with a default element.
    pub fn new(config: &ArrayConfig) -> Result<Self> {
        Self::from_fn(config, |_| Element::default())
    }
}

impl<P> Array<P> {
    /// Builds each cell from its coordinates, in offset order.
    pub fn from_fn(
        config: &ArrayConfig,
        mut make: impl FnMut(&[usize]) -> Element<P>,
    ) -> Result<Self> {
        let (extents, size) = config.validate()?;
        let mut arr = Self {
            extents,
            arena: Arena::new(),
        };
        for offset in 0..size {
            let coords = arr.coords_of(offset)?;
            arr.arena.insert(make(&coords));
        }
        Ok(arr)
    }

    pub fn dims(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn offset_of(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.extents.len() {
            return Err(VizError::InvalidDimension(format!(
                "{} coordinates given for a {}D array",
                coords.len(),
                self.extents.len()
            )));
        }
        let mut offset = 0;
        let mut stride = 1;
        for (axis, (&c, &extent)) in coords.iter().zip(&self.extents).enumerate() {
            if c >= extent {
                return Err(VizError::IndexOutOfRange {
                    axis,
                    index: c,
                    extent,
                });
            }
            offset += c * stride;
            stride *= extent;
        }
        Ok(offset)
    }

    pub fn coords_of(&self, offset: usize) -> Result<Vec<usize>> {
        let size: usize = self.extents.iter().product();
        if offset >= size {
            return Err(VizError::IndexOutOfRange {
                axis: 0,
                index: offset,
                extent: size,
            });
        }
        let mut rest = offset;
        let mut coords = Vec::with_capacity(self.extents.len());
        for &extent in &self.extents {
            coords.push(rest % extent);
            rest /= extent;
        }
        Ok(coords)
    }

    pub fn id_at(&self, coords: &[usize]) -> Result<ElementId> {
        self.offset_of(coords).map(ElementId)
    }

    pub fn get(&self, coords: &[usize]) -> Result<&Element<P>> {
        let id = self.id_at(coords)?;
        self.arena.try_get(id)
    }

    pub fn get_mut(&mut self, coords: &[usize]) -> Result<&mut Element<P>> {
        let id = self.id_at(coords)?;
        self.arena.try_get_mut(id)
    }

    /// Replaces the element at `coords`, returning the previous one.
    pub fn set(&mut self, coords: &[usize], element: Element<P>) -> Result<Element<P>> {
        let id = self.id_at(coords)?;
        self.arena.replace(id, element)
    }

    /// Wires an explicit neighbor link between two cells.
    pub fn connect(
        &mut self,
        from: &[usize],
        role: &str,
        to: &[usize],
        visual: Option<LinkVisual>,
    ) -> Result<()> {
        let from = self.id_at(from)?;
        let to = self.id_at(to)?;
        self.arena.connect(from, role, to, visual)
    }

    /// Elements in offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Element<P>> + '_ {
        self.arena.iter().map(|(_, e)| e)
    }
}

impl<P> Structure for Array<P> {
    type Payload = P;

    fn type_tag(&self) -> &str {
        StructureType::Array.as_str()
    }

    fn arena(&self) -> &Arena<P> {
        &self.arena
    }

    fn entry_points(&self) -> Vec<ElementId> {
        self.arena.ids().collect()
    }

    fn layout(&self) -> Layout {
        Layout::Grid {
            extents: self.extents.clone(),
        }
    }
}
