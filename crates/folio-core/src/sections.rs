//! Ordered section lists for each page context.

use core::fmt;

use heapless::Vec;

pub const MAX_SECTIONS: usize = 8;

pub const HOME_SECTIONS: [&str; 5] = ["inicio", "casos", "acerca", "contacto", "traduccion"];
pub const CASE_STUDY_SECTIONS: [&str; 4] = ["resumen", "proceso", "solucion", "resultados"];

/// Which page a registry belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryKind {
    Home,
    CaseStudy,
    Custom,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub index: u16,
}

/// Reasons a section list cannot back a navigation context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidRegistry {
    Empty,
    DuplicateId(&'static str),
    TooManySections { len: usize },
}

impl fmt::Display for InvalidRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("section registry is empty"),
            Self::DuplicateId(id) => write!(f, "section id {id:?} appears more than once"),
            Self::TooManySections { len } => {
                write!(f, "{len} sections exceed the limit of {MAX_SECTIONS}")
            }
        }
    }
}

/// Non-empty list of unique section ids. Never mutated after construction;
/// a context change builds a new registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SectionRegistry {
    kind: RegistryKind,
    ids: Vec<&'static str, MAX_SECTIONS>,
}

impl SectionRegistry {
    pub fn new(kind: RegistryKind, ids: &[&'static str]) -> Result<Self, InvalidRegistry> {
        if ids.is_empty() {
            return Err(InvalidRegistry::Empty);
        }
        if ids.len() > MAX_SECTIONS {
            return Err(InvalidRegistry::TooManySections { len: ids.len() });
        }

        let mut out = Vec::new();
        for &id in ids {
            if out.contains(&id) {
                return Err(InvalidRegistry::DuplicateId(id));
            }
            let _ = out.push(id);
        }

        Ok(Self { kind, ids: out })
    }

    pub fn home() -> Self {
        Self::from_static(RegistryKind::Home, &HOME_SECTIONS)
    }

    pub fn case_study() -> Self {
        Self::from_static(RegistryKind::CaseStudy, &CASE_STUDY_SECTIONS)
    }

    fn from_static(kind: RegistryKind, ids: &[&'static str]) -> Self {
        let mut out = Vec::new();
        for &id in ids.iter().take(MAX_SECTIONS) {
            let _ = out.push(id);
        }
        Self { kind, ids: out }
    }

    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn len(&self) -> u16 {
        self.ids.len() as u16
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id_at(&self, index: u16) -> Option<&'static str> {
        self.ids.get(index as usize).copied()
    }

    pub fn get(&self, index: u16) -> Option<Section> {
        self.id_at(index).map(|id| Section { id, index })
    }

    pub fn index_of(&self, id: &str) -> Option<u16> {
        self.ids
            .iter()
            .position(|candidate| *candidate == id)
            .map(|index| index as u16)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.ids.iter().enumerate().map(|(index, id)| Section {
            id: *id,
            index: index as u16,
        })
    }

    pub fn last_index(&self) -> u16 {
        self.len().saturating_sub(1)
    }
}
