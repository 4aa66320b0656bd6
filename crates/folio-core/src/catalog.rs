//! Case-study project catalog with circular traversal.
//!
//! Traversal runs over the *active* projects sorted by `order`; ties keep the
//! definition order. Unknown ids never fail: `next` falls back to the first
//! active project and `previous` to the last one.

use core::{cmp::Reverse, fmt};

use heapless::Vec;
use log::debug;

use crate::text_policy::contains_ignore_case;

pub const MAX_PROJECTS: usize = 16;
pub const MAX_TAGS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tag {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub context: &'static str,
    pub challenge: &'static str,
    pub methodology: &'static str,
    pub research: &'static str,
    pub solution_description: &'static str,
    pub features: &'static [Feature],
    pub key_impact: &'static str,
    pub metrics: &'static [Metric],
    pub learnings: &'static str,
    pub next_steps: &'static str,
}

impl CaseStudy {
    pub const EMPTY: Self = Self {
        title: "",
        subtitle: "",
        context: "",
        challenge: "",
        methodology: "",
        research: "",
        solution_description: "",
        features: &[],
        key_impact: "",
        metrics: &[],
        learnings: "",
        next_steps: "",
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tags: &'static [Tag],
    pub link: &'static str,
    pub case_study: CaseStudy,
    pub order: u16,
    pub is_active: bool,
    pub updated_at_ms: Option<u64>,
}

impl ProjectRecord {
    /// Minimal active record; content fields left blank.
    pub const fn new(id: &'static str, title: &'static str, order: u16) -> Self {
        Self {
            id,
            title,
            description: "",
            icon: "",
            tags: &[],
            link: "",
            case_study: CaseStudy::EMPTY,
            order,
            is_active: true,
            updated_at_ms: None,
        }
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn with_tags(mut self, tags: &'static [Tag]) -> Self {
        self.tags = tags;
        self
    }

    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub const fn with_case_study(mut self, case_study: CaseStudy) -> Self {
        self.case_study = case_study;
        self
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.title, query)
            || contains_ignore_case(self.description, query)
            || self
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag.label, query))
    }
}

/// Partial update applied by [`ProjectCatalog::update`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ProjectUpdate {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub tags: Option<&'static [Tag]>,
    pub order: Option<u16>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TagCount {
    pub id: &'static str,
    pub label: &'static str,
    pub count: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    Full,
    DuplicateId(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "catalog holds at most {MAX_PROJECTS} projects"),
            Self::DuplicateId(id) => write!(f, "project id {id:?} already exists"),
        }
    }
}

pub type ProjectList<'a> = Vec<&'a ProjectRecord, MAX_PROJECTS>;

#[derive(Clone, Debug, Default)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord, MAX_PROJECTS>,
}

impl ProjectCatalog {
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
        }
    }

    pub fn from_records(records: &[ProjectRecord]) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for record in records {
            catalog.add(*record)?;
        }
        Ok(catalog)
    }

    /// Every project, inactive ones included, in definition order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn active_sorted(&self) -> ProjectList<'_> {
        let mut ranked: Vec<(u16, usize, &ProjectRecord), MAX_PROJECTS> = Vec::new();
        for (position, project) in self.projects.iter().enumerate() {
            if project.is_active {
                let _ = ranked.push((project.order, position, project));
            }
        }
        // Position as secondary key keeps equal orders in definition order.
        ranked.sort_unstable_by_key(|(order, position, _)| (*order, *position));

        ranked.into_iter().map(|(_, _, project)| project).collect()
    }

    pub fn next(&self, current_id: &str) -> Option<&ProjectRecord> {
        let active = self.active_sorted();
        let Some(index) = active.iter().position(|project| project.id == current_id) else {
            debug!("catalog: next of unknown id={:?}, using first", current_id);
            return active.first().copied();
        };
        active.get((index + 1) % active.len()).copied()
    }

    pub fn previous(&self, current_id: &str) -> Option<&ProjectRecord> {
        let active = self.active_sorted();
        let Some(index) = active.iter().position(|project| project.id == current_id) else {
            debug!("catalog: previous of unknown id={:?}, using last", current_id);
            return active.last().copied();
        };
        let previous = if index == 0 { active.len() - 1 } else { index - 1 };
        active.get(previous).copied()
    }

    /// Position among the active, sorted projects.
    pub fn index_of(&self, id: &str) -> Option<u16> {
        self.active_sorted()
            .iter()
            .position(|project| project.id == id)
            .map(|index| index as u16)
    }

    pub fn is_first(&self, id: &str) -> bool {
        self.index_of(id) == Some(0)
    }

    pub fn is_last(&self, id: &str) -> bool {
        let total = self.active_sorted().len() as u16;
        self.index_of(id).is_some_and(|index| index + 1 == total)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.projects.iter().any(|project| project.id == id)
    }

    pub fn by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn by_tag(&self, tag_id: &str) -> ProjectList<'_> {
        self.projects
            .iter()
            .filter(|project| project.is_active && project.tags.iter().any(|tag| tag.id == tag_id))
            .collect()
    }

    /// Unique tags over active projects, most used first.
    pub fn tag_summary(&self) -> Vec<TagCount, MAX_TAGS> {
        let mut summary: Vec<TagCount, MAX_TAGS> = Vec::new();
        for project in self.projects.iter().filter(|project| project.is_active) {
            for tag in project.tags {
                if let Some(entry) = summary.iter_mut().find(|entry| entry.id == tag.id) {
                    entry.count = entry.count.saturating_add(1);
                } else if summary
                    .push(TagCount {
                        id: tag.id,
                        label: tag.label,
                        count: 1,
                    })
                    .is_err()
                {
                    debug!("catalog: tag summary full, dropping tag={}", tag.id);
                }
            }
        }

        let mut ranked: Vec<(usize, TagCount), MAX_TAGS> =
            summary.iter().copied().enumerate().collect();
        ranked.sort_unstable_by_key(|(first_seen, entry)| (Reverse(entry.count), *first_seen));
        ranked.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Blank queries return every active project in traversal order.
    pub fn search(&self, query: &str) -> ProjectList<'_> {
        if query.trim().is_empty() {
            return self.active_sorted();
        }

        self.projects
            .iter()
            .filter(|project| project.is_active && project.matches(query))
            .collect()
    }

    pub fn add(&mut self, record: ProjectRecord) -> Result<(), CatalogError> {
        if self.exists(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        self.projects.push(record).map_err(|_| CatalogError::Full)
    }

    /// Returns `false` when no project has that id.
    pub fn update(&mut self, id: &str, update: ProjectUpdate, now_ms: u64) -> bool {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            return false;
        };

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(tags) = update.tags {
            project.tags = tags;
        }
        if let Some(order) = update.order {
            project.order = order;
        }
        if let Some(is_active) = update.is_active {
            project.is_active = is_active;
        }
        project.updated_at_ms = Some(now_ms);
        true
    }

    /// Soft delete: the project stays addressable but leaves traversal.
    pub fn deactivate(&mut self, id: &str, now_ms: u64) -> bool {
        self.update(
            id,
            ProjectUpdate {
                is_active: Some(false),
                ..ProjectUpdate::default()
            },
            now_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UX: Tag = Tag {
        id: "ux",
        label: "UX Research",
    };
    const FINTECH: Tag = Tag {
        id: "fintech",
        label: "Fintech",
    };

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::from_records(&[
            ProjectRecord::new("p2", "Banca movil", 3).with_tags(&[FINTECH, UX]),
            ProjectRecord::new("p0", "Onboarding", 1)
                .with_description("Rediseño del registro")
                .with_tags(&[UX]),
            ProjectRecord::new("hidden", "Borrador", 0).with_active(false),
            ProjectRecord::new("p1", "Panel interno", 2),
        ])
        .unwrap()
    }

    fn ids(list: &ProjectList<'_>) -> std::vec::Vec<&'static str> {
        list.iter().map(|project| project.id).collect()
    }

    #[test]
    fn active_projects_sorted_by_order() {
        assert_eq!(ids(&catalog().active_sorted()), ["p0", "p1", "p2"]);
    }

    #[test]
    fn equal_orders_keep_definition_order() {
        let catalog = ProjectCatalog::from_records(&[
            ProjectRecord::new("b", "B", 1),
            ProjectRecord::new("a", "A", 1),
            ProjectRecord::new("c", "C", 0),
        ])
        .unwrap();
        assert_eq!(ids(&catalog.active_sorted()), ["c", "b", "a"]);
    }

    #[test]
    fn traversal_wraps_in_both_directions() {
        let catalog = catalog();
        assert_eq!(catalog.next("p0").map(|p| p.id), Some("p1"));
        assert_eq!(catalog.next("p2").map(|p| p.id), Some("p0"));
        assert_eq!(catalog.previous("p0").map(|p| p.id), Some("p2"));
        assert_eq!(catalog.previous("p1").map(|p| p.id), Some("p0"));
    }

    #[test]
    fn unknown_ids_fall_back_asymmetrically() {
        let catalog = catalog();
        assert_eq!(catalog.next("unknown-id").map(|p| p.id), Some("p0"));
        assert_eq!(catalog.previous("unknown-id").map(|p| p.id), Some("p2"));
        // Inactive projects are not part of traversal either.
        assert_eq!(catalog.next("hidden").map(|p| p.id), Some("p0"));
    }

    #[test]
    fn empty_catalog_has_no_neighbours() {
        let catalog = ProjectCatalog::new();
        assert_eq!(catalog.next("p0"), None);
        assert_eq!(catalog.previous("p0"), None);
    }

    #[test]
    fn lookups_never_fail() {
        let catalog = catalog();
        assert!(catalog.exists("hidden"));
        assert!(!catalog.exists("nope"));
        assert_eq!(catalog.by_id("p1").map(|p| p.title), Some("Panel interno"));
        assert_eq!(catalog.by_id("nope"), None);
        assert_eq!(catalog.index_of("p2"), Some(2));
        assert!(catalog.is_first("p0"));
        assert!(catalog.is_last("p2"));
        assert!(!catalog.is_last("nope"));
    }

    #[test]
    fn tags_and_search() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.by_tag("ux")), ["p2", "p0"]);

        let summary = catalog.tag_summary();
        assert_eq!(summary[0].id, "ux");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[1].id, "fintech");

        assert_eq!(ids(&catalog.search("REGISTRO")), ["p0"]);
        assert_eq!(ids(&catalog.search("research")), ["p2", "p0"]);
        assert_eq!(ids(&catalog.search("  ")), ["p0", "p1", "p2"]);
        assert!(catalog.search("borrador").is_empty());
    }

    #[test]
    fn crud_updates_and_soft_deletes() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.add(ProjectRecord::new("p0", "dup", 9)),
            Err(CatalogError::DuplicateId("p0"))
        );
        catalog.add(ProjectRecord::new("p3", "Nuevo", 0)).unwrap();
        assert_eq!(ids(&catalog.active_sorted()), ["p3", "p0", "p1", "p2"]);

        assert!(catalog.update(
            "p3",
            ProjectUpdate {
                order: Some(10),
                ..ProjectUpdate::default()
            },
            5_000,
        ));
        assert_eq!(catalog.by_id("p3").unwrap().updated_at_ms, Some(5_000));
        assert!(catalog.is_last("p3"));

        assert!(catalog.deactivate("p1", 6_000));
        assert!(catalog.exists("p1"));
        assert_eq!(ids(&catalog.active_sorted()), ["p0", "p2", "p3"]);
        assert!(!catalog.update("nope", ProjectUpdate::default(), 0));
    }

    #[test]
    fn add_reports_full_catalog() {
        const IDS: [&str; MAX_PROJECTS + 1] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
        ];
        let mut catalog = ProjectCatalog::new();
        for (order, id) in IDS.iter().copied().enumerate().take(MAX_PROJECTS) {
            catalog.add(ProjectRecord::new(id, id, order as u16)).unwrap();
        }
        assert_eq!(
            catalog.add(ProjectRecord::new(IDS[MAX_PROJECTS], "overflow", 0)),
            Err(CatalogError::Full)
        );
    }
}
