use folio_core::{
    layout::ScrollStrategy,
    scroll::{ScrollSurface, SectionBounds},
    sections::{CASE_STUDY_SECTIONS, HOME_SECTIONS},
};
use log::info;

/// Stand-in for the rendered page: sections stacked at a fixed height.
pub(super) struct ConsoleSurface {
    section_height_px: i32,
    offset_vw: i32,
    scroll_y: i32,
    mode: Option<ScrollStrategy>,
}

#[derive(Debug)]
pub(super) struct MissingSection;

impl ConsoleSurface {
    pub(super) fn new(section_height_px: i32) -> Self {
        Self {
            section_height_px: section_height_px.max(1),
            offset_vw: 0,
            scroll_y: 0,
            mode: None,
        }
    }

    pub(super) fn offset_vw(&self) -> i32 {
        self.offset_vw
    }

    pub(super) fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn position(section_id: &str) -> Option<usize> {
        HOME_SECTIONS
            .iter()
            .position(|id| *id == section_id)
            .or_else(|| CASE_STUDY_SECTIONS.iter().position(|id| *id == section_id))
    }
}

impl ScrollSurface for ConsoleSurface {
    type Error = MissingSection;

    fn set_container_offset(
        &mut self,
        offset_vw: i32,
        animated: bool,
    ) -> Result<(), MissingSection> {
        info!(
            "surface: translateX({}vw) {}",
            offset_vw,
            if animated { "animated" } else { "instant" }
        );
        self.offset_vw = offset_vw;
        Ok(())
    }

    fn scroll_to_section(
        &mut self,
        section_id: &str,
        top_offset_px: u16,
        smooth: bool,
    ) -> Result<(), MissingSection> {
        let bounds = self.section_bounds(section_id).ok_or(MissingSection)?;
        self.scroll_y = (bounds.top_px - top_offset_px as i32).max(0);
        info!(
            "surface: scroll to #{} y={} {}",
            section_id,
            self.scroll_y,
            if smooth { "smooth" } else { "instant" }
        );
        Ok(())
    }

    fn set_layout_mode(&mut self, strategy: ScrollStrategy) -> Result<(), MissingSection> {
        if self.mode != Some(strategy) {
            info!("surface: layout mode {:?}", strategy);
        }
        self.mode = Some(strategy);
        if strategy == ScrollStrategy::VerticalNative {
            self.offset_vw = 0;
        }
        Ok(())
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let index = Self::position(section_id)?;
        Some(SectionBounds {
            top_px: index as i32 * self.section_height_px,
            height_px: self.section_height_px,
        })
    }
}
