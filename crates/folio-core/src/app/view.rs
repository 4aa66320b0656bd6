impl<IN, SF> SiteApp<IN, SF>
where
    IN: InputProvider,
    SF: ScrollSurface,
{
    pub fn new(
        input: IN,
        surface: SF,
        catalog: ProjectCatalog,
        config: SiteConfig,
        width_px: u32,
    ) -> Self {
        let config = config.sanitized();
        let responsive = classify(width_px);
        info!(
            "app: start width={} size={} wide={}",
            width_px,
            responsive.size.as_str(),
            responsive.is_wide_layout
        );

        Self {
            input,
            surface,
            catalog,
            page: Page::Home,
            nav: Watch::new(NavigationState::initialize(SectionRegistry::home(), None)),
            responsive: Watch::new(responsive),
            resize: ResizeDebouncer::new(config.resize_debounce_ms),
            scroll: ScrollCoordinator::new(config.transition_ms, config.header_offset_px),
            gestures: GestureDispatcher::new(&config),
            config,
            pending_layout: true,
            pending_redraw: true,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.run_deferred(now_ms);

        if self.transition_in_progress(now_ms) {
            return TickResult::RenderRequested;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(SiteView<'_>),
    {
        let nav = self.nav.get();
        let responsive = self.responsive.get();

        let links: Vec<NavLinkView, MAX_SECTIONS> = nav
            .registry()
            .sections()
            .map(|section| NavLinkView {
                section_id: section.id,
                active: section.index == nav.current_index(),
            })
            .collect();

        let (page, active_link) = match self.page {
            Page::Home => (PageView::Home, nav.current_id()),
            Page::Project { id } => match self.catalog.by_id(id) {
                Some(project) => (
                    PageView::Project {
                        project,
                        previous: self.catalog.previous(id),
                        next: self.catalog.next(id),
                    },
                    CASES_LINK,
                ),
                None => (PageView::Home, CASES_LINK),
            },
        };

        let mut label_buf = [0u8; PROGRESS_LABEL_BYTES];
        let progress_label = section_progress_label(
            nav.current_index().saturating_add(1),
            nav.len(),
            &mut label_buf,
        );

        f(SiteView {
            page,
            sections: &links,
            active_link,
            current_index: nav.current_index(),
            section_total: nav.len(),
            progress_label,
            arrows: ArrowsView {
                visible: responsive.is_wide_layout,
                prev_enabled: nav.can_prev(),
                next_enabled: nav.can_next(),
            },
            size: responsive.size,
            strategy: responsive.strategy(),
            transition: self
                .scroll
                .transition()
                .and_then(|transition| transition.frame(now_ms)),
        });
    }

    pub fn navigation(&self) -> &NavigationState {
        self.nav.get()
    }

    pub fn responsive(&self) -> &ResponsiveState {
        self.responsive.get()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &SF {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SF {
        &mut self.surface
    }

    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.scroll.is_transitioning(now_ms)
    }

    pub fn subscribe_navigation(&self) -> Subscriber {
        self.nav.subscribe()
    }

    pub fn navigation_changed(&self, subscriber: &mut Subscriber) -> Option<&NavigationState> {
        self.nav.changed(subscriber)
    }

    pub fn subscribe_responsive(&self) -> Subscriber {
        self.responsive.subscribe()
    }

    pub fn responsive_changed(&self, subscriber: &mut Subscriber) -> Option<&ResponsiveState> {
        self.responsive.changed(subscriber)
    }

    fn transition_in_progress(&self, now_ms: u64) -> bool {
        self.scroll
            .transition()
            .and_then(|transition| transition.frame(now_ms))
            .is_some()
    }
}
