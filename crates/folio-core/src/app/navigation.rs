impl<IN, SF> SiteApp<IN, SF>
where
    IN: InputProvider,
    SF: ScrollSurface,
{
    /// Nav-link click. Unknown ids are ignored.
    pub fn navigate_to_section(&mut self, section_id: &str, now_ms: u64) -> bool {
        let current = self.nav.get();
        if !current.registry().contains(section_id) {
            debug!("nav: link to unknown section {:?} ignored", section_id);
            return false;
        }

        let next = current.set_active(section_id);
        // Clicking the active link still scrolls it back into view.
        self.commit(next, true, now_ms)
    }

    pub fn navigate_next(&mut self, now_ms: u64) -> bool {
        let next = self.nav.get().next();
        self.commit(next, false, now_ms)
    }

    pub fn navigate_previous(&mut self, now_ms: u64) -> bool {
        let previous = self.nav.get().previous();
        self.commit(previous, false, now_ms)
    }

    /// Enter the context addressed by `url`, e.g. `/project/ledger#proceso`.
    pub fn open_route(&mut self, url: &str, now_ms: u64) -> RouteOutcome {
        match parse_route(url) {
            Route::Home { fragment } => {
                self.enter_context(Page::Home, SectionRegistry::home(), fragment, now_ms);
                RouteOutcome::Home
            }
            Route::Project { id, fragment } => {
                let Some(id) = self.catalog.by_id(id).map(|project| project.id) else {
                    warn!("route: project {:?} not found, redirecting to {}", id, HOME_PATH);
                    self.enter_context(Page::Home, SectionRegistry::home(), None, now_ms);
                    return RouteOutcome::Redirected;
                };
                self.enter_context(
                    Page::Project { id },
                    SectionRegistry::case_study(),
                    fragment,
                    now_ms,
                );
                RouteOutcome::Project { id }
            }
            Route::NotFound => {
                warn!("route: {:?} not found, redirecting to {}", url, HOME_PATH);
                self.enter_context(Page::Home, SectionRegistry::home(), None, now_ms);
                RouteOutcome::Redirected
            }
        }
    }

    /// Circular move to the next active project. `None` outside a project page.
    pub fn next_project(&mut self, now_ms: u64) -> Option<&'static str> {
        let Page::Project { id } = self.page else {
            return None;
        };
        let next = self.catalog.next(id)?.id;
        self.enter_context(
            Page::Project { id: next },
            SectionRegistry::case_study(),
            None,
            now_ms,
        );
        Some(next)
    }

    pub fn previous_project(&mut self, now_ms: u64) -> Option<&'static str> {
        let Page::Project { id } = self.page else {
            return None;
        };
        let previous = self.catalog.previous(id)?.id;
        self.enter_context(
            Page::Project { id: previous },
            SectionRegistry::case_study(),
            None,
            now_ms,
        );
        Some(previous)
    }

    /// Swap the section set in place, keeping the current section if it survives.
    pub fn replace_registry(&mut self, registry: SectionRegistry, now_ms: u64) {
        let next = self.nav.get().replace_registry(registry);
        self.nav.publish(next);
        self.pending_redraw = true;
        self.scroll.apply(
            &mut self.surface,
            self.nav.get(),
            self.responsive.get(),
            false,
            now_ms,
        );
    }

    pub fn catalog_mut(&mut self) -> &mut ProjectCatalog {
        &mut self.catalog
    }

    fn commit(&mut self, next: NavigationState, always_scroll: bool, now_ms: u64) -> bool {
        let changed = next != *self.nav.get();
        if changed {
            debug!(
                "nav: {} -> {} ({}/{})",
                self.nav.get().current_id(),
                next.current_id(),
                next.current_index() + 1,
                next.len()
            );
            self.nav.publish(next);
            self.pending_redraw = true;
        } else if !always_scroll || self.responsive.get().is_wide_layout {
            return false;
        }

        self.scroll.apply(
            &mut self.surface,
            self.nav.get(),
            self.responsive.get(),
            true,
            now_ms,
        );
        changed
    }

    fn enter_context(
        &mut self,
        page: Page,
        registry: SectionRegistry,
        fragment: Option<&str>,
        now_ms: u64,
    ) {
        let nav = NavigationState::initialize(registry, fragment);
        info!("route: enter {:?} at section={}", page, nav.current_id());

        self.page = page;
        self.nav.publish(nav);
        self.gestures.reset();
        self.scroll.finish_transition();
        self.scroll.apply(
            &mut self.surface,
            self.nav.get(),
            self.responsive.get(),
            false,
            now_ms,
        );
        self.pending_redraw = true;
    }
}
