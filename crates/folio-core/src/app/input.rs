impl<IN, SF> SiteApp<IN, SF>
where
    IN: InputProvider,
    SF: ScrollSurface,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.handle_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, skipping remaining events this tick");
                    break;
                }
            }
        }
    }

    /// Feed one raw event. Hosts that must decide on `preventDefault`
    /// synchronously call this directly instead of going through the provider.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> GestureOutcome {
        match event {
            InputEvent::Resize { width_px } => {
                self.resize.observe(width_px, now_ms);
                GestureOutcome::IGNORED
            }
            InputEvent::TransitionEnd => {
                self.scroll.finish_transition();
                self.pending_redraw = true;
                GestureOutcome::IGNORED
            }
            _ => {
                let transitioning = self.scroll.is_transitioning(now_ms);
                let outcome = self.gestures.dispatch(
                    event,
                    self.nav.get(),
                    self.responsive.get(),
                    &self.surface,
                    transitioning,
                    now_ms,
                );
                if let Some(intent) = outcome.intent {
                    self.apply_intent(intent, now_ms);
                }
                outcome
            }
        }
    }

    fn apply_intent(&mut self, intent: NavIntent, now_ms: u64) {
        let current = self.nav.get();
        let next = match intent {
            NavIntent::Next => current.next(),
            NavIntent::Previous => current.previous(),
            NavIntent::First => current.first(),
            NavIntent::Last => current.last(),
            NavIntent::JumpTo(index) => current.jump_to(index),
            NavIntent::Highlight(section_id) => {
                let highlighted = current.set_active(section_id);
                if highlighted != *current {
                    debug!("nav: highlight section={}", section_id);
                    self.nav.publish(highlighted);
                    self.pending_redraw = true;
                }
                return;
            }
        };

        self.commit(next, false, now_ms);
    }
}
