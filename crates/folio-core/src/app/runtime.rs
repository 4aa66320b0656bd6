impl<IN, SF> SiteApp<IN, SF>
where
    IN: InputProvider,
    SF: ScrollSurface,
{
    fn run_deferred(&mut self, now_ms: u64) {
        if let Some(responsive) = self.resize.poll(now_ms) {
            self.apply_responsive(responsive);
        }

        if self.pending_layout {
            self.pending_layout = false;
            self.scroll.apply_layout(
                &mut self.surface,
                self.nav.get(),
                self.responsive.get(),
                now_ms,
            );
            self.pending_redraw = true;
        }

        if self
            .scroll
            .tick(
                &mut self.surface,
                self.nav.get(),
                self.responsive.get(),
                now_ms,
            )
            .is_some()
        {
            self.pending_redraw = true;
        }

        if let Some(intent) =
            self.gestures
                .tick(self.nav.get(), self.responsive.get(), &self.surface, now_ms)
        {
            self.apply_intent(intent, now_ms);
        }
    }

    fn apply_responsive(&mut self, responsive: ResponsiveState) {
        let previous = *self.responsive.get();
        if previous == responsive {
            return;
        }

        self.responsive.publish(responsive);
        self.pending_redraw = true;

        if previous.strategy() != responsive.strategy() {
            info!(
                "layout: width={} size={} strategy={:?}",
                responsive.width_px,
                responsive.size.as_str(),
                responsive.strategy()
            );
            self.gestures.reset();
            self.pending_layout = true;
        } else {
            debug!(
                "layout: width={} size={}",
                responsive.width_px,
                responsive.size.as_str()
            );
        }
    }
}
