//! Dirty-gated composition of the visible window.

use ctui_core::geometry::Rect;
#[cfg(feature = "tracing")]
use web_time::Instant;

use super::{ItemRenderer, ListBox};
use crate::Widget;
use crate::block::Block;

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// Redraw the internal buffer if anything visible changed.
    /// Returns whether a pass ran.
    pub fn compose(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.compose_forced();
        true
    }

    /// Redraw the internal buffer unconditionally.
    pub fn compose_forced(&mut self) {
        #[cfg(feature = "tracing")]
        let compose_start = Instant::now();
        #[cfg(feature = "tracing")]
        let compose_span = tracing::debug_span!(
            "list_box.compose",
            containers = self.containers.len(),
            visible_rows = tracing::field::Empty,
            scroll_offset = self.scroll_offset(),
            drawn_rows = tracing::field::Empty,
            compose_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _compose_guard = compose_span.enter();

        let theme = self.theme();
        self.buffer.clear();

        let (rows, area_x, row_width) = if self.config.hide_border {
            let style = theme.border.style;
            self.buffer
                .fill(self.buffer.area(), style.cell(theme.border.fill));
            (self.height, 0, self.width)
        } else {
            Block::bordered()
                .border_type(self.config.border_type)
                .border_style(theme.border.style)
                .fill(theme.border.fill)
                .render(self.buffer.area(), &mut self.buffer);
            (
                self.height.saturating_sub(2),
                1,
                self.width.saturating_sub(2),
            )
        };
        let first_row = area_x;

        let offset = if self.scrollbar.is_visible() {
            self.scroll_offset()
        } else {
            0
        };
        let window = self
            .containers
            .iter_mut()
            .skip(offset)
            .take(usize::from(rows));
        for (y, container) in (first_row..).zip(window) {
            let area = Rect::new(area_x, y, row_width, 1);
            container.draw(&self.renderer, &mut self.buffer, area);
        }

        if self.scrollbar.is_visible() {
            let location = self.scrollbar_location();
            let cells = self.scrollbar.compose();
            if let (Ok(x), Ok(y)) = (u16::try_from(location.x), u16::try_from(location.y)) {
                let src = Rect::new(0, 0, cells.width(), cells.height());
                self.buffer.copy_from(cells, src, x, y);
            }
        }

        self.dirty = false;

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = compose_start.elapsed().as_micros() as u64;
            compose_span.record("visible_rows", rows);
            let drawn_rows = self
                .containers
                .len()
                .saturating_sub(offset)
                .min(usize::from(rows));
            compose_span.record("drawn_rows", drawn_rows);
            compose_span.record("compose_duration_us", elapsed_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ListBox, ListBoxConfig, TextRenderer};
    use crate::borders::BorderType;
    use ctui_core::geometry::Point;
    use ctui_style::{ListBoxTheme, PackedRgba};

    fn list(width: u16, height: u16, values: &[&str]) -> ListBox<String> {
        let mut list = ListBox::new(width, height);
        list.items_mut()
            .extend(values.iter().map(|v| (*v).to_string()));
        list
    }

    fn screen(list: &ListBox<String>) -> Vec<String> {
        (0..list.height()).map(|y| list.buffer().row_text(y)).collect()
    }

    #[test]
    fn composes_only_when_dirty() {
        let mut list = list(8, 4, &["a"]);
        assert!(list.is_dirty());
        assert!(list.compose());
        assert!(!list.is_dirty());
        assert!(!list.compose());
        list.compose_forced();
        assert!(!list.is_dirty());
    }

    #[test]
    fn bordered_layout() {
        let mut list = list(8, 4, &["ab", "cd"]);
        list.compose();
        assert_eq!(
            screen(&list),
            ["┌──────┐", "│ab    │", "│cd    │", "└──────┘"]
        );
    }

    #[test]
    fn borderless_layout_uses_every_row() {
        let mut list = list(4, 2, &["ab", "cd"]);
        list.set_hide_border(true);
        list.compose();
        assert_eq!(screen(&list), ["ab  ", "cd  "]);
    }

    #[test]
    fn scrolled_window_and_scrollbar_overlay() {
        let mut list = list(6, 5, &["a", "b", "c", "d", "e"]);
        list.set_scroll_offset(2);
        list.compose();
        let rows = screen(&list);
        assert_eq!(
            rows,
            ["┌────▲", "│c   ░", "│d   ░", "│e   █", "└────▼"]
        );
    }

    #[test]
    fn selected_row_draws_markers() {
        let mut list = list(7, 4, &["ab", "cd"]);
        list.select_index(1).unwrap();
        list.compose();
        assert_eq!(list.buffer().row_text(2), "│►d  ◄│");
        let bg = list.buffer().get(2, 2).map(|c| c.bg);
        assert_eq!(bg, list.theme().item.selected.and_then(|s| s.bg));
    }

    #[test]
    fn border_type_and_theme_flow_through() {
        let mut list = list(6, 3, &["x"])
            .with_config(ListBoxConfig::default().border_type(BorderType::Double))
            .with_theme(ListBoxTheme::contrast());
        list.compose();
        assert_eq!(list.buffer().row_text(0), "╔════╗");
        assert_eq!(list.buffer().get(0, 0).map(|c| c.bg), Some(PackedRgba::BLACK));
    }

    #[test]
    fn scrollbar_off_screen_is_skipped() {
        let mut list = list(6, 4, &["a", "b", "c", "d"])
            .with_config(ListBoxConfig::default().scrollbar_offset(Point::new(0, -2)));
        list.compose();
        assert_eq!(list.buffer().row_text(0), "┌────┐");
    }

    #[test]
    fn containers_are_clean_after_compose() {
        let mut list = list(8, 4, &["a", "b"]);
        list.compose();
        assert!(list.containers().iter().all(|c| !c.is_dirty()));
    }

    #[test]
    fn custom_renderer_gets_row_areas() {
        let mut list: ListBox<String, TextRenderer> =
            ListBox::with_renderer(TextRenderer::new().without_markers(), 5, 3);
        list.items_mut().push("abcdefg".into());
        list.select_index(0).unwrap();
        list.compose();
        assert_eq!(list.buffer().row_text(1), "│abc│");
    }

    #[cfg(feature = "tracing")]
    mod tracing_capture {
        use super::list;
        use std::sync::{Arc, Mutex};
        use tracing::Subscriber;
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        #[derive(Debug, Default)]
        struct ComposeTraceState {
            compose_seen: usize,
            has_containers_field: bool,
            has_scroll_offset_field: bool,
            duration_recorded: bool,
            reconcile_events: usize,
            selection_events: usize,
        }

        struct ComposeTraceCapture {
            state: Arc<Mutex<ComposeTraceState>>,
        }

        struct NameVisitor<'a> {
            target: &'a str,
            message: Option<String>,
            seen: bool,
        }

        impl tracing::field::Visit for NameVisitor<'_> {
            fn record_u64(&mut self, field: &tracing::field::Field, _value: u64) {
                if field.name() == self.target {
                    self.seen = true;
                }
            }

            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.message = Some(value.to_owned());
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = Some(format!("{value:?}").trim_matches('"').to_owned());
                } else if field.name() == self.target {
                    self.seen = true;
                }
            }
        }

        impl<S> Layer<S> for ComposeTraceCapture
        where
            S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
        {
            fn on_new_span(
                &self,
                attrs: &tracing::span::Attributes<'_>,
                _id: &tracing::Id,
                _ctx: Context<'_, S>,
            ) {
                if attrs.metadata().name() != "list_box.compose" {
                    return;
                }
                let fields = attrs.metadata().fields();
                let mut state = self.state.lock().expect("compose trace state lock");
                state.compose_seen += 1;
                state.has_containers_field |= fields.field("containers").is_some();
                state.has_scroll_offset_field |= fields.field("scroll_offset").is_some();
            }

            fn on_record(
                &self,
                id: &tracing::Id,
                values: &tracing::span::Record<'_>,
                ctx: Context<'_, S>,
            ) {
                let Some(span) = ctx.span(id) else {
                    return;
                };
                if span.metadata().name() != "list_box.compose" {
                    return;
                }
                let mut visitor = NameVisitor {
                    target: "compose_duration_us",
                    message: None,
                    seen: false,
                };
                values.record(&mut visitor);
                if visitor.seen {
                    self.state
                        .lock()
                        .expect("compose trace state lock")
                        .duration_recorded = true;
                }
            }

            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut visitor = NameVisitor {
                    target: "",
                    message: None,
                    seen: false,
                };
                event.record(&mut visitor);
                let mut state = self.state.lock().expect("compose trace state lock");
                match visitor.message.as_deref() {
                    Some("list_box.reconcile") => state.reconcile_events += 1,
                    Some("list_box.selection") => state.selection_events += 1,
                    _ => {}
                }
            }
        }

        #[test]
        fn compose_span_and_list_events_are_emitted() {
            let trace_state = Arc::new(Mutex::new(ComposeTraceState::default()));
            let subscriber = tracing_subscriber::registry().with(ComposeTraceCapture {
                state: Arc::clone(&trace_state),
            });
            let _guard = tracing::subscriber::set_default(subscriber);
            tracing::callsite::rebuild_interest_cache();

            let mut list = list(8, 4, &["a", "b", "c"]);
            list.select_index(1).unwrap();
            assert!(list.compose());
            assert!(!list.compose());

            tracing::callsite::rebuild_interest_cache();
            let snapshot = trace_state.lock().expect("compose trace state lock");
            assert_eq!(snapshot.compose_seen, 1, "compose span only on dirty passes");
            assert!(snapshot.has_containers_field);
            assert!(snapshot.has_scroll_offset_field);
            assert!(
                snapshot.duration_recorded,
                "list_box.compose did not record compose_duration_us"
            );
            assert!(snapshot.reconcile_events >= 1, "expected list_box.reconcile");
            assert!(snapshot.selection_events >= 1, "expected list_box.selection");
        }
    }
}
