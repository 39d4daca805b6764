use crate::browse::carousel::CarouselState;
use crate::browse::category::{CategoryBrowseState, CategoryOutcome};
use crate::catalog::ProductRecord;
use crate::prelude::StoreResult;
use crate::surface::RenderSurface;
use crate::telemetry::{LogManager, Metrics, MetricsRecorder};

/// What the pending catalog read will feed once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchIntent {
    Featured,
    Category(String),
}

/// Handle for one in-flight catalog read.
///
/// Only the ticket of the most recent read is honoured; completions carrying
/// an older generation are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    Stale,
}

/// View currently owned by the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BrowseView {
    #[default]
    Idle,
    Carousel(CarouselState),
    Category(CategoryBrowseState),
    EmptyCategory { category: String, message: String },
}

/// Command handlers for the storefront page.
///
/// Each handler mutates the owned view; [`Storefront::render`] projects the
/// result onto a surface. Catalog reads are split into `begin_*` (hands out a
/// ticket) and [`Storefront::complete_fetch`] so the caller can run the read
/// on whatever executor it has.
pub struct Storefront {
    view: BrowseView,
    generation: u64,
    pending: Option<FetchIntent>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            view: BrowseView::Idle,
            generation: 0,
            pending: None,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn view(&self) -> &BrowseView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics.snapshot()
    }

    /// Page-load read that feeds the featured carousel.
    pub fn begin_catalog_load(&mut self) -> FetchTicket {
        self.issue(FetchIntent::Featured)
    }

    /// Category activation: a fresh catalog read filtered by `label`.
    pub fn on_category_select(&mut self, label: &str) -> FetchTicket {
        self.issue(FetchIntent::Category(label.trim().to_string()))
    }

    pub fn on_next(&mut self) -> bool {
        match &mut self.view {
            BrowseView::Carousel(carousel) => {
                carousel.next();
                true
            }
            _ => false,
        }
    }

    pub fn on_previous(&mut self) -> bool {
        match &mut self.view {
            BrowseView::Carousel(carousel) => {
                carousel.previous();
                true
            }
            _ => false,
        }
    }

    /// Re-renders page `page` of the current category view.
    pub fn on_page_select(&mut self, page: usize) -> bool {
        match &mut self.view {
            BrowseView::Category(state) => {
                state.select_page(page);
                true
            }
            _ => false,
        }
    }

    /// Applies a finished catalog read.
    ///
    /// Failures are logged and leave the current view untouched, as do
    /// completions superseded by a newer read.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: StoreResult<Vec<ProductRecord>>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            self.metrics.record_stale();
            self.logger.trace(&format!(
                "discarding stale catalog read {} (latest {})",
                ticket.generation, self.generation
            ));
            return FetchOutcome::Stale;
        }

        let Some(intent) = self.pending.take() else {
            self.metrics.record_stale();
            return FetchOutcome::Stale;
        };

        let catalog = match result {
            Ok(catalog) => catalog,
            Err(err) => {
                self.metrics.record_failure();
                self.logger.report(&err);
                return FetchOutcome::Failed;
            }
        };
        self.metrics.record_fetched();

        self.view = match intent {
            FetchIntent::Featured => {
                let carousel = CarouselState::from_catalog(&catalog);
                self.logger.record(&format!(
                    "carousel loaded with {} of {} products",
                    carousel.len(),
                    catalog.len()
                ));
                BrowseView::Carousel(carousel)
            }
            FetchIntent::Category(label) => match CategoryBrowseState::open(&catalog, &label) {
                CategoryOutcome::Empty { category, message } => {
                    self.logger
                        .record(&format!("category {category} matched no products"));
                    BrowseView::EmptyCategory { category, message }
                }
                CategoryOutcome::Browse(state) => {
                    self.logger.record(&format!(
                        "category {} matched {} products over {} pages",
                        state.category(),
                        state.all_filtered().len(),
                        state.total_pages()
                    ));
                    BrowseView::Category(state)
                }
            },
        };
        FetchOutcome::Applied
    }

    /// Projects the current view onto `surface`.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) {
        match &self.view {
            BrowseView::Idle => {}
            BrowseView::Carousel(carousel) => {
                surface.render_list(carousel.items());
                if !carousel.is_empty() {
                    surface.focus_item(carousel.current_index());
                }
            }
            BrowseView::Category(state) => {
                surface.render_list(state.current_page_items());
                surface.render_pager(state.total_pages(), state.page());
            }
            BrowseView::EmptyCategory { message, .. } => surface.render_empty(message),
        }
    }

    fn issue(&mut self, intent: FetchIntent) -> FetchTicket {
        self.generation += 1;
        self.pending = Some(intent);
        FetchTicket {
            generation: self.generation,
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::StoreError;
    use crate::surface::{SurfaceContent, SurfaceFrame};

    fn catalog() -> Vec<ProductRecord> {
        let mut products: Vec<ProductRecord> = (0..25)
            .map(|i| {
                ProductRecord::new(
                    format!("img/{i}.png"),
                    format!("gadget-{i}"),
                    "",
                    10.0 + i as f64,
                    Some("Gadgets".into()),
                )
            })
            .collect();
        products.push(ProductRecord::new("", "loose", "", 1.0, None));
        products
    }

    fn loaded_storefront() -> Storefront {
        let mut store = Storefront::new();
        let ticket = store.begin_catalog_load();
        assert_eq!(store.complete_fetch(ticket, Ok(catalog())), FetchOutcome::Applied);
        store
    }

    #[test]
    fn page_load_shows_first_carousel_item() {
        let store = loaded_storefront();
        let mut frame = SurfaceFrame::new();
        store.render(&mut frame);

        match &frame.content {
            SurfaceContent::List(items) => assert_eq!(items.len(), 10),
            other => panic!("unexpected content {other:?}"),
        }
        assert_eq!(frame.focused, Some(0));
        assert!(frame.pager.is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn carousel_commands_step_the_focus() {
        let mut store = loaded_storefront();
        assert!(store.on_previous());
        let mut frame = SurfaceFrame::new();
        store.render(&mut frame);
        assert_eq!(frame.focused, Some(9));

        assert!(store.on_next());
        assert!(store.on_next());
        store.render(&mut frame);
        assert_eq!(frame.focused, Some(1));
    }

    #[test]
    fn empty_catalog_carousel_renders_without_focus() {
        let mut store = Storefront::new();
        let ticket = store.begin_catalog_load();
        store.complete_fetch(ticket, Ok(Vec::new()));
        assert!(store.on_next());
        assert!(store.on_previous());

        let mut frame = SurfaceFrame::new();
        store.render(&mut frame);
        assert_eq!(frame.content, SurfaceContent::List(Vec::new()));
        assert_eq!(frame.focused, None);
    }

    #[test]
    fn category_select_replaces_carousel_with_paged_view() {
        let mut store = loaded_storefront();
        let ticket = store.on_category_select(" Gadgets ");
        assert!(store.is_loading());
        store.complete_fetch(ticket, Ok(catalog()));

        let mut frame = SurfaceFrame::new();
        store.render(&mut frame);
        assert_eq!(frame.visible_items().len(), 12);
        let pager = frame.pager.unwrap();
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pager.current, 1);

        assert!(!store.on_next());
        assert!(store.on_page_select(3));
        store.render(&mut frame);
        assert_eq!(frame.visible_items().len(), 1);
        assert_eq!(frame.visible_items()[0].name, "gadget-24");
    }

    #[test]
    fn unmatched_category_renders_message_and_no_pager() {
        let mut store = loaded_storefront();
        let ticket = store.on_category_select("Toys");
        store.complete_fetch(ticket, Ok(catalog()));

        let mut frame = SurfaceFrame::new();
        store.render(&mut frame);
        assert_eq!(
            frame.content,
            SurfaceContent::Empty("No products found in Toys category.".into())
        );
        assert!(frame.pager.is_none());
        assert!(!store.on_page_select(1));
    }

    #[test]
    fn failed_read_keeps_current_view() {
        let mut store = loaded_storefront();
        store.on_next();
        let before = store.view().clone();

        let ticket = store.on_category_select("Gadgets");
        let outcome =
            store.complete_fetch(ticket, Err(StoreError::Fetch("connection refused".into())));
        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(store.view(), &before);
        assert!(!store.is_loading());
        assert_eq!(store.metrics().failed, 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut store = loaded_storefront();
        let first = store.on_category_select("Toys");
        let second = store.on_category_select("Gadgets");

        assert_eq!(store.complete_fetch(second, Ok(catalog())), FetchOutcome::Applied);
        assert_eq!(store.complete_fetch(first, Ok(catalog())), FetchOutcome::Stale);

        match store.view() {
            BrowseView::Category(state) => assert_eq!(state.category(), "Gadgets"),
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(store.metrics().stale, 1);
    }

    #[test]
    fn duplicate_completion_of_latest_ticket_is_ignored() {
        let mut store = Storefront::new();
        let ticket = store.begin_catalog_load();
        store.complete_fetch(ticket, Ok(catalog()));
        assert_eq!(store.complete_fetch(ticket, Ok(Vec::new())), FetchOutcome::Stale);
        match store.view() {
            BrowseView::Carousel(carousel) => assert_eq!(carousel.len(), 10),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn idle_view_leaves_surface_untouched() {
        let store = Storefront::new();
        let mut frame = SurfaceFrame::new();
        frame.render_empty("previous content");
        store.render(&mut frame);
        assert_eq!(frame.content, SurfaceContent::Empty("previous content".into()));
    }
}
