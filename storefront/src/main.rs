use catalog::{fetch_catalog, CatalogLocation, DEFAULT_CATALOG_URL, DEFAULT_CATEGORIES};
use clap::Parser;
use iced::{
    widget::{
        button, column, operation, row, scrollable, scrollable::RelativeOffset, text, Column,
        Container, Id, Row,
    },
    Alignment, Color, Element, Length, Task, Theme,
};
use std::path::PathBuf;
use storecore::catalog::distinct_categories;
use storecore::surface::SurfaceContent;
use storecore::telemetry::LogManager;
use storecore::wiring::{menu_color, report_uncaught, resolve_anchor, LoadingIndicator, Rgb};
use storecore::{
    BrowseView, FetchOutcome, FetchTicket, ProductRecord, StoreError, Storefront, SurfaceFrame,
};

mod catalog;

/// Page sections, in scroll order. Menu anchors point at these.
const SECTIONS: [&str; 3] = ["featured", "categories", "about"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Storefront catalog browser")]
struct Args {
    /// Catalog endpoint
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,
    /// Read the catalog from a local file instead of over HTTP
    #[arg(long)]
    catalog_file: Option<PathBuf>,
    /// Category trigger shown until a catalog read succeeds (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,
}

impl Args {
    fn into_settings(self) -> (CatalogLocation, Vec<String>) {
        let location = match self.catalog_file {
            Some(path) => CatalogLocation::File(path),
            None => CatalogLocation::Url(self.catalog_url),
        };
        let categories = if self.categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.categories
        };
        (location, categories)
    }
}

fn main() -> iced::Result {
    env_logger::init();
    install_panic_logger();
    let (location, categories) = Args::parse().into_settings();

    iced::application(
        move || StorefrontApp::boot(location.clone(), categories.clone()),
        StorefrontApp::update,
        StorefrontApp::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()
}

/// Uncaught errors go to the log before the default hook runs.
fn install_panic_logger() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        report_uncaught(&LogManager::with_target("storefront"), info.to_string());
        default_hook(info);
    }));
}

fn application_title(_: &StorefrontApp) -> String {
    "Storefront".into()
}

fn application_theme(_: &StorefrontApp) -> Theme {
    Theme::Dark
}

fn sections_id() -> Id {
    Id::new("storefront-sections")
}

struct StorefrontApp {
    location: CatalogLocation,
    store: Storefront,
    frame: SurfaceFrame,
    categories: Vec<String>,
    loading: LoadingIndicator,
    logger: LogManager,
}

#[derive(Debug, Clone)]
enum Message {
    CatalogFetched(FetchTicket, Result<Vec<ProductRecord>, String>),
    Next,
    Previous,
    CategorySelected(String),
    PageSelected(usize),
    AnchorActivated(String),
}

impl StorefrontApp {
    fn new(location: CatalogLocation, categories: Vec<String>) -> Self {
        StorefrontApp {
            location,
            store: Storefront::new(),
            frame: SurfaceFrame::new(),
            categories,
            loading: LoadingIndicator::new(),
            logger: LogManager::with_target("storefront"),
        }
    }

    fn boot(location: CatalogLocation, categories: Vec<String>) -> (Self, Task<Message>) {
        let mut state = StorefrontApp::new(location, categories);
        state
            .logger
            .record(&format!("reading catalog from {}", state.location.describe()));
        let ticket = state.store.begin_catalog_load();
        let task = state.read_catalog(ticket);
        (state, task)
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        let task = match message {
            Message::CatalogFetched(ticket, result) => {
                let labels = result.as_ref().ok().map(|catalog| distinct_categories(catalog));
                let outcome = state
                    .store
                    .complete_fetch(ticket, result.map_err(StoreError::Fetch));
                if outcome != FetchOutcome::Stale {
                    state.loading.set_loading(false);
                }
                // Configured triggers stay until a read offers its own labels.
                if let (FetchOutcome::Applied, Some(labels)) = (outcome, labels) {
                    if !labels.is_empty() {
                        state.categories = labels;
                    }
                }
                Task::none()
            }
            Message::Next => {
                state.store.on_next();
                Task::none()
            }
            Message::Previous => {
                state.store.on_previous();
                Task::none()
            }
            Message::CategorySelected(label) => {
                let ticket = state.store.on_category_select(&label);
                state.read_catalog(ticket)
            }
            Message::PageSelected(page) => {
                state.store.on_page_select(page);
                Task::none()
            }
            Message::AnchorActivated(href) => match resolve_anchor(&href, &SECTIONS) {
                Some(index) => {
                    let y = index as f32 / (SECTIONS.len() - 1) as f32;
                    operation::snap_to(sections_id(), RelativeOffset { x: 0.0, y })
                }
                None => Task::none(),
            },
        };
        state.store.render(&mut state.frame);
        task
    }

    fn read_catalog(&self, ticket: FetchTicket) -> Task<Message> {
        Task::perform(fetch_catalog(self.location.clone()), move |result| {
            Message::CatalogFetched(ticket, result)
        })
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let menu = SECTIONS.iter().fold(Row::new().spacing(12), |menu, section| {
            menu.push(
                button(text(section_title(section)))
                    .style(menu_style)
                    .on_press(Message::AnchorActivated(format!("#{section}"))),
            )
        });

        let header = row![text("Storefront").size(28), menu]
            .spacing(24)
            .align_y(Alignment::Center);

        let loading = if state.loading.is_visible() {
            text("Loading...").size(14)
        } else {
            text("").size(14)
        };

        let sections = column![
            state.featured_section(),
            state.categories_section(),
            state.about_section(),
        ]
        .spacing(32)
        .padding(16);

        let layout = column![
            header,
            loading,
            scrollable(sections)
                .id(sections_id())
                .height(Length::Fill),
        ]
        .spacing(10)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn featured_section(&self) -> Element<'_, Message> {
        let heading = match self.store.view() {
            BrowseView::Category(browse) => format!(
                "{} (page {} of {})",
                browse.category(),
                browse.page(),
                browse.total_pages()
            ),
            BrowseView::EmptyCategory { category, .. } => category.clone(),
            _ => "Featured products".to_string(),
        };

        let body: Element<'_, Message> = match &self.frame.content {
            SurfaceContent::Blank => text("").into(),
            SurfaceContent::Empty(message) => text(message).size(16).into(),
            SurfaceContent::List(_) => {
                let items = self.frame.visible_items();
                if items.is_empty() {
                    text("No products to show").size(14).into()
                } else {
                    items
                        .into_iter()
                        .fold(Column::new().spacing(12), |col, product| {
                            col.push(product_card(product))
                        })
                        .into()
                }
            }
        };

        let mut section = column![text(heading).size(24), body].spacing(12);

        if matches!(self.store.view(), BrowseView::Carousel(_)) {
            section = section.push(
                row![
                    button("Prev").on_press(Message::Previous).padding(8),
                    button("Next").on_press(Message::Next).padding(8),
                ]
                .spacing(8),
            );
        }

        if let Some(pager) = self.frame.pager {
            let controls = pager.pages().fold(Row::new().spacing(6), |controls, page| {
                let label = if page == pager.current {
                    format!("[{page}]")
                } else {
                    page.to_string()
                };
                controls.push(button(text(label)).on_press(Message::PageSelected(page)))
            });
            section = section.push(controls);
        }

        section.into()
    }

    fn categories_section(&self) -> Element<'_, Message> {
        let triggers = if self.categories.is_empty() {
            Row::new().push(text("No categories yet").size(14))
        } else {
            self.categories
                .iter()
                .fold(Row::new().spacing(8), |triggers, label| {
                    triggers.push(
                        button(text(label))
                            .on_press(Message::CategorySelected(label.clone()))
                            .padding(8),
                    )
                })
        };

        column![text("Categories").size(24), triggers]
            .spacing(12)
            .into()
    }

    fn about_section(&self) -> Element<'_, Message> {
        let metrics = self.store.metrics();
        column![
            text("About").size(24),
            text(format!("Catalog source: {}", self.location.describe())).size(14),
            text(format!(
                "Catalog reads: {} ok / {} failed / {} superseded",
                metrics.fetched, metrics.failed, metrics.stale
            ))
            .size(12),
        ]
        .spacing(8)
        .into()
    }
}

fn section_title(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn product_card(product: &ProductRecord) -> Element<'_, Message> {
    Container::new(
        column![
            text(format!("[{}] {}", product.image_alt(), product.image)).size(12),
            text(&product.name).size(20),
            text(&product.description).size(14),
            text(product.price_label()).size(14),
        ]
        .spacing(4),
    )
    .padding(10)
    .into()
}

fn menu_style(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::text(theme, status);
    let Rgb(r, g, b) = menu_color(matches!(status, button::Status::Hovered));
    style.text_color = Color::from_rgb8(r, g, b);
    style
}
