pub mod carousel;
pub mod category;
pub mod controller;
pub mod pagination;

pub use carousel::{CarouselState, CAROUSEL_LIMIT};
pub use category::{CategoryBrowseState, CategoryOutcome};
pub use controller::{BrowseView, FetchIntent, FetchOutcome, FetchTicket, Storefront};
pub use pagination::PRODUCTS_PER_PAGE;
