//! Core browsing logic for the storefront catalog.
//!
//! The modules split the catalog model from the browsing state machines
//! (carousel, category paging) and from the rendering surface, so the
//! decision logic can run and be tested without any GUI attached.

pub mod browse;
pub mod catalog;
pub mod prelude;
pub mod surface;
pub mod telemetry;
pub mod wiring;

pub use browse::{BrowseView, FetchOutcome, FetchTicket, Storefront};
pub use catalog::ProductRecord;
pub use prelude::{StoreError, StoreResult};
pub use surface::{RenderSurface, SurfaceFrame};
