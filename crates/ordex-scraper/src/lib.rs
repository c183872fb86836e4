pub mod error;
pub mod items;
pub mod options;
pub mod order;
pub mod page;
pub mod quantity;
pub mod responder;
pub mod selectors;
pub mod text;

pub use error::ScrapeError;
pub use items::{extract_item, extract_items, ItemLayout};
pub use options::ScrapeOptions;
pub use order::{extract_order, ItemStrategy};
pub use page::{scrape_html, scrape_page};
pub use quantity::resolve_quantity;
pub use responder::{respond, run_scrape};
