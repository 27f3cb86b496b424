// Application layer: use cases and the ports they depend on

pub mod deep_scan_use_case;
pub mod ports;
pub mod scrape_use_case;

pub use deep_scan_use_case::DeepScanUseCase;
pub use ports::{SearchQuery, StoreSearchPort};
pub use scrape_use_case::{ScrapeOptions, ScrapeUseCase};
