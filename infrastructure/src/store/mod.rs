//! Bill store adapters implementing the [`BillStore`](billed_application::BillStore) port.
//!
//! - [`HttpBillStore`]: the bill store REST API, over reqwest
//! - [`InMemoryBillStore`]: local stand-in for dry runs and tests

mod http;
mod memory;

pub use http::HttpBillStore;
pub use memory::InMemoryBillStore;
