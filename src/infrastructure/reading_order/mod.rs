mod heuristic_reading_order;
mod http_reading_order;
mod identity_reading_order;
mod reading_order_factory;

pub use heuristic_reading_order::HeuristicReadingOrder;
pub use http_reading_order::{HttpReadingOrder, OrderRequest, OrderResponse};
pub use identity_reading_order::IdentityReadingOrder;
pub use reading_order_factory::{ReadingOrderFactory, ReadingOrderFactoryError};
