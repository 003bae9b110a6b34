pub mod order;
pub mod processed_order;
pub mod stats;

// Re-export core models for easy access
pub use order::{Order, OrderRequest};
pub use processed_order::ProcessedOrder;
pub use stats::ProcessingStats;
