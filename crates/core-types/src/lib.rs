pub mod enums;
pub mod state;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Trend;
pub use state::{BotState, HISTORY_CAP, PricePoint};
pub use structs::{PriceChange, PriceSnapshot};
