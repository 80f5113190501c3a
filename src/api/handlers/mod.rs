// Submodules
pub mod common;  // Shared fault boundary and input plumbing
pub mod health;  // Health check endpoint

// Statistics endpoints
pub mod all;
pub mod mean;
pub mod median;
pub mod mode;

// Re-exports
pub use health::health_check;

// Statistics endpoints
pub use all::get_all;
pub use mean::get_mean;
pub use median::get_median;
pub use mode::get_mode;
