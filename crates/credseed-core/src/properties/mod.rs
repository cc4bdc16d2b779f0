//! Process-wide configuration properties
//!
//! - `PropertyStore` trait: narrow get/set/has view used by the seeder
//! - `MemoryPropertyStore`: in-memory implementation
//! - `process_properties()`: the shared process-wide instance

mod traits;
mod memory;
mod global;

pub use traits::PropertyStore;
pub use memory::MemoryPropertyStore;
pub use global::process_properties;
