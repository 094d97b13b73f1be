pub(crate) mod location_comparator;
pub(crate) mod location_model;

// Re-export the public interface
pub use location_comparator::{locations_equal, normalize_location};
pub use location_model::{Location, Version};
