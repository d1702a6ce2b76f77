mod new_items_detector;
mod seen_ids;

pub use new_items_detector::*;
pub use seen_ids::*;
