//! Mouse interaction plumbing: hit areas and hover tracking.

pub mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
