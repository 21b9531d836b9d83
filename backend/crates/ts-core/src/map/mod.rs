//! Map-side derivations of the live dashboard.
//!
//! Nothing here draws anything; these are the numbers a map widget needs.

pub mod heatmap;
pub mod marker;
pub mod ripple;
pub mod trail;
