//! Reusable layout helpers for overlays

pub mod popup;
