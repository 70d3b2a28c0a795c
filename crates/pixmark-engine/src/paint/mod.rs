//! Paint model shared by surfaces and text drawing.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8)
//! - the "over" compositing rule every surface blends with

pub mod color;

pub use color::Color;
