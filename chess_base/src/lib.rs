//! # Base types for oakchess
//!
//! This is an auxiliary crate for `oakchess`, which contains the primitive board vocabulary:
//! files, ranks, squares, colors, pieces and cell occupants, plus a handful of geometry helpers.
//!
//! Normally you don't want to use this crate directly. Use `oakchess` instead.

pub mod geometry;
pub mod types;
