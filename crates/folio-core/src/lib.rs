//! Section navigation and responsive scroll coordination for the portfolio site.
//!
//! The crate is renderer-agnostic: time is passed in explicitly as `now_ms` and
//! every visual effect goes through the [`scroll::ScrollSurface`] trait.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod catalog;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod route;
pub mod scroll;
pub mod sections;
pub mod settings;
pub mod text_policy;
pub mod timing;
pub mod watch;
