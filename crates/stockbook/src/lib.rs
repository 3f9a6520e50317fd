#![forbid(unsafe_code)]

//! Stockbook: an inventory and accounting shell for the terminal.
//!
//! The shell owns navigation, localization, and fault containment;
//! the business pages behind the routes are self-contained renderable
//! units. Architecture:
//!
//! - [`routes`] — the static route table and active-entry derivation
//! - [`app`] — top-level model, message routing, frame composition
//! - [`boundary`] — error boundary around the routed content area
//! - [`i18n`] — locale store with zh/en/ko catalogs and persistence
//! - [`chrome`] — header navigation bar and footer locale bar
//! - [`pages`] — one module per business section
//! - [`cli`] — argument and environment parsing

pub mod app;
pub mod boundary;
pub mod chrome;
pub mod cli;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod theme;
