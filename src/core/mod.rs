//! # Core Application Logic
//!
//! This module contains Marquee's browsing logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog + items      │
//!                    │  • Routing + history    │
//!                    │  • Section bucketing    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Source   │
//!     │  Adapter   │                          │  (reqwest) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, the movie/show record
//! - [`catalog`]: `CatalogStore` and show synthesis
//! - [`route`]: fragments, `NavigationState`, `History`
//! - [`sections`]: home-row bucketing and rating order
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`view`]: `PageView`, what the presentation layer renders
//! - [`config`]: layered configuration

pub mod action;
pub mod catalog;
pub mod config;
pub mod item;
pub mod route;
pub mod sections;
pub mod state;
pub mod view;
