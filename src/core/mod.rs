//! # Core Application Logic
//!
//! This module contains BrainWave's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │  runtime   │ ── Action (channel) ──►  │    TUI     │
//!     │ timers and │                          │  Adapter   │
//!     │  fetches   │                          │ (ratatui)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the screen graph
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings and their override hierarchy
//! - [`splash`], [`login`], [`tutorial`], [`home`]: per-screen state

pub mod action;
pub mod config;
pub mod home;
pub mod login;
pub mod splash;
pub mod state;
pub mod tutorial;
