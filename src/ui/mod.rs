// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Paginated gallery over the static item collection
//! - [`explore`] - Featured cards with responsive layout
//!
//! # Shared Infrastructure
//!
//! - [`gallery`] - The paged strip, dot indicators, and content panel
//! - [`components`] - Reusable content widgets (feature list, action
//!   buttons, info cards, progress bar, interactive list, featured card,
//!   theme toggle, image placeholder)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Shared color helpers
//! - [`theming`] - Light/dark theme state and device scheme handling
//! - [`themed`] - Themed text and surface primitives
//! - [`icons`] - Glyph icons
//! - [`tab_bar`] - Two-tab navigation shell
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod explore;
pub mod gallery;
pub mod home;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod tab_bar;
pub mod theme;
pub mod themed;
pub mod theming;
