// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Styles that depend on the active theme take the resolved colors as
//! arguments and return closures in the shape Iced expects, so components
//! never hand-roll `button::Style`/`container::Style` literals inline.

pub mod button;
pub mod container;
