// SPDX-License-Identifier: MPL-2.0
//! Horizontally paginated gallery: a paged image strip, dot indicators, and
//! a content panel for the active item.

mod component;

pub use component::{slide_image_index, view, Event, Message, State, ViewContext};
