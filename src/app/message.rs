// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::explore;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::tab_bar;
use crate::ui::theming::DeviceScheme;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Explore(explore::Message),
    TabBar(tab_bar::Message),
    Notification(notifications::NotificationMessage),
    /// The device reported a (possibly unchanged) color scheme.
    DeviceSchemeChanged(DeviceScheme),
    /// The window was resized; drives the responsive breakpoint and the
    /// gallery page width.
    WindowResized(iced::Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
