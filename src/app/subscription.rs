// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources feed the update loop from outside the widget tree: window
//! resize events (responsive layout), a periodic poll of the device color
//! scheme (the external theme signal), and a notification tick that runs
//! only while toasts are on screen.

use super::{App, Message};
use crate::ui::theming::DeviceScheme;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval at which the device color scheme is re-read.
const DEVICE_SCHEME_POLL: Duration = Duration::from_secs(2);
/// Interval at which visible toasts are checked for expiry.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Creates the subscription set for the current application state.
pub fn create(app: &App) -> Subscription<Message> {
    let resize = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    });

    let device_scheme =
        time::every(DEVICE_SCHEME_POLL).map(|_| Message::DeviceSchemeChanged(DeviceScheme::detect()));

    let ticks = if !app.notifications.is_empty() {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([resize, device_scheme, ticks])
}
