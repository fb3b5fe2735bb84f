//!
//! Visibility state for the tray context menu and the notification popup.
//!
//! The bar's controller owns a [`ShellState`] and hands it to event handlers by
//! `&mut`. Nothing here runs on its own: time is passed in by the caller and
//! expired deadlines are processed by [`ShellState::tick`].

use crate::config::ShellConfig;
use std::time::{Duration, Instant};

/// Layout values used to place the tray menu under the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayLayout {
    pub menu_width: f64,
    pub bar_height: f64,
    pub spacing_small: f64,
    pub spacing_large: f64,
}

impl From<&ShellConfig> for TrayLayout {
    fn from(config: &ShellConfig) -> Self {
        Self {
            menu_width: config.tray_menu_width,
            bar_height: config.bar_height,
            spacing_small: config.spacing_small,
            spacing_large: config.spacing_large,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

/// The tray context menu. At most one menu is open at a time.
#[derive(Debug, Clone)]
pub struct TrayMenuState<T> {
    layout: TrayLayout,
    visible: bool,
    item: Option<T>,
    position: Option<MenuPosition>,
}

impl<T> TrayMenuState<T> {
    pub fn new(layout: TrayLayout) -> Self {
        Self {
            layout,
            visible: false,
            item: None,
            position: None,
        }
    }

    /// Show the menu for `item`, replacing any menu already open.
    ///
    /// The menu is always anchored below the right end of the bar
    /// (`right_edge`); the click coordinates are only logged.
    pub fn open(&mut self, item: T, click_x: f64, click_y: f64, right_edge: f64) {
        let position = MenuPosition {
            x: right_edge - self.layout.menu_width - self.layout.spacing_large,
            y: self.layout.bar_height + self.layout.spacing_small,
        };
        log::debug!(
            "Tray menu clicked at ({click_x}, {click_y}), showing at ({}, {})",
            position.x,
            position.y
        );

        self.item = Some(item);
        self.position = Some(position);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.item = None;
        self.position = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn position(&self) -> Option<MenuPosition> {
        self.position
    }
}

/// Deadlines that fired during a [`NotificationState::tick`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The popup timed out and was hidden
    pub dismissed: bool,
    /// The hidden notification was dropped
    pub cleared: bool,
}

/// The notification popup.
///
/// Closing hides the popup straight away but keeps the notification until the
/// clear delay has passed, so a closing animation can still draw it.
#[derive(Debug, Clone)]
pub struct NotificationState<N> {
    timeout: Duration,
    clear_delay: Duration,
    visible: bool,
    active: Option<N>,
    dismiss_at: Option<Instant>,
    clear_at: Option<Instant>,
}

impl<N> NotificationState<N> {
    pub fn new(timeout: Duration, clear_delay: Duration) -> Self {
        Self {
            timeout,
            clear_delay,
            visible: false,
            active: None,
            dismiss_at: None,
            clear_at: None,
        }
    }

    /// Show `notification`, replacing the current one and restarting the timeout
    pub fn open(&mut self, notification: N, now: Instant) {
        self.active = Some(notification);
        self.visible = true;
        self.dismiss_at = Some(now + self.timeout);
        // A pending clear would drop the notification we just showed
        self.clear_at = None;
    }

    pub fn close(&mut self, now: Instant) {
        self.visible = false;
        self.dismiss_at = None;
        if self.clear_delay.is_zero() {
            self.active = None;
            self.clear_at = None;
        } else {
            self.clear_at = Some(now + self.clear_delay);
        }
    }

    /// Fire every deadline that is due at `now`
    pub fn tick(&mut self, now: Instant) -> TickEvents {
        let mut events = TickEvents::default();

        if let Some(at) = self.dismiss_at.filter(|at| *at <= now) {
            log::debug!("Notification timed out");
            // The clear delay counts from the timeout, not from a late tick
            self.close(at);
            events.dismissed = true;
        }

        if self.clear_at.is_some_and(|at| at <= now) {
            self.active = None;
            self.clear_at = None;
            events.cleared = true;
        } else if events.dismissed && self.active.is_none() {
            events.cleared = true;
        }

        events
    }

    /// The earliest pending deadline, for scheduling the next tick
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.dismiss_at, self.clear_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active(&self) -> Option<&N> {
        self.active.as_ref()
    }
}

/// Everything the bar shows on top of its normal layout
#[derive(Debug, Clone)]
pub struct ShellState<T, N> {
    pub tray: TrayMenuState<T>,
    pub notification: NotificationState<N>,
}

impl<T, N> ShellState<T, N> {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            tray: TrayMenuState::new(TrayLayout::from(config)),
            notification: NotificationState::new(
                Duration::from_millis(config.notification_timeout_ms),
                Duration::from_millis(config.notification_clear_delay_ms),
            ),
        }
    }

    pub fn open_tray_menu(&mut self, x: f64, y: f64, item: T, right_edge: f64) {
        self.tray.open(item, x, y, right_edge);
    }

    pub fn close_tray_menu(&mut self) {
        self.tray.close();
    }

    pub fn open_notification(&mut self, notification: N, now: Instant) {
        self.notification.open(notification, now);
    }

    pub fn close_notification(&mut self, now: Instant) {
        self.notification.close(now);
    }

    pub fn tick(&mut self, now: Instant) -> TickEvents {
        self.notification.tick(now)
    }
}
