use crate::prelude::*;

use uuid::Uuid;

use std::collections::VecDeque;

use crate::utils::{async_sleep, CCStr};

static ALERTS: GlobalSignal<AlertQueue> = Signal::global(|| AlertQueue::new(MAX_ALERTS));

const MAX_ALERTS: usize = 6;
const DEFAULT_TIMEOUT_MS: u64 = 5000;
const ERROR_TIMEOUT_MS: u64 = 8000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertLevel {
    Success,
    Warn,
    Error,
    Info,
}
impl AlertLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Warn => "alert-warning",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
    fn title(self) -> &'static str {
        match self {
            Self::Success => "Done",
            Self::Warn => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    id: Uuid,
    level: AlertLevel,
    message: CCStr,
    timeout_ms: u64,
}
impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<CCStr>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            timeout_ms: match level {
                AlertLevel::Error => ERROR_TIMEOUT_MS,
                _ => DEFAULT_TIMEOUT_MS,
            },
        }
    }
}

/// Bounded FIFO of displayed alerts, the oldest is evicted first
#[derive(Debug, Clone, PartialEq)]
struct AlertQueue {
    alerts: VecDeque<Alert>,
    capacity: usize,
}
impl AlertQueue {
    fn new(capacity: usize) -> Self {
        Self {
            alerts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    fn push(&mut self, alert: Alert) {
        while self.alerts.len() >= self.capacity {
            self.alerts.pop_front();
        }
        self.alerts.push_back(alert);
    }
    fn dismiss(&mut self, id: Uuid) {
        self.alerts.retain(|a| a.id != id);
    }
    fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }
}

fn add_alert(level: AlertLevel, message: impl Into<CCStr>) {
    ALERTS.write().push(Alert::new(level, message));
}

pub fn alert_success(message: impl Into<CCStr>) {
    add_alert(AlertLevel::Success, message);
}

pub fn alert_error(message: impl Into<CCStr>) {
    add_alert(AlertLevel::Error, message);
}

pub fn alert_warn(message: impl Into<CCStr>) {
    add_alert(AlertLevel::Warn, message);
}

pub fn alert_info(message: impl Into<CCStr>) {
    add_alert(AlertLevel::Info, message);
}

#[component]
pub fn AlertsContainer() -> Element {
    rsx! {
        div { class: "fixed z-50 top-14 right-4 w-96 flex flex-col gap-2",
            for alert in ALERTS.read().iter() {
                AlertDisplay { key: "{alert.id}", alert: alert.clone() }
            }
        }
    }
}

#[component]
fn AlertDisplay(alert: Alert) -> Element {
    log::debug!("AlertDisplay Rendered: {alert:?}");
    let id = alert.id;
    let timeout_ms = alert.timeout_ms;

    use_future(move || async move {
        async_sleep(timeout_ms).await;
        log::debug!("Alert {id} timed out");
        ALERTS.write().dismiss(id);
    });

    use_drop(move || log::debug!("AlertDisplay Dropped: {id}"));

    rsx! {
        div { role: "alert", class: "alert shadow-lg {alert.level.class()}",
            div { class: "flex flex-col",
                b { class: "text-sm", {alert.level.title()} }
                span { class: "text-xs", "{alert.message}" }
            }
            button {
                class: "btn btn-circle btn-ghost btn-xs",
                onclick: move |_| ALERTS.write().dismiss(id),
                "✕"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_evicts_the_oldest() {
        let mut queue = AlertQueue::new(2);
        let first = Alert::new(AlertLevel::Info, "first");
        queue.push(first.clone());
        queue.push(Alert::new(AlertLevel::Info, "second"));
        queue.push(Alert::new(AlertLevel::Info, "third"));

        let messages: Vec<&str> = queue.iter().map(|a| &*a.message).collect();
        assert_eq!(messages, vec!["second", "third"]);

        queue.dismiss(first.id);
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn errors_stay_longer() {
        assert_eq!(
            Alert::new(AlertLevel::Error, "x").timeout_ms,
            ERROR_TIMEOUT_MS
        );
        assert_eq!(
            Alert::new(AlertLevel::Success, "x").timeout_ms,
            DEFAULT_TIMEOUT_MS
        );
    }
}
