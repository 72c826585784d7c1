//! Toast-style notifications consumed by the UI shell.
//!
//! The API layer pushes into a [`ToastSender`]; the shell drains the paired
//! [`ToastReceiver`]. Sending never blocks and never fails the caller: if the
//! shell has gone away, or has let [`CAPACITY`] toasts pile up, the
//! notification is logged and dropped.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

/// Undrained toasts kept before new ones are dropped.
pub const CAPACITY: usize = 64;

/// One error notification as the UI shell renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Producer half of the notification channel.
#[derive(Clone, Debug)]
pub struct ToastSender {
    tx: mpsc::Sender<Toast>,
}

impl ToastSender {
    pub fn send(&self, toast: Toast) {
        match self.tx.try_send(toast) {
            Ok(()) => {}
            Err(TrySendError::Full(toast)) => {
                warn!(?toast, "Toast queue full, notification discarded");
            }
            Err(TrySendError::Closed(toast)) => {
                warn!(?toast, "Toast receiver dropped, notification discarded");
            }
        }
    }

    pub fn error(&self, title: &str, description: &str) {
        self.send(Toast::error(title, description));
    }
}

/// Consumer half of the notification channel.
///
/// The shell is expected to drain it regularly; once [`CAPACITY`] toasts are
/// waiting, newer ones are dropped.
#[derive(Debug)]
pub struct ToastReceiver {
    rx: mpsc::Receiver<Toast>,
}

impl ToastReceiver {
    /// Waits for the next notification. Returns `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<Toast> {
        self.rx.recv().await
    }

    /// Takes whatever is queued right now without waiting.
    pub fn drain(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Ok(toast) = self.rx.try_recv() {
            toasts.push(toast);
        }
        toasts
    }
}

/// Creates a connected sender/receiver pair.
pub fn channel() -> (ToastSender, ToastReceiver) {
    let (tx, rx) = mpsc::channel(CAPACITY);
    (ToastSender { tx }, ToastReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_toasts_arrive_in_order() {
        let (tx, mut rx) = channel();
        tx.error("请求错误", "first");
        tx.error("请求错误", "second");

        assert_eq!(rx.recv().await.unwrap().description, "first");
        let rest = rx.drain();
        assert_eq!(rest, vec![Toast::error("请求错误", "second")]);
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn test_full_queue_drops_newest() {
        let (tx, mut rx) = channel();
        for i in 0..CAPACITY + 5 {
            tx.error("请求错误", &i.to_string());
        }

        let toasts = rx.drain();
        assert_eq!(toasts.len(), CAPACITY);
        assert_eq!(toasts.last().unwrap().description, (CAPACITY - 1).to_string());

        tx.error("请求错误", "after drain");
        assert_eq!(rx.drain()[0].description, "after drain");
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (tx, rx) = channel();
        drop(rx);
        tx.error("请求错误", "nobody listening");
    }
}
