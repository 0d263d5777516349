// pages/src/notify.rs
//
// Toast channel between the pages and whatever surface renders them. Pages
// fire and forget; a full or closed channel drops the toast rather than
// failing the operation that produced it.

use log::debug;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone)]
pub struct ToastSender {
    tx: mpsc::Sender<Toast>,
}

pub fn toast_channel(capacity: usize) -> (ToastSender, mpsc::Receiver<Toast>) {
    let (tx, rx) = mpsc::channel(capacity);
    (ToastSender { tx }, rx)
}

impl ToastSender {
    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastLevel::Info, text.into());
    }

    fn push(&self, level: ToastLevel, text: String) {
        if self.tx.try_send(Toast { level, text }).is_err() {
            debug!("toast dropped: channel full or closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_drops_instead_of_failing() {
        let (tx, mut rx) = toast_channel(1);
        tx.success("first");
        tx.success("second"); // dropped, capacity 1
        assert_eq!(
            rx.try_recv().unwrap(),
            Toast {
                level: ToastLevel::Success,
                text: "first".to_string()
            }
        );
        assert!(rx.try_recv().is_err());
    }
}
