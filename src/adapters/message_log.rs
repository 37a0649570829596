use crate::domain::ports::MessageSink;
use std::sync::{Arc, Mutex, MutexGuard};

/// Ordered diagnostic messages. Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        tracing::debug!(target: "chef::messages", "{}", message);
        self.lock().push(message);
    }

    fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_order_and_share_state() {
        let log = MessageLog::new();
        let shared = log.clone();

        log.add("first".to_string());
        shared.add("second".to_string());

        assert_eq!(log.messages(), vec!["first", "second"]);
        assert_eq!(shared.len(), 2);

        shared.clear();
        assert!(log.is_empty());
    }
}
