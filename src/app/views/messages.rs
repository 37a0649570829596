use crate::domain::ports::MessageSink;
use std::sync::Arc;

/// Shows the diagnostic messages collected so far.
pub struct MessagesView {
    sink: Arc<dyn MessageSink>,
}

impl MessagesView {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }

    pub fn clear(&self) {
        self.sink.clear();
    }

    pub fn render(&self) -> String {
        let messages = self.sink.messages();
        if messages.is_empty() {
            return String::new();
        }
        let mut out = String::from("Messages\n");
        for message in messages {
            out.push_str(&format!("  {}\n", message));
        }
        out
    }
}
