use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::engine::error::EngineError;
use crate::engine::llm_client::ChatTransport;
use crate::engine::session::Session;

/// Hands out canned assistant replies in order and counts calls.
/// Running past the script is a transport error, which doubles as a
/// guard against tests making more calls than they meant to.
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<String>>,
    calls: Cell<usize>,
}

impl ScriptedTransport {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ChatTransport for ScriptedTransport {
    fn complete(&self, _session: &Session) -> Result<String, EngineError> {
        self.calls.set(self.calls.get() + 1);
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| EngineError::Transport("scripted replies exhausted".into()))
    }
}
