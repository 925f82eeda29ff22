use std::collections::VecDeque;

use crate::{block::Block, state::world::WorldPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChangedMessage {
    pub slot: usize,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Reactive messages - This thing has happened
    SlotChanged(SlotChangedMessage),
    BlockBroken(Block),
    BlockPlaced(Block),
    PlayerMoved(WorldPos),
}

/// Messages produced by the game state, waiting to be routed to subscribers
#[derive(Debug, Default)]
pub struct MessageQueue {
    queue: VecDeque<Message>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, message: Message) {
        self.queue.push_back(message);
    }

    pub fn take(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

pub trait Subscriber {
    fn handle_message(&mut self, message: &Message);
}
