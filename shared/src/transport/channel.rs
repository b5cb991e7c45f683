use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

use log::warn;

use crate::{boundary::error::BoundaryError, messages::mutation_message::MutationMessage};

/// Default queue depth.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Creates a bounded in-process queue of mutation messages.
///
/// Sending never blocks. A render that queues more than `capacity` messages
/// before the host drains them fails with [`BoundaryError::QueueFull`], so a
/// host draining on the rendering thread needs a capacity that covers its
/// largest batch. A host draining on its own thread only needs to keep up.
pub fn channel(capacity: usize) -> (MessageSender, MessageReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (MessageSender { tx, capacity }, MessageReceiver { rx })
}

/// Sending half, held by the bridge side.
#[derive(Clone, Debug)]
pub struct MessageSender {
    tx: SyncSender<MutationMessage>,
    capacity: usize,
}

impl MessageSender {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enqueues `message` if there is room for it.
    pub fn send(&self, message: MutationMessage) -> Result<(), BoundaryError> {
        self.tx.try_send(message).map_err(|err| match err {
            TrySendError::Full(message) => {
                warn!(
                    "Dropping {} for root {}: queue full at capacity {}",
                    message.operation(),
                    message.root_id(),
                    self.capacity
                );
                BoundaryError::QueueFull {
                    operation: message.operation(),
                    capacity: self.capacity,
                }
            }
            TrySendError::Disconnected(message) => {
                warn!(
                    "Dropping {} for root {}: receiver disconnected",
                    message.operation(),
                    message.root_id()
                );
                BoundaryError::Disconnected
            }
        })
    }
}

/// Receiving half, drained by the host.
#[derive(Debug)]
pub struct MessageReceiver {
    rx: Receiver<MutationMessage>,
}

impl MessageReceiver {
    /// Takes the next pending message without blocking.
    pub fn try_recv(&self) -> Option<MutationMessage> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Takes every message currently queued.
    pub fn drain(&self) -> Vec<MutationMessage> {
        let mut messages = Vec::new();
        while let Some(message) = self.try_recv() {
            messages.push(message);
        }
        messages
    }
}
