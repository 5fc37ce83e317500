//! Latest-value hand-off between threads
//!
//! A live channel carries values from a hot path (an animation thread
//! sampling a drag) to a consumer that reads whenever it gets to it. The slot
//! holds one value: posting overwrites whatever the consumer has not taken
//! yet, so intermediate values may be dropped but the newest is never lost.
//! Posting only takes a short lock and never waits for the receiver.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    posted: u64,
    dropped: u64,
}

/// Sending half of a live channel
#[derive(Debug)]
pub struct LiveSender<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

/// Receiving half of a live channel
#[derive(Debug)]
pub struct LiveReceiver<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

/// Create a connected sender/receiver pair
pub fn live_channel<T>() -> (LiveSender<T>, LiveReceiver<T>) {
    let slot = Arc::new(Mutex::new(Slot {
        value: None,
        posted: 0,
        dropped: 0,
    }));
    (
        LiveSender { slot: slot.clone() },
        LiveReceiver { slot },
    )
}

impl<T> LiveSender<T> {
    /// Publish `value`, replacing any value not yet taken
    pub fn post(&self, value: T) {
        let mut slot = self.slot.lock();
        if slot.value.replace(value).is_some() {
            slot.dropped += 1;
        }
        slot.posted += 1;
    }
}

impl<T> Clone for LiveSender<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> LiveReceiver<T> {
    /// Take the newest value, if one arrived since the last take
    pub fn take(&self) -> Option<T> {
        self.slot.lock().value.take()
    }

    /// Total values posted
    pub fn posted(&self) -> u64 {
        self.slot.lock().posted
    }

    /// Values overwritten before they were taken
    pub fn dropped(&self) -> u64 {
        self.slot.lock().dropped
    }
}

impl<T: Clone> LiveReceiver<T> {
    /// Newest value without consuming it
    pub fn peek(&self) -> Option<T> {
        self.slot.lock().value.clone()
    }
}
