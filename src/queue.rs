// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Thread-safe event queue.
//!
//! [`EventQueue`] is the single shared-state boundary between the generator
//! and the processors: a strict FIFO buffer with a blocking [`dequeue`] and a
//! cancellable shutdown. Consumers suspend on a condition variable and are
//! woken exactly when an event arrives or the queue is closed; there is no
//! polling.
//!
//! The queue is unbounded. Capacity is not a concern at the event rates this
//! pipeline produces; a bounded variant would add a second condition variable
//! for producers and block `enqueue` when full.
//!
//! [`dequeue`]: EventQueue::dequeue

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use thiserror::Error;

use crate::event::Event;

/// The queue has been shut down.
///
/// For a consumer this is the designed termination signal, not a fault: it is
/// reported only once every event enqueued before [`EventQueue::close`] has
/// been drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event queue is closed")]
pub struct Closed;

#[derive(Debug, Default)]
struct QueueState {
    events: VecDeque<Event>,
    closed: bool,
}

/// A FIFO buffer of [`Event`]s shared between producer and consumer threads.
///
/// All mutation happens under a single internal lock, held only for the O(1)
/// push or pop — never across a consumer's processing of the event it
/// received. Enqueue order equals dequeue order; with multiple producers the
/// lock total-orders their enqueues.
#[derive(Debug, Default)]
pub struct EventQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the tail of the queue and wakes one waiting
    /// consumer. Never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`Closed`] if the queue has been shut down; the event is
    /// discarded and the caller is expected to stop producing.
    pub fn enqueue(&self, event: Event) -> Result<(), Closed> {
        let mut state = self.state.lock().unwrap();
        if state.closed {
            return Err(Closed);
        }
        state.events.push_back(event);
        drop(state);

        self.available.notify_one();
        Ok(())
    }

    /// Removes and returns the event at the head of the queue.
    ///
    /// If the queue is empty and open, the calling thread suspends until a
    /// concurrent [`enqueue`] or [`close`] wakes it.
    ///
    /// # Errors
    ///
    /// Returns [`Closed`] once the queue has been shut down and fully
    /// drained.
    ///
    /// [`enqueue`]: EventQueue::enqueue
    /// [`close`]: EventQueue::close
    pub fn dequeue(&self) -> Result<Event, Closed> {
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(event) = state.events.pop_front() {
                return Ok(event);
            }
            if state.closed {
                return Err(Closed);
            }
            state = self.available.wait(state).unwrap();
        }
    }

    /// Shuts the queue down and wakes every blocked consumer.
    ///
    /// Idempotent. Events already queued remain retrievable; only once the
    /// queue is empty do subsequent [`EventQueue::dequeue`] calls report
    /// [`Closed`].
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        if !state.closed {
            state.closed = true;
            drop(state);

            self.available.notify_all();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().events.is_empty()
    }
}
