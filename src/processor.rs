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

//! Event processing workers.
//!
//! This module implements the consumer side of the pipeline: each processor
//! is a background worker that drains the shared queue, classifies swipe
//! events, and sends one [`Report`] per event back to the hosting program for
//! printing. Observing [`Closed`] on an empty queue is the designed shutdown
//! path and ends the worker loop cleanly.
//!
//! [`Closed`]: crate::queue::Closed

use std::{
    fmt,
    sync::{Arc, mpsc::Sender},
    thread,
};

use log::{debug, info};

use crate::{
    event::{Event, SwipeDirection},
    queue::EventQueue,
};

/// The result of processing one event, ready for the report sink.
///
/// Formatting with `Display` yields the report line:
///
/// ```text
/// [Event: Tap] Position: (x, y), Timestamp: t
/// [Event: Swipe] From: (x1, y1) To: (x2, y2), Direction: D, Timestamp: t
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub event: Event,
    pub direction: Option<SwipeDirection>,
}

impl Report {
    /// Classifies an event into its report.
    pub fn new(event: Event) -> Self {
        let direction = event.direction();
        Self { event, direction }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.event.destination(), self.direction) {
            (Some(destination), Some(direction)) => write!(
                f,
                "[Event: Swipe] From: {} To: {}, Direction: {}, Timestamp: {}",
                self.event.origin(),
                destination,
                direction,
                self.event.timestamp()
            ),
            _ => write!(
                f,
                "[Event: Tap] Position: {}, Timestamp: {}",
                self.event.origin(),
                self.event.timestamp()
            ),
        }
    }
}

/// A handle to a running event processor.
pub struct ProcessorHandle {
    thread: thread::JoinHandle<()>,
}

impl ProcessorHandle {
    /// Waits for the processor to finish. The processor only finishes once
    /// the queue has been closed and drained, or the report sink has gone
    /// away.
    pub fn join(self) {
        let _ = self.thread.join();
    }
}

/// Spawns a background thread that drains the queue and reports each event.
///
/// # Arguments
///
/// * `id` - Identifies this processor in diagnostics when several share the
///   queue.
/// * `queue` - The shared queue to consume from.
/// * `report_tx` - The sending end of the channel the hosting program drains
///   for report lines.
pub fn spawn_processor(
    id: usize,
    queue: Arc<EventQueue>,
    report_tx: Sender<Report>,
) -> ProcessorHandle {
    let thread = thread::spawn(move || process_events(id, &queue, &report_tx));

    ProcessorHandle { thread }
}

/// The processor worker loop.
///
/// The queue's lock is released before the event is classified and reported,
/// so slow report handling never serializes other processors.
fn process_events(id: usize, queue: &EventQueue, report_tx: &Sender<Report>) {
    info!("processor {id} started");

    while let Ok(event) = queue.dequeue() {
        let report = Report::new(event);
        debug!("processor {id} classified {:?}", event.kind());

        if report_tx.send(report).is_err() {
            // The sink is gone; nothing left to report to.
            break;
        }
    }

    info!("processor {id} shut down");
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::event::Point;

    #[test]
    fn tap_report_line() {
        let report = Report::new(Event::tap(Point::new(12, 34), 1700000000000));

        assert_eq!(
            report.to_string(),
            "[Event: Tap] Position: (12, 34), Timestamp: 1700000000000"
        );
    }

    #[test]
    fn swipe_report_line() {
        let event = Event::swipe(Point::new(0, 0), Point::new(10, 2), 1700000000001);
        let report = Report::new(event);

        assert_eq!(report.direction, Some(SwipeDirection::Right));
        assert_eq!(
            report.to_string(),
            "[Event: Swipe] From: (0, 0) To: (10, 2), Direction: Right, Timestamp: 1700000000001"
        );
    }

    #[test]
    fn processor_drains_in_order_and_exits_on_close() {
        let queue = Arc::new(EventQueue::new());
        let (report_tx, report_rx) = mpsc::channel();

        for timestamp in 0..5 {
            queue
                .enqueue(Event::tap(Point::new(0, 0), timestamp))
                .expect("queue is open");
        }
        queue.close();

        let processor = spawn_processor(0, Arc::clone(&queue), report_tx);

        let reports: Vec<_> = report_rx.iter().collect();
        assert_eq!(reports.len(), 5);
        for (expected, report) in reports.iter().enumerate() {
            assert_eq!(report.event.timestamp(), expected as u64);
        }

        processor.join();
    }
}
