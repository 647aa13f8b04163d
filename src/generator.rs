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

//! Synthetic event generation.
//!
//! This module implements the producer side of the pipeline: a background
//! worker that synthesizes one random touchscreen event per tick and enqueues
//! it. The tick interval doubles as the cancellation point — the worker waits
//! out each interval on its stop channel, so a stop request takes effect
//! without producing a further event.

use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use log::{debug, info};
use rand::{Rng, RngExt};

use crate::{
    config::AppConfig,
    event::{Event, Point},
    queue::EventQueue,
};

/// A handle to a running event generator.
///
/// Dropping the handle without calling [`stop`] leaves the generator running
/// for the life of the process.
///
/// [`stop`]: GeneratorHandle::stop
pub struct GeneratorHandle {
    stop_tx: Sender<()>,
    thread: thread::JoinHandle<()>,
}

impl GeneratorHandle {
    /// Signals the generator to stop and waits for it to finish.
    ///
    /// On return no further events will be enqueued, so it is safe for the
    /// caller to close the queue.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.thread.join();
    }
}

/// Spawns a background thread that enqueues one random event per tick.
///
/// # Arguments
///
/// * `config` - The application configuration; supplies the tick interval and
///   the coordinate bound.
/// * `queue` - The shared queue to produce into.
pub fn spawn_generator(config: &AppConfig, queue: Arc<EventQueue>) -> GeneratorHandle {
    let interval = Duration::from_millis(config.interval_ms);
    let coord_max = config.coord_max;

    let (stop_tx, stop_rx) = mpsc::channel();
    let thread = thread::spawn(move || generate_events(&queue, &stop_rx, interval, coord_max));

    GeneratorHandle { stop_tx, thread }
}

/// The generator worker loop.
///
/// Each iteration waits out one tick interval on the stop channel: a timeout
/// means another event is due, anything else is a stop request. The loop also
/// ends if the queue reports that it has been closed.
fn generate_events(
    queue: &EventQueue,
    stop_rx: &Receiver<()>,
    interval: Duration,
    coord_max: i32,
) {
    info!("event generator started, one event per {interval:?}");

    let mut rng = rand::rng();
    loop {
        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            // Stop requested, or the handle was dropped.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        let event = random_event(&mut rng, coord_max);
        debug!("generated {event:?}");

        if queue.enqueue(event).is_err() {
            break;
        }
    }

    info!("event generator stopped");
}

/// Synthesizes one random event: tap or swipe with even odds, coordinates
/// uniform in `[0, coord_max]`. A swipe's destination is drawn independently
/// of its origin and may equal it.
fn random_event(rng: &mut impl Rng, coord_max: i32) -> Event {
    let origin = random_point(rng, coord_max);
    let timestamp = now_millis();

    if rng.random_bool(0.5) {
        Event::tap(origin, timestamp)
    } else {
        Event::swipe(origin, random_point(rng, coord_max), timestamp)
    }
}

fn random_point(rng: &mut impl Rng, coord_max: i32) -> Point {
    Point::new(
        rng.random_range(0..=coord_max),
        rng.random_range(0..=coord_max),
    )
}

/// Current wall-clock time in milliseconds since the Unix epoch. A clock set
/// before the epoch reads as 0 rather than failing event creation.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
