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

//! # Touchscreen event simulator.
//!
//! Runs the event pipeline as a console program: a generator thread enqueues
//! one random tap or swipe per tick, processor threads drain the queue and
//! classify each event, and the main thread prints one report line per event
//! to stdout.
//!
//! ## Architecture
//!
//! The binary follows a spawn-drain-join pattern:
//!
//! * The **Generator** produces events at the configured interval.
//! * The **Processors** (one by default) share the queue and send their
//!   reports back over an `std::sync::mpsc` channel.
//! * The **Main Thread** drains that channel and prints the reports; the
//!   drain ends when the last processor exits and the channel disconnects.
//!
//! Pressing Enter (or closing stdin) stops the generator, closes the queue,
//! and lets the pipeline wind down without losing queued events. Diagnostics
//! go to stderr via `env_logger`; stdout carries only report lines.

use std::{
    io::{self, BufRead},
    sync::{Arc, mpsc},
    thread,
};

use anyhow::Result;
use log::info;

use touchsim::{
    config,
    generator::spawn_generator,
    processor::spawn_processor,
    queue::EventQueue,
};

fn main() -> Result<()> {
    env_logger::init();

    let config = config::load_config();
    let processors = config.processors.max(1);

    let queue = Arc::new(EventQueue::new());
    let (report_tx, report_rx) = mpsc::channel();

    let generator = spawn_generator(&config, Arc::clone(&queue));
    let workers: Vec<_> = (0..processors)
        .map(|id| spawn_processor(id, Arc::clone(&queue), report_tx.clone()))
        .collect();

    // The processors hold the remaining senders, so the report channel
    // disconnects exactly when the last of them exits.
    drop(report_tx);

    info!(
        "pipeline started: {processors} processor(s), one event per {} ms, coordinates in [0, {}]",
        config.interval_ms, config.coord_max
    );

    // Shutdown watcher: the first line (or EOF) on stdin stops the producer,
    // then closes the queue so the processors drain and exit.
    let shutdown_queue = Arc::clone(&queue);
    thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);

        info!("shutdown requested");
        generator.stop();
        shutdown_queue.close();
    });

    // Report sink: one line per processed event, until the pipeline winds
    // down.
    for report in report_rx {
        println!("{report}");
    }

    for worker in workers {
        worker.join();
    }
    info!("pipeline stopped");

    Ok(())
}
