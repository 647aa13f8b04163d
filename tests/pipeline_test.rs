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

// Integration tests for the full generator -> queue -> processor pipeline.

use std::collections::HashSet;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use touchsim::config::AppConfig;
use touchsim::event::{Event, EventKind, Point};
use touchsim::generator::spawn_generator;
use touchsim::processor::spawn_processor;
use touchsim::queue::EventQueue;

#[test]
fn pipeline_produces_classified_reports() {
    let config = AppConfig {
        interval_ms: 2,
        coord_max: 50,
        ..AppConfig::default()
    };

    let queue = Arc::new(EventQueue::new());
    let (report_tx, report_rx) = mpsc::channel();

    let generator = spawn_generator(&config, Arc::clone(&queue));
    let processors: Vec<_> = (0..2)
        .map(|id| spawn_processor(id, Arc::clone(&queue), report_tx.clone()))
        .collect();
    drop(report_tx);

    // Let the pipeline run long enough to see traffic of both kinds with
    // overwhelming probability.
    thread::sleep(Duration::from_millis(200));
    generator.stop();
    queue.close();

    let reports: Vec<_> = report_rx.iter().collect();
    for processor in processors {
        processor.join();
    }

    assert!(!reports.is_empty(), "pipeline produced no reports");
    assert!(queue.is_empty(), "events were left behind after shutdown");

    for report in &reports {
        let line = report.to_string();
        match report.event.kind() {
            EventKind::Tap => {
                assert!(line.starts_with("[Event: Tap] Position: ("), "{line}");
                assert!(report.direction.is_none());
            }
            EventKind::Swipe => {
                assert!(line.starts_with("[Event: Swipe] From: ("), "{line}");
                assert!(line.contains(", Direction: "), "{line}");
                assert!(report.direction.is_some());
            }
        }
        assert!(line.contains(", Timestamp: "), "{line}");

        let origin = report.event.origin();
        assert!((0..=50).contains(&origin.x));
        assert!((0..=50).contains(&origin.y));
    }
}

#[test]
fn no_events_are_lost_across_shutdown() {
    const PRODUCERS: u64 = 3;
    const EVENTS_PER_PRODUCER: u64 = 200;

    let queue = Arc::new(EventQueue::new());
    let (report_tx, report_rx) = mpsc::channel();

    let processors: Vec<_> = (0..2)
        .map(|id| spawn_processor(id, Arc::clone(&queue), report_tx.clone()))
        .collect();
    drop(report_tx);

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for sequence in 0..EVENTS_PER_PRODUCER {
                    let tag = producer * EVENTS_PER_PRODUCER + sequence;
                    let event = Event::tap(Point::new(0, 0), tag);
                    queue.enqueue(event).expect("queue is open");
                }
            })
        })
        .collect();

    // Close only after every producer has finished, so each of their events
    // was accepted before shutdown.
    for producer in producers {
        producer.join().expect("producer exited cleanly");
    }
    queue.close();

    let observed: HashSet<u64> = report_rx.iter().map(|r| r.event.timestamp()).collect();
    for processor in processors {
        processor.join();
    }

    assert_eq!(
        observed.len() as u64,
        PRODUCERS * EVENTS_PER_PRODUCER,
        "some events were lost or duplicated"
    );
    for tag in 0..PRODUCERS * EVENTS_PER_PRODUCER {
        assert!(observed.contains(&tag), "event {tag} was never reported");
    }
}

#[test]
fn single_processor_preserves_enqueue_order() {
    let queue = Arc::new(EventQueue::new());
    let (report_tx, report_rx) = mpsc::channel();

    for timestamp in 0..100 {
        let event = Event::swipe(Point::new(0, 0), Point::new(1, 0), timestamp);
        queue.enqueue(event).expect("queue is open");
    }
    queue.close();

    let processor = spawn_processor(0, Arc::clone(&queue), report_tx);

    let timestamps: Vec<_> = report_rx.iter().map(|r| r.event.timestamp()).collect();
    processor.join();

    let expected: Vec<_> = (0..100).collect();
    assert_eq!(timestamps, expected, "reports arrived out of order");
}
