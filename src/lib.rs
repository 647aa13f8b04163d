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

//! # Touchscreen event pipeline.
//!
//! A concurrent simulation of touchscreen input handling: a generator thread
//! synthesizes tap and swipe events at a fixed cadence, and one or more
//! processor threads drain a shared queue, classify each event, and report
//! it.
//!
//! ## Pipeline
//!
//! ```text
//! Generator → EventQueue → Processor(s) → Report sink
//! ```
//!
//! 1. [`event`] — the immutable [`event::Event`] value and the pure swipe
//!    direction classification.
//! 2. [`queue`] — the thread-safe blocking FIFO [`queue::EventQueue`], the
//!    only shared mutable state in the pipeline.
//! 3. [`generator`] — the producer worker: one random event per tick.
//! 4. [`processor`] — the consumer workers and the [`processor::Report`]
//!    line format.
//! 5. [`config`] — the on-disk application configuration.
//!
//! Shutdown propagates through the queue: once producers have stopped,
//! [`queue::EventQueue::close`] wakes every blocked consumer, queued events
//! drain in order, and each processor exits on observing
//! [`queue::Closed`].

pub mod config;
pub mod event;
pub mod generator;
pub mod processor;
pub mod queue;
