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

//! Touchscreen interaction events.
//!
//! This module defines the central entities of the pipeline — the immutable
//! [`Event`] record describing one user interaction, and the
//! [`SwipeDirection`] classification derived from a swipe's displacement.
//!
//! Events are constructed once, by the generator, and then move by value
//! through the queue to a processor. Nothing mutates an event after
//! construction.

use std::fmt;

use thiserror::Error;

/// Errors raised when an event is constructed with geometry that does not
/// match its kind. These cannot occur through the [`Event::tap`] and
/// [`Event::swipe`] constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("swipe event constructed without a destination")]
    MissingDestination,

    #[error("tap event constructed with a destination")]
    UnexpectedDestination,
}

/// A screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The kind of user interaction an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Tap,
    Swipe,
}

/// An immutable record of one touchscreen interaction.
///
/// A tap carries only its position; a swipe additionally carries the point
/// where the gesture ended. The pairing of kind and destination is enforced
/// at construction and holds for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    origin: Point,
    destination: Option<Point>,
    timestamp: u64,
}

impl Event {
    /// Creates an event from raw parts, validating that the destination is
    /// present exactly when the kind is [`EventKind::Swipe`].
    ///
    /// # Errors
    ///
    /// Returns an [`EventError`] if a swipe is missing its destination or a
    /// tap carries one.
    pub fn new(
        kind: EventKind,
        origin: Point,
        destination: Option<Point>,
        timestamp: u64,
    ) -> Result<Self, EventError> {
        match (kind, destination) {
            (EventKind::Tap, Some(_)) => Err(EventError::UnexpectedDestination),
            (EventKind::Swipe, None) => Err(EventError::MissingDestination),
            _ => Ok(Self {
                kind,
                origin,
                destination,
                timestamp,
            }),
        }
    }

    /// Creates a tap event at the given position.
    pub fn tap(origin: Point, timestamp: u64) -> Self {
        Self {
            kind: EventKind::Tap,
            origin,
            destination: None,
            timestamp,
        }
    }

    /// Creates a swipe event between the given positions.
    ///
    /// The destination may equal the origin; such a zero-length swipe is a
    /// valid event and classifies as [`SwipeDirection::Up`].
    pub fn swipe(origin: Point, destination: Point, timestamp: u64) -> Self {
        Self {
            kind: EventKind::Swipe,
            origin,
            destination: Some(destination),
            timestamp,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The end point of the gesture. `Some` exactly when the event is a
    /// swipe.
    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// Wall-clock milliseconds since the Unix epoch, assigned at creation.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The classified direction of a swipe event; `None` for a tap.
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.destination
            .map(|destination| SwipeDirection::between(self.origin, destination))
    }
}

/// The dominant direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Classifies the direction of a swipe from its displacement.
    ///
    /// The axis with the larger absolute displacement wins. Two points of
    /// this policy are deliberate contracts, kept for compatibility with
    /// existing consumers and pinned by the unit tests:
    ///
    /// * a diagonal tie (`|dx| == |dy|`, nonzero) resolves to the vertical
    ///   axis;
    /// * a zero-length swipe resolves to [`SwipeDirection::Up`].
    ///
    /// The y axis grows downward, so a positive `dy` is [`Down`].
    ///
    /// [`Down`]: SwipeDirection::Down
    pub fn between(from: Point, to: Point) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx.abs() > dy.abs() {
            if dx > 0 { Self::Right } else { Self::Left }
        } else if dy > 0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        write!(f, "{name}")
    }
}
