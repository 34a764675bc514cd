// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Host-facing rendering seam
//!
//! The core never talks to a windowing library. A host implements
//! [`Canvas`] over its own drawing context and hands it to
//! [`draw_ragdoll`], which emits one filled circle per particle followed by
//! one line per constraint. Coordinates are truncated to integer pixels.

use crate::particle::Color;
use crate::ragdoll::Ragdoll;

/// Stroke width of constraint segments, in pixels
pub const SEGMENT_WIDTH: u32 = 2;

/// Color of constraint segments
pub const SEGMENT_COLOR: Color = Color::BLACK;

/// Drawing surface supplied by the host
pub trait Canvas {
    /// Draw a filled circle
    fn fill_circle(&mut self, center: (i32, i32), radius: f64, color: Color);

    /// Draw a straight line segment
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Color);
}

/// One drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle for a particle
    Circle {
        /// Centre in pixels
        center: (i32, i32),
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: Color,
    },
    /// Line segment for a constraint
    Line {
        /// Start in pixels
        from: (i32, i32),
        /// End in pixels
        to: (i32, i32),
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Color,
    },
}

impl DrawCommand {
    /// Replay this command onto a canvas
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => canvas.fill_circle(center, radius, color),
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => canvas.draw_line(from, to, width, color),
        }
    }
}

/// Recording canvas, useful for tests and deferred rendering
impl Canvas for Vec<DrawCommand> {
    fn fill_circle(&mut self, center: (i32, i32), radius: f64, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Color) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Drawing commands for one frame: circles first, then segments
pub fn draw_commands(ragdoll: &Ragdoll) -> impl Iterator<Item = DrawCommand> + '_ {
    let circles = ragdoll.parts().map(|part| DrawCommand::Circle {
        center: part.position.to_pixel(),
        radius: part.radius,
        color: part.color,
    });
    let lines = ragdoll.segments().map(|(from, to)| DrawCommand::Line {
        from: from.to_pixel(),
        to: to.to_pixel(),
        width: SEGMENT_WIDTH,
        color: SEGMENT_COLOR,
    });
    circles.chain(lines)
}

/// Draw a ragdoll onto a host canvas
pub fn draw_ragdoll<C: Canvas + ?Sized>(ragdoll: &Ragdoll, canvas: &mut C) {
    for command in draw_commands(ragdoll) {
        command.apply(canvas);
    }
}
