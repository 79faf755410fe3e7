// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod projector;
pub mod records;
pub mod timestamp;

pub use projector::{keys, project, PathSegment, ProjectionError};
pub use records::{astronauts, iss_passes, to_astronauts, to_pass_entries, Astronaut, PassEntry};
pub use timestamp::{
    epoch_to_local_timestamp, epoch_to_timestamp, format_timestamp, DisplayZone, TimestampError,
};
