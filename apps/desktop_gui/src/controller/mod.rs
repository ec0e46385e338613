//! Controller layer: input events, reducer-like pose transitions, and timed
//! animation sequencing.

pub mod events;
pub mod orchestration;
pub mod reducer;
pub mod sequencer;
