//! Signal Race Library
//!
//! A side-by-side race between a fixed-duration traffic signal and a
//! threshold-based adaptive one. The simulation runs headless or with a
//! Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
