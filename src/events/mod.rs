//! Event types and observers used by the viewer.
//!
//! Submodules:
//! - [`cycleaction`] – advance the character to the next action in the cycle
//! - [`switchdebug`] – toggle the debug visualization on/off

pub mod cycleaction;
pub mod switchdebug;
