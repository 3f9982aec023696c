//! Platform-agnostic gamepad input sources and report assembly.
//!
//! This crate provides the core abstractions for a GPIO/ADC gamepad without
//! any platform-specific dependencies. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`GamepadReport`], [`Buttons`], [`HatState`])
//! - [`config`]: The input source registry ([`InputSource`], [`InputConfig`])
//! - [`axis`]: Raw ADC sample to signed axis mapping ([`map_axis`])
//! - [`input`]: Collaborator traits ([`PinReader`], [`AnalogReader`])
//! - [`output`]: Output sink trait ([`OutputSink`])
//! - [`assembler`]: Per-tick report assembly ([`ReportAssembler`])
//!
//! # Model
//!
//! A configuration is an ordered list of input sources: plain buttons (one
//! GPIO, one action bit), a single 4-pin directional pad, and analog axes
//! (one ADC channel each). Every polling tick the [`ReportAssembler`] reads
//! the digital pins and one batch of ADC samples and folds them into a fresh
//! [`GamepadReport`].
//!
//! All GPIOs are assumed to be wired with pull-ups: a pin reads electrically
//! high when idle and low when pressed.
//!
//! # Example
//!
//! ```rust
//! use pad_core::{map_axis, AxisConfig};
//!
//! let cfg = AxisConfig { channel: 0, invert: false };
//! // A centered stick lands in the dead zone and reports exactly neutral.
//! assert_eq!(map_axis(131, cfg), 0);
//! // Outside the dead zone the value is simply re-centered.
//! assert_eq!(map_axis(200, cfg), 72);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod assembler;
pub mod axis;
pub mod config;
pub mod input;
pub mod output;
pub mod types;

// Re-export main types at crate root
pub use assembler::ReportAssembler;
pub use axis::{map_axis, AxisConfig, DEAD_ZONE, NEUTRAL_RAW};
pub use config::{ConfigError, InputConfig, InputSource, MAX_GPIO_PIN};
pub use input::{AnalogReader, PinReader, ReadError, ANALOG_CHANNELS};
pub use output::{OutputError, OutputSink};
pub use types::{AnalogStick, AxisId, Buttons, GamepadReport, HatState};
