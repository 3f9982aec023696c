//! ReportAssembler: folds all configured input sources into one report per
//! polling tick.

use crate::axis::{map_axis, NEUTRAL_RAW};
use crate::config::{InputConfig, InputSource};
use crate::input::{AnalogReader, PinReader, ANALOG_CHANNELS};
use crate::types::{GamepadReport, HatState};

/// Per-tick report assembly over a validated input registry.
///
/// One call to [`assemble`](Self::assemble) is one tick: a single batch
/// read of the analog channels followed by one pass over the registry,
/// each source writing its disjoint part of a fresh [`GamepadReport`].
///
/// # Error Handling
///
/// A failed batch read never aborts the tick. The assembler keeps the last
/// successful batch and substitutes it for the failed one; before the first
/// successful read the cache holds the neutral raw value, so a dead
/// converter degrades to centered axes rather than an incomplete report.
pub struct ReportAssembler<'a> {
    config: InputConfig<'a>,
    /// Last-known-good raw samples, seeded to neutral.
    last_samples: [u8; ANALOG_CHANNELS],
}

impl<'a> ReportAssembler<'a> {
    /// Create an assembler over a validated registry.
    #[must_use]
    pub const fn new(config: InputConfig<'a>) -> Self {
        Self {
            config,
            last_samples: [NEUTRAL_RAW; ANALOG_CHANNELS],
        }
    }

    /// Run one polling tick and return the assembled report.
    pub async fn assemble(
        &mut self,
        pins: &impl PinReader,
        adc: &mut impl AnalogReader,
    ) -> GamepadReport {
        if let Ok(samples) = adc.read_all().await {
            self.last_samples = samples;
        }
        let samples = self.last_samples;

        let mut report = GamepadReport::neutral();
        for source in self.config.sources() {
            match *source {
                InputSource::Digital { action, pin } => {
                    // Pulled up: low means pressed
                    if !pins.read_pin(pin) {
                        report.buttons |= action;
                    }
                }
                InputSource::Dpad { pins: dpad_pins } => {
                    let [up, right, down, left] = dpad_pins.map(|pin| !pins.read_pin(pin));
                    report.hat = HatState::from_pressed(up, right, down, left);
                }
                InputSource::Axis { axis, config } => {
                    report.set_axis(axis, map_axis(samples[config.channel as usize], config));
                }
            }
        }
        report
    }

    /// The registry this assembler reads from.
    #[must_use]
    pub const fn config(&self) -> &InputConfig<'a> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::axis::AxisConfig;
    use crate::input::ReadError;
    use crate::types::{AxisId, Buttons};
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use std::vec;
    use std::vec::Vec;

    /// The full wiring table used by the firmware: dpad, seven buttons,
    /// four axes with the left stick's Y inverted.
    static SOURCES: [InputSource; 12] = [
        InputSource::Dpad { pins: [18, 19, 17, 16] },
        InputSource::Digital { action: Buttons::SOUTH, pin: 7 },
        InputSource::Digital { action: Buttons::EAST, pin: 8 },
        InputSource::Digital { action: Buttons::NORTH, pin: 5 },
        InputSource::Digital { action: Buttons::WEST, pin: 6 },
        InputSource::Digital { action: Buttons::MODE, pin: 9 },
        InputSource::Digital { action: Buttons::SELECT, pin: 22 },
        InputSource::Digital { action: Buttons::START, pin: 26 },
        InputSource::Axis {
            axis: AxisId::LeftX,
            config: AxisConfig { channel: 2, invert: false },
        },
        InputSource::Axis {
            axis: AxisId::LeftY,
            config: AxisConfig { channel: 3, invert: true },
        },
        InputSource::Axis {
            axis: AxisId::RightX,
            config: AxisConfig { channel: 1, invert: false },
        },
        InputSource::Axis {
            axis: AxisId::RightY,
            config: AxisConfig { channel: 0, invert: false },
        },
    ];

    fn assembler() -> ReportAssembler<'static> {
        ReportAssembler::new(InputConfig::new(&SOURCES).unwrap())
    }

    // Pins listed here read low (pressed); everything else idles high.
    struct MockPins {
        low: Vec<u8>,
    }

    impl MockPins {
        fn idle() -> Self {
            Self { low: Vec::new() }
        }

        fn pressed(low: &[u8]) -> Self {
            Self { low: low.to_vec() }
        }
    }

    impl PinReader for MockPins {
        fn read_pin(&self, pin: u8) -> bool {
            !self.low.contains(&pin)
        }
    }

    // Mock converter returning a scripted sequence of batch results.
    struct MockAdc {
        batches: Vec<Result<[u8; ANALOG_CHANNELS], ReadError>>,
        index: usize,
    }

    impl MockAdc {
        fn new(batches: Vec<Result<[u8; ANALOG_CHANNELS], ReadError>>) -> Self {
            Self { batches, index: 0 }
        }

        fn neutral() -> Self {
            Self::new(vec![Ok([NEUTRAL_RAW; ANALOG_CHANNELS])])
        }
    }

    impl AnalogReader for MockAdc {
        fn read_one(&mut self, channel: u8) -> impl Future<Output = Result<u8, ReadError>> {
            let result = match self.batches.first() {
                Some(Ok(batch)) => Ok(batch[channel as usize]),
                _ => Err(ReadError::Io),
            };
            core::future::ready(result)
        }

        fn read_all(
            &mut self,
        ) -> impl Future<Output = Result<[u8; ANALOG_CHANNELS], ReadError>> {
            // Repeat the last scripted batch once the script runs out
            let i = self.index.min(self.batches.len().saturating_sub(1));
            self.index += 1;
            core::future::ready(self.batches[i])
        }

        fn is_connected(&self) -> bool {
            matches!(self.batches.last(), Some(Ok(_)))
        }
    }

    // Helper to run a future to completion (simple blocking executor)
    fn block_on<F: Future>(mut f: F) -> F::Output {
        fn noop_raw_waker() -> RawWaker {
            fn noop(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                noop_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
            RawWaker::new(core::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut cx = Context::from_waker(&waker);

        // SAFETY: We don't move f after pinning
        let mut f = unsafe { Pin::new_unchecked(&mut f) };

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {
                    panic!("Mock future returned Pending unexpectedly");
                }
            }
        }
    }

    #[test]
    fn test_idle_inputs_produce_neutral_report() {
        let mut asm = assembler();
        let pins = MockPins::idle();
        let mut adc = MockAdc::neutral();

        let report = block_on(asm.assemble(&pins, &mut adc));
        assert!(report.is_neutral());
    }

    #[test]
    fn test_digital_sources_are_independent() {
        let mut asm = assembler();
        // SOUTH on pin 7 and SELECT on pin 22 pressed together
        let pins = MockPins::pressed(&[7, 22]);
        let mut adc = MockAdc::neutral();

        let report = block_on(asm.assemble(&pins, &mut adc));
        assert_eq!(report.buttons, Buttons::SOUTH | Buttons::SELECT);
        assert_eq!(report.hat, HatState::Centered);
    }

    #[test]
    fn test_dpad_resolution_through_pins() {
        let mut asm = assembler();
        // down(17) + left(16) + right(19) pressed: down wins, left before right
        let pins = MockPins::pressed(&[17, 16, 19]);
        let mut adc = MockAdc::neutral();

        let report = block_on(asm.assemble(&pins, &mut adc));
        assert_eq!(report.hat, HatState::DownLeft);
        assert!(report.buttons.is_empty());
    }

    #[test]
    fn test_axes_follow_channel_mapping() {
        let mut asm = assembler();
        let pins = MockPins::idle();
        // channels: 0=ry, 1=rx, 2=lx, 3=ly(inverted)
        let mut adc = MockAdc::new(vec![Ok([0, 255, 200, 0])]);

        let report = block_on(asm.assemble(&pins, &mut adc));
        assert_eq!(report.right_stick.y, -128); // ch0 = 0
        assert_eq!(report.right_stick.x, 127); // ch1 = 255
        assert_eq!(report.left_stick.x, 72); // ch2 = 200 -> 200-128
        assert_eq!(report.left_stick.y, 127); // ch3 = 0, inverted
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let mut asm = assembler();
        let pins = MockPins::pressed(&[18, 16, 9]);
        let mut adc = MockAdc::new(vec![Ok([10, 20, 230, 240]), Ok([10, 20, 230, 240])]);

        let first = block_on(asm.assemble(&pins, &mut adc));
        let second = block_on(asm.assemble(&pins, &mut adc));
        assert_eq!(first, second);
        assert_eq!(first.hat, HatState::UpLeft);
        assert!(first.buttons.contains(Buttons::MODE));
    }

    #[test]
    fn test_read_error_degrades_to_centered_axes() {
        let mut asm = assembler();
        let pins = MockPins::pressed(&[7]);
        let mut adc = MockAdc::new(vec![Err(ReadError::Io)]);

        let report = block_on(asm.assemble(&pins, &mut adc));
        // Axes fall back to the neutral seed (maps to 0), digital part intact
        assert_eq!(report.left_stick, crate::types::AnalogStick::NEUTRAL);
        assert_eq!(report.right_stick, crate::types::AnalogStick::NEUTRAL);
        assert_eq!(report.buttons, Buttons::SOUTH);
    }

    #[test]
    fn test_read_error_keeps_last_good_samples() {
        let mut asm = assembler();
        let pins = MockPins::idle();
        let mut adc = MockAdc::new(vec![Ok([0, 255, 200, 128]), Err(ReadError::Nack)]);

        let good = block_on(asm.assemble(&pins, &mut adc));
        let degraded = block_on(asm.assemble(&pins, &mut adc));
        assert_eq!(good, degraded);
        assert_eq!(degraded.right_stick.x, 127);
    }
}
