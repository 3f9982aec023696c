//! Async driver for the PCF8591 4-channel 8-bit I2C analog-to-digital
//! converter.
//!
//! The driver is generic over [`embedded_hal_async::i2c::I2c`], so it works
//! with any async I2C bus implementation and with host-side mocks in tests.
//!
//! # Device protocol
//!
//! Each transaction writes a one-byte control word and then reads. The
//! device always answers first with the *previous* conversion result, so
//! every read fetches one extra byte and discards the first. With the
//! auto-increment flag set the device steps through channels 0..=3 on
//! consecutive reads, which gives a full batch in a single transaction.
//!
//! # Example
//!
//! ```ignore
//! let mut adc = Pcf8591::new(i2c);
//! if adc.probe().await {
//!     let samples = adc.read_all().await?;
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

use embedded_hal_async::i2c::I2c;

/// Factory-default bus address (A0..A2 strapped low).
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Number of analog input channels.
pub const CHANNELS: usize = 4;

/// Control byte: auto-increment enabled, starting at channel 0.
const CTRL_AUTO_INCREMENT: u8 = 0x04;

/// PCF8591 driver over an async I2C bus.
pub struct Pcf8591<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Pcf8591<I2C> {
    /// Create a driver at the factory-default address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at a custom address (A0..A2 strapping).
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Check that the device answers on the bus.
    ///
    /// A single read is enough; the returned byte is a stale conversion and
    /// is discarded.
    pub async fn probe(&mut self) -> bool {
        let mut scratch = [0u8; 1];
        self.i2c.read(self.address, &mut scratch).await.is_ok()
    }

    /// Read a single channel.
    ///
    /// Channel indices above 3 are clamped to 3. Two bytes are read after
    /// selecting the channel; the first is the previous conversion and is
    /// discarded.
    pub async fn read_one(&mut self, channel: u8) -> Result<u8, I2C::Error> {
        let control = channel.min(CHANNELS as u8 - 1);
        let mut data = [0u8; 2];
        self.i2c
            .write_read(self.address, &[control], &mut data)
            .await?;
        Ok(data[1])
    }

    /// Read all four channels in one auto-increment transaction.
    ///
    /// Index *i* of the result corresponds to channel *i*.
    pub async fn read_all(&mut self) -> Result<[u8; CHANNELS], I2C::Error> {
        let mut data = [0u8; CHANNELS + 1];
        self.i2c
            .write_read(self.address, &[CTRL_AUTO_INCREMENT], &mut data)
            .await?;

        // Skip the stale first byte
        let mut out = [0u8; CHANNELS];
        out.copy_from_slice(&data[1..]);
        Ok(out)
    }

    /// Release the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use std::vec::Vec;

    /// Mock bus: records written control bytes and plays back one response
    /// buffer per read operation.
    struct MockBus {
        written: Vec<u8>,
        response: Vec<u8>,
        fail: bool,
    }

    impl MockBus {
        fn replies(response: &[u8]) -> Self {
            Self {
                written: Vec::new(),
                response: response.to_vec(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                written: Vec::new(),
                response: Vec::new(),
                fail: true,
            }
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl embedded_hal_async::i2c::I2c for MockBus {
        async fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => self.written.extend_from_slice(bytes),
                    Operation::Read(buffer) => {
                        for (slot, byte) in buffer.iter_mut().zip(self.response.iter()) {
                            *slot = *byte;
                        }
                    }
                }
            }
            Ok(())
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
                Poll::Pending => panic!("Mock future returned Pending unexpectedly"),
            }
        }
    }

    #[test]
    fn test_read_one_discards_stale_byte() {
        let mut adc = Pcf8591::new(MockBus::replies(&[0xAA, 0x42]));
        let value = block_on(adc.read_one(2)).unwrap();
        assert_eq!(value, 0x42);
        assert_eq!(adc.release().written, &[0x02]);
    }

    #[test]
    fn test_read_one_clamps_channel() {
        let mut adc = Pcf8591::new(MockBus::replies(&[0, 0]));
        block_on(adc.read_one(7)).unwrap();
        assert_eq!(adc.release().written, &[0x03]);
    }

    #[test]
    fn test_read_all_skips_stale_byte_and_orders_channels() {
        let mut adc = Pcf8591::new(MockBus::replies(&[0xFF, 10, 20, 30, 40]));
        let samples = block_on(adc.read_all()).unwrap();
        assert_eq!(samples, [10, 20, 30, 40]);
        assert_eq!(adc.release().written, &[CTRL_AUTO_INCREMENT]);
    }

    #[test]
    fn test_read_all_propagates_bus_error() {
        let mut adc = Pcf8591::new(MockBus::failing());
        let result = block_on(adc.read_all());
        assert!(matches!(result, Err(ErrorKind::NoAcknowledge(_))));
    }

    #[test]
    fn test_probe() {
        let mut adc = Pcf8591::new(MockBus::replies(&[0x00]));
        assert!(block_on(adc.probe()));

        let mut adc = Pcf8591::new(MockBus::failing());
        assert!(!block_on(adc.probe()));
    }
}
