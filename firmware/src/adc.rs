//! PCF8591 adapter implementing the core's analog reader trait.

use defmt::warn;
use embassy_rp::i2c::{AbortReason, Async, Error as I2cError, I2c};
use pad_core::{AnalogReader, ReadError, ANALOG_CHANNELS};
use pcf8591::Pcf8591;

/// The I2C bus the ADC sits on.
pub type AdcBus = I2c<'static, Async>;

/// Convert I2C errors to [`ReadError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule
/// issues (both `I2cError` and `ReadError` are defined in external crates).
#[inline]
fn i2c_error_to_read_error(e: I2cError) -> ReadError {
    match e {
        I2cError::Abort(AbortReason::NoAcknowledge) => ReadError::Nack,
        _ => ReadError::Io,
    }
}

/// Analog input source backed by a PCF8591 on the I2C bus.
pub struct Pcf8591Input {
    adc: Pcf8591<AdcBus>,
    connected: bool,
}

impl Pcf8591Input {
    #[must_use]
    pub fn new(i2c: AdcBus) -> Self {
        Self {
            adc: Pcf8591::new(i2c),
            connected: false,
        }
    }

    /// Check that the converter answers on the bus.
    pub async fn probe(&mut self) -> bool {
        self.connected = self.adc.probe().await;
        self.connected
    }
}

impl AnalogReader for Pcf8591Input {
    async fn read_one(&mut self, channel: u8) -> Result<u8, ReadError> {
        match self.adc.read_one(channel).await {
            Ok(sample) => {
                self.connected = true;
                Ok(sample)
            }
            Err(e) => {
                self.connected = false;
                let err = i2c_error_to_read_error(e);
                warn!("ADC channel {} read failed: {}", channel, err);
                Err(err)
            }
        }
    }

    async fn read_all(&mut self) -> Result<[u8; ANALOG_CHANNELS], ReadError> {
        match self.adc.read_all().await {
            Ok(samples) => {
                self.connected = true;
                Ok(samples)
            }
            Err(e) => {
                self.connected = false;
                let err = i2c_error_to_read_error(e);
                warn!("ADC batch read failed: {}", err);
                Err(err)
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
