//! USB HID gamepad output implementation.

use defmt::Format;
use embassy_usb::class::hid::{HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use pad_core::{GamepadReport, OutputError, OutputSink};

/// USB HID wire report.
///
/// This matches the HID report descriptor defined below.
/// Total size: 7 bytes (buttons: 2, hat: 1, axes: 4x1)
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Format)]
#[repr(C)]
pub struct HidReport {
    /// Button bitfield (16 buttons)
    pub buttons: u16,
    /// Hat switch (0 = centered, 1 = up, clockwise to 8 = up-left)
    pub hat: u8,
    /// Left stick X (-127 to 127)
    pub left_x: i8,
    /// Left stick Y (-127 to 127)
    pub left_y: i8,
    /// Right stick X (-127 to 127)
    pub right_x: i8,
    /// Right stick Y (-127 to 127)
    pub right_y: i8,
}

impl HidReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 7;

    /// Convert the report to bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let buttons_bytes = self.buttons.to_le_bytes();
        [
            buttons_bytes[0],
            buttons_bytes[1],
            self.hat,
            self.left_x as u8,
            self.left_y as u8,
            self.right_x as u8,
            self.right_y as u8,
        ]
    }
}

impl From<&GamepadReport> for HidReport {
    fn from(report: &GamepadReport) -> Self {
        Self {
            buttons: report.buttons.raw(),
            hat: report.hat.to_wire(),
            left_x: report.left_stick.x,
            left_y: report.left_stick.y,
            right_x: report.right_stick.x,
            right_y: report.right_stick.y,
        }
    }
}

/// HID Gamepad Report Descriptor.
///
/// This descriptor defines a gamepad with:
/// - 16 buttons
/// - a hat switch with null state (the dpad)
/// - 2 analog sticks (X/Y each, signed 8-bit)
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Buttons (16 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x10, //   Report Count (16)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Hat switch (dpad) ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x39, //   Usage (Hat switch)
    0x15, 0x01, //   Logical Minimum (1)
    0x25, 0x08, //   Logical Maximum (8)
    0x35, 0x00, //   Physical Minimum (0)
    0x46, 0x3B, 0x01, //   Physical Maximum (315)
    0x65, 0x14, //   Unit (Degrees)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    0x65, 0x00, //   Unit (None)
    //
    // --- Left Stick ---
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    //
    // --- Right Stick ---
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x95, 0x04, //   Report Count (4)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

/// USB HID gamepad output.
///
/// Wraps an embassy-usb HID writer to send gamepad reports.
pub struct UsbHidOutput<'d> {
    writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 8>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(
        writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 8>,
    ) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl<'d> OutputSink for UsbHidOutput<'d> {
    async fn send(&mut self, report: &GamepadReport) -> Result<(), OutputError> {
        let wire = HidReport::from(report);
        self.writer
            .write(&wire.as_bytes())
            .await
            .map_err(|_| OutputError::Io)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler (handles SET_REPORT, etc.).
///
/// Currently a no-op handler since we don't handle output reports.
pub struct PadRequestHandler;

impl RequestHandler for PadRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>>,
    state: &'d mut State<'d>,
) -> HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 8> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: 1,
        max_packet_size: 8,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    embassy_usb::class::hid::HidWriter::new(builder, state, config)
}
