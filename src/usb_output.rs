//! USB HID output: enumerates as a HORI Pokken pad.

use defmt::{trace, warn};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidReaderWriter, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use fightstick_core::{OutputError, OutputSink};
use switch_proto::{OutputReport, Report, OUTPUT_REPORT_SIZE, REPORT_SIZE};

/// HORI vendor ID.
pub const VENDOR_ID: u16 = 0x0F0D;
/// Pokken Tournament Pro Pad product ID.
pub const PRODUCT_ID: u16 = 0x0092;

/// Pokken pad HID report descriptor.
///
/// - 16 buttons (14 used)
/// - 4-bit hat switch plus 4 bits of padding
/// - 4 stick axes, unsigned 8-bit
/// - 1 vendor byte in, 8 vendor bytes out
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Buttons (16 buttons) ---
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x35, 0x00, //   Physical Minimum (0)
    0x45, 0x01, //   Physical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x10, //   Report Count (16)
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Hat switch ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x25, 0x07, //   Logical Maximum (7)
    0x46, 0x3B, 0x01, //   Physical Maximum (315)
    0x75, 0x04, //   Report Size (4)
    0x95, 0x01, //   Report Count (1)
    0x65, 0x14, //   Unit (Degrees)
    0x09, 0x39, //   Usage (Hat switch)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    0x65, 0x00, //   Unit (None)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant) - padding
    //
    // --- Sticks ---
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x46, 0xFF, 0x00, //   Physical Maximum (255)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Vendor ---
    0x06, 0x00, 0xFF, //   Usage Page (Vendor Defined 0xFF00)
    0x09, 0x20, //   Usage (0x20)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x0A, 0x21, 0x26, //   Usage (0x2621)
    0x95, 0x08, //   Report Count (8)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

type UsbDriver<'d> = Driver<'d, USB>;

/// USB HID pad output.
///
/// Wraps an embassy-usb HID writer; each completed write is one poll tick.
pub struct UsbHidOutput<'d> {
    writer: HidWriter<'d, UsbDriver<'d>, REPORT_SIZE>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: HidWriter<'d, UsbDriver<'d>, REPORT_SIZE>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }
}

impl OutputSink for UsbHidOutput<'_> {
    async fn send(&mut self, report: &Report) -> Result<(), OutputError> {
        match self.writer.write(&report.to_bytes()).await {
            Ok(()) => Ok(()),
            Err(EndpointError::Disabled) => {
                self.ready = false;
                Err(OutputError::Disconnected)
            }
            Err(_) => Err(OutputError::Io),
        }
    }

    async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler for the OUT endpoint and control requests.
///
/// The console sends vendor output reports; they are decoded for tracing and
/// otherwise ignored.
pub struct OutputReportHandler;

impl RequestHandler for OutputReportHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        match OutputReport::from_bytes(data) {
            Ok(report) => trace!("Output report: {:?}", report),
            Err(e) => warn!("Malformed output report: {}", e),
        }
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the OUT-report reader and the IN-report writer.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, UsbDriver<'d>>,
    state: &'d mut State<'d>,
    poll_ms: u8,
) -> HidReaderWriter<'d, UsbDriver<'d>, OUTPUT_REPORT_SIZE, REPORT_SIZE> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms,
        max_packet_size: 64,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidReaderWriter::new(builder, state, config)
}
