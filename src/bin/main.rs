#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::Timer;
use embassy_usb::class::hid::{HidReader, State};
use embassy_usb::{Builder, Config as UsbConfig};
use fightstick::usb_output::{PRODUCT_ID, VENDOR_ID};
use fightstick::{
    configure_usb_hid, CompletionFlag, EchoLayer, OutputReportHandler, ReportPump,
    UsbHidOutput, CONFIG,
};
use static_cell::StaticCell;
use switch_proto::OUTPUT_REPORT_SIZE;

#[cfg(feature = "printer")]
use fightstick::{payload::print_session, LedIndicator, PrintSession};
#[cfg(feature = "macro")]
use fightstick::{payload::STEPS, MacroSession};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

#[cfg(feature = "printer")]
type Session = PrintSession<'static, LedIndicator>;
#[cfg(feature = "macro")]
type Session = MacroSession<'static>;

/// Blink period of the on-board LED once the print is done.
const BLINK_MS: u64 = 250;

/// Raised by the printing session once the image is finished.
static COMPLETION: CompletionFlag = CompletionFlag::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fightstick starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    #[cfg(feature = "printer")]
    let session = match print_session(LedIndicator::new(&COMPLETION)) {
        Ok(session) => session,
        Err(e) => {
            defmt::error!("Payload rejected: {}", e);
            return;
        }
    };
    #[cfg(feature = "macro")]
    let session = MacroSession::new(CONFIG, STEPS);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(VENDOR_ID, PRODUCT_ID);
    usb_config.manufacturer = Some("HORI CO.,LTD.");
    usb_config.product = Some("POKKEN CONTROLLER");
    usb_config.max_power = 500;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let hid = configure_usb_hid(&mut builder, hid_state, CONFIG.poll_interval_ms());
    let (hid_reader, hid_writer) = hid.split();

    // Build the USB device
    let usb_device = builder.build();

    // Report pipeline: session -> echo -> USB
    let echo = EchoLayer::new(session, CONFIG.echo_factor());
    let pump = ReportPump::new(echo, UsbHidOutput::new(hid_writer));

    // Completion LED (on-board LED on Pico)
    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(output_report_task(hid_reader).unwrap());
    spawner.spawn(pump_task(pump).unwrap());
    spawner.spawn(led_task(led).unwrap());

    info!(
        "Fightstick initialized: echo {}, poll {} ms, {}",
        CONFIG.echo_factor(),
        CONFIG.poll_interval_ms(),
        CONFIG.sweep_mode()
    );
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Output report task - drains what the console sends on the OUT endpoint.
#[embassy_executor::task]
async fn output_report_task(reader: HidReader<'static, Driver<'static, USB>, OUTPUT_REPORT_SIZE>) {
    let mut handler = OutputReportHandler;
    reader.run(false, &mut handler).await;
}

/// Pump task - one report per host poll, forever.
#[embassy_executor::task]
async fn pump_task(mut pump: ReportPump<Session, UsbHidOutput<'static>>) {
    pump.run().await;
}

/// LED task - blinks once the print has finished.
#[embassy_executor::task]
async fn led_task(mut led: Output<'static>) {
    COMPLETION.wait().await;
    info!("Print finished");

    loop {
        led.toggle();
        Timer::after_millis(BLINK_MS).await;
    }
}
