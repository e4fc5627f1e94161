//! Build-time payload: run configuration, macro step list and printed image.

use core::fmt;
use fightstick_core::{
    Action, Bitmap, BitmapError, CompletionIndicator, Config, ConfigError, PrintSession, Step,
    SweepMode,
};

/// Sweep selected by the `zig-zag` feature.
pub const SWEEP_MODE: SweepMode = if cfg!(feature = "zig-zag") {
    SweepMode::ZigZag
} else {
    SweepMode::Simple
};

/// Run configuration, validated at compile time.
pub const CONFIG: Config = match Config::new(2, 8, SWEEP_MODE) {
    Ok(config) => config,
    Err(_) => panic!("invalid run configuration"),
};

/// Step list replayed by the `macro` build.
pub static STEPS: &[Step] = &[
    Step::new(Action::Nothing, 1),
    Step::new(Action::B, 5),
    Step::new(Action::Nothing, 1),
    Step::new(Action::Down, 5),
    Step::new(Action::Nothing, 1),
    Step::new(Action::Down, 5),
    Step::new(Action::Nothing, 1),
    Step::new(Action::A, 5),
    Step::new(Action::Nothing, 1),
    Step::new(Action::A, 5),
];

/// 320x120 binary PBM printed by the `printer` build.
pub static IMAGE: &[u8] = include_bytes!("../assets/image.pbm");

/// Error type for payload construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PayloadError {
    /// The embedded image is not a valid bitmap.
    Image(BitmapError),
    /// The configuration cannot print the embedded image.
    Config(ConfigError),
}

impl From<BitmapError> for PayloadError {
    fn from(e: BitmapError) -> Self {
        Self::Image(e)
    }
}

impl From<ConfigError> for PayloadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "embedded image: {e}"),
            Self::Config(e) => write!(f, "configuration: {e}"),
        }
    }
}

/// Build the printing session for the embedded image.
///
/// # Errors
///
/// Returns [`PayloadError`] if the image does not parse or the configured
/// sweep cannot traverse it.
pub fn print_session<I: CompletionIndicator>(
    indicator: I,
) -> Result<PrintSession<'static, I>, PayloadError> {
    let bitmap = Bitmap::from_pbm(IMAGE)?;
    defmt::debug!(
        "image {}x{}, {} ink pixels",
        bitmap.width(),
        bitmap.height(),
        bitmap.ink_count()
    );
    Ok(PrintSession::with_indicator(CONFIG, bitmap, indicator)?)
}
