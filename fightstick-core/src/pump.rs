//! ReportPump: feeds the echo layer into an output sink, one report per poll.

use crate::echo::EchoLayer;
use crate::output::{OutputError, OutputSink};
use crate::session::ReportSource;

/// Drives a [`ReportSource`] through an [`EchoLayer`] into an [`OutputSink`].
///
/// The sink's `send` completing is the poll tick: each call to
/// [`poll_once`](Self::poll_once) hands exactly one report to the transport.
///
/// # Error Handling
///
/// While the sink is not ready nothing is computed, so the session does not
/// advance on ticks the host never saw. A report whose transmission fails is
/// still consumed.
pub struct ReportPump<S, O> {
    echo: EchoLayer<S>,
    output: O,
}

impl<S: ReportSource, O: OutputSink> ReportPump<S, O> {
    /// Create a new pump from an echo layer and output sink.
    pub fn new(echo: EchoLayer<S>, output: O) -> Self {
        Self { echo, output }
    }

    /// Run the pump, sending reports indefinitely.
    ///
    /// Waits for the sink before the first report and again after the host
    /// goes away. Endpoint I/O errors are logged and skipped.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            self.output.wait_ready().await;
            #[cfg(feature = "defmt")]
            defmt::info!("output ready, sending reports");

            loop {
                match self.poll_once().await {
                    Ok(()) => {}
                    Err(OutputError::Io) => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("report dropped: {}", OutputError::Io);
                    }
                    Err(_e) => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("output lost: {}", _e);
                        break;
                    }
                }
            }
        }
    }

    /// Compute the report for this poll and send it.
    pub async fn poll_once(&mut self) -> Result<(), OutputError> {
        if !self.output.is_ready() {
            return Err(OutputError::NotReady);
        }
        let report = self.echo.next_report();
        self.output.send(&report).await
    }

    /// Get a reference to the echo layer.
    pub fn echo(&self) -> &EchoLayer<S> {
        &self.echo
    }

    /// Get a reference to the report source.
    pub fn source(&self) -> &S {
        self.echo.source()
    }

    /// Get a reference to the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the pump into its echo layer and output components.
    pub fn into_parts(self) -> (EchoLayer<S>, O) {
        (self.echo, self.output)
    }
}
