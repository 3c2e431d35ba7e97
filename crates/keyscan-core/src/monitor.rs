//! The monitor loop: wait, timestamp, format, display, repeat.

use std::io::Write;

use tracing::{debug, info};

use crate::{
    format_event, AppendOutcome, DisplayLog, DisplaySurface, InputEvent, KeyNameResolver,
    SourceError, SourceEvent, TimingContext, Timestamp,
};

/// Blocking input source (implemented by keyscan-platform).
pub trait EventSource: KeyNameResolver {
    /// Block until the next event is available.
    fn wait_next_event(&mut self) -> Result<SourceEvent, SourceError>;
}

/// Loop state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Recognized events formatted and appended.
    pub processed: u64,
    /// Events of kinds the monitor does not display.
    pub ignored: u64,
    /// Processed events whose display failed (history still written).
    pub render_failures: u64,
}

/// Owns the source, the display and the timing context for the whole session.
pub struct Monitor<E, S, W>
where
    E: EventSource,
    S: DisplaySurface,
    W: Write,
{
    source: E,
    display: DisplayLog<S, W>,
    timing: TimingContext,
    state: LoopState,
    summary: RunSummary,
}

impl<E, S, W> Monitor<E, S, W>
where
    E: EventSource,
    S: DisplaySurface,
    W: Write,
{
    /// `start` is the session start time; the first delta is measured from it.
    pub fn new(source: E, display: DisplayLog<S, W>, start: Timestamp) -> Self {
        Self {
            source,
            display,
            timing: TimingContext::new(start),
            state: LoopState::Running,
            summary: RunSummary::default(),
        }
    }

    pub fn write_header(&mut self) -> AppendOutcome {
        self.display.write_header()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn display(&self) -> &DisplayLog<S, W> {
        &self.display
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    /// Process exactly one event from the source.
    ///
    /// A source error terminates the loop and is returned to the caller.
    pub fn step(&mut self) -> Result<LoopState, SourceError> {
        if self.state == LoopState::Terminated {
            return Ok(LoopState::Terminated);
        }

        let next = match self.source.wait_next_event() {
            Ok(next) => next,
            Err(error) => {
                self.state = LoopState::Terminated;
                return Err(error);
            }
        };

        match next {
            SourceEvent::Terminate => {
                info!("Window closed, stopping monitor");
                self.state = LoopState::Terminated;
            }
            SourceEvent::Unrecognized(kind) => {
                debug!(kind, "Ignoring unrecognized event");
                self.summary.ignored += 1;
            }
            SourceEvent::Input(event) => self.process(&event),
        }

        Ok(self.state)
    }

    /// Run until the window is closed or the source fails.
    pub fn run(&mut self) -> Result<RunSummary, SourceError> {
        info!("Monitor loop started");
        while self.step()? == LoopState::Running {}
        info!(
            processed = self.summary.processed,
            ignored = self.summary.ignored,
            render_failures = self.summary.render_failures,
            "Monitor loop finished"
        );
        Ok(self.summary)
    }

    fn process(&mut self, event: &InputEvent) {
        let (record, at) = format_event(event, &self.timing, &self.source);
        debug!(
            kind = %record.kind,
            elapsed = record.elapsed,
            delta = record.delta,
            code = record.code,
            "Input event"
        );

        if self.display.append(&record) == AppendOutcome::RenderFailed {
            self.summary.render_failures += 1;
        }
        self.timing.advance(at);
        self.summary.processed += 1;
    }

    /// Release the source, surface and history writer.
    pub fn into_parts(self) -> (E, S, W) {
        let (surface, history) = self.display.into_parts();
        (self.source, surface, history)
    }
}
