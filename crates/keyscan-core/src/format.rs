//! Event formatting: one fixed-column text record per input event.

use std::borrow::Cow;
use std::fmt;

use crate::{EventKind, InputEvent, Scancode, TimingContext, Timestamp};

/// Column delimiter shared by the display and the history log.
pub const DELIMITER: char = '\t';

/// Column header written once before the first event.
pub const HEADER: &str = "Time\tDelta\tCode\tChar\tEvent";

/// Resolves a scan code to a layout-independent key name.
pub trait KeyNameResolver {
    fn key_name(&self, scancode: Scancode) -> Cow<'static, str>;
}

/// A formatted event line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub elapsed: u64,
    pub delta: u64,
    pub code: u32,
    pub label: String,
    pub kind: EventKind,
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.elapsed,
            self.delta,
            self.code,
            self.label,
            self.kind,
            d = DELIMITER
        )
    }
}

/// Format `event` against `timing`.
///
/// Returns the record and the event's timestamp; the caller advances
/// `timing` with it once the record has been written.
pub fn format_event<R>(
    event: &InputEvent,
    timing: &TimingContext,
    keys: &R,
) -> (DisplayRecord, Timestamp)
where
    R: KeyNameResolver + ?Sized,
{
    let at = event.timestamp();
    let (code, label) = match event {
        InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => {
            (key.symbol.0, keys.key_name(key.scancode).into_owned())
        }
        InputEvent::MouseButtonDown(mouse) | InputEvent::MouseButtonUp(mouse) => {
            (u32::from(mouse.button), mouse.button.to_string())
        }
    };

    let record = DisplayRecord {
        elapsed: timing.elapsed(at),
        delta: timing.delta(at),
        code,
        label,
        kind: event.kind(),
    };
    (record, at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubKeys;
    use crate::{KeyboardEvent, MouseButtonEvent, SymbolCode};

    fn key_a(timestamp: u64) -> KeyboardEvent {
        KeyboardEvent {
            timestamp: Timestamp(timestamp),
            symbol: SymbolCode(97),
            scancode: Scancode(4),
        }
    }

    #[test]
    fn test_keydown_record() {
        let mut timing = TimingContext::new(Timestamp(0));
        timing.advance(Timestamp(70));

        let (record, at) = format_event(&InputEvent::KeyDown(key_a(120)), &timing, &StubKeys);
        assert_eq!(record.to_string(), "120\t50\t97\tA\tkeydown");
        assert_eq!(at, Timestamp(120));
    }

    #[test]
    fn test_keyup_uses_scancode_name_not_symbol() {
        let timing = TimingContext::new(Timestamp(0));
        let event = InputEvent::KeyUp(KeyboardEvent {
            timestamp: Timestamp(10),
            symbol: SymbolCode(113), // 'q' on an AZERTY layout
            scancode: Scancode(4),
        });

        let (record, _) = format_event(&event, &timing, &StubKeys);
        assert_eq!(record.to_string(), "10\t10\t113\tA\tkeyup");
    }

    #[test]
    fn test_mouse_record_repeats_button() {
        let mut timing = TimingContext::new(Timestamp(0));
        timing.advance(Timestamp(120));
        let event = InputEvent::MouseButtonDown(MouseButtonEvent {
            timestamp: Timestamp(200),
            button: 1,
        });

        let (record, _) = format_event(&event, &timing, &StubKeys);
        assert_eq!(record.to_string(), "200\t80\t1\t1\tbuttondown");
    }

    #[test]
    fn test_unknown_scancode_leaves_label_empty() {
        let timing = TimingContext::new(Timestamp(0));
        let event = InputEvent::KeyDown(KeyboardEvent {
            timestamp: Timestamp(3),
            symbol: SymbolCode(0),
            scancode: Scancode::UNKNOWN,
        });

        let (record, _) = format_event(&event, &timing, &StubKeys);
        assert_eq!(record.to_string(), "3\t3\t0\t\tkeydown");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let mut timing = TimingContext::new(Timestamp(5));
        timing.advance(Timestamp(30));
        let event = InputEvent::KeyDown(key_a(64));

        let first = format_event(&event, &timing, &StubKeys);
        let second = format_event(&event, &timing, &StubKeys);
        assert_eq!(first, second);
        assert_eq!(first.0.to_string(), second.0.to_string());
    }

    #[test]
    fn test_header_has_five_columns() {
        assert_eq!(HEADER.split(DELIMITER).count(), 5);
    }
}
