use log::{debug, warn};
use std::fmt;

/// Fixed parameters of the counter model.
pub mod defaults {
    pub const SLOT_COUNT: usize = 3;
    pub const DIGIT_WIDTH: u32 = 3;
    pub const DEFAULT_BASE: u32 = 10;
    pub const MIN_BASE: u32 = 2;
    pub const MAX_BASE: u32 = 16;
}

use defaults::{DEFAULT_BASE, DIGIT_WIDTH, MAX_BASE, MIN_BASE, SLOT_COUNT};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// Custom error type for base configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBaseError {
    /// A candidate base parsed as an integer but falls outside [2, 16].
    OutOfRange { slot: usize, base: u32 },
    /// A candidate base did not parse as an integer at all.
    Unparsable { slot: usize, input: String },
}

impl fmt::Display for InvalidBaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBaseError::OutOfRange { slot, base } => write!(
                f,
                "Timer {}: base {} is outside the supported range {}-{}",
                slot + 1,
                base,
                MIN_BASE,
                MAX_BASE
            ),
            InvalidBaseError::Unparsable { slot, input } => {
                write!(f, "Timer {}: '{}' is not an integer", slot + 1, input)
            }
        }
    }
}

impl std::error::Error for InvalidBaseError {}

/// One count-up counter: a value and the base it is displayed in.
///
/// The value always stays below `base^3` because [`CounterBank::advance`]
/// wraps it there; the base is only ever set through validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSlot {
    value: u32,
    base: u32,
}

impl CounterSlot {
    fn new() -> Self {
        Self {
            value: 0,
            base: DEFAULT_BASE,
        }
    }

    /// Upper bound of the slot's value under the current base.
    fn span(&self) -> u32 {
        self.base.pow(DIGIT_WIDTH)
    }

    fn advance(&mut self) {
        self.value = (self.value + 1) % self.span();
    }

    /// Render the value as exactly [`DIGIT_WIDTH`](defaults::DIGIT_WIDTH)
    /// digits, most-significant first.
    ///
    /// Takes exactly three divide/modulo steps regardless of magnitude, so a
    /// value left over from a larger base still yields three digits with any
    /// higher-order digits silently dropped. That matches the fixed-width
    /// displays, which never grow a fourth digit.
    fn format(&self) -> String {
        let mut rest = self.value;
        let mut digits = [0u8; DIGIT_WIDTH as usize];
        for digit in digits.iter_mut().rev() {
            *digit = DIGITS[(rest % self.base) as usize];
            rest /= self.base;
        }
        digits.iter().map(|&b| char::from(b)).collect()
    }
}

/// Three independent counter slots plus the shared running flag.
///
/// The bank itself never schedules anything: the shell decides when to call
/// [`advance`](CounterBank::advance) (once per second while running) and
/// re-reads [`format`](CounterBank::format) afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterBank {
    slots: [CounterSlot; SLOT_COUNT],
    running: bool,
}

impl Default for CounterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterBank {
    pub fn new() -> Self {
        Self {
            slots: [CounterSlot::new(); SLOT_COUNT],
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin applying ticks. A no-op if already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            debug!("counters started");
        }
    }

    /// Stop applying ticks. Idempotent; values are kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero every slot's value. Bases are kept.
    pub fn reset(&mut self) {
        self.running = false;
        for slot in &mut self.slots {
            slot.value = 0;
        }
        debug!("counters reset");
    }

    /// Apply one tick to every slot, wrapping each at `base^3`.
    ///
    /// Harmless while stopped; the shell is expected not to call it then.
    pub fn advance(&mut self) {
        for slot in &mut self.slots {
            slot.advance();
        }
    }

    /// Change one slot's display base. The slot's value is not reset.
    pub fn set_base(&mut self, index: usize, base: u32) -> Result<(), InvalidBaseError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            warn!("rejected base {} for timer {}", base, index + 1);
            return Err(InvalidBaseError::OutOfRange { slot: index, base });
        }
        self.slots[index].base = base;
        debug!("timer {} now counts in base {}", index + 1, base);
        Ok(())
    }

    /// Change all three bases at once, the way the settings form applies
    /// them: every candidate is validated before any slot is touched, so a
    /// single bad entry leaves the whole bank unchanged.
    pub fn apply_bases(&mut self, bases: [u32; SLOT_COUNT]) -> Result<(), InvalidBaseError> {
        for (slot, &base) in bases.iter().enumerate() {
            if !(MIN_BASE..=MAX_BASE).contains(&base) {
                warn!("rejected base batch {:?}: timer {} invalid", bases, slot + 1);
                return Err(InvalidBaseError::OutOfRange { slot, base });
            }
        }
        for (slot, base) in self.slots.iter_mut().zip(bases) {
            slot.base = base;
        }
        debug!("bases changed to {:?}", bases);
        Ok(())
    }

    /// The slot's current display text: exactly three digits in its base.
    pub fn format(&self, index: usize) -> String {
        self.slots[index].format()
    }

    pub fn value(&self, index: usize) -> u32 {
        self.slots[index].value
    }

    pub fn base(&self, index: usize) -> u32 {
        self.slots[index].base
    }

    pub fn bases(&self) -> [u32; SLOT_COUNT] {
        self.slots.map(|slot| slot.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_bank_is_stopped_with_three_zeroed_decimal_slots() {
        let bank = CounterBank::new();
        assert!(!bank.is_running());
        for slot in 0..SLOT_COUNT {
            assert_eq!(bank.value(slot), 0);
            assert_eq!(bank.base(slot), DEFAULT_BASE);
            assert_eq!(bank.format(slot), "000");
        }
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut bank = CounterBank::new();
        bank.start();
        assert!(bank.is_running());
        bank.start();
        assert!(bank.is_running());
        bank.stop();
        assert!(!bank.is_running());
        bank.stop();
        assert!(!bank.is_running());
    }

    #[test]
    fn start_then_stop_without_ticks_leaves_values_unchanged() {
        let mut bank = CounterBank::new();
        bank.advance();
        bank.advance();
        bank.start();
        bank.stop();
        for slot in 0..SLOT_COUNT {
            assert_eq!(bank.value(slot), 2);
        }
    }

    #[test]
    fn reset_zeroes_values_and_stops_but_keeps_bases() {
        let mut bank = CounterBank::new();
        bank.apply_bases([2, 8, 16]).unwrap();
        bank.start();
        for _ in 0..5 {
            bank.advance();
        }
        bank.reset();
        assert!(!bank.is_running());
        assert_eq!(bank.bases(), [2, 8, 16]);
        for slot in 0..SLOT_COUNT {
            assert_eq!(bank.value(slot), 0);
            assert_eq!(bank.format(slot), "000");
        }
    }

    #[test]
    fn decimal_counter_wraps_back_to_zero_after_one_thousand_ticks() {
        let mut bank = CounterBank::new();
        for _ in 0..1_000 {
            bank.advance();
        }
        assert_eq!(bank.value(0), 0);
        assert_eq!(bank.format(0), "000");
    }

    #[test]
    fn hexadecimal_display_uses_letter_digits_and_carries() {
        let mut bank = CounterBank::new();
        bank.set_base(0, 16).unwrap();
        bank.advance();
        assert_eq!(bank.format(0), "001");
        for _ in 1..255 {
            bank.advance();
        }
        assert_eq!(bank.format(0), "0FF");
        bank.advance();
        assert_eq!(bank.format(0), "100");
    }

    #[test]
    fn set_base_rejects_candidates_outside_the_supported_range() {
        let mut bank = CounterBank::new();
        for bad in [0, 1, 17, 100] {
            let err = bank.set_base(0, bad).unwrap_err();
            assert_eq!(err, InvalidBaseError::OutOfRange { slot: 0, base: bad });
        }
        assert_eq!(bank.bases(), [10, 10, 10]);
    }

    #[test]
    fn apply_bases_rejects_the_whole_batch_on_one_bad_entry() {
        let mut bank = CounterBank::new();
        let err = bank.apply_bases([2, 17, 16]).unwrap_err();
        assert_eq!(err, InvalidBaseError::OutOfRange { slot: 1, base: 17 });
        assert_eq!(bank.bases(), [10, 10, 10]);

        bank.apply_bases([2, 8, 16]).unwrap();
        assert_eq!(bank.bases(), [2, 8, 16]);
    }

    #[test]
    fn lowering_a_base_keeps_the_value_and_truncates_the_display() {
        let mut bank = CounterBank::new();
        for _ in 0..150 {
            bank.advance();
        }
        assert_eq!(bank.format(0), "150");
        bank.set_base(0, 2).unwrap();
        // 150 does not fit three binary digits; the display shows the three
        // low-order digits and the value itself is untouched.
        assert_eq!(bank.value(0), 150);
        assert_eq!(bank.format(0), "110");
    }

    proptest! {
        #[test]
        fn a_full_cycle_returns_every_starting_value_to_itself(
            base in MIN_BASE..=MAX_BASE,
            seed in 0u32..4096,
        ) {
            let span = base.pow(DIGIT_WIDTH);
            let start = seed % span;
            let mut bank = CounterBank::new();
            bank.set_base(1, base).unwrap();
            for _ in 0..start {
                bank.advance();
            }
            prop_assert_eq!(bank.value(1), start);
            for _ in 0..span {
                bank.advance();
            }
            prop_assert_eq!(bank.value(1), start);
        }

        #[test]
        fn the_display_is_always_three_digits_of_the_slot_base(
            base in MIN_BASE..=MAX_BASE,
            ticks in 0u32..5_000,
        ) {
            let mut bank = CounterBank::new();
            bank.set_base(2, base).unwrap();
            for _ in 0..ticks {
                bank.advance();
            }
            let text = bank.format(2);
            prop_assert_eq!(text.chars().count(), 3);
            for ch in text.chars() {
                let digit = ch.to_digit(MAX_BASE).expect("display digit");
                prop_assert!(digit < base);
            }
        }
    }
}
