//! Symbol timing plan

use morse_table::MorseSymbol;

/// Hold the output at one level for a number of time units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseStep {
    pub on: bool,
    pub units: u32,
}

impl PulseStep {
    const fn on(units: u32) -> Self {
        Self { on: true, units }
    }

    const fn off(units: u32) -> Self {
        Self { on: false, units }
    }
}

const DOT: &[PulseStep] = &[PulseStep::off(1), PulseStep::on(1)];
const DASH: &[PulseStep] = &[PulseStep::off(1), PulseStep::on(3)];
const GAP: &[PulseStep] = &[PulseStep::off(1), PulseStep::off(3)];
const OTHER: &[PulseStep] = &[PulseStep::off(1)];

/// Steps for one stream byte. Every byte starts with the output forced off
/// for one unit; bytes outside the Morse alphabet add nothing after that.
pub fn pulse_steps(byte: u8) -> &'static [PulseStep] {
    match MorseSymbol::from_byte(byte) {
        Some(MorseSymbol::Dot) => DOT,
        Some(MorseSymbol::Dash) => DASH,
        Some(MorseSymbol::Gap) => GAP,
        None => OTHER,
    }
}
