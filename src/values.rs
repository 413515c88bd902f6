use clap::ValueEnum;
use std::f64::consts::PI;

/// Terminal value curves selectable from the demo binaries. Each maps a
/// horizontal ratio in `[0, 1)` to the value of the terminal node there.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ValueFn {
    /// Two full sine periods across the terminal row.
    Sine,
    /// Value grows linearly with horizontal position.
    Ramp,
    /// High at both edges, lowest in the middle.
    Vee,
}

impl ValueFn {
    pub fn apply(&self, h_ratio: f64) -> f64 {
        match self {
            ValueFn::Sine => (4.0 * h_ratio * PI).sin(),
            ValueFn::Ramp => h_ratio,
            ValueFn::Vee => (h_ratio - 0.5).abs() * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_starts_at_zero() {
        assert!(ValueFn::Sine.apply(0.0).abs() < 1e-12);
    }

    #[test]
    fn test_ramp_is_identity() {
        assert_eq!(ValueFn::Ramp.apply(0.25), 0.25);
    }

    #[test]
    fn test_vee_symmetry() {
        assert_eq!(ValueFn::Vee.apply(0.0), 1.0);
        assert_eq!(ValueFn::Vee.apply(0.5), 0.0);
        assert_eq!(ValueFn::Vee.apply(0.25), ValueFn::Vee.apply(0.75));
    }
}
