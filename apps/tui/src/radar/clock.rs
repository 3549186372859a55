//! Maps wall-clock time onto simulation ticks.

pub const DEFAULT_TICK_RATE: f64 = 60.0;
const MAX_FRAME_DELTA: f64 = 0.25;
const MAX_TICKS_PER_FRAME: u32 = 250;

/// Returns how many whole ticks are due since `last_tick`, the fractional
/// remainder to carry into the next frame, and the new reference time.
///
/// The first call only records the time. Gaps longer than a quarter second
/// are clamped, and time running backwards yields no ticks. A frame never
/// yields more ticks than a quarter second's worth; backlog past that is
/// dropped rather than carried.
pub fn ticks_due(
    carry: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    tick_rate: f64,
) -> (u32, f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).max(0.0).min(MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let pending = delta.mul_add(tick_rate, carry);
    if pending.is_nan() || pending <= 0.0 {
        return (0, 0.0, Some(now_seconds));
    }

    let limit = (MAX_FRAME_DELTA * tick_rate)
        .ceil()
        .min(f64::from(MAX_TICKS_PER_FRAME));
    let whole = pending.floor();
    if whole > limit {
        return (limit as u32, 0.0, Some(now_seconds));
    }

    (whole as u32, pending - whole, Some(now_seconds))
}

/// Stateful wrapper around [`ticks_due`].
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    tick_rate: f64,
    carry: f64,
    last_tick: Option<f64>,
}

impl FrameClock {
    pub const fn new(tick_rate: f64) -> Self {
        Self {
            tick_rate,
            carry: 0.0,
            last_tick: None,
        }
    }

    pub const fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    pub fn advance(&mut self, now_seconds: f64) -> u32 {
        let (ticks, carry, last_tick) =
            ticks_due(self.carry, self.last_tick, now_seconds, self.tick_rate);
        self.carry = carry;
        self.last_tick = last_tick;
        ticks
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::{ticks_due, FrameClock, DEFAULT_TICK_RATE, MAX_TICKS_PER_FRAME};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn first_frame_records_time_without_ticking() {
        let (ticks, carry, last_tick) = ticks_due(0.0, None, 10.0, DEFAULT_TICK_RATE);

        assert_eq!(ticks, 0);
        assert_close(carry, 0.0);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn elapsed_time_becomes_whole_ticks_plus_carry() {
        let (ticks, carry, last_tick) = ticks_due(0.0, Some(4.0), 4.0625, 48.0);

        assert_eq!(ticks, 3);
        assert_close(carry, 0.0);
        assert_eq!(last_tick, Some(4.0625));

        let (ticks, carry, _) = ticks_due(0.4, Some(1.0), 1.05, 10.0);
        assert_eq!(ticks, 0);
        assert_close(carry, 0.9);
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let (ticks, _, _) = ticks_due(0.0, Some(3.0), 30.0, 60.0);

        assert_eq!(ticks, 15);
    }

    #[test]
    fn backwards_time_does_not_tick() {
        let (ticks, carry, last_tick) = ticks_due(0.5, Some(10.0), 9.0, 60.0);

        assert_eq!(ticks, 0);
        assert_close(carry, 0.5);
        assert_eq!(last_tick, Some(9.0));
    }

    #[test]
    fn huge_tick_rate_is_capped_per_frame() {
        let (ticks, carry, _) = ticks_due(0.0, Some(0.0), 0.016, 1e12);

        assert_eq!(ticks, MAX_TICKS_PER_FRAME);
        assert_close(carry, 0.0);
    }

    #[test]
    fn infinite_rate_does_not_poison_the_carry() {
        let mut clock = FrameClock::new(f64::INFINITY);
        let ticks: Vec<u32> = [0.0, 0.016, 0.032].iter().map(|now| clock.advance(*now)).collect();

        assert_eq!(ticks, vec![0, MAX_TICKS_PER_FRAME, MAX_TICKS_PER_FRAME]);
        assert_eq!(clock.advance(0.048), MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn clock_accumulates_fractions_across_frames() {
        let mut clock = FrameClock::new(24.0);
        let mut total = clock.advance(0.0);
        for frame in 1..=10 {
            total += clock.advance(f64::from(frame) * 0.0625);
        }
        assert_eq!(total, 15);
    }
}
