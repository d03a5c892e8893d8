/// Upper bound shared by every meter.
pub const METER_MAX: f32 = 100.0;

/// A bounded emotional scalar that loses one point per `interval` seconds.
///
/// Decay uses an accumulator so a long frame drains exactly as many points as
/// whole intervals elapsed, keeping the fractional remainder for the next tick.
#[derive(Debug, Clone, Copy)]
pub struct Meter {
    value: f32,
    timer: f32,
    interval: f32,
}

impl Meter {
    pub fn new(interval: f32) -> Self {
        Self {
            value: 0.0,
            timer: 0.0,
            interval,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_full(&self) -> bool {
        self.value >= METER_MAX
    }

    pub fn set(&mut self, value: f32) {
        self.value = clamp_meter(value);
    }

    pub fn add(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    /// Advance the decay accumulator. Idle while the meter is empty.
    pub fn decay(&mut self, dt: f32) {
        if self.value <= 0.0 || self.interval <= 0.0 {
            return;
        }
        self.timer += dt;
        while self.timer >= self.interval && self.value > 0.0 {
            self.value = (self.value - 1.0).max(0.0);
            self.timer -= self.interval;
        }
    }
}

fn clamp_meter(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, METER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_on_every_mutation() {
        let mut m = Meter::new(1.0);
        m.add(250.0);
        assert_eq!(m.value(), METER_MAX);
        m.add(-500.0);
        assert_eq!(m.value(), 0.0);
        m.set(f32::NAN);
        assert_eq!(m.value(), 0.0);
    }

    #[test]
    fn catches_up_after_long_frame() {
        let mut m = Meter::new(3.0);
        m.set(10.0);
        m.decay(10.0); // three whole intervals, 1s left over
        assert_eq!(m.value(), 7.0);
        m.decay(2.0);
        assert_eq!(m.value(), 6.0);
    }

    #[test]
    fn empty_meter_does_not_bank_time() {
        let mut m = Meter::new(2.0);
        m.decay(100.0);
        m.set(5.0);
        m.decay(1.0);
        assert_eq!(m.value(), 5.0);
    }
}
