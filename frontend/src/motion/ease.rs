#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Constant speed, used for looping motion.
    Linear,
    /// Cubic deceleration (`power3.out`).
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn power3_out_front_loads_progress() {
        assert!((Ease::Power3Out.apply(0.5) - 0.875).abs() < 1e-12);
        assert!(Ease::Power3Out.apply(0.2) > Ease::Linear.apply(0.2));
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Linear.apply(4.0), 1.0);
    }
}
