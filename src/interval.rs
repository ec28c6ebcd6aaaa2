//! Closed intervals used for boundary extents and pixel clipping.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the value lies within `epsilon` of either end.
    pub fn on_edge(&self, x: f32, epsilon: f32) -> bool {
        (x - self.min).abs() <= epsilon || (x - self.max).abs() <= epsilon
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(0.0, 10.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.5));
    }

    #[test]
    fn test_clamp_and_edges() {
        let interval = Interval::new(0.0, 600.0);
        assert_eq!(interval.clamp(-4.0), 0.0);
        assert_eq!(interval.clamp(700.0), 600.0);
        assert!(interval.on_edge(599.9999, 1e-3));
        assert!(!interval.on_edge(300.0, 1e-3));
    }
}
