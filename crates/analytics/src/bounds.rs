use serde::Serialize;

/// Axis range covering a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Headroom added above the largest value so lines don't touch the frame.
    const HEADROOM: f64 = 0.05;

    /// Min and max over the finite values, or `None` when there are none.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Bounds { min: v, max: v }),
                Some(b) => Some(Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                }),
            })
    }

    /// Smallest bounds containing both.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// A drawable axis range: never empty, with headroom above the maximum.
    pub fn padded(self) -> Bounds {
        let (min, max) = if self.min == self.max {
            let pad = if self.min == 0.0 { 1.0 } else { self.min.abs() * 0.5 };
            (self.min - pad, self.max + pad)
        } else {
            (self.min, self.max)
        };

        Bounds {
            min,
            max: max + (max - min) * Self::HEADROOM,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_ignores_non_finite() {
        let b = Bounds::of([3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]).unwrap();
        assert_eq!(b, Bounds { min: -1.0, max: 7.5 });
    }

    #[test]
    fn test_of_empty_is_none() {
        assert_eq!(Bounds::of(Vec::<f64>::new()), None);
        assert_eq!(Bounds::of([f64::NAN]), None);
    }

    #[test]
    fn test_union() {
        let a = Bounds { min: 0.0, max: 5.0 };
        let b = Bounds { min: -2.0, max: 3.0 };
        assert_eq!(a.union(b), Bounds { min: -2.0, max: 5.0 });
    }

    #[test]
    fn test_padded_adds_headroom() {
        let b = Bounds { min: 0.0, max: 100.0 }.padded();
        assert_eq!(b.min, 0.0);
        assert!((b.max - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_widens_degenerate_range() {
        let zero = Bounds { min: 0.0, max: 0.0 }.padded();
        assert!(zero.span() > 0.0);
        assert!(zero.min < 0.0 && zero.max > 0.0);

        let flat = Bounds { min: 10.0, max: 10.0 }.padded();
        assert!(flat.min < 10.0 && flat.max > 10.0);
    }
}
