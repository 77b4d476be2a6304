// File: crates/chart-core/src/scale.rs
// Summary: Linear domain -> range transform with "nice" tick generation.

/// Continuous linear mapping from a data domain onto a pixel range.
/// The range may be reversed (e.g. `[height, 0]` for a y axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A degenerate domain maps to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < 1e-12 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds `(i1, i2)` and increment. A negative increment means
/// ticks are `i / -inc`, otherwise `i * inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice ticks in `[start, stop]` (requires `start <= stop`), using steps of 1, 2 or 5 times a power of ten.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (i1, i2, inc) = tick_spec(start, stop, count as f64);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Positive distance between nice ticks, or 0 when it cannot be derived.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !(stop > start) {
        return 0.0;
    }
    let (_, _, inc) = tick_spec(start, stop, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_reversed_range() {
        let x = LinearScale::new((1901.0, 2023.0), (0.0, 700.0));
        assert_eq!(x.map(1901.0), 0.0);
        assert_eq!(x.map(2023.0), 700.0);
        let y = LinearScale::new((0.0, 10.0), (290.0, 0.0));
        assert_eq!(y.map(0.0), 290.0);
        assert_eq!(y.map(10.0), 0.0);
        assert_eq!(y.map(5.0), 145.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((1950.0, 1950.0), (0.0, 700.0));
        assert_eq!(s.map(1950.0), 350.0);
    }

    #[test]
    fn year_ticks() {
        let want: Vec<f64> = (1910..=2020).step_by(10).map(|y| y as f64).collect();
        assert_eq!(ticks(1901.0, 2023.0, 10), want);
        assert_eq!(tick_step(1901.0, 2023.0, 10), 10.0);
    }

    #[test]
    fn count_ticks_from_zero() {
        assert_eq!(ticks(0.0, 14.0, 10).len(), 15);
        let t = ticks(0.0, 14.0, 5);
        assert_eq!(t, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]);
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert!((t[3] - 0.3).abs() < 1e-12);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn edge_cases() {
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    }
}
