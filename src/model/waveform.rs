use std::f64::consts::TAU;

use crate::params::DriveParams;

/// Time window shown by the waveform plot, in seconds.
pub const WAVE_WINDOW: f64 = 0.02;
/// Number of points across the window.
pub const WAVE_POINTS: usize = 500;
/// Vertical range of the waveform plot.
pub const WAVE_Y_BOUNDS: [f64; 2] = [-1.2, 1.2];

/// Waveform plot points at animation time `t`.
///
/// The trace scrolls with `t`: `y = (voltage / 5) · sin(2π f (x − 0.1 t))`
/// for `x` evenly spaced over `[0, WAVE_WINDOW]`.
pub fn wave_samples(params: &DriveParams, t: f64) -> Vec<(f64, f64)> {
    let gain = params.volts() as f64 / 5.0;
    let frequency = params.frequency_hz() as f64;
    let last = (WAVE_POINTS - 1) as f64;

    (0..WAVE_POINTS)
        .map(|i| {
            let x = WAVE_WINDOW * i as f64 / last;
            let y = gain * (TAU * frequency * (x - 0.1 * t)).sin();
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_window() {
        let points = wave_samples(&DriveParams::default(), 0.0);
        assert_eq!(points.len(), WAVE_POINTS);
        assert_eq!(points[0].0, 0.0);
        assert!((points[WAVE_POINTS - 1].0 - WAVE_WINDOW).abs() < 1e-15);
    }

    #[test]
    fn gain_follows_voltage() {
        let params = DriveParams::default().with_frequency(50.0).with_voltage(2.5);
        let points = wave_samples(&params, 0.0);

        // 50 Hz over 20 ms is one full cycle; the peak sits at x = 5 ms
        let peak = points.iter().fold(0.0f64, |acc, &(_, y)| acc.max(y.abs()));
        assert!((peak - 0.5).abs() < 1e-3, "peak {peak}");
    }

    #[test]
    fn trace_scrolls_with_time() {
        let params = DriveParams::default().with_frequency(100.0);
        let at_rest = wave_samples(&params, 0.0);
        // Shift of 0.1 · t = 2.5 ms is a quarter period at 100 Hz
        let shifted = wave_samples(&params, 0.025);

        assert!(at_rest[0].1.abs() < 1e-12);
        assert!((shifted[0].1 + 1.0).abs() < 1e-9);
    }
}
