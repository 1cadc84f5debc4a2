//! Scroll-driven visual parameters.
//!
//! The decorative motion on this site is a plain mapping from the window
//! scroll offset to a pixel offset or an opacity. Keeping `interpolate`
//! free of any framework primitive means the sections only differ in the
//! breakpoints they feed it.

use leptos::prelude::*;

/// Piecewise-linear interpolation over `breakpoints` -> `outputs`.
///
/// `breakpoints` must be sorted ascending and as long as `outputs`. Offsets
/// outside the range clamp to the first/last output.
pub fn interpolate(breakpoints: &[f64], outputs: &[f64], offset: f64) -> f64 {
    debug_assert_eq!(breakpoints.len(), outputs.len());
    debug_assert!(!breakpoints.is_empty());
    debug_assert!(breakpoints.windows(2).all(|pair| pair[0] <= pair[1]));

    if offset <= breakpoints[0] {
        return outputs[0];
    }
    if offset >= breakpoints[breakpoints.len() - 1] {
        return outputs[outputs.len() - 1];
    }

    let upper = breakpoints
        .iter()
        .position(|breakpoint| offset < *breakpoint)
        .unwrap_or(breakpoints.len() - 1);
    let lower = upper - 1;
    let span = breakpoints[upper] - breakpoints[lower];
    if span == 0.0 {
        return outputs[upper];
    }
    let progress = (offset - breakpoints[lower]) / span;
    outputs[lower] + (outputs[upper] - outputs[lower]) * progress
}

/// The vertical window scroll offset as a signal.
///
/// The listener is attached from an effect so it only runs in the browser,
/// and it is removed when the owning view is torn down. On the server the
/// signal just stays at zero.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);

    Effect::new(move |_| {
        set_offset.set(window().scroll_y().unwrap_or_default());
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_offset.set(window().scroll_y().unwrap_or_default());
        });
        on_cleanup(move || handle.remove());
    });

    offset
}

#[cfg(test)]
mod tests {
    use super::interpolate;

    #[test]
    fn clamps_below_and_above_the_range() {
        assert_eq!(0.0, interpolate(&[0.0, 500.0], &[0.0, 100.0], -25.0));
        assert_eq!(100.0, interpolate(&[0.0, 500.0], &[0.0, 100.0], 1200.0));
    }

    #[test]
    fn hits_the_breakpoints_exactly() {
        assert_eq!(1.0, interpolate(&[0.0, 300.0], &[1.0, 0.0], 0.0));
        assert_eq!(0.0, interpolate(&[0.0, 300.0], &[1.0, 0.0], 300.0));
    }

    #[test]
    fn interpolates_between_breakpoints() {
        assert_eq!(50.0, interpolate(&[0.0, 500.0], &[0.0, 100.0], 250.0));
        assert_eq!(0.5, interpolate(&[0.0, 300.0], &[1.0, 0.0], 150.0));
    }

    #[test]
    fn walks_multiple_segments() {
        let breakpoints = [0.0, 0.1, 0.9, 1.0];
        let outputs = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(0.5, interpolate(&breakpoints, &outputs, 0.05));
        assert_eq!(1.0, interpolate(&breakpoints, &outputs, 0.5));
        assert_eq!(0.5, interpolate(&breakpoints, &outputs, 0.95));
    }

    #[test]
    fn descending_outputs_interpolate_downwards() {
        let value = interpolate(&[0.0, 300.0], &[1.0, 0.9], 75.0);
        assert!((value - 0.975).abs() < 1e-9);
    }
}
