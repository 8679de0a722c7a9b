use yew::prelude::*;
use yew_hooks::prelude::*;

/// Ease-out cubic count-up from 0 to `end`, `progress` in `0.0..=1.0`.
pub fn counter_value(end: f64, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    end * (1.0 - (1.0 - progress).powi(3))
}

/// One decimal place for fractional targets, none otherwise.
pub fn format_counter(value: f64, end: f64) -> String {
    if end.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: f64,
    pub duration_ms: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let progress = use_raf(props.duration_ms, 0);
    let value = counter_value(props.end, progress);

    html! {
        <span>{&props.prefix}{format_counter(value, props.end)}{&props.suffix}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_end() {
        assert_eq!(counter_value(100.0, 0.0), 0.0);
        assert_eq!(counter_value(100.0, 1.0), 100.0);
        assert_eq!(counter_value(100.0, 1.7), 100.0);
    }

    #[test]
    fn eases_out() {
        let halfway = counter_value(100.0, 0.5);
        assert!((halfway - 87.5).abs() < 1e-9);
    }

    #[test]
    fn formats_by_target_precision() {
        assert_eq!(format_counter(42.7, 100.0), "42");
        assert_eq!(format_counter(42.66, 99.9), "42.7");
        assert_eq!(format_counter(99.9, 99.9), "99.9");
    }
}
