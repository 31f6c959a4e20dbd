use graduo_core::{
    Config, DurationSpan, Interval, Notation, TimeUnit, convert, is_primary, plan, plan_time,
    primary_values, secondary_values, snap,
};
use proptest::prelude::*;

fn time_config() -> impl Strategy<Value = Config> {
    prop::sample::select(TimeUnit::ALL.to_vec())
        .prop_flat_map(|unit| {
            let max = unit.max_interval() as u32;
            (
                Just(unit),
                prop::sample::select(unit.allowed_steps().to_vec()),
                0..max,
            )
        })
        .prop_flat_map(|(unit, step, start)| {
            let max = unit.max_interval() as u32;
            (Just(unit), Just(step), Just(start), (start + 1)..=max)
        })
        .prop_map(|(unit, step, start, end)| {
            let mut config = Config::chronix_default().with_unit(unit);
            config.step = step;
            config.intervals = Interval::new(f64::from(start), f64::from(end));
            config
        })
}

fn numeric_config() -> impl Strategy<Value = Config> {
    (
        prop::sample::select(Notation::ALL.to_vec()),
        1u32..=12,
        prop::sample::select(vec![0.5, 1.0, 2.0, 5.0]),
        -20i32..20,
        1i32..40,
    )
        .prop_map(|(notation, denominator, step, start, len)| {
            let mut config = Config::natix_default().with_notation(notation);
            config.denominator = denominator;
            config.step = step;
            config.intervals = Interval::new(f64::from(start), f64::from(start + len));
            config
        })
}

fn any_config() -> impl Strategy<Value = Config> {
    prop_oneof![time_config(), numeric_config()]
}

proptest! {
    #[test]
    fn conversion_round_trips(
        value in 0.0f64..1_000_000.0,
        from in prop::sample::select(TimeUnit::ALL.to_vec()),
        to in prop::sample::select(TimeUnit::ALL.to_vec()),
    ) {
        let back = convert(convert(value, from, to), to, from);
        prop_assert!((back - value).abs() <= 1e-9 * value.max(1.0));
    }

    #[test]
    fn snap_is_idempotent(config in any_config(), t in -0.2f64..1.2) {
        let raw = config.intervals.start + t * config.range();
        let once = snap(raw, &config);
        prop_assert_eq!(snap(once, &config), once);
    }

    #[test]
    fn snap_stays_inside_interval(config in any_config(), raw in -200.0f64..200.0) {
        let snapped = snap(raw, &config);
        prop_assert!(config.intervals.contains(snapped));
    }

    #[test]
    fn primaries_are_detected(config in any_config()) {
        for value in primary_values(&config) {
            prop_assert!(is_primary(value, &config), "{} should be primary", value);
        }
    }

    #[test]
    fn secondaries_are_not_primary_and_snap_to_themselves(config in any_config()) {
        let plan = plan(&config);
        for value in secondary_values(&config, &plan) {
            prop_assert!(!is_primary(value, &config), "{} should be secondary", value);
            prop_assert_eq!(snap(value, &config), value);
        }
    }

    #[test]
    fn dense_lines_get_two_subdivisions(
        unit in prop::sample::select(TimeUnit::ALL.to_vec()),
        step_index in any::<prop::sample::Index>(),
        extra in 0.0f64..500.0,
    ) {
        let step = *step_index.get(unit.allowed_steps());
        let range = step * 20.0 + extra + step;
        prop_assert_eq!(plan_time(unit, step, range).count, 2);
    }

    #[test]
    fn duration_is_symmetric(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let forward = DurationSpan::from_values(&[a, b]).map(|span| span.duration);
        let backward = DurationSpan::from_values(&[b, a]).map(|span| span.duration);
        prop_assert_eq!(forward, backward);
    }
}

#[test]
fn minute_line_scenario() {
    let config = Config::chronix_default();
    assert_eq!(plan(&config).step, 1.0);

    let span = DurationSpan::from_values(&[10.0, 25.0]).unwrap();
    assert_eq!(span.duration, 15.0);
    assert_eq!(convert(span.duration, TimeUnit::Minute, TimeUnit::Second), 900.0);
}
