use climate_core::{
    country::{CountryState, Strategy},
    round,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn state(baseline_cost: f64, pressure: f64, climate_payoff: f64, economic_gains: f64) -> CountryState {
    CountryState {
        name: "X".into(),
        gdp_per_capita: 20_000.0,
        fossil_fuel_pct: 50.0,
        vulnerability: 40.0,
        gdp_share: 0.5,
        investment_share: 0.5,
        energy_share: 0.5,
        influence: 0.5,
        alpha: 0.5,
        gdp_penalty: 1.5,
        baseline_cost,
        economic_gains,
        climate_payoff,
        initial_pressure: pressure,
        cost: baseline_cost,
        pressure,
        strategy: Strategy::FreeRide,
        perceived_benefit: 0.0,
        real_benefit: 0.0,
        payoff_adopt: 0.0,
        payoff_free_ride: 0.0,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// With W_t = 0 and Z = 0 the decayed cost is the baseline, exactly.
#[test]
fn cost_identity_at_zero_w_and_z() {
    let c0 = 221_596.47;
    assert_eq!(round::decayed_cost(c0, 0.0, 0.0), c0);
}

/// Z(1 + W_t) > 1 drives the cost negative; the model does not clamp.
#[test]
fn cost_goes_negative_when_decay_exceeds_unity() {
    // 1 - 0.75 × (1 + 1) = -0.5, representable exactly.
    let cost = round::decayed_cost(1_000.0, 1.0, 0.75);
    assert_eq!(cost, -500.0);
}

/// Pressure compounds from the previous round's value rather than being
/// recomputed from its initial value: two rounds multiply both growth
/// factors.
#[test]
fn pressure_compounds_across_rounds() {
    let gamma = 1.05;
    let p0 = 250.0;

    let p1 = round::grown_pressure(p0, 0.3, gamma);
    let p2 = round::grown_pressure(p1, 0.6, gamma);

    let expected = p0 * (gamma * 1.3) * (gamma * 1.6);
    assert!((p2 - expected).abs() < 1e-9);
    // And NOT what a reset-to-initial update would give.
    assert!((p2 - p0 * gamma * 1.6).abs() > 1.0);
}

#[test]
fn urgency_is_strictly_increasing_and_capped_at_a_tenth() {
    let n = 10;
    let lambda = 1.3;

    let mut prev = 0.0;
    for t in 1..=n {
        let u = round::urgency(t, n, lambda);
        assert!(u > prev, "urgency not increasing at round {t}");
        assert!(u <= 0.1 + 1e-15);
        prev = u;
    }
    // (N/N)^λ × 0.1 = 0.1 exactly.
    assert_eq!(round::urgency(n, n, lambda), 0.1);
}

#[test]
fn urgency_is_flat_when_lambda_is_zero() {
    for t in 1..=5u64 {
        assert_eq!(round::urgency(t, 5, 0.0), 0.1);
    }
}

/// Perceived and real climate benefit are mutually exclusive, gated by
/// the threshold dummy.
#[test]
fn benefits_are_mutually_exclusive() {
    let payoff = 7_200.0;
    let u = 0.06;

    let perceived_before = round::perceived_climate_benefit(false, u, payoff);
    let real_before = round::real_climate_benefit(false, payoff);
    assert!(perceived_before > 0.0);
    assert_eq!(real_before, 0.0);

    let perceived_after = round::perceived_climate_benefit(true, u, payoff);
    let real_after = round::real_climate_benefit(true, payoff);
    assert_eq!(perceived_after, 0.0);
    assert_eq!(real_after, payoff);
}

/// The realized benefit is the full ceiling, with no urgency factor and
/// no 0.25 anticipatory scaling.
#[test]
fn real_benefit_ignores_the_anticipatory_shape() {
    let payoff = 400.0;
    assert_eq!(round::real_climate_benefit(true, payoff), payoff);
    assert_eq!(
        round::perceived_climate_benefit(false, 0.1, payoff),
        0.1 * payoff * 0.25
    );
}

/// update_country replaces the mutable fields and leaves statics and
/// strategy untouched.
#[test]
fn update_replaces_round_state_and_preserves_statics() {
    let prev = state(10_000.0, 300.0, 5_000.0, 4_000.0);
    let w = 0.4;
    let u = 0.05;

    let next = round::update_country(&prev, w, u, false, 0.1, 1.05);

    assert_eq!(next.cost, round::decayed_cost(prev.baseline_cost, w, 0.1));
    assert_eq!(next.pressure, round::grown_pressure(prev.pressure, w, 1.05));
    assert_eq!(next.perceived_benefit, u * prev.climate_payoff * 0.25);
    assert_eq!(next.real_benefit, 0.0);
    assert_eq!(
        next.payoff_adopt,
        prev.economic_gains + next.perceived_benefit + next.real_benefit - next.cost
    );
    assert_eq!(next.payoff_free_ride, next.real_benefit - next.pressure);

    // Statics and strategy untouched.
    assert_eq!(next.baseline_cost, prev.baseline_cost);
    assert_eq!(next.economic_gains, prev.economic_gains);
    assert_eq!(next.climate_payoff, prev.climate_payoff);
    assert_eq!(next.influence, prev.influence);
    assert_eq!(next.strategy, prev.strategy);
}
