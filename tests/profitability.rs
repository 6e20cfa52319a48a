use mining_profit_calculator::mining::{estimate, ProfitInput};

fn approx(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

/// 원본 기본 파라미터의 시나리오. 투자비 0.
fn scenario_a() -> ProfitInput {
    ProfitInput {
        hashrate_th_s: 110.0,
        unit_power_w: 3250.0,
        extra_power_w: 5000.0,
        electricity_price_per_kwh: 0.32,
        coin_price: 450_000.0,
        network_hashrate_th_s: 600_000_000.0,
        unit_count: 100,
        pool_fee_pct: 2.0,
        annual_hours: 8760.0,
        fixed_cost: 1_000_000.0,
        total_investment: 0.0,
        projection_years: 3,
    }
}

#[test]
fn scenario_a_known_values() {
    let res = estimate(scenario_a());
    // 110/6e8 * 144 * 3.125 = 8.25e-5
    assert!(approx(res.daily_yield_btc, 8.25e-5), "daily={}", res.daily_yield_btc);
    assert!(approx(res.hourly_yield_btc, res.daily_yield_btc / 24.0));
    assert!(approx(res.hourly_power_cost_per_unit, 1.04));
    assert!(approx(res.hourly_extra_power_cost, 1.6));
    // 투자비 미입력이면 수익 부호와 무관하게 회수 기간은 None이다.
    assert!(res.payback_years.is_none());
    assert_eq!(res.yearly.len(), 3);
}

#[test]
fn scenario_b_payback_formula() {
    let mut input = scenario_a();
    input.total_investment = 5_000_000.0;
    let res = estimate(input);
    assert!(res.total_hourly_net > 0.0);
    let expected = input.total_investment / (res.total_hourly_net * input.annual_hours);
    let payback = res.payback_years.expect("payback");
    assert!(payback.is_finite() && payback > 0.0);
    assert!(approx(payback, expected));
}

#[test]
fn scenario_c_zero_network_hashrate_propagates() {
    let mut input = scenario_a();
    input.network_hashrate_th_s = 0.0;
    let res = estimate(input);
    // 0 분모는 특수 처리 없이 비유한 값으로 전파된다.
    assert!(!res.daily_yield_btc.is_finite());
    assert!(!res.hourly_yield_btc.is_finite());
    assert!(!res.hourly_revenue_per_unit.is_finite());
    assert!(!res.total_hourly_net.is_finite());
    assert!(!res.annual_net.is_finite());
    assert!(!res.projected_net.is_finite());
    for p in &res.yearly {
        assert!(!p.cumulative_net.is_finite());
    }
}

#[test]
fn daily_yield_is_share_times_450() {
    let input = scenario_a();
    let res = estimate(input);
    let expected = (input.hashrate_th_s / input.network_hashrate_th_s) * 450.0;
    assert!(approx(res.daily_yield_btc, expected));
}

#[test]
fn projected_net_is_annual_times_years() {
    for years in [0u32, 1, 3, 10, 25] {
        let mut input = scenario_a();
        input.projection_years = years;
        let res = estimate(input);
        assert!(approx(res.projected_net, res.annual_net * f64::from(years)));
    }
}

#[test]
fn year_series_length_and_values() {
    let mut input = scenario_a();
    input.projection_years = 5;
    let res = estimate(input);
    assert_eq!(res.yearly.len(), 5);
    for (i, point) in res.yearly.iter().enumerate() {
        assert_eq!(point.year, (i + 1) as u32);
        assert!(approx(point.cumulative_net, res.annual_net * (i + 1) as f64));
    }
}

#[test]
fn zero_years_gives_empty_series() {
    let mut input = scenario_a();
    input.projection_years = 0;
    let res = estimate(input);
    assert!(res.yearly.is_empty());
    assert_eq!(res.projected_net, 0.0);
}

#[test]
fn payback_none_when_never_profitable() {
    let mut input = scenario_a();
    input.total_investment = 5_000_000.0;
    input.coin_price = 0.0; // 수익 0, 전기료만 발생
    let res = estimate(input);
    assert!(res.total_hourly_net <= 0.0);
    assert!(res.payback_years.is_none());
}

#[test]
fn full_fee_removes_revenue() {
    let mut input = scenario_a();
    input.pool_fee_pct = 100.0;
    let res = estimate(input);
    assert!(approx(res.hourly_revenue_per_unit, 0.0));
    assert!(res.hourly_net_per_unit < 0.0);
}

#[test]
fn negative_inputs_pass_through_unvalidated() {
    let mut input = scenario_a();
    input.hashrate_th_s = -110.0;
    let res = estimate(input);
    assert!(res.daily_yield_btc < 0.0);
    assert!(res.hourly_revenue_per_unit < 0.0);
}

#[test]
fn identical_snapshots_give_bit_identical_results() {
    let input = scenario_a();
    let a = estimate(input);
    let b = estimate(input);
    assert_eq!(a.daily_yield_btc.to_bits(), b.daily_yield_btc.to_bits());
    assert_eq!(a.total_hourly_net.to_bits(), b.total_hourly_net.to_bits());
    assert_eq!(a.annual_net.to_bits(), b.annual_net.to_bits());
    assert_eq!(a.projected_net.to_bits(), b.projected_net.to_bits());
    assert_eq!(a.yearly.len(), b.yearly.len());
    for (pa, pb) in a.yearly.iter().zip(b.yearly.iter()) {
        assert_eq!(pa.cumulative_net.to_bits(), pb.cumulative_net.to_bits());
    }
    assert_eq!(a, b);
}
