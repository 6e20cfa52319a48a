/// 하루 기준 보상 지급 횟수(평균 10분 블록 주기).
pub const REWARD_EVENTS_PER_DAY: f64 = 144.0;
/// 1회 보상량 [BTC].
pub const REWARD_PER_EVENT_BTC: f64 = 3.125;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// 수익성 계산 입력. 열두 개 파라미터의 불변 스냅샷이다.
///
/// 검증은 수행하지 않는다. 0 분모나 음수 입력은 IEEE-754 규칙대로
/// 결과에 그대로 전파된다(추정기이지 검증기가 아니다).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitInput {
    /// 장비 1대 해시레이트 [TH/s]
    pub hashrate_th_s: f64,
    /// 장비 1대 소비전력 [W]
    pub unit_power_w: f64,
    /// 기타 설비 총 소비전력 [W]
    pub extra_power_w: f64,
    /// 전기 요금 [통화/kWh]
    pub electricity_price_per_kwh: f64,
    /// 코인 가격 [통화]
    pub coin_price: f64,
    /// 전체 네트워크 해시레이트 [TH/s]. 보상 지분 계산의 분모.
    pub network_hashrate_th_s: f64,
    /// 장비 대수
    pub unit_count: u32,
    /// 풀 수수료 [%] (0~100 기대, 검증하지 않음)
    pub pool_fee_pct: f64,
    /// 연간 가동 시간 [h] (8760 이하 기대, 검증하지 않음)
    pub annual_hours: f64,
    /// 연간 고정비(부지/인프라) [통화]
    pub fixed_cost: f64,
    /// 총 투자비 [통화]. 0이면 "미입력"으로 취급한다.
    pub total_investment: f64,
    /// 예측 연수. 0이면 연도 시리즈는 비어 있다.
    pub projection_years: u32,
}

impl Default for ProfitInput {
    fn default() -> Self {
        Self {
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
}

/// 연도별 누적 순이익 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    /// 1부터 시작하는 연차
    pub year: u32,
    /// 해당 연차까지의 누적 순이익 [통화] (전체 정밀도)
    pub cumulative_net: f64,
}

/// 수익성 계산 결과. 입력이 바뀔 때마다 전체를 새로 계산한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitResult {
    /// 장비 1대 일일 채굴량 [BTC]
    pub daily_yield_btc: f64,
    /// 장비 1대 시간당 채굴량 [BTC]
    pub hourly_yield_btc: f64,
    /// 장비 1대 시간당 수익(수수료 차감) [통화]
    pub hourly_revenue_per_unit: f64,
    /// 장비 1대 시간당 전기료 [통화]
    pub hourly_power_cost_per_unit: f64,
    /// 장비 1대 시간당 순이익 [통화]
    pub hourly_net_per_unit: f64,
    /// 기타 설비 시간당 전기료 [통화]
    pub hourly_extra_power_cost: f64,
    /// 전체 시간당 순이익(기타 설비 포함) [통화]
    pub total_hourly_net: f64,
    /// 연간 순이익(고정비 차감) [통화]
    pub annual_net: f64,
    /// 예측 연수 전체 누적 순이익 [통화]
    pub projected_net: f64,
    /// 회수 기간 [년]. 투자비 미입력 또는 순이익이 0 이하이면 None.
    pub payback_years: Option<f64>,
    /// 연도별 누적 순이익 시리즈 (projection_years 길이)
    pub yearly: Vec<YearPoint>,
}

/// 수익성을 계산한다. 실수 전 영역에서 전역 함수이며 실패하지 않는다.
///
/// 표시용 반올림은 프레젠테이션 계층의 몫이다. 내부 계산은 항상 전체
/// 정밀도를 유지하고, 반올림 값이 후속 계산에 섞여 들어가지 않는다.
pub fn estimate(input: ProfitInput) -> ProfitResult {
    let daily_yield_btc = (input.hashrate_th_s / input.network_hashrate_th_s)
        * REWARD_EVENTS_PER_DAY
        * REWARD_PER_EVENT_BTC;
    let hourly_yield_btc = daily_yield_btc / 24.0;
    let hourly_revenue_per_unit =
        hourly_yield_btc * input.coin_price * (1.0 - input.pool_fee_pct / 100.0);
    let hourly_power_cost_per_unit =
        (input.unit_power_w / WATTS_PER_KILOWATT) * input.electricity_price_per_kwh;
    let hourly_extra_power_cost =
        (input.extra_power_w / WATTS_PER_KILOWATT) * input.electricity_price_per_kwh;
    let hourly_net_per_unit = hourly_revenue_per_unit - hourly_power_cost_per_unit;
    let total_hourly_net =
        hourly_net_per_unit * f64::from(input.unit_count) - hourly_extra_power_cost;
    let annual_net = total_hourly_net * input.annual_hours - input.fixed_cost;
    let projected_net = annual_net * f64::from(input.projection_years);

    let payback_years = if input.total_investment > 0.0 && total_hourly_net > 0.0 {
        Some(input.total_investment / (total_hourly_net * input.annual_hours))
    } else {
        None
    };

    let yearly = (1..=input.projection_years)
        .map(|year| YearPoint {
            year,
            cumulative_net: annual_net * f64::from(year),
        })
        .collect();

    ProfitResult {
        daily_yield_btc,
        hourly_yield_btc,
        hourly_revenue_per_unit,
        hourly_power_cost_per_unit,
        hourly_net_per_unit,
        hourly_extra_power_cost,
        total_hourly_net,
        annual_net,
        projected_net,
        payback_years,
        yearly,
    }
}
