use clap::{Args, Parser, Subcommand};

use mining_profit_calculator::{app, config, i18n, mining, ui_cli};

/// 채굴 수익성 계산기 CLI. 서브커맨드 없이 실행하면 대화형 메뉴가 뜬다.
#[derive(Parser)]
#[command(name = "mining_profit_calculator_cli", version, about = "Mining profit calculator (CLI)")]
struct Cli {
    /// 언어 코드 (auto/ko-kr/en-us/zh-cn)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번에 추정 결과를 출력한다.
    Estimate(EstimateArgs),
}

/// 추정 파라미터. 기본값은 대화형 모드와 동일하다.
#[derive(Args)]
struct EstimateArgs {
    /// 장비 1대 해시레이트 [TH/s]
    #[arg(long, default_value_t = 110.0)]
    hashrate: f64,
    /// 장비 1대 소비전력 [W]
    #[arg(long, default_value_t = 3250.0)]
    power: f64,
    /// 기타 설비 총 소비전력 [W]
    #[arg(long, default_value_t = 5000.0)]
    extra_power: f64,
    /// 전기 요금 [통화/kWh]
    #[arg(long, default_value_t = 0.32)]
    electricity_price: f64,
    /// 코인 가격 [통화]
    #[arg(long, default_value_t = 450_000.0)]
    coin_price: f64,
    /// 전체 네트워크 해시레이트 [TH/s]
    #[arg(long, default_value_t = 600_000_000.0)]
    network_hashrate: f64,
    /// 장비 대수
    #[arg(long, default_value_t = 100)]
    units: u32,
    /// 풀 수수료 [%]
    #[arg(long, default_value_t = 2.0)]
    pool_fee: f64,
    /// 연간 가동 시간 [h]
    #[arg(long, default_value_t = 8760.0)]
    annual_hours: f64,
    /// 연간 고정비 [통화]
    #[arg(long, default_value_t = 1_000_000.0)]
    fixed_cost: f64,
    /// 총 투자비 [통화] (0 = 미입력)
    #[arg(long, default_value_t = 0.0)]
    investment: f64,
    /// 예측 연수
    #[arg(long, default_value_t = 3)]
    years: u32,
}

impl EstimateArgs {
    fn to_input(&self) -> mining::ProfitInput {
        mining::ProfitInput {
            hashrate_th_s: self.hashrate,
            unit_power_w: self.power,
            extra_power_w: self.extra_power,
            electricity_price_per_kwh: self.electricity_price,
            coin_price: self.coin_price,
            network_hashrate_th_s: self.network_hashrate,
            unit_count: self.units,
            pool_fee_pct: self.pool_fee,
            annual_hours: self.annual_hours,
            fixed_cost: self.fixed_cost,
            total_investment: self.investment,
            projection_years: self.years,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang_code = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang_code, cfg.language_pack_dir.as_deref());
    match cli.command {
        Some(Command::Estimate(args)) => {
            let input = args.to_input();
            let result = mining::estimate(input);
            ui_cli::print_result(&tr, &input, &result);
            ui_cli::print_year_chart(&tr, &result);
        }
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}
