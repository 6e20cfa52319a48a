use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{fill_template, keys, Translator};
use crate::mining::{estimate, ProfitInput, ProfitResult};
use crate::units::HashrateUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Estimate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Estimate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 수익성 추정 메뉴를 처리한다. 각 항목을 기본값과 함께 묻고,
/// 빈 입력이나 숫자가 아닌 입력은 기본값을 유지한다.
pub fn handle_estimate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    println!("{}", tr.t(keys::ESTIMATE_NOTE_DEFAULTS));

    let base = ProfitInput::default();
    let net_unit = cfg.network_hashrate_unit;

    let hashrate_th_s = read_f64_default(tr, tr.t(keys::PROMPT_HASHRATE), base.hashrate_th_s)?;
    let unit_power_w = read_f64_default(tr, tr.t(keys::PROMPT_UNIT_POWER), base.unit_power_w)?;
    let extra_power_w = read_f64_default(tr, tr.t(keys::PROMPT_EXTRA_POWER), base.extra_power_w)?;
    let electricity_price_per_kwh = read_f64_default(
        tr,
        tr.t(keys::PROMPT_ELECTRICITY_PRICE),
        base.electricity_price_per_kwh,
    )?;
    let coin_price = read_f64_default(tr, tr.t(keys::PROMPT_COIN_PRICE), base.coin_price)?;
    let network_label = fill_template(
        tr.t(keys::PROMPT_NETWORK_HASHRATE),
        &[("unit", net_unit.label().to_string())],
    );
    let network_in_unit = read_f64_default(
        tr,
        &network_label,
        net_unit.from_th(base.network_hashrate_th_s),
    )?;
    let unit_count = read_u32_default(tr, tr.t(keys::PROMPT_UNIT_COUNT), base.unit_count)?;
    let pool_fee_pct = read_f64_default(tr, tr.t(keys::PROMPT_POOL_FEE), base.pool_fee_pct)?;
    let annual_hours = read_f64_default(tr, tr.t(keys::PROMPT_ANNUAL_HOURS), base.annual_hours)?;
    let fixed_cost = read_f64_default(tr, tr.t(keys::PROMPT_FIXED_COST), base.fixed_cost)?;
    let total_investment = read_f64_default(
        tr,
        tr.t(keys::PROMPT_TOTAL_INVESTMENT),
        base.total_investment,
    )?;
    let projection_years =
        read_u32_default(tr, tr.t(keys::PROMPT_PROJECTION_YEARS), base.projection_years)?;

    let input = ProfitInput {
        hashrate_th_s,
        unit_power_w,
        extra_power_w,
        electricity_price_per_kwh,
        coin_price,
        network_hashrate_th_s: net_unit.to_th(network_in_unit),
        unit_count,
        pool_fee_pct,
        annual_hours,
        fixed_cost,
        total_investment,
        projection_years,
    };
    let result = estimate(input);
    print_result(tr, &input, &result);
    print_year_chart(tr, &result);
    Ok(())
}

/// 추정 결과를 고정 소수점으로 출력한다. 반올림은 여기서만 일어난다.
pub fn print_result(tr: &Translator, input: &ProfitInput, result: &ProfitResult) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {:.8} BTC",
        tr.t(keys::RESULT_HOURLY_YIELD),
        result.hourly_yield_btc
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_HOURLY_REVENUE),
        result.hourly_revenue_per_unit
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_HOURLY_POWER_COST),
        result.hourly_power_cost_per_unit
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_HOURLY_NET),
        result.hourly_net_per_unit
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_EXTRA_POWER_COST),
        result.hourly_extra_power_cost
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_TOTAL_HOURLY_NET),
        result.total_hourly_net
    );
    println!("{} {:.2}", tr.t(keys::RESULT_ANNUAL_NET), result.annual_net);
    let projected_label = fill_template(
        tr.t(keys::RESULT_PROJECTED_NET),
        &[("years", input.projection_years.to_string())],
    );
    println!("{projected_label} {:.2}", result.projected_net);
    match result.payback_years {
        Some(years) => println!("{} {years:.1}", tr.t(keys::RESULT_PAYBACK)),
        None => println!(
            "{} {}",
            tr.t(keys::RESULT_PAYBACK),
            tr.t(keys::RESULT_PAYBACK_NA)
        ),
    }
}

/// 연도별 누적 순이익을 텍스트 막대 그래프로 출력한다.
pub fn print_year_chart(tr: &Translator, result: &ProfitResult) {
    if result.yearly.is_empty() {
        return;
    }
    println!("{}", tr.t(keys::CHART_HEADING));
    let max_abs = result
        .yearly
        .iter()
        .map(|p| p.cumulative_net.abs())
        .fold(0.0_f64, f64::max);
    const WIDTH: usize = 40;
    for point in &result.yearly {
        let label = fill_template(
            tr.t(keys::CHART_YEAR_LABEL),
            &[("n", point.year.to_string())],
        );
        let value = point.cumulative_net;
        let bar_len = if max_abs.is_finite() && max_abs > 0.0 && value.is_finite() {
            ((value.abs() / max_abs) * WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(bar_len);
        println!("{label:>10} | {bar} {value:.2}");
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        match sel.trim() {
            "1" => cfg.language = "ko-kr".into(),
            "2" => cfg.language = "en-us".into(),
            "3" => cfg.language = "zh-cn".into(),
            "4" => cfg.language = "auto".into(),
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
        println!("{}", tr.t(keys::SETTINGS_LANGUAGE_RESTART));
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_NETWORK_UNIT),
        cfg.network_hashrate_unit.label()
    );
    println!("{}", tr.t(keys::SETTINGS_NETWORK_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        match sel.trim() {
            "1" => cfg.network_hashrate_unit = HashrateUnit::TeraHashPerSecond,
            "2" => cfg.network_hashrate_unit = HashrateUnit::PetaHashPerSecond,
            "3" => cfg.network_hashrate_unit = HashrateUnit::ExaHashPerSecond,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 실수를 읽는다. 빈 입력이나 잘못된 입력은 기본값을 유지한다.
fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    let prompt = fill_template(
        tr.t(keys::PROMPT_WITH_DEFAULT),
        &[("label", label.to_string()), ("default", format_default(default))],
    );
    let s = read_line(&prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse::<f64>() {
        Ok(v) => Ok(v),
        Err(_) => {
            println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
            Ok(default)
        }
    }
}

/// 정수를 읽는다. 빈 입력이나 잘못된 입력은 기본값을 유지한다.
fn read_u32_default(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    let prompt = fill_template(
        tr.t(keys::PROMPT_WITH_DEFAULT),
        &[("label", label.to_string()), ("default", default.to_string())],
    );
    let s = read_line(&prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse::<u32>() {
        Ok(v) => Ok(v),
        Err(_) => {
            println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
            Ok(default)
        }
    }
}

/// 기본값 표기. 정수이면 소수점 없이 표시한다.
fn format_default(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
