use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ESTIMATE: &str = "main_menu.estimate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const ESTIMATE_NOTE_DEFAULTS: &str = "estimate.note_defaults";
    pub const PROMPT_WITH_DEFAULT: &str = "prompt.with_default";

    pub const PROMPT_HASHRATE: &str = "prompt.hashrate";
    pub const PROMPT_UNIT_POWER: &str = "prompt.unit_power";
    pub const PROMPT_EXTRA_POWER: &str = "prompt.extra_power";
    pub const PROMPT_ELECTRICITY_PRICE: &str = "prompt.electricity_price";
    pub const PROMPT_COIN_PRICE: &str = "prompt.coin_price";
    pub const PROMPT_NETWORK_HASHRATE: &str = "prompt.network_hashrate";
    pub const PROMPT_UNIT_COUNT: &str = "prompt.unit_count";
    pub const PROMPT_POOL_FEE: &str = "prompt.pool_fee";
    pub const PROMPT_ANNUAL_HOURS: &str = "prompt.annual_hours";
    pub const PROMPT_FIXED_COST: &str = "prompt.fixed_cost";
    pub const PROMPT_TOTAL_INVESTMENT: &str = "prompt.total_investment";
    pub const PROMPT_PROJECTION_YEARS: &str = "prompt.projection_years";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_HOURLY_YIELD: &str = "result.hourly_yield";
    pub const RESULT_HOURLY_REVENUE: &str = "result.hourly_revenue";
    pub const RESULT_HOURLY_POWER_COST: &str = "result.hourly_power_cost";
    pub const RESULT_HOURLY_NET: &str = "result.hourly_net";
    pub const RESULT_EXTRA_POWER_COST: &str = "result.extra_power_cost";
    pub const RESULT_TOTAL_HOURLY_NET: &str = "result.total_hourly_net";
    pub const RESULT_ANNUAL_NET: &str = "result.annual_net";
    pub const RESULT_PROJECTED_NET: &str = "result.projected_net";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PAYBACK_NA: &str = "result.payback_na";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_YEAR_LABEL: &str = "chart.year_label";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_RESTART: &str = "settings.language_restart";
    pub const SETTINGS_CURRENT_NETWORK_UNIT: &str = "settings.current_network_unit";
    pub const SETTINGS_NETWORK_UNIT_OPTIONS: &str = "settings.network_unit_options";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Zh,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("zh") {
            Language::Zh
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/zh)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 중국어는 언어팩으로만 제공되며, 번역이 없으면
    /// 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko | Language::Zh => ko(key),
        }
    }
}

/// `{key}` 자리 표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "zh" => Some("zh-cn".into()),
        "zh-cn" => Some("zh-cn".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("zh") => Some("zh-cn".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "zh" => Some("zh-cn".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "zh-cn" | "zh" => parse_toml_to_map(include_str!("../locales/zh-cn.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Mining Profit Calculator ===",
        MAIN_MENU_ESTIMATE => "1) 수익성 추정",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ESTIMATE_HEADING => "\n-- 채굴 수익성 추정 --",
        ESTIMATE_NOTE_DEFAULTS => "참고: 엔터만 입력하면 기본값을 유지합니다.",
        PROMPT_WITH_DEFAULT => "{label} (기본값 {default}): ",
        PROMPT_HASHRATE => "장비 1대 해시레이트 [TH/s]",
        PROMPT_UNIT_POWER => "장비 1대 소비전력 [W]",
        PROMPT_EXTRA_POWER => "기타 설비 총 소비전력 [W]",
        PROMPT_ELECTRICITY_PRICE => "전기 요금 [통화/kWh]",
        PROMPT_COIN_PRICE => "코인 가격 [통화]",
        PROMPT_NETWORK_HASHRATE => "전체 네트워크 해시레이트 [{unit}]",
        PROMPT_UNIT_COUNT => "장비 대수",
        PROMPT_POOL_FEE => "풀 수수료 [%]",
        PROMPT_ANNUAL_HOURS => "연간 가동 시간 [h]",
        PROMPT_FIXED_COST => "연간 고정비 [통화]",
        PROMPT_TOTAL_INVESTMENT => "총 투자비 [통화] (0 = 미입력)",
        PROMPT_PROJECTION_YEARS => "예측 연수",
        RESULT_HEADING => "\n-- 추정 결과 --",
        RESULT_HOURLY_YIELD => "시간당 1대 채굴량:",
        RESULT_HOURLY_REVENUE => "시간당 1대 수익:",
        RESULT_HOURLY_POWER_COST => "시간당 1대 전기료:",
        RESULT_HOURLY_NET => "시간당 1대 순이익:",
        RESULT_EXTRA_POWER_COST => "시간당 기타 설비 전기료:",
        RESULT_TOTAL_HOURLY_NET => "전체 시간당 순이익(기타 설비 포함):",
        RESULT_ANNUAL_NET => "예상 연간 순이익(고정비 차감):",
        RESULT_PROJECTED_NET => "{years}년 누적 순이익:",
        RESULT_PAYBACK => "예상 회수 기간:",
        RESULT_PAYBACK_NA => "N/A",
        CHART_HEADING => "\n-- 연도별 누적 순이익 --",
        CHART_YEAR_LABEL => "{n}년차",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) ko-kr  2) en-us  3) zh-cn  4) auto",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_RESTART => "언어 변경은 다음 실행부터 적용됩니다.",
        SETTINGS_CURRENT_NETWORK_UNIT => "현재 네트워크 해시레이트 입력 단위:",
        SETTINGS_NETWORK_UNIT_OPTIONS => "1) TH/s  2) PH/s  3) EH/s",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Mining Profit Calculator ===",
        MAIN_MENU_ESTIMATE => "1) Profit estimate",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ESTIMATE_HEADING => "\n-- Mining Profit Estimate --",
        ESTIMATE_NOTE_DEFAULTS => "Note: press Enter to keep the default value.",
        PROMPT_WITH_DEFAULT => "{label} (default {default}): ",
        PROMPT_HASHRATE => "Hashrate per device [TH/s]",
        PROMPT_UNIT_POWER => "Power per device [W]",
        PROMPT_EXTRA_POWER => "Total auxiliary power [W]",
        PROMPT_ELECTRICITY_PRICE => "Electricity price [currency/kWh]",
        PROMPT_COIN_PRICE => "Coin price [currency]",
        PROMPT_NETWORK_HASHRATE => "Network hashrate [{unit}]",
        PROMPT_UNIT_COUNT => "Device count",
        PROMPT_POOL_FEE => "Pool fee [%]",
        PROMPT_ANNUAL_HOURS => "Operating hours per year [h]",
        PROMPT_FIXED_COST => "Annual fixed cost [currency]",
        PROMPT_TOTAL_INVESTMENT => "Total investment [currency] (0 = not set)",
        PROMPT_PROJECTION_YEARS => "Projection years",
        RESULT_HEADING => "\n-- Estimate --",
        RESULT_HOURLY_YIELD => "Hourly yield per device:",
        RESULT_HOURLY_REVENUE => "Hourly revenue per device:",
        RESULT_HOURLY_POWER_COST => "Hourly power cost per device:",
        RESULT_HOURLY_NET => "Hourly net per device:",
        RESULT_EXTRA_POWER_COST => "Hourly auxiliary power cost:",
        RESULT_TOTAL_HOURLY_NET => "Total hourly net (incl. auxiliary):",
        RESULT_ANNUAL_NET => "Estimated annual net (after fixed cost):",
        RESULT_PROJECTED_NET => "{years}-year cumulative net:",
        RESULT_PAYBACK => "Estimated payback period:",
        RESULT_PAYBACK_NA => "N/A",
        CHART_HEADING => "\n-- Cumulative net by year --",
        CHART_YEAR_LABEL => "Year {n}",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) ko-kr  2) en-us  3) zh-cn  4) auto",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_RESTART => "Language change takes effect on next start.",
        SETTINGS_CURRENT_NETWORK_UNIT => "Current network hashrate entry unit:",
        SETTINGS_NETWORK_UNIT_OPTIONS => "1) TH/s  2) PH/s  3) EH/s",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    };
    Some(s)
}
