#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use mining_profit_calculator::{
    config,
    i18n::{self, fill_template, keys},
    mining::{estimate, ProfitInput, ProfitResult},
    units::HashrateUnit,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko-kr/en-us/zh-cn)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 640.0])
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Mining Profit Calculator",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글/중국어 표시를 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 폰트
/// 2) 시스템 폰트(Windows 맑은 고딕/굴림, Linux Noto/Nanum)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansCJK.ttc"] {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "msyh.ttc", "gulim.ttc", "simsun.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "cjk_font");
                return Ok(());
            }
        }
    }
    let linux_candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("CJK font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_formula: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 계산 입력. 네트워크 해시레이트는 선택한 단위 기준으로 들고 있다가
    // 계산 직전에 TH/s로 환산한다.
    hashrate_th_s: f64,
    unit_power_w: f64,
    extra_power_w: f64,
    electricity_price: f64,
    coin_price: f64,
    network_hashrate: f64,
    network_unit: HashrateUnit,
    unit_count: u32,
    pool_fee_pct: f64,
    annual_hours: f64,
    fixed_cost: f64,
    total_investment: f64,
    projection_years: u32,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let base = ProfitInput::default();
        let network_unit = config.network_hashrate_unit;
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            show_settings_modal: false,
            show_formula: false,
            theme: ThemeChoice::System,
            custom_font_path: String::new(),
            font_load_error: None,
            hashrate_th_s: base.hashrate_th_s,
            unit_power_w: base.unit_power_w,
            extra_power_w: base.extra_power_w,
            electricity_price: base.electricity_price_per_kwh,
            coin_price: base.coin_price,
            network_hashrate: network_unit.from_th(base.network_hashrate_th_s),
            network_unit,
            unit_count: base.unit_count,
            pool_fee_pct: base.pool_fee_pct,
            annual_hours: base.annual_hours,
            fixed_cost: base.fixed_cost,
            total_investment: base.total_investment,
            projection_years: base.projection_years,
        }
    }

    fn current_input(&self) -> ProfitInput {
        ProfitInput {
            hashrate_th_s: self.hashrate_th_s,
            unit_power_w: self.unit_power_w,
            extra_power_w: self.extra_power_w,
            electricity_price_per_kwh: self.electricity_price,
            coin_price: self.coin_price,
            network_hashrate_th_s: self.network_unit.to_th(self.network_hashrate),
            unit_count: self.unit_count,
            pool_fee_pct: self.pool_fee_pct,
            annual_hours: self.annual_hours,
            fixed_cost: self.fixed_cost,
            total_investment: self.total_investment,
            projection_years: self.projection_years,
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = match self.theme {
            ThemeChoice::System => egui::Visuals::default(),
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        };
        let alpha = self.window_alpha.clamp(0.3, 1.0);
        visuals.panel_fill = visuals.panel_fill.gamma_multiply(alpha);
        visuals.window_fill = visuals.window_fill.gamma_multiply(alpha);
        ctx.set_visuals(visuals);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.inputs.heading", "Parameters"))
            .on_hover_text(txt(
                "gui.inputs.tip",
                "All results update immediately on every change.",
            ));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("input_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        tr.t(keys::PROMPT_HASHRATE),
                        &txt("gui.input.hashrate_tip", "Hashrate of a single mining device"),
                    );
                    ui.add(egui::DragValue::new(&mut self.hashrate_th_s).speed(1.0));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_UNIT_POWER));
                    ui.add(egui::DragValue::new(&mut self.unit_power_w).speed(10.0));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_EXTRA_POWER));
                    ui.add(egui::DragValue::new(&mut self.extra_power_w).speed(10.0));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_ELECTRICITY_PRICE));
                    ui.add(egui::DragValue::new(&mut self.electricity_price).speed(0.01));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_COIN_PRICE));
                    ui.add(egui::DragValue::new(&mut self.coin_price).speed(1000.0));
                    ui.end_row();

                    let network_label = fill_template(
                        tr.t(keys::PROMPT_NETWORK_HASHRATE),
                        &[("unit", self.network_unit.label().to_string())],
                    );
                    label_with_tip(
                        ui,
                        &network_label,
                        &txt(
                            "gui.input.network_hashrate_tip",
                            "Aggregate hashrate of the whole network (reward share denominator)",
                        ),
                    );
                    ui.horizontal(|ui| {
                        let speed = match self.network_unit {
                            HashrateUnit::TeraHashPerSecond => 1_000_000.0,
                            HashrateUnit::PetaHashPerSecond => 1_000.0,
                            HashrateUnit::ExaHashPerSecond => 1.0,
                        };
                        ui.add(egui::DragValue::new(&mut self.network_hashrate).speed(speed));
                        let before = self.network_unit;
                        egui::ComboBox::from_id_source("network_unit")
                            .selected_text(self.network_unit.label())
                            .show_ui(ui, |ui| {
                                for unit in [
                                    HashrateUnit::TeraHashPerSecond,
                                    HashrateUnit::PetaHashPerSecond,
                                    HashrateUnit::ExaHashPerSecond,
                                ] {
                                    ui.selectable_value(&mut self.network_unit, unit, unit.label());
                                }
                            });
                        if before != self.network_unit {
                            // 단위 변경 시 표시 값을 환산해 물리량을 유지한다.
                            self.network_hashrate =
                                self.network_unit.from_th(before.to_th(self.network_hashrate));
                            self.config.network_hashrate_unit = self.network_unit;
                        }
                    });
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_UNIT_COUNT));
                    ui.add(egui::DragValue::new(&mut self.unit_count).speed(1.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        tr.t(keys::PROMPT_POOL_FEE),
                        &txt("gui.input.pool_fee_tip", "Pool fee deducted from revenue, in percent"),
                    );
                    ui.add(egui::DragValue::new(&mut self.pool_fee_pct).speed(0.1));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        tr.t(keys::PROMPT_ANNUAL_HOURS),
                        &txt(
                            "gui.input.annual_hours_tip",
                            "Expected operating hours per year (8760 = continuous)",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.annual_hours).speed(10.0));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_FIXED_COST));
                    ui.add(egui::DragValue::new(&mut self.fixed_cost).speed(1000.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        tr.t(keys::PROMPT_TOTAL_INVESTMENT),
                        &txt(
                            "gui.input.total_investment_tip",
                            "Total investment for payback estimate; 0 disables payback",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.total_investment).speed(1000.0));
                    ui.end_row();

                    ui.label(tr.t(keys::PROMPT_PROJECTION_YEARS));
                    ui.add(egui::DragValue::new(&mut self.projection_years).speed(1.0));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        ui.checkbox(
            &mut self.show_formula,
            txt("gui.formula.toggle", "Show formulas"),
        );
        if self.show_formula {
            ui.add(
                egui::Label::new(egui::RichText::new(txt("gui.formula.body", "")).small())
                    .wrap(true),
            );
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui, result: &ProfitResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.results.heading", "Mining Profit Estimate"))
            .on_hover_text(txt(
                "gui.results.tip",
                "Derived metrics at full precision, rounded for display only.",
            ));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(format!(
                "{} {:.8} BTC",
                tr.t(keys::RESULT_HOURLY_YIELD),
                result.hourly_yield_btc
            ));
            ui.label(format!(
                "{} {:.2}",
                tr.t(keys::RESULT_HOURLY_REVENUE),
                result.hourly_revenue_per_unit
            ));
            ui.label(format!(
                "{} {:.2}",
                tr.t(keys::RESULT_HOURLY_POWER_COST),
                result.hourly_power_cost_per_unit
            ));
            ui.label(format!(
                "{} {:.2}",
                tr.t(keys::RESULT_HOURLY_NET),
                result.hourly_net_per_unit
            ));
            ui.separator();
            ui.label(format!(
                "{} {:.2}",
                tr.t(keys::RESULT_EXTRA_POWER_COST),
                result.hourly_extra_power_cost
            ));
            ui.label(format!(
                "{} {:.2}",
                tr.t(keys::RESULT_TOTAL_HOURLY_NET),
                result.total_hourly_net
            ));
            let based_on = fill_template(
                &txt("gui.results.based_on_hours", "(based on {hours} h)"),
                &[("hours", format!("{:.0}", self.annual_hours))],
            );
            ui.label(format!(
                "{} {:.2} {based_on}",
                tr.t(keys::RESULT_ANNUAL_NET),
                result.annual_net
            ));
            let projected_label = fill_template(
                tr.t(keys::RESULT_PROJECTED_NET),
                &[("years", self.projection_years.to_string())],
            );
            ui.label(format!("{projected_label} {:.2}", result.projected_net));
            match result.payback_years {
                Some(years) => {
                    let suffix = txt("gui.payback_years_suffix", "years");
                    ui.label(format!("{} {years:.1} {suffix}", tr.t(keys::RESULT_PAYBACK)));
                }
                None => {
                    ui.label(format!(
                        "{} {}",
                        tr.t(keys::RESULT_PAYBACK),
                        tr.t(keys::RESULT_PAYBACK_NA)
                    ));
                }
            }
        });
        ui.add_space(12.0);
        ui.strong(txt("gui.chart.heading", "Cumulative net by year"));
        ui.add_space(4.0);
        year_chart_ui(ui, &tr, result);
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.heading", "Settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.settings.language", "Language (auto/ko-kr/en-us/zh-cn)"));
                        ui.text_edit_singleline(&mut self.lang_input);
                        ui.end_row();

                        ui.label(txt("gui.settings.pack_dir", "Language pack directory (optional)"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                        ui.end_row();

                        ui.label(txt("gui.settings.alpha", "Window opacity"));
                        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                        ui.end_row();

                        ui.label(txt("gui.settings.theme", "Theme"));
                        ui.horizontal(|ui| {
                            ui.selectable_value(
                                &mut self.theme,
                                ThemeChoice::System,
                                txt("gui.settings.theme_system", "System"),
                            );
                            ui.selectable_value(
                                &mut self.theme,
                                ThemeChoice::Light,
                                txt("gui.settings.theme_light", "Light"),
                            );
                            ui.selectable_value(
                                &mut self.theme,
                                ThemeChoice::Dark,
                                txt("gui.settings.theme_dark", "Dark"),
                            );
                        });
                        ui.end_row();

                        ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                        ui.horizontal(|ui| {
                            if ui
                                .button(txt("gui.settings.font_pick", "Choose font file"))
                                .clicked()
                            {
                                if let Some(path) = FileDialog::new()
                                    .add_filter("font", &["ttf", "ttc", "otf"])
                                    .pick_file()
                                {
                                    self.custom_font_path = path.display().to_string();
                                    self.font_load_error =
                                        load_custom_font(ui.ctx(), &self.custom_font_path).err();
                                }
                            }
                            if !self.custom_font_path.is_empty() {
                                ui.small(self.custom_font_path.clone());
                            }
                        });
                        ui.end_row();
                    });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err.as_str());
                }
                ui.add_space(8.0);
                if ui.button(txt("gui.settings.save", "Save")).clicked() {
                    self.config.language = self.lang_input.trim().to_string();
                    self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty() {
                        None
                    } else {
                        Some(self.lang_pack_dir_input.trim().to_string())
                    };
                    self.config.window_alpha = self.window_alpha;
                    self.config.network_hashrate_unit = self.network_unit;
                    self.lang_save_status = match self.config.save() {
                        Ok(()) => Some(txt("gui.settings.saved", "Saved.")),
                        Err(e) => Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                    };
                    // 언어는 즉시 반영한다.
                    let code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
                    self.tr = i18n::Translator::new_with_pack(
                        &code,
                        self.config.language_pack_dir.as_deref(),
                    );
                }
                if let Some(status) = &self.lang_save_status {
                    ui.small(status.clone());
                }
            });
        self.show_settings_modal = open;
    }
}

/// 연도별 누적 순이익 막대 그래프를 그린다. 값은 표시용으로만
/// 소수점 둘째 자리에서 반올림한다.
fn year_chart_ui(ui: &mut egui::Ui, tr: &i18n::Translator, result: &ProfitResult) {
    if result.yearly.is_empty() {
        return;
    }
    let values: Vec<(String, f64)> = result
        .yearly
        .iter()
        .map(|p| {
            let label = fill_template(tr.t(keys::CHART_YEAR_LABEL), &[("n", p.year.to_string())]);
            let display = (p.cumulative_net * 100.0).round() / 100.0;
            (label, display)
        })
        .collect();

    let height = 220.0;
    let width = ui.available_width().max(240.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let rect = response.rect;

    let finite_max = values
        .iter()
        .map(|(_, v)| if v.is_finite() { v.max(0.0) } else { 0.0 })
        .fold(0.0_f64, f64::max);
    let finite_min = values
        .iter()
        .map(|(_, v)| if v.is_finite() { v.min(0.0) } else { 0.0 })
        .fold(0.0_f64, f64::min);
    let range = finite_max - finite_min;

    let label_band = 18.0;
    let plot_bottom = rect.bottom() - label_band;
    let plot_top = rect.top() + 16.0;
    let plot_height = plot_bottom - plot_top;
    let y_of = |v: f64| -> f32 {
        if range > 0.0 {
            plot_bottom - ((v - finite_min) / range) as f32 * plot_height
        } else {
            plot_bottom
        }
    };
    let baseline = y_of(0.0);
    painter.line_segment(
        [
            egui::pos2(rect.left(), baseline),
            egui::pos2(rect.right(), baseline),
        ],
        egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    let n = values.len();
    let slot = rect.width() / n as f32;
    let bar_width = (slot * 0.6).min(64.0);
    let bar_color = egui::Color32::from_rgb(59, 130, 246);
    for (i, (label, value)) in values.iter().enumerate() {
        let cx = rect.left() + slot * (i as f32 + 0.5);
        if value.is_finite() {
            let y = y_of(*value);
            let (top, bottom) = if y <= baseline { (y, baseline) } else { (baseline, y) };
            let bar = egui::Rect::from_min_max(
                egui::pos2(cx - bar_width / 2.0, top),
                egui::pos2(cx + bar_width / 2.0, bottom),
            );
            painter.rect_filled(
                bar,
                egui::Rounding {
                    nw: 4.0,
                    ne: 4.0,
                    sw: 0.0,
                    se: 0.0,
                },
                bar_color,
            );
            painter.text(
                egui::pos2(cx, top - 2.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{value:.2}"),
                egui::FontId::proportional(11.0),
                ui.visuals().text_color(),
            );
        } else {
            painter.text(
                egui::pos2(cx, baseline - 2.0),
                egui::Align2::CENTER_BOTTOM,
                tr.t(keys::RESULT_PAYBACK_NA),
                egui::FontId::proportional(11.0),
                ui.visuals().weak_text_color(),
            );
        }
        painter.text(
            egui::pos2(cx, rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            label,
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_visuals(ctx);

        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Mining Profit Calculator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(txt("gui.settings.button", "Settings")).clicked() {
                        self.show_settings_modal = !self.show_settings_modal;
                    }
                });
            });
        });

        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_inputs(ui);
                });
            });

        // 입력 스냅샷에서 매 프레임 전체를 다시 계산한다. 캐시 없음.
        let result = estimate(self.current_input());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_results(ui, &result);
            });
        });

        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
    }
}
