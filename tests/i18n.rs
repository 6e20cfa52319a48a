use mining_profit_calculator::i18n::{self, fill_template, keys, Translator};

#[test]
fn explicit_cli_language_wins() {
    assert_eq!(i18n::resolve_language("zh", Some("ko-kr")), "zh-cn");
    assert_eq!(i18n::resolve_language("en-us", None), "en-us");
    assert_eq!(i18n::resolve_language("ko", Some("en-us")), "ko");
}

#[test]
fn config_language_used_when_cli_is_auto() {
    assert_eq!(i18n::resolve_language("auto", Some("zh-cn")), "zh-cn");
}

#[test]
fn english_table_has_payback_na() {
    let tr = Translator::new("en");
    assert_eq!(tr.t(keys::RESULT_PAYBACK_NA), "N/A");
}

#[test]
fn chinese_pack_provides_prompts() {
    let tr = Translator::new_with_pack("zh-cn", None);
    assert_eq!(tr.t(keys::PROMPT_HASHRATE), "矿机算力 [TH/s]");
    assert_eq!(tr.t(keys::PROMPT_UNIT_COUNT), "矿机数量");
}

#[test]
fn unknown_key_falls_back_to_korean_table() {
    let tr = Translator::new("en");
    // 영어 표에 없는 키는 한국어 폴백을 거친다.
    assert_eq!(tr.t("does.not.exist"), "?");
}

#[test]
fn year_label_template_fills() {
    let tr = Translator::new_with_pack("zh-cn", None);
    let label = fill_template(tr.t(keys::CHART_YEAR_LABEL), &[("n", "2".to_string())]);
    assert_eq!(label, "第2年");
}
