use abacus_core::config::{Config, DisplayConfig};
use abacus_core::display::{format_number, parse_display, render, round_significant, to_exponential};
use abacus_core::engine::{EntryState, Pending};
use abacus_core::input::map_key;
use abacus_core::keypad::{ButtonVariant, Keypad, COLUMNS};
use abacus_core::operator::calculate_symbol;
use abacus_core::{calculate, CalculatorEngine, Command, CoreError, Operator};

fn keys(engine: &mut CalculatorEngine, seq: &[&str]) {
    let pad = Keypad::standard();
    for label in seq {
        assert!(pad.press(engine, label), "no control for {label}");
    }
}

fn run(seq: &[&str]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    keys(&mut engine, seq);
    engine
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_new_engine_defaults() {
    let engine = CalculatorEngine::new();
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.previous_value(), None);
    assert_eq!(engine.operation(), None);
    assert!(!engine.waiting_for_operand());
    assert_eq!(engine.state(), EntryState::EnteringOperand);
}

// ============================================================================
// Digit & decimal entry
// ============================================================================

#[test]
fn test_leading_zero_collapses() {
    assert_eq!(run(&["0", "0", "7"]).display(), "7");
}

#[test]
fn test_digits_append() {
    assert_eq!(run(&["1", "2", "3"]).display(), "123");
}

#[test]
fn test_decimal_only_once() {
    assert_eq!(run(&["1", ".", "5", ".", "2"]).display(), "1.52");
}

#[test]
fn test_decimal_on_zero() {
    assert_eq!(run(&["."]).display(), "0.");
    assert_eq!(run(&[".", "5"]).display(), "0.5");
}

#[test]
fn test_decimal_starts_new_operand_after_operator() {
    let engine = run(&["9", "+", "."]);
    assert_eq!(engine.display(), "0.");
    assert!(!engine.waiting_for_operand());
    assert_eq!(engine.operation(), Some(Operator::Add));
}

#[test]
fn test_out_of_range_digit_ignored() {
    let mut engine = CalculatorEngine::new();
    engine.input_digit(12);
    assert_eq!(engine.display(), "0");
}

// ============================================================================
// Operators & equals
// ============================================================================

#[test]
fn test_seven_plus_three_is_ten() {
    assert_eq!(run(&["7", "+", "3", "="]).display(), "10");
}

#[test]
fn test_each_operator() {
    assert_eq!(run(&["9", "−", "4", "="]).display(), "5");
    assert_eq!(run(&["6", "×", "7", "="]).display(), "42");
    assert_eq!(run(&["1", "÷", "4", "="]).display(), "0.25");
}

#[test]
fn test_divide_by_zero_is_non_finite() {
    let engine = run(&["5", "÷", "0", "="]);
    assert_eq!(engine.display(), "Infinity");
    assert!(!engine.value().is_finite());
}

#[test]
fn test_zero_over_zero_is_nan() {
    let engine = run(&["0", "÷", "0", "="]);
    assert_eq!(engine.display(), "NaN");
}

#[test]
fn test_operator_records_pending() {
    let engine = run(&["8", "×"]);
    assert_eq!(engine.previous_value().as_deref(), Some("8"));
    assert_eq!(engine.operation(), Some(Operator::Multiply));
    assert!(engine.waiting_for_operand());
    assert_eq!(
        engine.state(),
        EntryState::OperatorPending(Pending {
            operand: 8.0,
            operator: Operator::Multiply
        })
    );
}

#[test]
fn test_chained_operators_evaluate_left_to_right() {
    let engine = run(&["2", "+", "3", "×"]);
    assert_eq!(engine.display(), "5");
    assert_eq!(engine.previous_value().as_deref(), Some("5"));
    assert_eq!(engine.operation(), Some(Operator::Multiply));

    let engine = run(&["2", "+", "3", "×", "4", "="]);
    assert_eq!(engine.display(), "20");
}

#[test]
fn test_second_operator_without_operand_reuses_display() {
    // The pending operator runs against the display, which still shows 2.
    let engine = run(&["2", "+", "×"]);
    assert_eq!(engine.display(), "4");
    assert_eq!(engine.operation(), Some(Operator::Multiply));
}

#[test]
fn test_equals_without_pending_is_noop() {
    let engine = run(&["4", "2", "="]);
    assert_eq!(engine.display(), "42");
    assert_eq!(engine.state(), EntryState::EnteringOperand);
}

#[test]
fn test_equals_clears_pending_and_waits() {
    let engine = run(&["7", "+", "3", "="]);
    assert_eq!(engine.previous_value(), None);
    assert_eq!(engine.operation(), None);
    assert!(engine.waiting_for_operand());
    assert_eq!(engine.state(), EntryState::ShowingResult);
}

#[test]
fn test_digit_after_result_starts_over() {
    let engine = run(&["7", "+", "3", "=", "4"]);
    assert_eq!(engine.display(), "4");
    assert_eq!(engine.state(), EntryState::EnteringOperand);
}

#[test]
fn test_result_can_feed_next_operation() {
    assert_eq!(run(&["7", "+", "3", "=", "×", "2", "="]).display(), "20");
}

#[test]
fn test_repeated_equals_is_noop() {
    assert_eq!(run(&["7", "+", "3", "=", "="]).display(), "10");
}

#[test]
fn test_point_one_plus_point_two_is_rounded() {
    assert_eq!(run(&[".", "1", "+", ".", "2", "="]).display(), "0.3");
}

#[test]
fn test_raw_precision_keeps_binary_artifacts() {
    let cfg = DisplayConfig {
        significant_digits: 0,
        ..DisplayConfig::default()
    };
    let mut engine = CalculatorEngine::with_config(cfg);
    keys(&mut engine, &[".", "1", "+", ".", "2", "="]);
    assert_eq!(engine.display(), "0.30000000000000004");
    assert_eq!(engine.rendered(), "3.000000e-1");
}

// ============================================================================
// Sign, percent, clear
// ============================================================================

#[test]
fn test_toggle_sign_round_trip() {
    let mut engine = run(&["4"]);
    engine.toggle_sign();
    assert_eq!(engine.display(), "-4");
    engine.toggle_sign();
    assert_eq!(engine.display(), "4");
}

#[test]
fn test_toggle_sign_keeps_long_entry_intact() {
    let mut engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3", "4", "5", "6"]);
    engine.toggle_sign();
    assert_eq!(engine.display(), "-1234567890123456");
    engine.toggle_sign();
    assert_eq!(engine.display(), "1234567890123456");
}

#[test]
fn test_toggle_sign_on_zero_stays_zero() {
    assert_eq!(run(&["±"]).display(), "0");
}

#[test]
fn test_percent_of_fifty() {
    assert_eq!(run(&["5", "0", "%"]).display(), "0.5");
}

#[test]
fn test_sign_keeps_entry_state() {
    let engine = run(&["1", "2", "±", "3"]);
    assert_eq!(engine.display(), "-123");
}

#[test]
fn test_toggle_while_waiting_changes_right_operand() {
    assert_eq!(run(&["5", "+", "±", "="]).display(), "0");
}

#[test]
fn test_clear_resets_everything() {
    let mut engine = run(&["9", "×", "8", "+", "1"]);
    engine.clear();
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.previous_value(), None);
    assert_eq!(engine.operation(), None);
    assert!(!engine.waiting_for_operand());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_short_display_rendered_verbatim() {
    assert_eq!(run(&["1", "2", "3"]).rendered(), "123");
}

#[test]
fn test_long_display_switches_to_exponential() {
    let engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3"]);
    assert_eq!(engine.display(), "1234567890123");
    assert_eq!(engine.rendered(), "1.234568e+12");
}

#[test]
fn test_twelve_chars_not_exponential() {
    let engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2"]);
    assert_eq!(engine.rendered(), "123456789012");
}

#[test]
fn test_render_honours_config() {
    let cfg = DisplayConfig {
        max_len: 4,
        exponent_digits: 2,
        significant_digits: 15,
    };
    assert_eq!(render("12345", &cfg), "1.23e+4");
    assert_eq!(render("1234", &cfg), "1234");
}

#[test]
fn test_snapshot_serializes() {
    let engine = run(&["3", "+"]);
    let snap = engine.snapshot();
    assert_eq!(snap.display, "3");
    assert_eq!(snap.previous_value.as_deref(), Some("3"));
    assert_eq!(snap.operation, Some(Operator::Add));
    assert!(snap.waiting_for_operand);

    let json = serde_json::to_string(&snap).unwrap();
    let back: abacus_core::engine::EngineSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

// ============================================================================
// Number formatting
// ============================================================================

#[test]
fn test_format_number_integers_and_fractions() {
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(-4.0), "-4");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn test_format_number_exponential_band() {
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.000001), "0.000001");
}

#[test]
fn test_format_number_non_finite() {
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn test_parse_display_round_trips_formatted_values() {
    assert_eq!(parse_display("Infinity"), f64::INFINITY);
    assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_display("NaN").is_nan());
    assert_eq!(parse_display("1e+21"), 1e21);
    assert_eq!(parse_display("-0.25"), -0.25);
}

#[test]
fn test_to_exponential() {
    assert_eq!(to_exponential(1234567890123.0, 6), "1.234568e+12");
    assert_eq!(to_exponential(0.00012, 2), "1.20e-4");
    assert_eq!(to_exponential(f64::NAN, 6), "NaN");
}

#[test]
fn test_to_exponential_rounds_ties_away_from_zero() {
    assert_eq!(to_exponential(1234568500000.0, 6), "1.234569e+12");
    assert_eq!(to_exponential(1000000500000.0, 6), "1.000001e+12");
    assert_eq!(to_exponential(-1234568500000.0, 6), "-1.234569e+12");
    assert_eq!(to_exponential(2.5, 0), "3e+0");
}

#[test]
fn test_to_exponential_carry_bumps_exponent() {
    assert_eq!(to_exponential(9999999500000.0, 6), "1.000000e+13");
    assert_eq!(to_exponential(0.0, 2), "0.00e+0");
}

#[test]
fn test_long_tie_entry_renders_rounded_up() {
    let engine = run(&["1", "2", "3", "4", "5", "6", "8", "5", "0", "0", "0", "0", "0"]);
    assert_eq!(engine.rendered(), "1.234569e+12");
}

#[test]
fn test_round_significant() {
    assert_eq!(round_significant(0.1 + 0.2, 15), 0.3);
    assert_eq!(round_significant(0.1 + 0.2, 0), 0.1 + 0.2);
    assert!(round_significant(f64::INFINITY, 15).is_infinite());
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_calculate_without_operator_returns_rhs() {
    assert_eq!(calculate(3.0, 9.0, None), 9.0);
    assert_eq!(calculate_symbol(3.0, 9.0, "="), 9.0);
    assert_eq!(calculate_symbol(3.0, 9.0, "^"), 9.0);
}

#[test]
fn test_calculate_symbols() {
    assert_eq!(calculate_symbol(3.0, 9.0, "+"), 12.0);
    assert_eq!(calculate_symbol(3.0, 9.0, "−"), -6.0);
    assert_eq!(calculate_symbol(3.0, 9.0, "×"), 27.0);
    assert_eq!(calculate_symbol(9.0, 3.0, "÷"), 3.0);
}

#[test]
fn test_operator_from_str() {
    assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
    assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
    assert!(matches!(
        "=".parse::<Operator>(),
        Err(CoreError::UnknownOperator(s)) if s == "="
    ));
}

#[test]
fn test_operator_display_uses_keypad_glyph() {
    assert_eq!(Operator::Subtract.to_string(), "−");
    assert_eq!(Operator::all().len(), 4);
}

// ============================================================================
// Keyboard mapping
// ============================================================================

#[test]
fn test_keyboard_digits() {
    for d in 0..=9u8 {
        let key = d.to_string();
        let binding = map_key(&key).unwrap();
        assert_eq!(binding.command, Command::Digit(d));
        assert!(!binding.prevent_default);
    }
}

#[test]
fn test_keyboard_operators() {
    assert_eq!(map_key("+").unwrap().command, Command::Operator(Operator::Add));
    assert_eq!(map_key("-").unwrap().command, Command::Operator(Operator::Subtract));
    assert_eq!(map_key("*").unwrap().command, Command::Operator(Operator::Multiply));
    assert_eq!(map_key("/").unwrap().command, Command::Operator(Operator::Divide));
}

#[test]
fn test_keyboard_prevent_default_keys() {
    assert!(map_key("/").unwrap().prevent_default);
    assert!(map_key("Enter").unwrap().prevent_default);
    assert!(map_key("=").unwrap().prevent_default);
    assert!(!map_key("*").unwrap().prevent_default);
    assert!(!map_key("Escape").unwrap().prevent_default);
}

#[test]
fn test_keyboard_clear_keys() {
    for key in ["Escape", "c", "C"] {
        assert_eq!(map_key(key).unwrap().command, Command::Clear);
    }
}

#[test]
fn test_keyboard_unmapped_keys() {
    for key in ["x", "%", "Backspace", "a", "", "10"] {
        assert!(map_key(key).is_none(), "{key:?} should be unmapped");
    }
}

#[test]
fn test_keyboard_sequence_drives_engine() {
    let mut engine = CalculatorEngine::new();
    for key in ["1", "2", "*", "3", "Enter"] {
        let binding = map_key(key).expect("mapped key");
        engine.apply(binding.command);
    }
    assert_eq!(engine.display(), "36");

    engine.apply(map_key("Escape").unwrap().command);
    assert_eq!(engine.display(), "0");
}

// ============================================================================
// Keypad layout
// ============================================================================

#[test]
fn test_keypad_has_nineteen_controls_in_five_rows() {
    let pad = Keypad::standard();
    assert_eq!(pad.rows().len(), 5);
    assert_eq!(pad.buttons().count(), 19);
    for row in pad.rows() {
        let width: usize = row.iter().map(|b| b.span).sum();
        assert_eq!(width, COLUMNS);
    }
}

#[test]
fn test_keypad_labels_in_order() {
    let pad = Keypad::standard();
    let labels: Vec<&str> = pad.buttons().map(|b| b.label).collect();
    assert_eq!(
        labels,
        vec![
            "AC", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "−", "1", "2", "3", "+", "0",
            ".", "="
        ]
    );
}

#[test]
fn test_keypad_variants() {
    let pad = Keypad::standard();
    assert_eq!(pad.find("AC").unwrap().variant, ButtonVariant::Secondary);
    assert_eq!(pad.find("÷").unwrap().variant, ButtonVariant::Operation);
    assert_eq!(pad.find("5").unwrap().variant, ButtonVariant::Number);
    assert_eq!(pad.find("=").unwrap().variant, ButtonVariant::Equals);
    assert_eq!(pad.find("0").unwrap().span, 2);
}

#[test]
fn test_keypad_unknown_label() {
    let mut engine = CalculatorEngine::new();
    assert!(!Keypad::standard().press(&mut engine, "sqrt"));
    assert_eq!(engine.display(), "0");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.display.max_len, 12);
    assert_eq!(cfg.display.exponent_digits, 6);
    assert_eq!(cfg.display.significant_digits, 15);
    assert_eq!(cfg.appearance.theme, "Default");
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut cfg = Config::default();
    cfg.appearance.theme = "Monokai".to_string();
    cfg.display.significant_digits = 10;
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "appearance": { "theme": "Solarized" } }"#).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.appearance.theme, "Solarized");
    assert_eq!(cfg.display, DisplayConfig::default());
}

#[test]
fn test_config_out_of_range_values_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "display": { "max_len": 1, "exponent_digits": 40, "significant_digits": 99 } }"#,
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.display.max_len, 4);
    assert_eq!(cfg.display.exponent_digits, 12);
    assert_eq!(cfg.display.significant_digits, 17);
}

#[test]
fn test_config_malformed_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(CoreError::ConfigParse { .. })
    ));
}
