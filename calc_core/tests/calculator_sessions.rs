//! Integration tests for the calculator core
//!
//! These tests drive complete key sequences through the public facade.

use calc_core::{Calculator, CalculatorConfig, PressOutcome, StateKind};

fn run(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    calc.press_all(keys);
    calc
}

fn display_after(keys: &str) -> String {
    run(keys).current_display_state().to_string()
}

#[test]
fn test_digit_sequences_display_verbatim() {
    for keys in ["1", "7", "10", "905", "1000000", "123456789", "9876543210"] {
        assert_eq!(display_after(keys), keys, "typed {keys:?}");
    }
}

#[test]
fn test_leading_zeros_are_ignored() {
    assert_eq!(display_after("0007"), "7");
    assert_eq!(display_after("000"), "0");
}

#[test]
fn test_addition() {
    assert_eq!(display_after("5+3="), "8");
}

#[test]
fn test_division_by_zero_shows_infinity() {
    let calc = run("5/0=");
    assert_eq!(calc.current_display_state(), "Infinity");
    assert_eq!(calc.state_kind(), StateKind::Computed);
}

#[test]
fn test_sqrt_of_negative_shows_nan() {
    let calc = run("4MR");
    assert_eq!(calc.current_display_state(), "NaN");
    assert_eq!(calc.state_kind(), StateKind::Computed);
}

#[test]
fn test_chaining() {
    assert_eq!(display_after("5+3+"), "8");
    assert_eq!(display_after("5+3+2="), "10");
    assert_eq!(display_after("2*3-1/5="), "1");
}

#[test]
fn test_operator_replacement() {
    // The second operator replaces the first one
    assert_eq!(display_after("6+*2="), "12");
}

#[test]
fn test_decimal_arithmetic() {
    assert_eq!(display_after("1,5+2,25="), "3,75");
    assert_eq!(display_after(",5*4="), "2");
    assert_eq!(display_after("3,="), "3");
}

#[test]
fn test_double_separator() {
    assert_eq!(display_after(",,"), "0,");
    assert_eq!(display_after("2,,5"), "2,5");
}

#[test]
fn test_invalid_key_enters_error() {
    for prefix in ["", "3", "3,", "3+", "3+4="] {
        let mut calc = run(prefix);
        assert_eq!(calc.apply_key('@'), PressOutcome::Errored);
        assert_eq!(calc.current_display_state(), "-E-");
        assert_eq!(calc.state_kind(), StateKind::Error);

        calc.press_all("123+=,");
        assert_eq!(calc.current_display_state(), "-E-", "error state is sticky");
    }
}

#[test]
fn test_clear_recovers_from_error() {
    let mut calc = run("5+@");
    calc.press('C');
    assert_eq!(calc.current_display_state(), "0");
    assert_eq!(calc.state_kind(), StateKind::Zero);
    assert!(calc.pending().is_none());

    calc.press_all("3=");
    assert_eq!(calc.current_display_state(), "3");
}

#[test]
fn test_memory_round_trip() {
    let mut calc = run("2,5P");
    calc.press_all("C7+G=");
    assert_eq!(calc.current_display_state(), "9,5");
    assert_eq!(calc.memory(), 2.5);
}

#[test]
fn test_memory_survives_clear_and_error() {
    let mut calc = run("42P@C");
    assert_eq!(calc.memory(), 42.0);
    calc.press('G');
    assert_eq!(calc.current_display_state(), "42");
}

#[test]
fn test_reset_key_clears_memory() {
    let mut calc = run("42PO");
    assert_eq!(calc.memory(), 0.0);
    assert_eq!(calc.current_display_state(), "0");
    calc.press('G');
    assert_eq!(calc.current_display_state(), "0");
}

#[test]
fn test_repeated_equals_is_idempotent() {
    let mut calc = run("7*6=");
    assert_eq!(calc.current_display_state(), "42");
    for _ in 0..3 {
        calc.press('=');
        assert_eq!(calc.current_display_state(), "42");
    }
}

#[test]
fn test_length_guard() {
    let calc = run("123456789012");
    assert_eq!(calc.current_display_state(), "12345678901");
    assert_eq!(calc.current_display_state().len(), 11);
}

#[test]
fn test_new_number_after_result() {
    // A digit after a result starts a fresh number
    assert_eq!(display_after("5+3=2"), "2");
    assert_eq!(display_after("5+3=,"), "0,");
    assert_eq!(display_after("5+3=2*4="), "8");
}

#[test]
fn test_unary_operations() {
    assert_eq!(display_after("9R"), "3");
    assert_eq!(display_after("4Q"), "16");
    assert_eq!(display_after("4I"), "0,25");
    assert_eq!(display_after("5M"), "-5");
    assert_eq!(display_after("0S"), "0");
    assert_eq!(display_after("K"), "1");
    assert_eq!(display_after("10+4R="), "12");
}

#[test]
fn test_instances_do_not_share_memory() {
    let a = run("5P");
    let b = run("G");
    assert_eq!(a.memory(), 5.0);
    assert_eq!(b.memory(), 0.0);
    assert_eq!(b.current_display_state(), "0");
}

#[test]
fn test_custom_keys() {
    let mut config = CalculatorConfig::default();
    config.keys.add = 'a';
    config.keys.equals = 'e';
    let mut calc = Calculator::with_config(config).unwrap();

    calc.press_all("2a2e");
    assert_eq!(calc.current_display_state(), "4");

    calc.press('+');
    assert_eq!(calc.state_kind(), StateKind::Error);
}
