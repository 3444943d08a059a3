use super::*;
use crate::key::{KeyOutcome, Modifiers};
use policy::{CurrencyPlacement, InvalidPaste, NegativePlacement, PolicyError};

fn session(options: FormatOptions, initial: &str) -> EditSession {
    EditSession::with_options(&HostElement::input(None), &options, initial).unwrap()
}

fn focused(options: FormatOptions, initial: &str) -> EditSession {
    let mut s = session(options, initial);
    s.on_focus_gained();
    s.take_notifications();
    s
}

fn type_text(s: &mut EditSession, text: &str) {
    for ch in text.chars() {
        s.on_key_down(Key::Char(ch), Modifiers::NONE);
        s.on_key_press(ch);
        s.on_key_up(Key::Char(ch));
    }
}

fn press(s: &mut EditSession, key: Key) -> KeyOutcome {
    press_with(s, key, Modifiers::NONE)
}

fn press_with(s: &mut EditSession, key: Key, modifiers: Modifiers) -> KeyOutcome {
    let outcome = s.on_key_down(key, modifiers);
    s.on_key_up(key);
    outcome
}

fn select_all(s: &mut EditSession) {
    press_with(s, Key::Char('a'), Modifiers::CTRL);
}

/// The display with the caret as `|` or the selection in brackets.
fn marked(s: &EditSession) -> String {
    let mut text = s.formatted_value().to_string();
    match s.selection() {
        Some(range) => {
            text.insert(range.end, ']');
            text.insert(range.start, '[');
        }
        None => text.insert(s.caret(), '|'),
    }
    text
}

fn layout(currency: &str, placement: CurrencyPlacement, negative: NegativePlacement) -> FormatOptions {
    FormatOptions {
        currency_symbol: Some(currency.to_string()),
        currency_placement: Some(placement),
        negative_placement: Some(negative),
        ..FormatOptions::integer()
    }
}

fn bounded(minimum: &str, maximum: &str) -> FormatOptions {
    FormatOptions {
        minimum_value: Some(minimum.to_string()),
        maximum_value: Some(maximum.to_string()),
        ..Default::default()
    }
}

// --- typing ---

#[test]
fn refused_zero_keeps_the_caret() {
    let mut s = focused(FormatOptions::default(), "0");
    assert_eq!(s.formatted_value(), "0.00");
    s.set_caret(1, false);

    type_text(&mut s, "0");
    assert_eq!(marked(&s), "0|.00");
    assert!(s.take_notifications().is_empty());
}

#[test]
fn typing_builds_a_grouped_value() {
    let mut s = focused(FormatOptions::dollar(), "");
    assert_eq!(marked(&s), "$|");

    let steps = ["$1|", "$12|", "$123|", "$1,234|", "$1,234.|", "$1,234.5|"];
    for (ch, expected) in "1234.5".chars().zip(steps) {
        type_text(&mut s, &ch.to_string());
        assert_eq!(marked(&s), expected);
    }

    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "$1,234.50");
    assert_eq!(s.raw_value(), "1234.5");
    let notifications = s.take_notifications();
    assert_eq!(notifications.len(), 7);
    assert_eq!(
        notifications.last(),
        Some(&Notification::Change {
            previous: String::new(),
            current: "1234.5".to_string()
        })
    );
}

#[test]
fn typing_mid_number_keeps_the_caret_behind_the_same_digit() {
    let mut s = focused(FormatOptions::dollar(), "1234");
    assert_eq!(marked(&s), "$1,234.00|");
    s.set_caret(2, false);

    type_text(&mut s, "5");
    assert_eq!(marked(&s), "$15|,234.00");
}

#[test]
fn typing_with_comma_decimal_and_suffix_currency() {
    let mut s = focused(FormatOptions::euro(), "");
    assert_eq!(marked(&s), "|\u{202f}€");

    type_text(&mut s, "1234,5");
    assert_eq!(marked(&s), "1.234,5|\u{202f}€");
}

#[test]
fn typing_over_a_selection_replaces_it() {
    let mut s = focused(FormatOptions::dollar(), "5");
    select_all(&mut s);
    assert_eq!(marked(&s), "$[5.00]");

    type_text(&mut s, "7");
    assert_eq!(marked(&s), "$7|");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "$7.00");
    assert_eq!(
        s.take_notifications(),
        vec![
            Notification::Input,
            Notification::Change {
                previous: "5".to_string(),
                current: "7".to_string()
            }
        ]
    );
}

#[test]
fn decimal_key_rules() {
    let mut s = focused(FormatOptions::integer(), "12");
    type_text(&mut s, ".");
    assert_eq!(marked(&s), "12|");

    let mut s = focused(FormatOptions::dollar(), "12.5");
    s.set_caret(2, false);
    type_text(&mut s, ".");
    assert_eq!(marked(&s), "$1|2.50");

    // A point right after the caret is stepped over.
    s.set_caret(3, false);
    type_text(&mut s, ".");
    assert_eq!(marked(&s), "$12.|50");
}

#[test]
fn minus_toggles_and_plus_forces_positive() {
    let mut s = focused(FormatOptions::dollar(), "5");
    type_text(&mut s, "-");
    assert_eq!(marked(&s), "-$5.00|");
    type_text(&mut s, "-");
    assert_eq!(marked(&s), "$5.00|");
    type_text(&mut s, "-");
    type_text(&mut s, "+");
    assert_eq!(marked(&s), "$5.00|");
    type_text(&mut s, "+");
    assert_eq!(s.take_notifications().len(), 4);
}

#[test]
fn minus_is_ignored_when_negatives_are_out_of_range() {
    let mut s = focused(bounded("0", "100"), "5");
    type_text(&mut s, "-");
    assert_eq!(marked(&s), "5|");
    assert!(s.take_notifications().is_empty());
}

#[test]
fn non_positive_range_signs_the_first_digit() {
    let mut s = focused(bounded("-100", "0"), "");
    type_text(&mut s, "50");
    assert_eq!(marked(&s), "-50|");

    type_text(&mut s, "0");
    assert_eq!(marked(&s), "-50|");
    assert_eq!(s.take_notifications().last(), Some(&Notification::MinExceeded));
}

#[test]
fn digits_above_the_maximum_are_refused() {
    let mut s = focused(bounded("0", "100"), "");
    type_text(&mut s, "150");
    assert_eq!(marked(&s), "15|");
    assert_eq!(
        s.take_notifications(),
        vec![Notification::Input, Notification::Input, Notification::MaxExceeded]
    );
}

#[test]
fn digits_beyond_capacity_are_dropped_silently() {
    let mut s = focused(
        FormatOptions {
            minimum_value: Some("-999".to_string()),
            maximum_value: Some("999".to_string()),
            ..FormatOptions::integer()
        },
        "",
    );
    type_text(&mut s, "1234");
    assert_eq!(marked(&s), "123|");
    assert_eq!(s.take_notifications(), vec![Notification::Input; 3]);
}

#[test]
fn leading_zeros_per_mode() {
    let mut deny = focused(FormatOptions::integer(), "");
    type_text(&mut deny, "007");
    assert_eq!(marked(&deny), "7|");

    let allow_options = FormatOptions {
        leading_zero: Some(LeadingZero::Allow),
        ..FormatOptions::integer()
    };
    let mut allow = focused(allow_options, "");
    type_text(&mut allow, "007");
    assert_eq!(marked(&allow), "007|");
    allow.on_focus_lost();
    assert_eq!(allow.formatted_value(), "7");

    let keep_options = FormatOptions {
        leading_zero: Some(LeadingZero::Keep),
        ..FormatOptions::integer()
    };
    let mut keep = focused(keep_options, "");
    type_text(&mut keep, "007");
    keep.on_focus_lost();
    assert_eq!(keep.formatted_value(), "007");
    assert_eq!(keep.raw_value(), "007");
}

// --- deletion ---

#[test]
fn backspace_jumps_over_a_leading_sign() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Left), "-12");
    assert_eq!(s.formatted_value(), "-$12");
    s.set_caret(2, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$|12");

    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Left), "-12");
    s.set_caret(1, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$|12");
}

#[test]
fn delete_removes_a_leading_sign_ahead_of_the_caret() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Left), "-12");
    s.set_caret(0, false);
    press(&mut s, Key::Delete);
    assert_eq!(marked(&s), "$|12");
}

#[test]
fn backspace_removes_a_trailing_sign() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Suffix), "-12");
    assert_eq!(s.formatted_value(), "$12-");
    assert!(s.is_trailing_negative());
    s.set_caret(4, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$12|");
    assert!(!s.is_trailing_negative());
}

#[test]
fn backspace_before_a_trailing_sign_removes_a_digit() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Suffix), "-12");
    s.set_caret(3, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$1|-");
}

#[test]
fn delete_ahead_of_a_trailing_sign() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Suffix), "-12");
    s.set_caret(3, false);
    press(&mut s, Key::Delete);
    assert_eq!(marked(&s), "$12|");

    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Suffix), "-12");
    s.set_caret(2, false);
    press(&mut s, Key::Delete);
    assert_eq!(marked(&s), "$1|-");
}

#[test]
fn backspace_over_sign_after_suffix_currency() {
    let mut s = focused(layout("€", CurrencyPlacement::Suffix, NegativePlacement::Right), "-12");
    assert_eq!(s.formatted_value(), "12€-");
    s.set_caret(s.formatted_value().len(), false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "12|€");
}

#[test]
fn backspace_over_sign_before_suffix_currency_value() {
    let mut s = focused(layout("€", CurrencyPlacement::Suffix, NegativePlacement::Prefix), "-12");
    assert_eq!(s.formatted_value(), "-12€");
    s.set_caret(1, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "|12€");
}

#[test]
fn delete_sign_between_digits_and_suffix_currency() {
    let mut s = focused(layout("€", CurrencyPlacement::Suffix, NegativePlacement::Left), "-12");
    assert_eq!(s.formatted_value(), "12-€");
    s.set_caret(2, false);
    press(&mut s, Key::Delete);
    assert_eq!(marked(&s), "12|€");
}

#[test]
fn deleting_a_selection_takes_the_sign_with_it() {
    let mut s = focused(layout("$", CurrencyPlacement::Prefix, NegativePlacement::Left), "-1234");
    assert_eq!(s.formatted_value(), "-$1,234");
    s.select(0, 3);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$|234");
}

#[test]
fn backspace_over_the_currency_changes_nothing() {
    let mut s = focused(FormatOptions::dollar(), "12");
    s.set_caret(1, false);
    press(&mut s, Key::Backspace);
    assert_eq!(marked(&s), "$|12.00");
    assert!(s.take_notifications().is_empty());
}

// --- clipboard ---

#[test]
fn pasting_text_that_is_not_a_number_changes_nothing() {
    let mut s = focused(FormatOptions::dollar(), "220242.76");
    assert_eq!(s.formatted_value(), "$220,242.76");
    for caret in [0, 4, 11] {
        s.set_caret(caret, false);
        assert_eq!(s.on_paste("foobar"), KeyOutcome::Handled);
        assert_eq!(s.formatted_value(), "$220,242.76");
        assert_eq!(s.caret(), caret);
        assert_eq!(s.take_notifications(), vec![Notification::InvalidPaste]);
    }

    select_all(&mut s);
    press_with(&mut s, Key::Char('v'), Modifiers::CTRL);
    s.on_paste("foobar");
    assert_eq!(marked(&s), "$[220,242.76]");
}

#[test]
fn paste_inserts_at_the_caret() {
    let mut s = focused(FormatOptions::dollar(), "");
    s.on_paste("1,234.5");
    assert_eq!(marked(&s), "$1,234.5|");
    assert_eq!(s.take_notifications(), vec![Notification::Input]);
}

#[test]
fn paste_replaces_the_selection() {
    let mut s = focused(FormatOptions::dollar(), "99");
    select_all(&mut s);
    s.on_paste("-12");
    assert_eq!(marked(&s), "-$12|");
}

#[test]
fn out_of_range_paste_per_mode() {
    let run = |mode: InvalidPaste| {
        let mut s = focused(
            FormatOptions {
                invalid_paste: Some(mode),
                ..bounded("0", "100")
            },
            "50",
        );
        select_all(&mut s);
        s.on_paste("250");
        (marked(&s), s.take_notifications())
    };

    assert_eq!(
        run(InvalidPaste::Reject),
        (
            "[50]".to_string(),
            vec![Notification::InvalidPaste, Notification::MaxExceeded]
        )
    );
    assert_eq!(run(InvalidPaste::Ignore), ("[50]".to_string(), vec![]));
    assert_eq!(
        run(InvalidPaste::Clamp),
        ("100|".to_string(), vec![Notification::Input])
    );
    assert_eq!(
        run(InvalidPaste::Truncate),
        ("25|".to_string(), vec![Notification::Input])
    );
}

#[test]
fn copy_widens_a_partial_prefix() {
    let mut s = focused(FormatOptions::dollar(), "-1234");
    assert_eq!(s.formatted_value(), "-$1,234.00");
    s.select(1, 4);
    assert_eq!(
        press_with(&mut s, Key::Char('c'), Modifiers::CTRL),
        KeyOutcome::Clipboard("-$1,".to_string())
    );
    assert_eq!(s.formatted_value(), "-$1,234.00");
}

#[test]
fn copy_widens_a_partial_suffix() {
    let mut s = focused(FormatOptions::euro(), "1234");
    assert_eq!(s.formatted_value(), "1.234,00\u{202f}€");
    s.select(5, 11);
    assert_eq!(
        press_with(&mut s, Key::Char('c'), Modifiers::CTRL),
        KeyOutcome::Clipboard(",00\u{202f}€".to_string())
    );
    s.select(6, 7);
    assert_eq!(
        press_with(&mut s, Key::Char('c'), Modifiers::CTRL),
        KeyOutcome::Clipboard("0".to_string())
    );
}

#[test]
fn cut_removes_the_number_and_keeps_the_sign() {
    let mut s = focused(FormatOptions::dollar(), "-1234");
    select_all(&mut s);
    assert_eq!(
        press_with(&mut s, Key::Char('x'), Modifiers::CTRL),
        KeyOutcome::Clipboard("1,234.00".to_string())
    );
    assert_eq!(marked(&s), "-$|");
}

// --- focus ---

#[test]
fn brackets_come_off_while_focused() {
    let options = FormatOptions {
        bracket_pair: Some("(,)".to_string()),
        ..Default::default()
    };
    let mut s = session(options, "-999.99");
    assert_eq!(s.formatted_value(), "(999.99)");
    s.on_focus_gained();
    assert_eq!(s.formatted_value(), "-999.99");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "(999.99)");
    assert!(s.take_notifications().is_empty());
}

#[test]
fn focus_places_widen_while_focused() {
    let options = FormatOptions {
        decimal_places: Some(2),
        focus_decimal_places: Some(4),
        ..Default::default()
    };
    let mut s = session(options, "1.23456");
    assert_eq!(s.formatted_value(), "1.23");
    s.on_focus_gained();
    assert_eq!(s.formatted_value(), "1.2346");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "1.23");
    assert_eq!(s.raw_value(), "1.2346");
}

#[test]
fn select_on_focus_selects_the_number() {
    let options = FormatOptions {
        select_on_focus: Some(true),
        ..FormatOptions::dollar()
    };
    let s = focused(options, "-3");
    assert_eq!(marked(&s), "-$[3.00]");
}

#[test]
fn empty_becomes_zero_at_blur() {
    let options = FormatOptions {
        empty_value: Some(EmptyValue::Zero),
        ..Default::default()
    };
    let mut s = focused(options, "");
    assert_eq!(s.formatted_value(), "0.00");
    select_all(&mut s);
    press(&mut s, Key::Backspace);
    assert_eq!(s.formatted_value(), "");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "0.00");
    assert_eq!(s.raw_value(), "0");
    assert_eq!(s.take_notifications(), vec![Notification::Input]);
}

#[test]
fn press_shows_the_currency_after_a_key() {
    let options = FormatOptions {
        empty_value: Some(EmptyValue::Press),
        ..FormatOptions::dollar()
    };
    let mut s = focused(options, "");
    assert_eq!(s.formatted_value(), "");
    press(&mut s, Key::ArrowLeft);
    assert_eq!(marked(&s), "$|");
}

#[test]
fn blur_reconciles_a_replaced_display() {
    let mut s = focused(FormatOptions::dollar(), "1");
    s.replace_display("$42");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "$42.00");
    assert_eq!(
        s.take_notifications(),
        vec![Notification::Change {
            previous: "1".to_string(),
            current: "42".to_string()
        }]
    );
}

#[test]
fn blur_keeps_the_last_valid_value_when_the_display_is_out_of_range() {
    let mut s = focused(FormatOptions::default(), "1");
    s.replace_display("99999999999999");
    s.on_focus_lost();
    assert_eq!(s.formatted_value(), "1.00");
    assert_eq!(s.take_notifications(), vec![Notification::MaxExceeded]);
}

// --- programmatic values ---

#[test]
fn set_value_out_of_range_keeps_the_prior_value() {
    let mut s = session(bounded("-9999999999999.99", "9999999999999.99"), "12");
    let err = s.set_value("99999999999999.99").unwrap_err();
    assert_eq!(
        err,
        SessionError::OutOfRange {
            value: "99999999999999.99".to_string(),
            minimum: "-9999999999999.99".to_string(),
            maximum: "9999999999999.99".to_string(),
        }
    );
    assert_eq!(s.formatted_value(), "12.00");
    assert_eq!(s.raw_value(), "12");
}

#[test]
fn set_value_accepts_display_notation_and_rounds() {
    let mut s = session(FormatOptions::dollar(), "");
    s.set_value("-$1,234.5").unwrap();
    assert_eq!(s.formatted_value(), "-$1,234.50");
    assert_eq!(s.raw_value(), "-1234.5");

    s.set_value("1.005").unwrap();
    assert_eq!(s.raw_value(), "1.01");

    assert_eq!(
        s.set_value("12abc"),
        Err(SessionError::NotNumeric {
            value: "12abc".to_string()
        })
    );
}

#[test]
fn localized_value_uses_the_requested_locale() {
    let s = session(FormatOptions::dollar(), "-1234.5");
    assert_eq!(
        s.localized_value(",-".parse().unwrap()),
        Localized::Text("1234,5-".to_string())
    );
    assert_eq!(s.localized_value(OutputLocale::Number), Localized::Number(-1234.5));
}

#[test]
fn update_policy_reformats_and_rolls_back_on_error() {
    let mut s = session(FormatOptions::dollar(), "1234.5");
    s.update_policy(&FormatOptions {
        decimal_places: Some(0),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(s.formatted_value(), "$1,235");

    let err = s
        .update_policy(&FormatOptions {
            minimum_value: Some("5000".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, SessionError::OutOfRange { .. }));
    assert_eq!(s.policy().options().minimum_value, None);

    let err = s
        .update_policy(&FormatOptions {
            decimal_character: Some(','),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Policy(PolicyError::SeparatorCollision { .. })
    ));
    assert_eq!(s.formatted_value(), "$1,235");
}

#[test]
fn unsupported_and_read_only_hosts() {
    let err = EditSession::with_options(
        &HostElement::input(Some("number")),
        &FormatOptions::default(),
        "",
    )
    .unwrap_err();
    assert_eq!(
        err,
        SessionError::UnsupportedHost {
            tag: "input".to_string(),
            input_type: Some("number".to_string())
        }
    );

    let mut s =
        EditSession::with_options(&HostElement::element("span"), &FormatOptions::dollar(), "-5")
            .unwrap();
    assert_eq!(s.host_kind(), HostKind::Static);
    assert_eq!(s.formatted_value(), "-$5.00");
    s.on_focus_gained();
    assert!(!s.is_focused());
    assert_eq!(s.on_key_press('1'), KeyOutcome::PassThrough);
}

#[test]
fn submit_posts_the_raw_value_when_asked() {
    let options = FormatOptions {
        unformat_on_submit: Some(true),
        ..FormatOptions::dollar()
    };
    let mut s = session(options, "1234.5");
    assert_eq!(s.on_submit(), "1234.5");
    assert_eq!(s.formatted_value(), "1234.5");
    s.on_submit_finished();
    assert_eq!(s.formatted_value(), "$1,234.50");

    let mut plain = session(FormatOptions::dollar(), "1234.5");
    assert_eq!(plain.on_submit(), "$1,234.50");
}

// --- control keys ---

#[test]
fn navigation_moves_over_whole_characters() {
    let mut s = focused(FormatOptions::dollar(), "12");
    assert_eq!(marked(&s), "$12.00|");
    press(&mut s, Key::ArrowLeft);
    assert_eq!(marked(&s), "$12.0|0");
    press_with(&mut s, Key::ArrowLeft, Modifiers::SHIFT);
    press_with(&mut s, Key::ArrowLeft, Modifiers::SHIFT);
    assert_eq!(marked(&s), "$12[.0]0");
    press(&mut s, Key::ArrowRight);
    assert_eq!(marked(&s), "$12.0|0");
    press(&mut s, Key::Home);
    assert_eq!(marked(&s), "|$12.00");
    press_with(&mut s, Key::End, Modifiers::SHIFT);
    assert_eq!(marked(&s), "[$12.00]");

    let mut euro = focused(FormatOptions::euro(), "1");
    press(&mut euro, Key::End);
    assert_eq!(euro.caret(), 10);
    press(&mut euro, Key::ArrowLeft);
    assert_eq!(euro.caret(), 7);
    press(&mut euro, Key::ArrowLeft);
    assert_eq!(euro.caret(), 4);
}

#[test]
fn arrows_step_exactly_within_bounds() {
    let mut s = focused(FormatOptions::dollar(), "1.5");
    press(&mut s, Key::ArrowUp);
    assert_eq!(marked(&s), "$2.50|");
    press(&mut s, Key::ArrowDown);
    press(&mut s, Key::ArrowDown);
    assert_eq!(s.raw_value(), "0.5");
    assert_eq!(s.take_notifications(), vec![Notification::Input; 3]);

    let mut capped = focused(bounded("0", "10"), "10");
    press(&mut capped, Key::ArrowUp);
    assert_eq!(capped.formatted_value(), "10");
    assert_eq!(capped.take_notifications(), vec![Notification::MaxExceeded]);
}

#[test]
fn escape_reverts_to_the_value_at_focus() {
    let mut s = focused(FormatOptions::dollar(), "5");
    select_all(&mut s);
    type_text(&mut s, "9");
    assert_eq!(s.formatted_value(), "$9");
    assert_eq!(press(&mut s, Key::Escape), KeyOutcome::Handled);
    assert_eq!(marked(&s), "$[5.00]");
    s.on_focus_lost();
    assert_eq!(
        s.take_notifications(),
        vec![Notification::Input, Notification::Input]
    );
}

#[test]
fn enter_commits_the_change_once() {
    let mut s = focused(FormatOptions::dollar(), "5");
    select_all(&mut s);
    type_text(&mut s, "8");
    assert_eq!(press(&mut s, Key::Enter), KeyOutcome::PassThrough);
    s.on_focus_lost();
    let changes: Vec<_> = s
        .take_notifications()
        .into_iter()
        .filter(|n| matches!(n, Notification::Change { .. }))
        .collect();
    assert_eq!(
        changes,
        vec![Notification::Change {
            previous: "5".to_string(),
            current: "8".to_string()
        }]
    );
}

// --- formula mode ---

fn formula_options() -> FormatOptions {
    FormatOptions {
        formula_mode: Some(true),
        maximum_value: Some("100".to_string()),
        ..FormatOptions::dollar()
    }
}

#[test]
fn formula_result_replaces_the_value() {
    let mut s = focused(formula_options(), "5");
    type_text(&mut s, "=");
    assert!(s.in_formula_mode());
    assert_eq!(s.formatted_value(), "=");

    type_text(&mut s, "12+3*4");
    assert_eq!(s.formatted_value(), "=12+3*4");
    press(&mut s, Key::Enter);
    assert!(!s.in_formula_mode());
    assert_eq!(s.formatted_value(), "$24.00");
    assert_eq!(s.raw_value(), "24");
    assert_eq!(s.take_notifications(), vec![Notification::Input]);
}

#[test]
fn failed_formula_keeps_the_expression() {
    let mut s = focused(formula_options(), "5");
    type_text(&mut s, "=1/0");
    press(&mut s, Key::Enter);
    assert_eq!(s.formula_text(), Some("1/0"));
    assert_eq!(s.take_notifications(), vec![Notification::InvalidFormula]);

    press(&mut s, Key::Backspace);
    press(&mut s, Key::Backspace);
    press(&mut s, Key::Backspace);
    type_text(&mut s, "50*3");
    press(&mut s, Key::Enter);
    assert_eq!(s.formula_text(), Some("50*3"));
    assert_eq!(s.take_notifications(), vec![Notification::InvalidFormula]);

    press(&mut s, Key::Escape);
    assert!(!s.in_formula_mode());
    assert_eq!(s.formatted_value(), "$5.00");
}

#[test]
fn blur_abandons_a_formula() {
    let mut s = focused(formula_options(), "5");
    type_text(&mut s, "=7");
    s.on_focus_lost();
    assert!(!s.in_formula_mode());
    assert_eq!(s.formatted_value(), "$5.00");
}

#[test]
fn formula_characters_reach_key_press() {
    let mut s = focused(formula_options(), "5");
    type_text(&mut s, "=");
    assert_eq!(
        s.on_key_down(Key::Char('7'), Modifiers::NONE),
        KeyOutcome::PassThrough
    );
    assert_eq!(press(&mut s, Key::ArrowLeft), KeyOutcome::Handled);
}

#[test]
fn oversized_formula_paste_fails_cleanly() {
    let mut s = focused(formula_options(), "5");
    type_text(&mut s, "=");
    assert_eq!(s.on_paste(&"(".repeat(100_000)), KeyOutcome::Handled);
    assert_eq!(s.formula_text().map(str::len), Some(super::formula::MAX_FORMULA_LEN));

    type_text(&mut s, "1");
    assert_eq!(s.formula_text().map(str::len), Some(super::formula::MAX_FORMULA_LEN));
    press(&mut s, Key::Enter);
    assert!(s.in_formula_mode());
    assert_eq!(s.take_notifications(), vec![Notification::InvalidFormula]);

    press(&mut s, Key::Escape);
    assert_eq!(s.formatted_value(), "$5.00");
}
