#![no_main]

use codec::in_range;
use input_core::{EditSession, HostElement, Key, KeyOutcome, Modifiers};
use libfuzzer_sys::fuzz_target;
use policy::FormatOptions;

const PASTES: [&str; 4] = ["1,234.5", "-7", "foo", "99999999"];

fuzz_target!(|data: &[u8]| {
    let options = FormatOptions {
        minimum_value: Some("-5000".to_string()),
        maximum_value: Some("5000".to_string()),
        formula_mode: Some(true),
        ..FormatOptions::dollar()
    };
    let Ok(mut session) = EditSession::with_options(&HostElement::input(None), &options, "") else {
        return;
    };

    for &byte in data {
        match byte % 16 {
            0 => session.on_focus_gained(),
            1 => session.on_focus_lost(),
            2 => press(&mut session, Key::Backspace, Modifiers::NONE),
            3 => press(&mut session, Key::Delete, Modifiers::NONE),
            4 => press(&mut session, Key::ArrowLeft, Modifiers { shift: byte & 16 != 0, ..Modifiers::NONE }),
            5 => press(&mut session, Key::ArrowRight, Modifiers { shift: byte & 16 != 0, ..Modifiers::NONE }),
            6 => press(&mut session, Key::Home, Modifiers::NONE),
            7 => press(&mut session, Key::End, Modifiers::NONE),
            8 => press(&mut session, Key::ArrowUp, Modifiers::NONE),
            9 => press(&mut session, Key::Char('a'), Modifiers::CTRL),
            10 => {
                session.on_paste(PASTES[usize::from(byte >> 4) % PASTES.len()]);
            }
            11 => press(&mut session, Key::Enter, Modifiers::NONE),
            12 => press(&mut session, Key::Escape, Modifiers::NONE),
            _ => {
                let ch = b"0123456789.-+=*/"[usize::from(byte >> 4)] as char;
                press(&mut session, Key::Char(ch), Modifiers::NONE);
            }
        }

        let display = session.formatted_value();
        assert!(session.caret() <= display.len());
        assert!(display.is_char_boundary(session.caret()));
        if let Some(selection) = session.selection() {
            assert!(selection.end <= display.len());
            assert!(display.is_char_boundary(selection.start));
            assert!(display.is_char_boundary(selection.end));
        }
        if !session.is_focused() {
            let raw = session.raw_value();
            assert!(raw.is_empty() || in_range(&raw, session.policy()).is_ok(), "{raw:?} out of range");
        }
        session.take_notifications();
    }
});

fn press(session: &mut EditSession, key: Key, modifiers: Modifiers) {
    let outcome = session.on_key_down(key, modifiers);
    if let Key::Char(ch) = key
        && outcome == KeyOutcome::PassThrough
        && !modifiers.command()
    {
        session.on_key_press(ch);
    }
    session.on_key_up(key);
}
