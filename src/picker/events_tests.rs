//! Tests for picker key handling

use crate::keys::KeyBinding;
use crate::picker::Step;
use crate::test_utils::test_helpers::{TEST_OPTIONS, key, key_with_mods, test_picker, typed};
use proptest::prelude::*;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_arrow_keys_move_and_wrap() {
    let mut picker = test_picker(&TEST_OPTIONS);

    assert_eq!(picker.handle_key(key(KeyCode::Up)), Step::Continue);
    assert_eq!(picker.state().cursor(), 2);

    assert_eq!(picker.handle_key(key(KeyCode::Down)), Step::Continue);
    assert_eq!(picker.state().cursor(), 0);
}

#[test]
fn test_typing_moves_cursor_to_prefix_match() {
    let mut picker = test_picker(&TEST_OPTIONS);

    for k in typed("be") {
        assert_eq!(picker.handle_key(k), Step::Continue);
    }

    assert_eq!(picker.state().cursor(), 1);
    assert_eq!(picker.state().query(), "be");
}

#[test]
fn test_movement_clears_query() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.handle_key(key(KeyCode::Char('g')));
    assert_eq!(picker.state().query(), "g");

    picker.handle_key(key(KeyCode::Down));
    assert_eq!(picker.state().query(), "");
    assert_eq!(picker.state().cursor(), 0);
}

#[test]
fn test_backspace_clears_query_only() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.handle_key(key(KeyCode::Char('g')));

    assert_eq!(picker.handle_key(key(KeyCode::Backspace)), Step::Continue);
    assert_eq!(picker.state().query(), "");
    assert_eq!(picker.state().cursor(), 2);
}

#[test]
fn test_home_and_end() {
    let mut picker = test_picker(&TEST_OPTIONS);

    picker.handle_key(key(KeyCode::End));
    assert_eq!(picker.state().cursor(), 2);

    picker.handle_key(key(KeyCode::Home));
    assert_eq!(picker.state().cursor(), 0);
}

#[test]
fn test_end_honours_legacy_config() {
    let mut config = crate::config::PickerConfig::default();
    config.strict_last_index = false;
    let mut picker = test_picker(&TEST_OPTIONS).with_config(config);

    picker.handle_key(key(KeyCode::End));
    assert_eq!(picker.state().cursor(), 1);
}

#[test]
fn test_confirm_keys_end_loop_without_mutation() {
    for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Char(' ')] {
        let mut picker = test_picker(&TEST_OPTIONS);
        picker.handle_key(key(KeyCode::Char('b')));

        assert_eq!(picker.handle_key(key(code)), Step::Confirm);
        assert_eq!(picker.state().cursor(), 1);
        assert_eq!(picker.state().query(), "b");
    }
}

#[test]
fn test_cancel_keys() {
    let mut picker = test_picker(&TEST_OPTIONS);
    assert_eq!(picker.handle_key(key(KeyCode::Esc)), Step::Cancel);
    assert_eq!(
        picker.handle_key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Step::Cancel
    );
}

#[test]
fn test_ignored_keys_continue() {
    let mut picker = test_picker(&TEST_OPTIONS);
    assert_eq!(picker.handle_key(key(KeyCode::F(2))), Step::Continue);
    assert_eq!(picker.state().cursor(), 0);
    assert_eq!(picker.state().query(), "");
}

#[test]
fn test_custom_handler_result_ends_loop() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler('d', |_| Some("deleted".to_string()));

    assert_eq!(
        picker.handle_key(key(KeyCode::Char('d'))),
        Step::Custom("deleted".to_string())
    );
}

#[test]
fn test_custom_handler_none_continues_with_mutations() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler('x', |state| {
        state.select(2);
        None
    });

    assert_eq!(picker.handle_key(key(KeyCode::Char('x'))), Step::Continue);
    assert_eq!(picker.state().cursor(), 2);
    assert_eq!(picker.state().query(), "");
}

#[test]
fn test_custom_handler_sees_current_state() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler(KeyCode::Tab, |state| {
        let (option, index) = state.selected();
        Some(format!("{}@{}", option, index))
    });

    picker.handle_key(key(KeyCode::Down));
    assert_eq!(
        picker.handle_key(key(KeyCode::Tab)),
        Step::Custom("beta@1".to_string())
    );
}

#[test]
fn test_later_registration_wins() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler('d', |_| Some("first".to_string()));
    picker.register_handler('d', |_| Some("second".to_string()));

    assert_eq!(
        picker.handle_key(key(KeyCode::Char('d'))),
        Step::Custom("second".to_string())
    );
}

#[test]
fn test_handler_keeps_its_own_state_across_calls() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler('n', move |_| {
        counter.set(counter.get() + 1);
        (counter.get() == 3).then(|| "third".to_string())
    });

    assert_eq!(picker.handle_key(key(KeyCode::Char('n'))), Step::Continue);
    assert_eq!(picker.handle_key(key(KeyCode::Char('n'))), Step::Continue);
    assert_eq!(
        picker.handle_key(key(KeyCode::Char('n'))),
        Step::Custom("third".to_string())
    );
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_custom_handler_shadows_query_input() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler('g', |_| None);

    picker.handle_key(key(KeyCode::Char('g')));
    assert_eq!(picker.state().cursor(), 0);
    assert_eq!(picker.state().query(), "");
}

#[test]
fn test_handler_on_confirm_key_never_runs() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler(' ', |_| Some("unreachable".to_string()));

    assert_eq!(picker.handle_key(key(KeyCode::Char(' '))), Step::Confirm);
}

#[test]
fn test_handler_on_escape_overrides_cancel() {
    let mut picker = test_picker(&TEST_OPTIONS);
    picker.register_handler(KeyBinding::from(KeyCode::Esc), |_| None);

    assert_eq!(picker.handle_key(key(KeyCode::Esc)), Step::Continue);
}

// For any sequence of arrow keys, the cursor stays in range and equals the
// net movement modulo the list length.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_arrow_keys_wrap_modulo_len(
        len in 1usize..10,
        moves in prop::collection::vec(any::<bool>(), 0..50)
    ) {
        let options: Vec<String> = (0..len).map(|n| format!("opt{}", n)).collect();
        let mut picker: crate::picker::Picker<String, ()> =
            crate::picker::Picker::new(options, 0).unwrap();

        let mut expected: i64 = 0;
        for down in moves {
            if down {
                picker.handle_key(key(KeyCode::Down));
                expected += 1;
            } else {
                picker.handle_key(key(KeyCode::Up));
                expected -= 1;
            }
            prop_assert!(picker.state().cursor() < len);
        }

        let expected = expected.rem_euclid(len as i64) as usize;
        prop_assert_eq!(picker.state().cursor(), expected);
    }
}
