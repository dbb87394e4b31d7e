//! Tests for the combobox component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn countries() -> Vec<SelectOption> {
        vec![
            SelectOption::new("us", "United States"),
            SelectOption::new("uk", "United Kingdom"),
        ]
    }

    fn key(code: KeyCode) -> Box<KeyMsg> {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_str(combo: &mut Model, s: &str) {
        for ch in s.chars() {
            combo.update(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_new_default_values() {
        let combo = new("country", countries());

        assert_eq!(combo.id, "country");
        assert_eq!(combo.prompt, "> ");
        assert_eq!(combo.placeholder, "Select...");
        assert_eq!(combo.value(), "");
        assert_eq!(combo.position(), 0);
        assert!(!combo.focused());
        assert!(!combo.menu_open());
        assert!(combo.selected().is_none());
        assert_eq!(combo.filtered_options().len(), 2);
        assert!(combo.err.is_none());
    }

    #[test]
    fn test_filter_empty_input_returns_all_in_order() {
        let options = countries();
        let filtered = filter_options(&options, "");
        assert_eq!(filtered, options);
    }

    #[test]
    fn test_filter_matches_label_and_value() {
        let options = countries();

        // Label substring
        let filtered = filter_options(&options, "king");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "uk");

        // Value substring
        let filtered = filter_options(&options, "uk");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "United Kingdom");
    }

    #[test]
    fn test_filter_case_insensitive() {
        let options = countries();
        assert_eq!(filter_options(&options, "KING"), filter_options(&options, "king"));
        assert_eq!(filter_options(&options, "UK").len(), 1);
        assert_eq!(filter_options(&options, "united").len(), 2);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let options = countries();
        let filtered = filter_options(&options, "united");
        assert_eq!(filtered[0].value, "us");
        assert_eq!(filtered[1].value, "uk");
    }

    #[test]
    fn test_filter_idempotent() {
        let options = countries();
        let once = filter_options(&options, "uni");
        let twice = filter_options(&once, "uni");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_no_match_yields_empty() {
        let options = countries();
        assert!(filter_options(&options, "xyz").is_empty());
    }

    #[test]
    fn test_reconcile_exact_match_commits() {
        let options = countries();
        let result = reconcile("united kingdom", None, &options);
        assert_eq!(result.text, "United Kingdom");
        assert_eq!(result.selection, Some(1));
    }

    #[test]
    fn test_reconcile_reverts_to_prior_selection() {
        let options = countries();
        let result = reconcile("xyz", Some(0), &options);
        assert_eq!(result.text, "United States");
        assert_eq!(result.selection, Some(0));
    }

    #[test]
    fn test_reconcile_clears_without_selection() {
        let options = countries();
        let result = reconcile("xyz", None, &options);
        assert_eq!(result.text, "");
        assert_eq!(result.selection, None);
    }

    #[test]
    fn test_reconcile_idempotent() {
        let options = countries();
        for (input, selection) in [("king", None), ("United Kingdom", None), ("xyz", Some(0))] {
            let once = reconcile(input, selection, &options);
            let twice = reconcile(&once.text, once.selection, &options);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_reconcile_ignores_stale_selection_index() {
        let options = countries();
        let result = reconcile("xyz", Some(99), &options);
        assert_eq!(result.text, "");
        assert_eq!(result.selection, None);
    }

    #[test]
    fn test_typing_filters_and_opens_menu() {
        let mut combo = new("country", countries());
        combo.focus();

        type_str(&mut combo, "king");

        assert_eq!(combo.value(), "king");
        assert!(combo.menu_open());
        let visible = combo.filtered_options();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].value, "uk");
    }

    #[test]
    fn test_blur_commits_exact_match() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "united kingdom");

        combo.blur();

        assert_eq!(combo.value(), "United Kingdom");
        assert_eq!(combo.selected().unwrap().value, "uk");
        assert!(!combo.menu_open());
    }

    #[test]
    fn test_blur_reverts_to_prior_selection() {
        let mut combo = new("country", countries());
        combo.focus();
        combo.select(0);

        combo.set_value("xyz");
        combo.blur();

        assert_eq!(combo.value(), "United States");
        assert_eq!(combo.selected().unwrap().value, "us");
    }

    #[test]
    fn test_blur_clears_without_selection() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "xyz");

        combo.blur();

        assert_eq!(combo.value(), "");
        assert!(combo.selected().is_none());
    }

    #[test]
    fn test_blur_twice_is_idempotent() {
        let mut combo = new("country", countries());
        combo.focus();
        combo.select(1);
        combo.set_value("garbage");

        combo.blur();
        let text = combo.value();
        let selection = combo.selected_index();

        combo.blur();
        assert_eq!(combo.value(), text);
        assert_eq!(combo.selected_index(), selection);
    }

    #[test]
    fn test_custom_blur_policy() {
        let mut combo = new("country", countries());
        combo.focus();
        combo.set_blur_policy(Box::new(|input, selection, _options| Reconciled {
            text: input.to_uppercase(),
            selection,
        }));

        combo.set_value("anything");
        combo.blur();

        assert_eq!(combo.value(), "ANYTHING");
        assert!(combo.selected().is_none());
    }

    #[test]
    fn test_down_opens_menu_then_navigates_with_wrap() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(key(KeyCode::Down));
        assert!(combo.menu_open());
        assert_eq!(combo.highlighted_index(), 0);

        combo.update(key(KeyCode::Down));
        assert_eq!(combo.highlighted_index(), 1);

        combo.update(key(KeyCode::Down));
        assert_eq!(combo.highlighted_index(), 0); // wraps

        combo.update(key(KeyCode::Up));
        assert_eq!(combo.highlighted_index(), 1); // wraps backward
    }

    #[test]
    fn test_enter_accepts_highlighted_option() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(key(KeyCode::Down)); // open
        combo.update(key(KeyCode::Down)); // highlight United Kingdom
        combo.update(key(KeyCode::Enter));

        assert_eq!(combo.value(), "United Kingdom");
        assert_eq!(combo.selected().unwrap().value, "uk");
        assert!(!combo.menu_open());
    }

    #[test]
    fn test_enter_with_closed_menu_does_nothing() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(key(KeyCode::Enter));
        assert_eq!(combo.value(), "");
        assert!(combo.selected().is_none());
    }

    #[test]
    fn test_esc_closes_menu() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(key(KeyCode::Down));
        assert!(combo.menu_open());

        combo.update(key(KeyCode::Esc));
        assert!(!combo.menu_open());
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut combo = new("country", countries());

        combo.update(key(KeyCode::Char('x')));
        combo.update(key(KeyCode::Down));

        assert_eq!(combo.value(), "");
        assert!(!combo.menu_open());
    }

    #[test]
    fn test_backspace_refilters() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "king");
        assert_eq!(combo.filtered_options().len(), 1);

        for _ in 0..4 {
            combo.update(key(KeyCode::Backspace));
        }

        assert_eq!(combo.value(), "");
        assert_eq!(combo.filtered_options().len(), 2);
    }

    #[test]
    fn test_highlight_clamped_when_results_shrink() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(key(KeyCode::Down)); // open
        combo.update(key(KeyCode::Down)); // highlight index 1
        type_str(&mut combo, "king"); // one result left

        assert_eq!(combo.highlighted_index(), 0);
        combo.update(key(KeyCode::Enter));
        assert_eq!(combo.selected().unwrap().value, "uk");
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut combo = new("country", countries());
        combo.select(99);
        assert!(combo.selected().is_none());
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_reset_keeps_selection() {
        let mut combo = new("country", countries());
        combo.select(0);
        combo.reset();

        assert_eq!(combo.value(), "");
        assert_eq!(combo.selected().unwrap().value, "us");
        assert_eq!(combo.filtered_options().len(), 2);
    }

    #[test]
    fn test_movement_and_word_editing() {
        let mut combo = new("demo", vec![]);
        combo.focus();
        type_str(&mut combo, "hello world");

        combo.update(key(KeyCode::Home));
        assert_eq!(combo.position(), 0);
        combo.update(key(KeyCode::End));
        assert_eq!(combo.position(), 11);

        // ctrl+w deletes the previous word
        combo.update(Box::new(KeyMsg {
            key: KeyCode::Char('w'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(combo.value(), "hello ");

        // ctrl+u deletes everything before the cursor
        combo.update(Box::new(KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_view_toggle_indicator() {
        let mut combo = new("country", countries());
        combo.focus();

        assert!(combo.view().contains('▼'));

        combo.update(key(KeyCode::Down));
        assert!(combo.view().contains('▲'));
    }

    #[test]
    fn test_view_shows_label_and_placeholder() {
        let mut combo = new("country", countries());
        combo.set_label("Choose an option:");

        let view = combo.view();
        assert!(view.contains("Choose an option:"));
        assert!(view.contains("Select..."));
    }

    #[test]
    fn test_view_placeholder_replaced_by_text() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "uni");

        let view = combo.view();
        assert!(!view.contains("Select..."));
        assert!(view.contains("uni"));
    }

    #[test]
    fn test_view_hides_menu_without_matches() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "xyz");

        assert!(combo.menu_open());
        let view = combo.view();
        assert!(!view.contains("United States"));
        assert!(!view.contains("United Kingdom"));
    }

    #[test]
    fn test_view_menu_lists_filtered_options() {
        let mut combo = new("country", countries());
        combo.focus();
        type_str(&mut combo, "king");

        let view = combo.view();
        assert!(view.contains("United Kingdom"));
        assert!(!view.contains("United States"));
    }

    #[test]
    fn test_menu_window_follows_highlight() {
        let options: Vec<SelectOption> = (0..10)
            .map(|i| SelectOption::new(format!("v{}", i), format!("Item {}", i)))
            .collect();
        let mut combo = new("items", options);
        combo.focus();
        combo.set_max_visible(3);

        combo.update(key(KeyCode::Down)); // open
        for _ in 0..4 {
            combo.update(key(KeyCode::Down));
        }

        assert_eq!(combo.highlighted_index(), 4);
        let view = combo.view();
        assert!(view.contains("Item 2"));
        assert!(view.contains("Item 4"));
        assert!(!view.contains("Item 0"));
        assert!(!view.contains("Item 5"));
    }

    #[test]
    fn test_horizontal_overflow_follows_cursor() {
        let mut combo = new("demo", vec![]);
        combo.focus();
        combo.set_width(5);
        type_str(&mut combo, "abcdefghij");

        // Cursor at the end: only the tail of the text is visible.
        let view = combo.view();
        assert!(view.contains("fghij"));
        assert!(!view.contains("abcde"));

        combo.update(key(KeyCode::Home));
        let view = combo.view();
        assert!(view.contains("bcde"));
        assert!(!view.contains("ghij"));
    }

    #[test]
    fn test_paste_message_inserts_and_refilters() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(Box::new(PasteMsg("king".to_string())));

        assert_eq!(combo.value(), "king");
        assert!(combo.menu_open());
        assert_eq!(combo.filtered_options().len(), 1);
    }

    #[test]
    fn test_paste_error_recorded() {
        let mut combo = new("country", countries());
        combo.focus();

        combo.update(Box::new(PasteErrMsg("no clipboard".to_string())));

        assert_eq!(combo.err.as_deref(), Some("no clipboard"));
    }

    #[test]
    fn test_default_trait_implementation() {
        let combo = Model::default();
        assert_eq!(combo.value(), "");
        assert_eq!(combo.prompt, "> ");
        assert!(!combo.focused());
        assert!(combo.options().is_empty());
    }
}
