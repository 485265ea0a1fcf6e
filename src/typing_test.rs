use super::*;

fn writer(titles: &[&str]) -> Typewriter {
    Typewriter::new(titles.iter().map(|t| (*t).to_owned()).collect()).unwrap()
}

#[test]
fn rejects_empty_title_list() {
    assert!(matches!(Typewriter::new(Vec::new()), Err(ConfigError::NoTitles)));
    assert!(matches!(Typewriter::new(vec![String::new()]), Err(ConfigError::NoTitles)));
}

#[test]
fn drops_empty_titles() {
    let w = Typewriter::new(vec![String::new(), "ab".to_owned(), String::new()]).unwrap();
    assert_eq!(w.titles(), ["ab".to_owned()]);
}

#[test]
fn full_cycle_of_one_title() {
    let mut w = writer(&["ab", "c"]);
    let steps: Vec<(String, u32)> = (0..4).map(|_| w.tick()).map(|s| (s.text, s.delay_ms)).collect();
    assert_eq!(
        steps,
        vec![
            ("a".to_owned(), TYPE_DELAY_MS),
            ("ab".to_owned(), FULL_WORD_PAUSE_MS),
            ("a".to_owned(), DELETE_DELAY_MS),
            (String::new(), NEXT_WORD_PAUSE_MS),
        ]
    );
    assert_eq!(w.title_index(), 1);
    assert!(!w.is_deleting());
}

#[test]
fn deleting_flips_only_at_boundaries() {
    let mut w = writer(&["abc"]);
    let mut prev_deleting = w.is_deleting();
    for _ in 0..50 {
        w.tick();
        if w.is_deleting() != prev_deleting {
            let len = w.titles()[w.title_index()].chars().count();
            assert!(w.char_index() == 0 || w.char_index() == len);
        }
        prev_deleting = w.is_deleting();
    }
}

#[test]
fn displayed_text_is_always_prefix_of_current_title() {
    let mut w = writer(&["Senior .NET Developer", "Azure Cloud Engineer", "X"]);
    for _ in 0..500 {
        let title = w.titles()[w.title_index()].clone();
        let step = w.tick();
        assert!(title.starts_with(&step.text), "{:?} is not a prefix of {title:?}", step.text);
        let len = w.titles()[w.title_index()].chars().count();
        assert!(w.char_index() <= len);
    }
}

#[test]
fn titles_cycle_in_order_forever() {
    let mut w = writer(&["ab", "cde", "f"]);
    let mut visited = vec![w.title_index()];
    for _ in 0..200 {
        w.tick();
        if visited.last() != Some(&w.title_index()) {
            visited.push(w.title_index());
        }
    }
    assert!(visited.len() > 6);
    for pair in visited.windows(2) {
        assert_eq!(pair[1], (pair[0] + 1) % 3);
    }
}

#[test]
fn single_character_title_pauses_then_deletes() {
    let mut w = writer(&["x"]);
    assert_eq!(w.tick(), TypingStep { text: "x".to_owned(), delay_ms: FULL_WORD_PAUSE_MS });
    assert_eq!(w.tick(), TypingStep { text: String::new(), delay_ms: NEXT_WORD_PAUSE_MS });
    assert_eq!(w.title_index(), 0);
}

#[test]
fn counts_characters_not_bytes() {
    let mut w = writer(&["héllo"]);
    let texts: Vec<String> = (0..5).map(|_| w.tick().text).collect();
    assert_eq!(texts, vec!["h", "hé", "hél", "héll", "héllo"]);
    assert!(w.is_deleting());
}

#[test]
fn delays_follow_phase() {
    let mut w = writer(&["abcd"]);
    let delays: Vec<u32> = (0..8).map(|_| w.tick().delay_ms).collect();
    assert_eq!(
        delays,
        vec![
            TYPE_DELAY_MS,
            TYPE_DELAY_MS,
            TYPE_DELAY_MS,
            FULL_WORD_PAUSE_MS,
            DELETE_DELAY_MS,
            DELETE_DELAY_MS,
            DELETE_DELAY_MS,
            NEXT_WORD_PAUSE_MS,
        ]
    );
}
