use vizij_presentation_core::{
    Command, Config, DeckSpec, Direction, HeadlessHost, Locator, Location, Presentation,
    PresentationError, Step,
};

fn talk() -> DeckSpec {
    vizij_test_fixtures::decks::load("talk").unwrap()
}

fn open(deck: &DeckSpec, host: HeadlessHost) -> Presentation<HeadlessHost> {
    Presentation::new(deck, Config::default(), host).unwrap()
}

fn items(steps: &[(Step, String)]) -> Vec<(usize, usize, Direction)> {
    steps
        .iter()
        .map(|(s, _)| (s.slide, s.item, s.direction))
        .collect()
}

#[test]
fn fresh_start_is_clean_and_silent() {
    let p = open(&talk(), HeadlessHost::new());
    assert_eq!(p.locator(), Locator::START);
    assert_eq!(p.current_hash(), "");
    assert_eq!(p.navigation_depth(), 0);

    let host = p.host();
    assert_eq!((host.pushes, host.replaces), (0, 0));
    assert!(host.started.is_empty());
    assert_eq!(host.layouts, vec![(0, false)]);
    for s in 0..p.len() {
        assert_eq!(host.visible_items(s), 0);
    }
}

#[test]
fn advancing_items_replaces_and_slides_push() {
    let mut p = open(&talk(), HeadlessHost::new());

    p.apply(Command::AdvanceItem);
    assert_eq!(p.locator(), Locator::new(0, 1));
    assert_eq!(p.host().history(), ["0/1"]);
    assert_eq!(p.host().replaces, 1);

    p.apply(Command::AdvanceSlide);
    assert_eq!(p.locator(), Locator::new(1, 0));
    assert_eq!(p.host().history(), ["0/1", "intro"]);
    assert_eq!(p.host().pushes, 1);

    // Passed-through slide reads as fully shown.
    assert_eq!(p.slide(0).unwrap().current(), 2);
    assert_eq!(p.host().visible_items(0), 2);
}

#[test]
fn item_moves_cross_slide_boundaries() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.slide_move_to(1, true);
    p.item_move_to(4);
    assert_eq!(p.locator(), Locator::new(1, 4));

    p.apply(Command::AdvanceItem);
    assert_eq!(p.locator(), Locator::new(2, 0));
    assert_eq!(p.current_hash(), "details");

    // Retreating before the first item lands on the previous slide, full.
    p.apply(Command::RetreatItem);
    assert_eq!(p.locator(), Locator::new(1, 4));
    assert_eq!(p.current_hash(), "intro/4");
}

#[test]
fn multi_item_moves_step_in_order() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.slide_move_to(3, false);
    p.item_move_to(4);
    p.item_move_to(1);

    let expected: Vec<_> = (0..4)
        .map(|i| (3, i, Direction::Reveal))
        .chain((1..4).rev().map(|i| (3, i, Direction::Conceal)))
        .collect();
    assert_eq!(items(&p.host().started), expected);
    assert_eq!(p.locator(), Locator::new(3, 1));
    assert_eq!(p.host().visible_items(3), 1);
}

#[test]
fn retargeting_mid_step_is_absorbed() {
    let mut p = open(&DeckSpec::with_counts(&[5]), HeadlessHost::deferred());

    p.apply(Command::AdvanceItem);
    p.apply(Command::AdvanceItem);
    p.apply(Command::AdvanceItem);
    assert_eq!(p.host().started.len(), 1);
    assert_eq!(p.current_slide().target(), 3);
    assert_eq!(p.locator(), Locator::new(0, 1));

    // Steps only start after the previous one completed.
    assert_eq!(p.complete_next().map(|s| s.item), Some(0));
    assert_eq!(p.host().started.len(), 2);
    p.apply(Command::RetreatItem);
    assert_eq!(p.settle(), 1);
    assert_eq!(p.locator(), Locator::new(0, 2));
    assert_eq!(
        items(&p.host().started),
        vec![(0, 0, Direction::Reveal), (0, 1, Direction::Reveal)]
    );
}

#[test]
fn leaving_a_slide_mid_step_keeps_it_full() {
    let mut p = open(&DeckSpec::with_counts(&[2, 2]), HeadlessHost::deferred());
    p.apply(Command::AdvanceItem);
    p.complete_next();
    // Second reveal in flight, then a retreat absorbed into the running loop.
    p.apply(Command::AdvanceItem);
    p.apply(Command::RetreatItem);
    assert_eq!(p.current_slide().target(), 1);

    p.apply(Command::AdvanceSlide);
    let left = p.slide(0).unwrap();
    assert_eq!((left.current(), left.target()), (2, 2));

    p.settle();
    assert_eq!(p.locator(), Locator::new(1, 0));
    assert_eq!(p.slide(0).unwrap().current(), 2);
    assert_eq!(p.host().visible_items(0), 2);
    assert_eq!(
        items(&p.host().started),
        vec![(0, 0, Direction::Reveal), (0, 1, Direction::Reveal)]
    );
}

#[test]
fn leaving_a_slide_backwards_mid_step_keeps_it_clear() {
    let mut p = open(&DeckSpec::with_counts(&[2, 2]), HeadlessHost::deferred());
    p.slide_move_to(1, false);
    p.apply(Command::AdvanceItem);
    p.apply(Command::AdvanceItem);
    assert_eq!(p.current_slide().target(), 2);

    p.apply(Command::RetreatSlide);
    p.settle();
    assert_eq!(p.locator(), Locator::new(0, 2));
    assert_eq!(p.slide(1).unwrap().current(), 0);
    assert_eq!(p.host().visible_items(1), 0);
    assert_eq!(items(&p.host().started), vec![(1, 0, Direction::Reveal)]);
}

#[test]
fn extreme_offsets_are_harmless() {
    let mut p = open(&DeckSpec::with_counts(&[1, 1, 1]), HeadlessHost::new());
    p.slide_move_to(1, false);
    p.slide_move_by(i64::MAX);
    p.slide_move_by(i64::MIN);
    assert_eq!(p.current_index(), 1);

    assert!(p.slide_move_to(i64::MIN, false));
    assert_eq!(p.current_index(), 1);

    p.item_move_by(i64::MAX);
    assert_eq!(p.locator(), Locator::new(2, 0));
    p.item_move_by(i64::MIN);
    assert_eq!(p.locator(), Locator::new(1, 1));
}

#[test]
fn end_twice_fills_the_last_slide() {
    let mut p = open(&DeckSpec::with_counts(&[2, 3]), HeadlessHost::new());

    p.apply(Command::End);
    assert_eq!(p.locator(), Locator::new(1, 0));
    assert_eq!(p.host().history(), ["", "1"]);

    p.apply(Command::End);
    assert_eq!(p.locator(), Locator::new(1, 3));
    assert_eq!(p.host().started.len(), 3);
    assert_eq!(p.host().history(), ["", "1/3"]);
    assert_eq!((p.host().pushes, p.host().replaces), (1, 3));

    p.apply(Command::Home);
    assert_eq!(p.locator(), Locator::START);
    assert_eq!(p.current_hash(), "");
}

#[test]
fn hash_echo_does_not_cut_a_move_short() {
    let mut p = open(&DeckSpec::with_counts(&[2, 3]), HeadlessHost::deferred());
    p.apply(Command::End);
    p.apply(Command::End);
    assert_eq!(p.host().hash(), "#1/1");

    // The browser echoes our own write while the first step is in flight.
    p.handle_hash_change();
    assert_eq!(p.current_slide().target(), 3);

    p.settle();
    assert_eq!(p.locator(), Locator::new(1, 3));
    assert_eq!(p.host().hash(), "#1/3");
}

#[test]
fn negative_targets_wrap_and_out_of_range_is_ignored() {
    let mut p = open(&DeckSpec::with_counts(&[1, 1, 1, 1, 1]), HeadlessHost::new());
    assert!(p.slide_move_to(-1, true));
    assert_eq!(p.current_index(), 4);
    assert!(p.slide_move_to(-7, true));
    assert_eq!(p.current_index(), 3);

    let layouts = p.host().layouts.len();
    let history = p.host().history().to_vec();
    assert!(!p.slide_move_to(5, true));
    assert!(!p.slide_move_to(-5, true));
    assert_eq!(p.current_index(), 3);
    assert_eq!(p.host().layouts.len(), layouts);
    assert_eq!(p.host().history(), history.as_slice());
}

#[test]
fn slide_moves_do_not_wrap_from_the_first_slide() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.apply(Command::RetreatSlide);
    assert_eq!(p.current_index(), 0);
    p.slide_move_to(-1, true);
    p.apply(Command::AdvanceSlide);
    assert_eq!(p.current_index(), 4);
}

#[test]
fn jumps_fill_before_and_clear_after() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.slide_move_to(3, true);
    for (i, slide) in p.slides().iter().enumerate() {
        let expected = if i < 3 { slide.len() } else { 0 };
        assert_eq!(slide.current(), expected, "slide {i}");
        assert_eq!(p.host().visible_items(i), expected, "slide {i}");
    }
    // Jumps never animate items.
    assert!(p.host().started.is_empty());
    // Pre-snap from the old slide, then the animated move.
    assert_eq!(p.host().layouts[1..], [(0, false), (3, true)]);
}

#[test]
fn far_jumps_cull_the_middle() {
    let deck: DeckSpec = vizij_test_fixtures::decks::load("counts").unwrap();
    let mut p = open(&deck, HeadlessHost::new().with_hash("#40"));
    assert_eq!(p.current_index(), 40);

    p.slide_move_to(2, true);
    let visible: Vec<usize> = (0..deck.slides.len())
        .filter(|&i| p.host().is_slide_visible(i))
        .collect();
    let expected: Vec<usize> = (1..=7).chain(35..=41).collect();
    assert_eq!(visible, expected);

    p.slide_move_to(3, true);
    let visible: Vec<usize> = (0..deck.slides.len())
        .filter(|&i| p.host().is_slide_visible(i))
        .collect();
    assert_eq!(visible, vec![1, 2, 3, 4]);
}

#[test]
fn culling_follows_config() {
    let deck = DeckSpec::with_counts(&[0; 20]);
    let cfg = Config {
        cull_margin: 0,
        cull_band: 2,
        ..Config::default()
    };
    let mut p = Presentation::new(&deck, cfg, HeadlessHost::new()).unwrap();
    p.slide_move_to(10, true);
    let visible: Vec<usize> = (0..20).filter(|&i| p.host().is_slide_visible(i)).collect();
    assert_eq!(visible, vec![0, 1, 2, 8, 9, 10]);
}

#[test]
fn styles_follow_item_tags() {
    let deck: DeckSpec = vizij_test_fixtures::decks::load("styled").unwrap();
    let mut p = open(&deck, HeadlessHost::new());
    p.apply(Command::End);
    let names: Vec<&str> = p.host().started.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["fade", "slideVertical", "slideVertical", "slideVertical"]
    );
}

#[test]
fn resize_snaps_layout() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.slide_move_to(2, true);
    p.handle_resize();
    assert_eq!(p.host().resizes, 1);
    assert_eq!(p.host().layouts.last(), Some(&(2, false)));
}

#[test]
fn slide_changes_report_the_title() {
    let mut p = open(&talk(), HeadlessHost::new());
    assert_eq!(p.host().titles, vec![Some("Welcome".to_string())]);

    p.slide_move_to(2, true);
    assert!(!p.slide_move_to(9, true));
    p.apply(Command::End);
    assert_eq!(
        p.host().titles,
        vec![
            Some("Welcome".to_string()),
            None,
            Some("Questions".to_string())
        ]
    );
}

#[test]
fn titles_and_labels() {
    let mut p = open(&talk(), HeadlessHost::new());
    assert_eq!(p.current_title(), Some("Welcome"));
    p.slide_move_to(2, false);
    assert_eq!(p.current_title(), None);
    assert_eq!(p.slide_label(1), "Slide 2 of 5");
}

#[test]
fn construction_errors() {
    let err = Presentation::new(&DeckSpec::default(), Config::default(), HeadlessHost::new())
        .unwrap_err();
    assert_eq!(err, PresentationError::EmptyDeck);

    let cfg = Config {
        default_style: "blind".into(),
        ..Config::default()
    };
    let err = Presentation::new(&talk(), cfg, HeadlessHost::new()).unwrap_err();
    assert!(matches!(err, PresentationError::DefaultStyleMissing { .. }));
}

#[test]
fn stale_completions_are_harmless() {
    let mut p = open(&talk(), HeadlessHost::new());
    p.step_completed(1);
    p.step_completed(99);
    assert_eq!(p.locator(), Locator::START);
    assert!(p.host().started.is_empty());
}
