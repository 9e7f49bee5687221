use crate::*;

use std::sync::{Arc, Mutex};
use std::vec::Vec;

const DESKTOP: u32 = 1024;
const MOBILE: u32 = 375;

fn record(c: &mut Carousel) -> Arc<Mutex<Vec<usize>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    c.on_move(move |i| sink.lock().unwrap().push(i));
    seen
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn six_by_three(looping: bool) -> Carousel {
    let opts = CarouselOptions::new()
        .with_slides_visible(3)
        .with_slides_to_scroll(1)
        .with_loop(looping);
    Carousel::new(6, opts, DESKTOP)
}

#[test]
fn defaults_match_page_configuration() {
    let opts = CarouselOptions::default();
    assert_eq!(opts.slides_to_scroll, 1);
    assert_eq!(opts.slides_visible, 1);
    assert!(!opts.looping);
    assert_eq!(opts.validate(), Ok(()));
}

#[test]
fn validate_rejects_zero_counts() {
    let opts = CarouselOptions::new().with_slides_to_scroll(0);
    assert_eq!(opts.validate(), Err(OptionsError::ZeroSlidesToScroll));

    let opts = CarouselOptions::new().with_slides_visible(0);
    assert_eq!(opts.validate(), Err(OptionsError::ZeroSlidesVisible));
    assert_eq!(
        std::format!("{}", OptionsError::ZeroSlidesVisible),
        "slides_visible must be positive"
    );
}

#[test]
fn new_starts_at_zero_in_viewport_mode() {
    let c = six_by_three(false);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.mode(), Mode::Desktop);
    assert_eq!(c.slides_visible(), 3);
    assert_eq!(c.transform(), Transform::default());

    let c = Carousel::new(6, CarouselOptions::new().with_slides_visible(3), MOBILE);
    assert!(c.is_mobile());
    assert_eq!(c.slides_visible(), 1);
    assert_eq!(c.slides_to_scroll(), 1);
}

#[test]
fn layout_fits_visible_slides_in_viewport() {
    let c = six_by_three(false);
    let layout = c.layout();
    assert!(approx(layout.container_width, 200.0));
    assert!(approx(layout.slide_width, 100.0 / 6.0));
    assert_eq!(layout.container_width_css(), "200%");

    let c = Carousel::new(4, CarouselOptions::new().with_slides_visible(4), DESKTOP);
    assert!(approx(c.layout().container_width, 100.0));
    assert!(approx(c.layout().slide_width, 25.0));
    assert_eq!(c.layout().slide_width_css(), "25%");
}

#[test]
fn next_walks_to_last_full_page_then_stops() {
    let mut c = six_by_three(false);
    let seen = record(&mut c);

    assert!(c.next());
    assert_eq!(c.current_index(), 1);
    assert!(approx(c.transform().translate_x, -100.0 / 6.0));

    assert!(c.next());
    assert_eq!(c.current_index(), 2);
    assert!(approx(c.transform().translate_x, -200.0 / 6.0));

    // A fourth page would need slide 6.
    assert!(c.next());
    assert_eq!(c.current_index(), 3);
    assert!(!c.next());
    assert_eq!(c.current_index(), 3);

    assert_eq!(*seen.lock().unwrap(), [1, 2, 3]);
}

#[test]
fn next_from_two_then_three_is_blocked_when_page_would_overflow() {
    let mut c = six_by_three(false);
    assert!(c.go_to_item(2));
    assert!(c.next());
    assert_eq!(c.current_index(), 3);
    let before = c.transform();
    assert!(!c.next());
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.transform(), before);
}

#[test]
fn loop_wraps_forward_to_zero() {
    let mut c = six_by_three(true);
    assert!(c.go_to_item(3));
    let seen = record(&mut c);

    assert!(c.next());
    assert_eq!(c.current_index(), 0);
    assert!(approx(c.transform().translate_x, 0.0));
    assert_eq!(c.transform().css(), "translate3d(0%, 0,0)");
    assert_eq!(*seen.lock().unwrap(), [0]);
}

#[test]
fn loop_wraps_backward_to_last_page() {
    for target in [-1isize, -2, -50] {
        let mut c = six_by_three(true);
        assert!(c.go_to_item(target));
        assert_eq!(c.current_index(), 3);
    }

    let mut c = six_by_three(true);
    assert!(c.prev());
    assert_eq!(c.current_index(), 3);
}

#[test]
fn negative_target_without_loop_is_ignored() {
    let mut c = six_by_three(false);
    assert!(c.go_to_item(1));
    let seen = record(&mut c);
    let transform = c.transform();

    for target in [-1isize, -3, isize::MIN] {
        assert!(!c.go_to_item(target));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.transform(), transform);
    }
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn out_of_range_target_without_loop_is_ignored() {
    let mut c = six_by_three(false);
    let seen = record(&mut c);
    assert!(!c.go_to_item(6));
    assert!(!c.go_to_item(100));
    assert_eq!(c.current_index(), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn every_valid_target_fires_once_with_its_index() {
    for target in 0..=3usize {
        let mut c = six_by_three(false);
        let seen = record(&mut c);
        assert!(c.go_to_item(target as isize));
        assert_eq!(c.current_index(), target);
        assert_eq!(*seen.lock().unwrap(), [target]);
    }
}

#[test]
fn going_to_current_index_is_not_deduplicated() {
    let mut c = six_by_three(false);
    assert!(c.go_to_item(2));
    let seen = record(&mut c);

    assert!(c.go_to_item(2));
    let first = c.transform();
    assert!(c.go_to_item(2));
    assert_eq!(c.transform(), first);
    assert_eq!(*seen.lock().unwrap(), [2, 2]);
}

#[test]
fn backward_jump_is_allowed_from_last_page() {
    let mut c = six_by_three(false);
    assert!(c.go_to_item(3));
    assert!(c.go_to_item(1));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn prev_moves_by_configured_step_on_desktop() {
    let opts = CarouselOptions::new()
        .with_slides_visible(3)
        .with_slides_to_scroll(2);
    let mut c = Carousel::new(9, opts, DESKTOP);
    assert!(c.next());
    assert!(c.next());
    assert_eq!(c.current_index(), 4);
    assert!(c.prev());
    assert_eq!(c.current_index(), 2);
    assert!(c.prev());
    assert_eq!(c.current_index(), 0);
    assert!(!c.prev());
}

#[test]
fn mobile_mode_steps_by_one() {
    let opts = CarouselOptions::new()
        .with_slides_visible(3)
        .with_slides_to_scroll(2);
    let mut c = Carousel::new(9, opts, MOBILE);
    assert!(c.next());
    assert_eq!(c.current_index(), 1);
    assert!(approx(c.layout().container_width, 900.0));
}

#[test]
fn observers_fire_in_registration_order() {
    let mut c = six_by_three(false);
    let log = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        c.on_move(move |i| log.lock().unwrap().push((tag, i)));
    }
    assert!(c.next());
    assert_eq!(*log.lock().unwrap(), [("a", 1), ("b", 1), ("c", 1)]);
}

#[test]
fn nav_hides_prev_at_start_and_next_at_last_page() {
    let mut c = six_by_three(false);
    assert_eq!(
        c.nav(),
        NavState {
            prev_hidden: true,
            next_hidden: false,
        }
    );

    assert!(c.go_to_item(3));
    assert_eq!(
        c.nav(),
        NavState {
            prev_hidden: false,
            next_hidden: true,
        }
    );

    assert!(c.go_to_item(1));
    assert_eq!(c.nav(), NavState::default());
}

#[test]
fn nav_is_never_hidden_when_looping() {
    let mut c = six_by_three(true);
    assert_eq!(c.nav(), NavState::default());
    assert!(c.go_to_item(3));
    assert_eq!(c.nav(), NavState::default());
}

#[test]
fn nav_uses_effective_page_size() {
    // At index 1: desktop needs slide 4 (hidden), mobile needs slide 2 (shown).
    let mut c = Carousel::new(4, CarouselOptions::new().with_slides_visible(3), DESKTOP);
    assert!(c.go_to_item(1));
    assert!(c.nav().next_hidden);
    assert!(c.on_resize(MOBILE));
    assert!(!c.nav().next_hidden);
}

#[test]
fn resize_across_breakpoint_relays_out_and_keeps_index() {
    let mut c = six_by_three(false);
    assert!(c.go_to_item(2));
    let seen = record(&mut c);

    assert!(c.on_resize(MOBILE));
    assert_eq!(c.mode(), Mode::Mobile);
    assert_eq!(c.current_index(), 2);
    assert!(approx(c.layout().container_width, 600.0));
    assert!(approx(c.layout().slide_width, 100.0 / 6.0));

    assert!(c.on_resize(DESKTOP));
    assert!(approx(c.layout().container_width, 200.0));
    assert_eq!(c.current_index(), 2);
    assert_eq!(*seen.lock().unwrap(), [2, 2]);
}

#[test]
fn resize_within_same_mode_is_ignored() {
    let mut c = six_by_three(false);
    let seen = record(&mut c);
    let layout = c.layout();
    assert!(!c.on_resize(1920));
    assert!(!c.on_resize(MOBILE_BREAKPOINT));
    assert_eq!(c.layout(), layout);
    assert!(seen.lock().unwrap().is_empty());

    assert!(c.on_resize(MOBILE_BREAKPOINT - 1));
    assert!(!c.on_resize(0));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn mobile_end_check_uses_configured_page_size() {
    let mut c = Carousel::new(6, CarouselOptions::new().with_slides_visible(3), MOBILE);
    for _ in 0..10 {
        c.next();
    }
    assert_eq!(c.current_index(), 3);
    assert!(!c.nav().next_hidden);
}

#[test]
fn key_up_maps_arrows_to_paging() {
    let mut c = six_by_three(false);
    assert!(c.on_key_up(Key::ArrowRight));
    assert!(c.on_key_up(Key::from_name("Right")));
    assert_eq!(c.current_index(), 2);
    assert!(c.on_key_up(Key::from("ArrowLeft")));
    assert_eq!(c.current_index(), 1);
    assert!(c.on_key_up(Key::from_name("Left")));
    assert_eq!(c.current_index(), 0);
    assert!(!c.on_key_up(Key::from_name("Enter")));
    assert_eq!(Key::from_name("arrowright"), Key::Other);
}

#[test]
fn visible_range_tracks_current_page() {
    let mut c = six_by_three(false);
    assert_eq!(c.visible_range(), 0..3);
    assert!(c.go_to_item(3));
    assert_eq!(c.visible_range(), 3..6);
    assert!(c.on_resize(MOBILE));
    assert_eq!(c.visible_range(), 3..4);
}

#[test]
fn empty_carousel_never_moves() {
    let mut c = Carousel::new(0, CarouselOptions::new().with_loop(true), DESKTOP);
    assert!(c.is_empty());
    assert!(!c.next());
    assert!(!c.prev());
    assert!(!c.go_to_item(0));
    assert_eq!(c.visible_range(), 0..0);
}

#[test]
fn backward_wrap_with_oversized_page_is_ignored() {
    let mut c = Carousel::new(
        2,
        CarouselOptions::new().with_slides_visible(3).with_loop(true),
        DESKTOP,
    );
    assert!(!c.go_to_item(-1));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn transform_css_matches_inline_style() {
    assert_eq!(Transform::for_index(1, 4).css(), "translate3d(-25%, 0,0)");
    assert_eq!(Transform::for_index(0, 4).css(), "translate3d(0%, 0,0)");
}

#[test]
fn debug_omits_callbacks() {
    let mut c = six_by_three(false);
    c.on_move(|_| {});
    let s = std::format!("{c:?}");
    assert!(s.contains("current_index: 0"));
    assert!(s.contains("move_callbacks: 1"));
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_from_page_config() {
    let opts: CarouselOptions =
        serde_json::from_str(r#"{"slidesVisible": 3, "slidesToScroll": 2, "loop": true}"#)
            .unwrap();
    assert_eq!(
        opts,
        CarouselOptions::new()
            .with_slides_visible(3)
            .with_slides_to_scroll(2)
            .with_loop(true)
    );

    let opts: CarouselOptions = serde_json::from_str(r#"{"slidesVisible": 4}"#).unwrap();
    assert_eq!(opts.slides_to_scroll, 1);
    assert!(!opts.looping);
}
