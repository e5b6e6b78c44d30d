use std::rc::Rc;
use std::time::Duration;

use tui_dmd::core::{AnimatedLayer, Animation, Font, Frame, Layer, ScriptEntry};
use tui_dmd::types::{CompositeOp, Justify, FONT_GRID, GLYPH_COUNT};

fn solid(value: u8) -> Frame {
    Frame::from_data(1, 1, vec![value]).unwrap()
}

fn play(layer: &mut Layer, ticks: u64) -> Vec<Option<u8>> {
    (0..ticks)
        .map(|t| layer.next_frame(t * 16).map(|f| f.data()[0]))
        .collect()
}

fn dot_font() -> Rc<Font> {
    let mut atlas = Frame::new(FONT_GRID, FONT_GRID);
    atlas.fill_rect(0, 0, FONT_GRID as i32, FONT_GRID as i32, 3);
    let mut widths = Frame::new(FONT_GRID, FONT_GRID);
    for i in 0..GLYPH_COUNT {
        widths.set_dot((i % FONT_GRID) as i32, (i / FONT_GRID) as i32, 1);
    }
    let mut anim = Animation::new();
    anim.push_frame(atlas).unwrap();
    anim.push_frame(widths).unwrap();
    Rc::new(Font::from_animation(anim).unwrap())
}

#[test]
fn repeating_animation_shows_each_frame_for_frame_time_ticks() {
    let animated = AnimatedLayer::new(vec![solid(1), solid(2)])
        .with_repeat(true)
        .with_frame_time(2);
    let mut layer = Layer::animated(animated);
    assert_eq!(
        play(&mut layer, 6),
        vec![Some(1), Some(1), Some(2), Some(2), Some(1), Some(1)]
    );
}

#[test]
fn held_animation_freezes_on_last_frame() {
    let mut layer = Layer::animated(AnimatedLayer::new(vec![solid(1), solid(2)]));
    assert_eq!(play(&mut layer, 4), vec![Some(1), Some(2), Some(2), Some(2)]);
    assert!(layer.is_visible());
}

#[test]
fn unheld_animation_runs_out() {
    let animated = AnimatedLayer::new(vec![solid(1), solid(2)]).with_hold(false);
    let mut layer = Layer::animated(animated);
    assert_eq!(play(&mut layer, 3), vec![Some(1), Some(2), None]);
    assert!(!layer.is_visible());
}

#[test]
fn text_expires_after_its_duration() {
    let mut layer = Layer::text(0, 0, dot_font(), Justify::Left);
    layer
        .set_text(Some("HI"), Some(Duration::from_secs(1)))
        .unwrap();
    assert!(layer.is_visible());

    // The clock starts on the first frame request, not on set_text.
    assert!(layer.next_frame(5_000).is_some());
    assert!(layer.next_frame(6_000).is_some());
    assert!(layer.next_frame(6_001).is_none());
    assert!(!layer.is_visible());

    // New text restarts the timer.
    layer.set_text(Some("HI"), None).unwrap();
    assert!(layer.next_frame(100_000).is_some());
}

#[test]
fn empty_text_clears_the_layer() {
    let mut layer = Layer::text(0, 0, dot_font(), Justify::Left);
    layer.set_text(Some("X"), None).unwrap();
    layer.set_text(Some(""), None).unwrap();
    assert!(layer.next_frame(0).is_none());
}

#[test]
fn set_text_on_frame_layer_is_contract_error() {
    let mut layer = Layer::frame(None);
    let err = layer.set_text(Some("HI"), None).unwrap_err();
    assert!(err.is_contract());
}

#[test]
fn scripted_layer_loops_with_blank_gaps() {
    let script = vec![
        ScriptEntry::new(Some(Layer::frame(Some(solid(2)))), Duration::from_millis(32)),
        ScriptEntry::blank(Duration::from_millis(16)),
    ];
    let mut layer = Layer::scripted(1, 1, script);
    // now = 0, 16, 32, 48, 64, 80, 96
    assert_eq!(
        play(&mut layer, 7),
        vec![Some(2), Some(2), Some(2), None, None, Some(2), Some(2)]
    );
}

#[test]
fn composite_honors_position_and_op() {
    let mut target = Frame::from_data(3, 1, vec![1, 1, 1]).unwrap();
    let src = Frame::from_data(2, 1, vec![0, 2]).unwrap();

    let mut copy = Layer::frame(Some(src.clone())).with_position(1, 0);
    copy.composite_next(&mut target, 0).unwrap();
    assert_eq!(target.data(), &[1, 0, 2]);

    let mut target = Frame::from_data(3, 1, vec![1, 1, 1]).unwrap();
    let mut keyed = Layer::frame(Some(src))
        .with_position(1, 0)
        .with_composite_op(CompositeOp::BlackSrc);
    keyed.composite_next(&mut target, 0).unwrap();
    assert_eq!(target.data(), &[1, 1, 2]);
}

#[test]
fn animated_layer_can_be_extended_through_the_layer() {
    let mut layer = Layer::animated(AnimatedLayer::new(vec![solid(1)]).with_hold(false));
    assert_eq!(play(&mut layer, 1), vec![Some(1)]);
    assert!(layer.next_frame(16).is_none());

    let animated = layer.as_animated_mut().unwrap();
    animated.push_frame(solid(2));
    assert_eq!(animated.len(), 1);
    assert_eq!(layer.next_frame(32).map(|f| f.data()[0]), Some(2));
    assert!(Layer::frame(None).as_animated_mut().is_none());
}
