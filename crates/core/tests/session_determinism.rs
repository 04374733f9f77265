use game_core::render::width::display_width;
use game_core::{EngineConfig, Frame, Key, Session};

const KEYS: &str = "llljjjhhkkyubnwasdi]]e[ei>llllllljjjjjjjjhhhh>";

fn play(seed: u64, config: EngineConfig, keys: &str) -> (Session, Vec<Frame>) {
    let (mut session, first) = Session::start(seed, config).expect("default config is valid");
    let mut frames = vec![first];
    for ch in keys.chars() {
        frames.push(session.on_key(Key::from_char(ch)));
    }
    (session, frames)
}

fn assert_rectangular(frame: &Frame) {
    let width = frame.width();
    for line in &frame.lines {
        assert_eq!(display_width(line), width, "{:?}", frame.plain_lines());
    }
}

#[test]
fn same_seed_and_keys_replay_to_the_same_hash() {
    let (first, first_frames) = play(2024, EngineConfig::default(), KEYS);
    let (second, second_frames) = play(2024, EngineConfig::default(), KEYS);

    assert_eq!(first.state().snapshot_hash(), second.state().snapshot_hash());
    assert_eq!(first_frames, second_frames);
}

#[test]
fn different_seeds_diverge() {
    let (first, _) = play(1, EngineConfig::default(), "");
    let (second, _) = play(2, EngineConfig::default(), "");
    assert_ne!(first.state().snapshot_hash(), second.state().snapshot_hash());
}

#[test]
fn frames_stay_rectangular_with_a_hangul_name() {
    let config = EngineConfig { player_name: "김용사".to_string(), ..Default::default() };
    let (session, frames) = play(77, config, KEYS);

    let expected = frames[0].width();
    for frame in &frames {
        assert_rectangular(frame);
        assert_eq!(frame.width(), expected);
    }
    assert!(session.frame().plain_lines()[0].contains("김용사"));
}

#[test]
fn rendering_is_a_pure_read() {
    let (session, _) = play(5, EngineConfig::default(), KEYS);
    let before = session.state().snapshot_hash();
    let a = session.frame();
    let b = session.frame();
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(session.state().snapshot_hash(), before);
}

#[test]
fn quitting_returns_the_last_frame() {
    let (mut session, _) = play(8, EngineConfig::default(), "lljj");
    let last = session.on_key(Key::Quit);
    assert!(session.quit_requested());
    assert_eq!(session.on_quit(), last);
}
