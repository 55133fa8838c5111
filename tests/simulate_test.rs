use bike_dash::{simulate, RunSummary};

#[test]
fn simulate_is_deterministic_per_seed() {
    assert_eq!(simulate(42, 1200), simulate(42, 1200));
}

#[test]
fn simulate_stops_at_requested_frames_or_crash() {
    let s = simulate(3, 120);
    assert!(s.frames <= 120);
    if s.phase == "running" {
        assert_eq!(s.frames, 120);
    } else {
        assert_eq!(s.phase, "game_over");
    }
    assert_eq!(s.score, s.dodged * 10);
}

#[test]
fn simulate_summary_is_json() {
    let s = simulate(9, 600);
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"seed\":9"));
    assert!(json.contains("\"phase\""));

    let back: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed, s.seed);
    assert_eq!(back.frames, s.frames);
    assert_eq!(back.phase, s.phase);
    assert_eq!(back.score, s.score);
    assert!((back.elapsed_secs - s.elapsed_secs).abs() < 1e-9);
}

#[test]
fn simulate_zero_frames_is_a_fresh_run() {
    let s = simulate(1, 0);
    assert_eq!(s.frames, 0);
    assert_eq!(s.phase, "running");
    assert_eq!(s.score, 0);
    assert_eq!(s.obstacles_on_screen, 0);
}
