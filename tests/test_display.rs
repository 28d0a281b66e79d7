use pipers_adventure::assets::{Sprite, Sprites};
use pipers_adventure::config::GameConfig;
use pipers_adventure::display::*;
use pipers_adventure::entities::*;

const PLAYER_COLOR: Rgb = Rgb(200, 120, 40);
const CLAM_COLOR: Rgb = Rgb(230, 200, 170);

fn test_sprites() -> Sprites {
    Sprites {
        player: Sprite::solid(50, 50, PLAYER_COLOR),
        clam: Sprite::solid(30, 30, CLAM_COLOR),
    }
}

fn make_state(clams: Vec<Rect>) -> GameState {
    GameState {
        player: Character {
            rect: Rect::new(0, 0, 50, 50),
            sprite: SpriteKind::Player,
            visible: true,
        },
        clams: ClamField::new(clams),
        wave: Rect::new(375, 0, 500, 500),
        score: 0,
        frame: 0,
        status: GameStatus::Running,
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[test]
fn canvas_covers_screen_at_cell_resolution() {
    let cfg = GameConfig::default();
    let canvas = canvas_for(&cfg);
    assert_eq!((canvas.width(), canvas.height()), (50, 50));
    assert_eq!(canvas.rows(), 25);
    assert_eq!(terminal_footprint(&cfg), (50, 25));
}

#[test]
fn odd_height_rounds_up() {
    let canvas = Canvas::new(4, 5, C_BACKGROUND);
    assert_eq!(canvas.height(), 6);
    assert_eq!(canvas.rows(), 3);
}

#[test]
fn canvas_clips_out_of_bounds_writes() {
    let mut canvas = Canvas::new(4, 4, C_BACKGROUND);
    canvas.set(-1, 0, C_WAVE);
    canvas.set(0, 4, C_WAVE);
    canvas.set(3, 3, C_WAVE);
    assert_eq!(canvas.get(3, 3), Some(C_WAVE));
    assert_eq!(canvas.get(0, 0), Some(C_BACKGROUND));
    assert_eq!(canvas.get(4, 0), None);
}

#[test]
fn present_uses_half_blocks() {
    let mut canvas = Canvas::new(2, 2, C_BACKGROUND);
    canvas.set(0, 0, C_WAVE);
    let mut out = Vec::new();
    canvas.present(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains('\u{2580}'));
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[test]
fn player_drawn_at_origin() {
    let cfg = GameConfig::default();
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &make_state(Vec::new()), &test_sprites(), &cfg);
    assert_eq!(canvas.get(0, 0), Some(PLAYER_COLOR));
    assert_eq!(canvas.get(4, 4), Some(PLAYER_COLOR));
    assert_eq!(canvas.get(5, 5), Some(C_BACKGROUND));
}

#[test]
fn wave_fills_right_quarter() {
    let cfg = GameConfig::default();
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &make_state(Vec::new()), &test_sprites(), &cfg);
    assert_eq!(canvas.get(37, 10), Some(C_WAVE));
    assert_eq!(canvas.get(49, 49), Some(C_WAVE));
    assert_eq!(canvas.get(36, 10), Some(C_BACKGROUND));
}

#[test]
fn collected_clams_are_not_drawn() {
    let cfg = GameConfig::default();
    let mut state = make_state(vec![Rect::new(100, 200, 30, 30), Rect::new(200, 300, 30, 30)]);
    state.clams.collect(0);
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &state, &test_sprites(), &cfg);
    assert_eq!(canvas.get(11, 21), Some(C_BACKGROUND));
    assert_eq!(canvas.get(21, 31), Some(CLAM_COLOR));
}

#[test]
fn sprite_chosen_by_kind() {
    let cfg = GameConfig::default();
    let mut state = make_state(vec![Rect::new(100, 200, 30, 30)]);
    state.player.sprite = SpriteKind::Clam;
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &state, &test_sprites(), &cfg);
    // The clam sprite is 30×30, so the player now covers 3×3 canvas pixels.
    assert_eq!(canvas.get(0, 0), Some(CLAM_COLOR));
    assert_eq!(canvas.get(2, 2), Some(CLAM_COLOR));
    assert_eq!(canvas.get(3, 3), Some(C_BACKGROUND));
    assert_eq!(canvas.get(11, 21), Some(CLAM_COLOR));
}

#[test]
fn wave_drawn_over_clams() {
    let cfg = GameConfig::default();
    let state = make_state(vec![Rect::new(400, 100, 30, 30)]);
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &state, &test_sprites(), &cfg);
    assert_eq!(canvas.get(41, 11), Some(C_WAVE));
}

#[test]
fn transparent_sprite_pixels_show_background() {
    let cfg = GameConfig::default();
    let sprites = Sprites {
        player: Sprite::solid(0, 0, PLAYER_COLOR),
        clam: Sprite::solid(30, 30, CLAM_COLOR),
    };
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &make_state(Vec::new()), &sprites, &cfg);
    assert_eq!(canvas.get(2, 2), Some(C_BACKGROUND));
}

#[test]
fn off_screen_player_is_clipped() {
    let cfg = GameConfig::default();
    let mut state = make_state(Vec::new());
    state.player.rect.set_x(-30);
    state.player.rect.set_y(-30);
    let mut canvas = canvas_for(&cfg);
    draw_scene(&mut canvas, &state, &test_sprites(), &cfg);
    assert_eq!(canvas.get(0, 0), Some(PLAYER_COLOR));
    assert_eq!(canvas.get(2, 2), Some(C_BACKGROUND));
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[test]
fn hud_text_and_placement() {
    let cfg = GameConfig::default();
    let mut state = make_state(Vec::new());
    state.score = 4;
    state.frame = 1;

    let [(time_at, time), (score_at, score)] = hud_lines(&state, &cfg);
    assert_eq!(time, "Time = 30.0");
    assert_eq!(score, "Score = 4");
    assert_eq!(time_at, (1, 23));
    assert_eq!(score_at, (1, 22));
}

#[test]
fn hud_rounds_to_one_decimal() {
    let cfg = GameConfig::default();
    let mut state = make_state(Vec::new());
    state.frame = 600; // 10s in
    let [(_, time), _] = hud_lines(&state, &cfg);
    assert_eq!(time, "Time = 20.0");
}

#[test]
fn render_writes_frame_and_hud() {
    let cfg = GameConfig::default();
    let mut state = make_state(Vec::new());
    state.score = 2;
    let mut canvas = canvas_for(&cfg);
    let mut out = Vec::new();

    render(&mut out, &mut canvas, &state, &test_sprites(), &cfg).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Score = 2"));
    assert!(text.contains("Time = 30.0"));
    assert!(text.contains('\u{2580}'));
}
