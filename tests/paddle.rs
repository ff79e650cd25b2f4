use pong::{
    input::{Key, KeyState},
    paddle::{Controls, Paddle},
    pixel_buffer::PixelBuffer,
    util::{Color, Field, Pos},
};

const FIELD: Field = Field::new(800, 600);

fn player_one() -> Paddle {
    Paddle::new(
        Pos::new(100.0, 300.0),
        20,
        100,
        300.0,
        Color::WHITE,
        Controls::PLAYER_ONE,
    )
}

#[test]
fn up_and_down_move_by_speed_times_dt() {
    let mut paddle = player_one();

    paddle.update(&KeyState::new().with(Key::P1Up), 0.5);
    assert_eq!(paddle.pos.y, 150.0);

    paddle.update(&KeyState::new().with(Key::P1Down), 0.25);
    assert_eq!(paddle.pos.y, 225.0);
    assert_eq!(paddle.pos.x, 100.0);
}

#[test]
fn up_wins_when_both_are_held() {
    let mut paddle = player_one();
    let keys = KeyState::new().with(Key::P1Up).with(Key::P1Down);

    paddle.update(&keys, 0.1);
    assert_eq!(paddle.pos.y, 270.0);
}

#[test]
fn ignores_the_other_players_keys() {
    let mut paddle = player_one();
    let keys = KeyState::new().with(Key::P2Up).with(Key::Serve);

    paddle.update(&keys, 1.0);
    assert_eq!(paddle.pos.y, 300.0);
}

#[test]
fn player_two_uses_its_own_pair() {
    let mut paddle = player_one();
    paddle.controls = Controls::PLAYER_TWO;

    paddle.update(&KeyState::new().with(Key::P2Down), 0.1);
    assert_eq!(paddle.pos.y, 330.0);
    paddle.update(&KeyState::new().with(Key::P1Down), 0.1);
    assert_eq!(paddle.pos.y, 330.0);
}

#[test]
fn is_not_clamped_to_the_field() {
    let mut paddle = player_one();
    paddle.update(&KeyState::new().with(Key::P1Up), 10.0);
    assert_eq!(paddle.pos.y, -2700.0);
}

#[test]
fn draws_centered_rectangle() {
    let mut buf = PixelBuffer::new(800, 600);
    player_one().draw(&mut buf, FIELD);

    let lit = |x, y| buf.pixel(x, y).is_some_and(|px| px[0] == 255);
    assert!(lit(90, 250));
    assert!(lit(109, 349));
    assert!(lit(100, 300));
    assert!(!lit(89, 300));
    assert!(!lit(110, 300));
    assert!(!lit(100, 249));
    assert!(!lit(100, 350));
}

#[test]
fn draws_score_toward_the_center() {
    let mut buf = PixelBuffer::new(800, 600);
    let mut paddle = player_one();
    paddle.score = 1;
    paddle.draw(&mut buf, FIELD);

    // lerp(100, 400, 0.2) = 160, so the glyph spans x 145..175, y 10..60.
    let lit = |x, y| buf.pixel(x, y).is_some_and(|px| px[0] == 255);
    assert!(lit(145, 10));
    assert!(lit(155, 10));
    assert!(!lit(165, 10));
    assert!(lit(170, 55));
    assert!(!lit(144, 10));
    assert!(!lit(145, 9));
}

#[test]
fn span_is_exclusive() {
    let paddle = player_one();
    assert!(paddle.spans(300.0));
    assert!(paddle.spans(250.5));
    assert!(!paddle.spans(250.0));
    assert!(!paddle.spans(350.0));
}
