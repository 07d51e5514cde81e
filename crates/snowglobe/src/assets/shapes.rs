//! Built-in sprite art for the four effect themes.
//!
//! Transcribed pixel-for-pixel from the hand-drawn originals; keep edits out
//! of this file so the shipped effects stay visually identical.

use super::sprite::Sprite;

fn sprite(art: &str) -> Sprite {
    Sprite::parse(art).expect("built-in sprite art is well-formed")
}

/// Three snowball poses, 16x16.
pub fn snowball_shapes() -> Vec<Sprite> {
    vec![
        sprite(
            "
            . . . . . 1 9 9 9 9 1 . . . . .
            . . . 1 9 9 1 1 1 1 9 9 9 . . .
            . . 1 9 1 1 1 1 1 1 1 1 9 9 . .
            . 1 9 1 1 1 d 1 1 1 1 1 1 9 9 .
            . 9 1 1 1 d 1 1 1 1 1 1 1 1 6 .
            1 9 1 1 d 1 1 1 1 1 1 1 1 1 9 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 1 d 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 d d 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 d d 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 d b 6
            9 9 1 1 1 1 1 1 1 1 1 1 d d 6 6
            . 6 d 1 1 1 1 1 1 1 1 d d b 8 .
            . 6 9 d d 1 1 1 1 d d d b 6 8 .
            . . 6 9 d d d d d d d b 6 8 . .
            . . . 6 8 6 b d d b 6 8 8 . . .
            . . . . . 8 8 8 8 8 8 . . . . .
            ",
        ),
        sprite(
            "
            . . . . . . . 1 9 9 1 . . . . .
            . . . . . 1 9 9 1 1 9 9 9 . . .
            . . . . 1 9 1 1 1 1 1 1 9 9 . .
            . . . 1 9 1 1 1 1 1 1 1 1 9 9 .
            . . . 9 1 1 1 1 1 1 1 1 1 1 6 .
            . . 1 9 1 1 1 1 1 1 1 1 1 1 9 6
            . . 9 1 1 1 d 1 1 1 1 1 1 1 d 6
            . . 9 1 1 1 1 d 1 1 1 1 1 d d 6
            . . 9 1 1 1 1 1 d d 1 1 1 d d 6
            . . 9 1 1 1 1 1 1 1 1 1 1 d b 6
            . . 9 9 1 1 1 1 1 1 1 1 d d 6 6
            . . . 6 d 1 1 1 1 1 1 d d b 8 .
            . . . 6 9 d d 1 1 d d d b 6 8 .
            . . . . 6 9 d d d d d b 6 8 . .
            . . . . . 6 8 6 b b 6 8 8 . . .
            . . . . . . . 8 8 8 8 . . . . .
            ",
        ),
        sprite(
            "
            . . . . . 1 9 9 9 9 1 . . . . .
            . . . 1 9 9 1 1 1 1 9 9 9 . . .
            . . 1 9 1 1 1 1 1 1 1 1 9 9 . .
            . 1 9 1 1 1 1 1 d d 1 1 1 9 9 .
            . 9 1 1 1 1 1 1 1 1 d 1 1 1 6 .
            1 9 1 1 1 1 1 1 1 1 1 1 1 1 9 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 d d 6
            9 1 1 1 1 1 1 1 1 1 1 1 1 d b 6
            9 9 1 1 1 1 1 1 1 1 1 1 d d 6 6
            . 6 d 1 1 1 1 1 1 1 1 d d b 8 .
            . 6 9 d d 1 1 1 1 d d d b 6 8 .
            . . 6 9 d d d d d d d b 6 8 . .
            . . . 6 8 6 b d d b 6 8 8 . . .
            . . . . . 8 8 8 8 8 8 . . . . .
            . . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . . .
            ",
        ),
    ]
}

/// Eight candy cane rotations, 24x24, ordered as a tumbling flipbook.
pub fn candy_cane_shapes() -> Vec<Sprite> {
    vec![
        sprite(
            "
            0 0 0 0 0 0 0 F F F F F F F 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 F 1 1 1 1 1 2 2 F 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 F 1 1 1 1 1 1 2 2 2 F 0 0 0 0 0 0 0 0
            0 0 0 0 F 2 2 1 1 1 1 2 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 F 2 2 2 2 1 1 2 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 F 2 2 2 2 F F 2 2 2 2 1 F 0 0 0 0 0 0 0
            0 0 0 0 F 2 2 2 F 0 0 F 2 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 F 1 1 1 F 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 F 1 1 1 F 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 F 1 F 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 F 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 F 2 2 F 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 F F 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 F F F F F F F 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F F 2 1 1 1 F F F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 F F 2 2 2 1 1 1 F F F 0 0 0
            0 0 0 0 0 0 0 0 0 F F 2 2 2 2 1 1 1 1 F F F 0 0
            0 0 0 0 0 0 0 0 0 F 1 1 2 2 2 1 1 1 1 1 F F F 0
            0 0 0 0 0 0 0 0 0 F 1 1 1 2 F 1 1 1 2 2 2 F 0 0
            0 0 0 0 0 0 0 0 0 F 1 1 F F F F 2 2 2 2 2 F 0 0
            0 0 0 0 0 0 0 0 F F F F F 0 0 F 2 2 2 2 2 F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F 2 2 2 2 2 F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 F F 1 1 1 2 2 F F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 F F 2 1 1 1 1 F F F 0 0
            0 0 0 0 0 0 0 0 0 0 0 F F 2 2 2 1 1 F F F 0 0 0
            0 0 0 0 0 0 0 0 0 0 F F 2 2 2 2 2 F F F 0 0 0 0
            0 0 0 0 0 0 0 0 0 F F 1 2 2 2 2 F F F 0 0 0 0 0
            0 0 0 0 0 0 0 0 F F 1 1 1 2 2 F F F 0 0 0 0 0 0
            0 0 0 0 0 0 0 F F 2 2 1 1 1 F F F 0 0 0 0 0 0 0
            0 0 0 0 0 0 F F 2 2 2 2 1 F F F 0 0 0 0 0 0 0 0
            0 0 0 0 0 F F 1 1 2 2 2 F F F 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F 1 1 1 1 2 F F F 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 F 2 2 1 1 1 F F F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F 2 2 1 F F F 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F 2 2 F F F 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 F F F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F F F F 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F 1 1 2 2 2 2 F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 2 2 2 2 1 F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F 1 1 2 2 2 1 1 1 F
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F 2 2 1 1 1 F
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F 1 1 1 1 F
            0 0 F F F F F F F F F F F F F F F F 2 2 2 1 1 F
            0 F 2 1 1 1 2 2 2 1 1 2 2 2 2 1 1 2 2 2 2 2 2 F
            F 2 2 1 1 1 2 2 2 1 1 2 2 2 2 1 1 1 2 2 2 2 2 F
            F 2 2 1 1 1 2 2 2 1 1 2 2 2 2 1 1 1 2 2 2 2 F 0
            0 F 2 1 1 1 2 2 2 1 1 2 2 2 2 1 1 1 1 2 2 F 0 0
            0 0 F F F F F F F F F F F F F F F F F F F 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 F F F 2 F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 F F 2 2 1 F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F 2 1 1 1 F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F 1 1 1 1 2 2 F F 0 0 0 0 0 0 F 0 0 0 0 0 0
            0 0 F F 1 1 2 2 2 2 F F 0 0 0 0 F F F F F 0 0 0
            0 0 0 F F 2 2 2 2 2 1 F F 0 0 0 F 1 1 1 F F 0 0
            0 0 0 0 F F 2 2 2 1 1 2 F F 0 0 F F 1 1 2 F F 0
            0 0 0 0 0 F F 2 1 1 2 2 2 F F 0 0 F 1 2 2 2 F F
            0 0 0 0 0 0 F F 1 2 2 2 2 2 F F 0 F F 2 2 2 2 F
            0 0 0 0 0 0 0 F F 2 2 2 2 2 1 F F 0 F 2 2 2 1 F
            0 0 0 0 0 0 0 0 F F 2 2 2 1 1 1 F F F 1 1 1 1 F
            0 0 0 0 0 0 0 0 0 F F 2 1 1 1 2 2 2 1 1 1 1 1 F
            0 0 0 0 0 0 0 0 0 0 F F 1 1 1 2 2 2 2 1 1 1 F F
            0 0 0 0 0 0 0 0 0 0 0 F F 1 1 2 2 2 2 1 1 F F F
            0 0 0 0 0 0 0 0 0 0 0 0 F F 2 2 2 2 2 2 F F F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 F F 2 2 2 2 F F F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F F F F F 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 F F 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 F 2 2 F 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 0 F 0 0 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 F 0 0 0 F 1 F 0 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 F 1 1 1 F 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 1 F 0 0 F 1 1 1 F 0 0 0 0
            0 0 0 0 0 0 0 F 1 1 1 2 F 0 0 F 2 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 F 1 2 2 2 2 F F 2 2 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 2 1 1 2 2 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 F 2 2 2 2 2 1 1 1 1 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 0 F 2 2 2 1 1 1 1 1 1 F 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 F 2 2 1 1 1 1 1 F 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 F F F F F F F 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F F F F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 F F 1 2 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 F F 1 1 1 2 2 F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 F F 2 1 1 1 1 F F 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 F F 2 2 2 1 1 1 F F 0 0 0 0
            0 0 0 0 0 0 0 0 0 F F 1 2 2 2 2 1 F F 0 0 0 0 0
            0 0 0 0 0 0 0 0 F F 1 1 1 2 2 2 F F 0 0 0 0 0 0
            0 0 0 0 0 0 0 F F 2 2 1 1 1 2 F F 0 0 0 0 0 0 0
            0 0 0 0 0 0 F F 2 2 2 2 1 1 F F 0 0 0 0 0 0 0 0
            0 0 0 0 0 F F 2 2 2 2 2 2 F F 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F 1 1 2 2 2 2 F F 0 0 0 0 0 0 0 0 0 0
            0 0 0 F F 1 1 1 1 2 2 F F 0 0 0 0 0 0 0 0 0 0 0
            0 0 F F 2 1 1 1 1 1 F F 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F F 2 2 2 2 1 F F 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F 2 2 2 2 2 F F 0 0 F F F F 0 0 0 0 0 0 0 0
            0 0 F 2 2 2 2 2 F F F F F 1 1 F 0 0 0 0 0 0 0 0
            0 0 F 2 2 2 2 1 1 F F 1 1 1 1 F 0 0 0 0 0 0 0 0
            0 0 F F 2 1 1 1 1 2 2 2 1 1 F F 0 0 0 0 0 0 0 0
            0 0 F F F 1 1 1 1 2 2 2 2 1 F 0 0 0 0 0 0 0 0 0
            0 0 0 F F F 1 1 1 1 2 2 2 F F 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F F 1 1 1 2 2 F F 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 F F F F F F F F 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 F F F F F F F F F F F F F F F F F F F 0 0
            0 0 F 2 2 1 1 1 1 2 2 2 2 1 1 2 2 2 1 1 1 2 F 0
            0 F 2 2 2 2 1 1 1 2 2 2 2 1 1 2 2 2 1 1 1 2 2 F
            F 2 2 2 2 2 1 1 1 2 2 2 2 1 1 2 2 2 1 1 1 2 2 F
            F 2 2 2 2 2 2 1 1 2 2 2 2 1 1 2 2 2 1 1 1 2 F 0
            F 1 1 2 2 2 F F F F F F F F F F F F F F F F 0 0
            F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            F 1 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            F 1 1 1 2 2 F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            F 1 1 1 2 2 2 1 1 F 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 F 1 2 2 2 2 1 1 1 F 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F 2 2 2 2 1 1 F 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 F F F F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
        sprite(
            "
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 F F F F F F 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 F F F 2 2 2 F F 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 F F 2 2 2 2 2 2 F F 0 0 0 0 0 0 0 0 0 0 0 0
            0 F F 1 1 2 2 2 2 2 1 F F 0 0 0 0 0 0 0 0 0 0 0
            F F 1 1 1 1 2 2 2 1 1 1 F F 0 0 0 0 0 0 0 0 0 0
            F 1 1 1 1 1 2 2 2 1 1 1 1 F F 0 0 0 0 0 0 0 0 0
            F 1 1 1 1 1 F F 2 1 1 1 2 2 F F 0 0 0 0 0 0 0 0
            F 1 1 2 2 F F F F 1 1 2 2 2 2 F F 0 0 0 0 0 0 0
            F 2 2 2 2 F F 0 F F 2 2 2 2 2 1 F F 0 0 0 0 0 0
            F F 2 2 2 2 F F 0 F F 2 2 2 1 1 1 F F 0 0 0 0 0
            0 F F 2 2 1 1 F 0 0 F F 2 1 1 1 2 2 F F 0 0 0 0
            0 0 F F 1 1 1 F 0 0 0 F F 1 1 2 2 2 2 F F 0 0 0
            0 0 0 F F 1 1 F 0 0 0 0 F F 2 2 2 2 1 1 F F 0 0
            0 0 0 0 F F F F 0 0 0 0 0 F F 2 2 1 1 1 1 F F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F 1 1 1 1 2 F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F 1 1 2 2 F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F 2 2 F F 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 F F F F F 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
            ",
        ),
    ]
}

/// Seven holiday cookies, 16x16.
pub fn cookie_shapes() -> Vec<Sprite> {
    vec![
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f b b b 7 b b f f . . .
            . . f b b b b b b b b b b f . .
            . f b b b b 7 b 2 b b 7 b b f .
            . f b b b b b b b b b b b b f .
            f b b 2 b b b b 7 b b 7 b b b f
            f b b b b b b b b b b b 2 b b f
            f b b b b 7 b b 2 b b b b b b f
            f b 7 b b b b b b b b b b b b f
            f b b b b b b b b b 7 b b b d f
            f b b 7 b b b 2 b b b b b b d f
            . f b b b b b b b b b b b d f .
            . f b b b 2 b b b 7 b b d d f .
            . . f d b b b b b b b d d f . .
            . . . f f d d b b d d f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f 3 3 1 3 3 3 f f . . .
            . . f 3 1 3 3 3 3 3 1 3 3 f . .
            . f 3 3 3 3 1 3 3 1 3 3 3 3 f .
            . f 1 3 1 2 2 2 2 2 2 3 1 3 f .
            f 3 3 3 2 2 2 2 2 2 2 2 3 3 1 f
            f 3 1 2 2 2 2 2 2 2 2 2 2 1 3 f
            f 3 3 2 2 2 2 2 2 2 2 2 2 3 3 f
            f 1 3 2 2 2 2 2 2 2 2 2 2 3 3 f
            f 3 1 2 2 2 2 2 2 2 2 2 2 1 3 f
            f 3 3 3 2 2 2 2 2 2 2 2 3 3 1 f
            . f 1 1 3 2 2 2 2 2 2 3 1 3 f .
            . f 3 3 3 3 3 1 3 3 3 3 1 3 f .
            . . f 3 1 3 1 3 1 3 1 3 3 f . .
            . . . f f 3 3 1 3 3 3 f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f 1 1 1 1 1 1 f f . . .
            . . f 1 1 1 1 6 7 1 1 1 1 f . .
            . f 1 1 1 1 1 6 7 1 1 1 1 1 f .
            . f 1 1 1 1 6 7 7 7 1 1 1 1 f .
            f 1 1 1 1 1 1 6 7 1 1 1 1 1 1 f
            f 1 1 1 1 6 6 2 7 7 7 1 1 1 1 f
            f 1 1 1 1 1 6 7 7 7 1 1 1 1 1 f
            f 1 1 1 1 6 2 7 7 3 7 1 1 1 1 f
            f 1 1 1 6 7 7 7 2 7 7 7 1 1 1 f
            f 1 1 1 1 1 1 e e 1 1 1 1 1 1 f
            . f 1 1 1 1 1 e e 1 1 1 1 1 f .
            . f 1 1 1 1 1 1 1 1 1 1 1 1 f .
            . . f 1 1 1 1 1 1 1 1 1 1 f . .
            . . . f f 1 1 1 1 1 1 f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f e e e e e e f f . . .
            . . f e e 1 1 1 1 1 1 e e f . .
            . f e 1 1 1 1 1 1 1 1 1 1 e f .
            . f e 1 1 1 1 1 1 1 1 1 1 e f .
            f e 1 1 1 f 1 1 1 1 f 1 1 1 e f
            f e 1 1 1 1 1 1 1 1 1 1 1 1 e f
            f e 1 1 1 1 1 4 4 1 1 1 1 1 e f
            f e 1 1 1 1 1 4 4 4 4 1 1 1 e f
            f e 1 1 1 1 1 1 1 1 1 1 1 1 e f
            f e 1 1 1 f 1 1 1 1 f 1 1 1 e f
            . f e 1 1 1 f f f f 1 1 1 e f .
            . f e 1 1 1 1 1 1 1 1 1 1 e f .
            . . f e e 1 1 1 1 1 1 e e f . .
            . . . f f e e e e e e f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . . f e d d d e e f . . . .
            . . . . f d f e e f e f . . . .
            . . . . f d e e e e e f . . . .
            . . . . f d f e e f e f . . . .
            . f f f . f e f f e f . f f f .
            f d d e f f 7 7 7 7 f f e e e f
            f d e e 1 e e 2 2 7 e 1 e e e f
            f f f 1 e e e e 7 e e e 1 f f f
            . . f f f e e 2 2 e e f f f . .
            . . . . f e e e e e e f . . . .
            . f f . f e e 2 2 e e f . f f .
            f d d f f e e f f e e f f e e f
            f d e e e 1 e f f e 1 e e e e f
            f d e e e e 1 f f 1 e e e e e f
            . f f f f f f . . f f f f f f .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f 1 1 1 1 1 1 f f . . .
            . . f 1 1 1 1 1 1 1 1 1 1 f . .
            . f 1 1 1 1 6 6 6 1 1 1 1 1 f .
            . f 1 1 1 1 6 6 6 1 1 1 1 1 f .
            f 1 1 1 1 1 6 6 6 1 1 1 1 1 1 f
            f 1 1 6 6 6 6 6 6 6 6 6 1 1 1 f
            f 1 1 6 6 6 6 1 1 6 6 6 1 1 1 f
            f 1 1 6 6 6 6 6 1 6 6 6 1 1 1 f
            f 1 1 6 6 6 6 6 1 6 6 6 1 1 1 f
            f 1 1 1 6 6 1 1 1 6 6 1 1 1 1 f
            . f 1 1 1 6 6 6 6 6 1 1 1 1 f .
            . f 1 1 1 1 6 6 6 1 1 1 1 1 f .
            . . f 1 1 1 1 1 1 1 1 1 1 f . .
            . . . f f 1 1 1 1 1 1 f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
        sprite(
            "
            . . . . . f f f f f f . . . . .
            . . . f f 2 2 2 2 2 2 f f . . .
            . . f 2 2 2 2 2 2 2 2 2 2 f . .
            . f 2 2 2 2 2 2 2 2 2 2 2 2 f .
            . f 2 2 2 2 2 2 2 2 2 2 2 2 f .
            f f f f f f f f f f f f f f f f
            f f f f f f f f f f f f f f f f
            f f f f f f f f f f f f f f f f
            f f f f f f f f f f f f f f f f
            f f f f f f f f f f f f f f f f
            f f f f f f f f f f f f f f f f
            . f 7 7 7 7 7 7 7 7 7 7 7 7 f .
            . f 7 7 7 7 7 7 7 7 7 7 7 7 f .
            . . f 7 7 7 7 7 7 7 7 7 7 f . .
            . . . f f 7 7 7 7 7 7 f f . . .
            . . . . . f f f f f f . . . . .
            ",
        ),
    ]
}

/// Sixteen tiny snowflake glints, 1x1 up to 3x3.
pub fn snowflake_shapes() -> Vec<Sprite> {
    vec![
        sprite("1"),
        sprite("9"),
        sprite(
            "
            9 1
            1 .
            ",
        ),
        sprite(
            "
            . . 1
            . 1 9
            1 9 1
            ",
        ),
        sprite(
            "
            . 1
            1 9
            ",
        ),
        sprite(
            "
            1 . .
            9 1 .
            1 9 1
            ",
        ),
        sprite(
            "
            1 9 1
            9 1 .
            1 . .
            ",
        ),
        sprite(
            "
            1 9 1
            . 1 9
            . . 1
            ",
        ),
        sprite("1 9"),
        sprite("9 1"),
        sprite("1 1"),
        sprite("9 9"),
        sprite(
            "
            1
            9
            ",
        ),
        sprite(
            "
            9
            1
            ",
        ),
        sprite(
            "
            9 .
            . 1
            ",
        ),
        sprite(
            "
            . 1
            9 .
            ",
        ),
    ]
}
