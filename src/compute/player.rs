/// Player Controller: horizontal movement and firing.

use tracing::debug;

use crate::constants::{BULLET_OFFSET_X, BULLET_SPEED, PLAYER_SPEED, PLAYER_WIDTH, WIDTH};
use crate::entities::{Bullet, Player};

/// Set the ship's velocity from a direction in `{-1, 0, +1}`.
/// Anything outside that range is clamped onto it.
pub fn set_horizontal_intent(player: &mut Player, direction: i32) {
    player.dx = direction.signum() * PLAYER_SPEED;
}

/// Apply velocity and clamp the ship inside the playfield.
pub fn advance_player(player: &mut Player) {
    player.x = (player.x + player.dx).clamp(0, WIDTH - PLAYER_WIDTH);
}

/// Spawn one bullet at the ship's nose. No cap and no cooldown.
pub fn fire(player: &Player, bullets: &mut Vec<Bullet>) {
    let bullet = Bullet {
        x: player.x + BULLET_OFFSET_X,
        y: player.y,
        dy: BULLET_SPEED,
    };
    debug!(x = bullet.x, y = bullet.y, in_flight = bullets.len() + 1, "fire");
    bullets.push(bullet);
}

/// Move every bullet and drop those that have left the top of the playfield.
pub fn advance_bullets(bullets: &mut Vec<Bullet>) {
    for bullet in bullets.iter_mut() {
        bullet.y += bullet.dy;
    }
    bullets.retain(|b| b.y >= 0);
}
