/// Formation Controller: the enemy grid moves as one rigid body.

use tracing::info;

use crate::constants::{
    ENEMY_COLS, ENEMY_ROWS, ENEMY_WIDTH, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_SPACING_X,
    GRID_SPACING_Y, LOSS_THRESHOLD, WIDTH,
};
use crate::entities::{Enemy, Formation, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormationOutcome {
    /// Moved sideways only.
    Advanced,
    /// An edge was touched: the grid dropped and reversed this tick.
    Descended,
    /// An enemy reached the player's row; shields are gone.
    ReachedPlayer,
}

/// Build the starting grid, row-major from the top-left.
pub fn spawn_grid() -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLS);
    for row in 0..ENEMY_ROWS {
        for col in 0..ENEMY_COLS {
            enemies.push(Enemy {
                x: GRID_ORIGIN_X + col as i32 * GRID_SPACING_X,
                y: GRID_ORIGIN_Y + row as i32 * GRID_SPACING_Y,
            });
        }
    }
    enemies
}

/// Advance the formation by one tick.
///
/// Every enemy shifts by `direction × speed`. If any of them ends up on or
/// past either edge, the whole grid drops by `formation.drop` and the shared
/// direction flips, once, no matter how many enemies touched. Finally, any
/// enemy at or below the loss threshold zeroes the player's health.
pub fn advance_formation(
    enemies: &mut [Enemy],
    formation: &mut Formation,
    player: &mut Player,
) -> FormationOutcome {
    let step = formation.direction * formation.speed;
    let mut edge_touched = false;

    for enemy in enemies.iter_mut() {
        enemy.x += step;
        if enemy.x <= 0 || enemy.x >= WIDTH - ENEMY_WIDTH {
            edge_touched = true;
        }
    }

    if edge_touched {
        for enemy in enemies.iter_mut() {
            enemy.y += formation.drop;
        }
        formation.direction = -formation.direction;
    }

    if enemies.iter().any(|e| e.y >= LOSS_THRESHOLD) {
        info!(health = player.health, "formation reached the player's row");
        player.health = 0;
        return FormationOutcome::ReachedPlayer;
    }

    if edge_touched {
        FormationOutcome::Descended
    } else {
        FormationOutcome::Advanced
    }
}
