/// Collision & Scoring: bullets against the enemy grid.

use tracing::debug;

use crate::constants::ENEMY_REWARD;
use crate::entities::{Bullet, Enemy};

/// Result of one `resolve` pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    /// Score after this pass.
    pub score: u32,
    /// One explosion request per destroyed enemy, at the enemy's centre,
    /// in the order the hits were found.
    pub explosions: Vec<(i32, i32)>,
}

impl CollisionReport {
    pub fn hits(&self) -> usize {
        self.explosions.len()
    }
}

/// Match bullets to enemies and remove both sides of every hit.
///
/// Bullets are visited in insertion order; each one takes the first live
/// enemy (in insertion order) whose box contains it. An enemy claimed by an
/// earlier bullet is skipped, so no enemy is ever removed twice. Survivors
/// are rebuilt after the scan rather than removed mid-iteration.
pub fn resolve(bullets: &mut Vec<Bullet>, enemies: &mut Vec<Enemy>, score: u32) -> CollisionReport {
    let mut killed = vec![false; enemies.len()];
    let mut spent = vec![false; bullets.len()];
    let mut report = CollisionReport {
        score,
        explosions: Vec::new(),
    };

    for (bi, bullet) in bullets.iter().enumerate() {
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed[*ei] && enemy.contains(bullet.x, bullet.y));

        if let Some((ei, enemy)) = hit {
            killed[ei] = true;
            spent[bi] = true;
            report.score += ENEMY_REWARD;
            report.explosions.push(enemy.center());
            debug!(bullet = bi, enemy = ei, score = report.score, "enemy destroyed");
        }
    }

    if report.explosions.is_empty() {
        return report;
    }

    let mut ei = 0;
    enemies.retain(|_| {
        let keep = !killed[ei];
        ei += 1;
        keep
    });
    let mut bi = 0;
    bullets.retain(|_| {
        let keep = !spent[bi];
        bi += 1;
        keep
    });

    report
}
