use space_invaders::compute::*;
use space_invaders::constants::*;
use space_invaders::entities::*;
use space_invaders::palette::EXPLOSION_COLORS;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn bullet_at(x: i32, y: i32) -> Bullet {
    Bullet { x, y, dy: BULLET_SPEED }
}

// ── Player controller ─────────────────────────────────────────────────────────

#[test]
fn intent_sets_velocity() {
    let mut p = Player::spawn();
    set_horizontal_intent(&mut p, -1);
    assert_eq!(p.dx, -PLAYER_SPEED);
    set_horizontal_intent(&mut p, 1);
    assert_eq!(p.dx, PLAYER_SPEED);
    set_horizontal_intent(&mut p, 0);
    assert_eq!(p.dx, 0);
}

#[test]
fn intent_out_of_range_is_clamped_to_a_unit_direction() {
    let mut p = Player::spawn();
    set_horizontal_intent(&mut p, 5);
    assert_eq!(p.dx, PLAYER_SPEED);
    set_horizontal_intent(&mut p, -3);
    assert_eq!(p.dx, -PLAYER_SPEED);
}

#[test]
fn advance_applies_velocity() {
    let mut p = Player::spawn(); // x = 400
    set_horizontal_intent(&mut p, -1);
    advance_player(&mut p);
    assert_eq!(p.x, 393);
}

#[test]
fn advance_clamps_at_left_edge() {
    let mut p = Player::spawn();
    p.x = 3;
    set_horizontal_intent(&mut p, -1);
    advance_player(&mut p);
    assert_eq!(p.x, 0);
    advance_player(&mut p);
    assert_eq!(p.x, 0);
}

#[test]
fn advance_clamps_at_right_edge() {
    let mut p = Player::spawn();
    p.x = WIDTH - PLAYER_WIDTH - 2;
    set_horizontal_intent(&mut p, 1);
    advance_player(&mut p);
    assert_eq!(p.x, WIDTH - PLAYER_WIDTH);
}

#[test]
fn player_stays_in_bounds_over_many_ticks() {
    let mut p = Player::spawn();
    for tick in 0..500 {
        let dir = if (tick / 70) % 2 == 0 { 1 } else { -1 };
        set_horizontal_intent(&mut p, dir);
        advance_player(&mut p);
        assert!(p.x >= 0 && p.x <= WIDTH - PLAYER_WIDTH, "x = {} at tick {}", p.x, tick);
    }
}

#[test]
fn fire_spawns_bullet_at_ship_nose() {
    let p = Player::spawn();
    let mut bullets = Vec::new();
    fire(&p, &mut bullets);
    assert_eq!(bullets, vec![Bullet { x: p.x + 25, y: p.y, dy: BULLET_SPEED }]);
}

#[test]
fn fire_has_no_cap() {
    let p = Player::spawn();
    let mut bullets = Vec::new();
    for _ in 0..50 {
        fire(&p, &mut bullets);
    }
    assert_eq!(bullets.len(), 50);
}

#[test]
fn bullets_move_up_and_leave_at_the_top() {
    let mut bullets = vec![bullet_at(10, 10), bullet_at(20, 5), bullet_at(30, 8)];
    advance_bullets(&mut bullets);
    // 10 → 2 kept; 5 → -3 dropped; 8 → 0 kept
    assert_eq!(bullets, vec![bullet_at(10, 2), bullet_at(30, 0)]);
}

// ── Formation controller ──────────────────────────────────────────────────────

#[test]
fn grid_is_four_by_eight_row_major() {
    let grid = spawn_grid();
    assert_eq!(grid.len(), 32);
    assert_eq!(grid[0], Enemy { x: 80, y: 80 });
    assert_eq!(grid[1], Enemy { x: 160, y: 80 });
    assert_eq!(grid[8], Enemy { x: 80, y: 140 });
    assert_eq!(grid[31], Enemy { x: 640, y: 260 });
}

#[test]
fn formation_moves_sideways_without_edge() {
    let mut enemies = spawn_grid();
    let mut f = Formation::default();
    let mut p = Player::spawn();
    let outcome = advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(outcome, FormationOutcome::Advanced);
    assert_eq!(f.direction, 1);
    assert_eq!(enemies[0], Enemy { x: 81, y: 80 });
    assert_eq!(enemies[31], Enemy { x: 641, y: 260 });
}

#[test]
fn right_edge_drops_whole_formation_and_flips() {
    let mut enemies = vec![Enemy { x: 100, y: 100 }, Enemy { x: 759, y: 100 }, Enemy { x: 300, y: 200 }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    let outcome = advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(outcome, FormationOutcome::Descended);
    assert_eq!(f.direction, -1);
    assert_eq!(
        enemies,
        vec![Enemy { x: 101, y: 130 }, Enemy { x: 760, y: 130 }, Enemy { x: 301, y: 230 }]
    );
}

#[test]
fn left_edge_drops_and_flips() {
    let mut enemies = vec![Enemy { x: 1, y: 100 }, Enemy { x: 200, y: 100 }];
    let mut f = Formation { direction: -1, ..Formation::default() };
    let mut p = Player::spawn();
    advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(f.direction, 1);
    assert_eq!(enemies, vec![Enemy { x: 0, y: 130 }, Enemy { x: 199, y: 130 }]);
}

#[test]
fn several_enemies_touching_still_drop_and_flip_once() {
    let mut enemies = vec![Enemy { x: 759, y: 100 }, Enemy { x: 759, y: 160 }, Enemy { x: 780, y: 220 }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(f.direction, -1);
    let ys: Vec<i32> = enemies.iter().map(|e| e.y).collect();
    assert_eq!(ys, vec![130, 190, 250]);
}

#[test]
fn formation_leaves_edge_on_the_next_tick() {
    let mut enemies = vec![Enemy { x: 759, y: 100 }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    advance_formation(&mut enemies, &mut f, &mut p);
    let outcome = advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(outcome, FormationOutcome::Advanced);
    assert_eq!(f.direction, -1);
    assert_eq!(enemies[0], Enemy { x: 759, y: 130 });
}

#[test]
fn reaching_loss_threshold_zeroes_health() {
    let mut enemies = vec![Enemy { x: 300, y: LOSS_THRESHOLD }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    let outcome = advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(outcome, FormationOutcome::ReachedPlayer);
    assert_eq!(p.health, 0);
}

#[test]
fn descent_onto_threshold_ends_the_game() {
    // Scenario: one shield left, the drop carries the grid over the line.
    let mut enemies = vec![Enemy { x: 759, y: LOSS_THRESHOLD - 20 }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    p.health = 1;
    let outcome = advance_formation(&mut enemies, &mut f, &mut p);

    assert_eq!(outcome, FormationOutcome::ReachedPlayer);
    assert_eq!(p.health, 0);
}

#[test]
fn above_threshold_leaves_health_alone() {
    let mut enemies = vec![Enemy { x: 300, y: LOSS_THRESHOLD - 1 }];
    let mut f = Formation::default();
    let mut p = Player::spawn();
    advance_formation(&mut enemies, &mut f, &mut p);
    assert_eq!(p.health, MAX_HEALTH);
}

// ── Collision & scoring ───────────────────────────────────────────────────────

#[test]
fn bullet_into_first_enemy_scores_and_removes_both() {
    let mut enemies = spawn_grid();
    let mut bullets = vec![bullet_at(100, 100)];
    let report = resolve(&mut bullets, &mut enemies, 0);

    assert_eq!(enemies.len(), 31);
    assert!(bullets.is_empty());
    assert_eq!(report.score, 10);
    assert_eq!(report.explosions, vec![(100, 100)]);
    assert_eq!(enemies[0], Enemy { x: 160, y: 80 });
}

#[test]
fn miss_changes_nothing() {
    let mut enemies = spawn_grid();
    let before = enemies.clone();
    let mut bullets = vec![bullet_at(10, 500), bullet_at(80, 100)]; // second sits on an edge
    let report = resolve(&mut bullets, &mut enemies, 70);

    assert_eq!(enemies, before);
    assert_eq!(bullets.len(), 2);
    assert_eq!(report.score, 70);
    assert_eq!(report.hits(), 0);
}

#[test]
fn two_bullets_cannot_kill_the_same_enemy() {
    let mut enemies = vec![Enemy { x: 80, y: 80 }, Enemy { x: 300, y: 80 }];
    let mut bullets = vec![bullet_at(100, 100), bullet_at(101, 101)];
    let report = resolve(&mut bullets, &mut enemies, 0);

    assert_eq!(report.score, 10);
    assert_eq!(enemies, vec![Enemy { x: 300, y: 80 }]);
    assert_eq!(bullets, vec![bullet_at(101, 101)]);
}

#[test]
fn overlapping_enemies_earliest_wins() {
    let mut enemies = vec![Enemy { x: 0, y: 0 }, Enemy { x: 10, y: 0 }];
    let mut bullets = vec![bullet_at(20, 20)];
    let report = resolve(&mut bullets, &mut enemies, 0);

    assert_eq!(report.explosions, vec![(20, 20)]);
    assert_eq!(enemies, vec![Enemy { x: 10, y: 0 }]);
}

#[test]
fn each_hit_removes_one_bullet_one_enemy_ten_points() {
    let mut enemies = spawn_grid();
    let mut bullets = vec![bullet_at(100, 100), bullet_at(500, 500), bullet_at(260, 160)];
    let report = resolve(&mut bullets, &mut enemies, 20);

    assert_eq!(report.hits(), 2);
    assert_eq!(enemies.len(), 30);
    assert_eq!(bullets, vec![bullet_at(500, 500)]);
    assert_eq!(report.score, 40);
    assert_eq!(report.explosions, vec![(100, 100), (260, 160)]);
}

// ── Effects ───────────────────────────────────────────────────────────────────

#[test]
fn explosion_spawns_ten_fresh_particles() {
    let mut particles = Vec::new();
    spawn_explosion(&mut particles, 120, 240, &mut seeded_rng());

    assert_eq!(particles.len(), EXPLOSION_PARTICLES);
    for p in &particles {
        assert_eq!(p.life, PARTICLE_LIFETIME);
        assert_eq!((p.x, p.y), (120.0, 240.0));
        assert!(p.vx.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.vy.abs() <= PARTICLE_MAX_SPEED);
        assert!(EXPLOSION_COLORS.contains(&p.color));
    }
}

#[test]
fn particles_expire_after_their_lifetime() {
    let mut particles = Vec::new();
    spawn_explosion(&mut particles, 0, 0, &mut seeded_rng());

    for _ in 0..29 {
        advance_all(&mut particles);
    }
    assert_eq!(particles.len(), 10);
    assert!(particles.iter().all(|p| p.life == 1));

    advance_all(&mut particles);
    assert!(particles.is_empty());
}

#[test]
fn particles_drift_by_their_velocity() {
    let mut particles = vec![Particle {
        x: 10.0,
        y: 10.0,
        vx: 1.5,
        vy: -2.0,
        color: EXPLOSION_COLORS[0],
        life: 5,
    }];
    advance_all(&mut particles);
    assert_eq!((particles[0].x, particles[0].y, particles[0].life), (11.5, 8.0, 4));
}
