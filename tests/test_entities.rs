use space_invaders::constants::*;
use space_invaders::entities::*;

#[test]
fn player_spawns_centre_bottom_with_full_shields() {
    let p = Player::spawn();
    assert_eq!(p.x, WIDTH / 2);
    assert_eq!(p.y, HEIGHT - 80);
    assert_eq!(p.dx, 0);
    assert_eq!(p.health, MAX_HEALTH);
    assert_eq!(p.max_health, MAX_HEALTH);
}

#[test]
fn enemy_box_is_open_on_every_side() {
    let e = Enemy { x: 100, y: 200 };
    assert!(e.contains(120, 220));
    assert!(e.contains(101, 201));
    assert!(e.contains(139, 239));

    // Edges themselves do not count
    assert!(!e.contains(100, 220));
    assert!(!e.contains(140, 220));
    assert!(!e.contains(120, 200));
    assert!(!e.contains(120, 240));
}

#[test]
fn enemy_center_is_half_a_box_in() {
    let e = Enemy { x: 80, y: 80 };
    assert_eq!(e.center(), (100, 100));
}

#[test]
fn formation_starts_moving_right() {
    let f = Formation::default();
    assert_eq!(f.direction, 1);
    assert_eq!(f.speed, ENEMY_SPEED);
    assert_eq!(f.drop, ENEMY_DROP);
}

#[test]
fn session_clone_is_independent() {
    let original = space_invaders::session::GameSession::new();
    let mut cloned = original.clone();

    cloned.player.x = 7;
    cloned.score = 999;
    cloned.enemies.clear();

    assert_eq!(original.player.x, PLAYER_START_X);
    assert_eq!(original.score, 0);
    assert_eq!(original.enemies.len(), ENEMY_ROWS * ENEMY_COLS);
}
