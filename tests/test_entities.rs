use invaders::entities::*;
use invaders::rng::ScriptedRandom;

fn player() -> Player {
    Player::new(400.0, 550.0)
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_moves_five_px_per_step() {
    let mut p = player();
    for _ in 0..5 {
        p.move_by(1.0, 800.0);
    }
    assert_eq!(p.x, 425.0);
    p.move_by(-1.0, 800.0);
    assert_eq!(p.x, 420.0);
}

#[test]
fn player_clamps_at_both_edges() {
    let mut p = player();
    p.x = 2.0;
    p.move_by(-1.0, 800.0);
    assert_eq!(p.x, 0.0);

    p.x = 738.0;
    p.move_by(1.0, 800.0);
    assert_eq!(p.x, 800.0 - PLAYER_WIDTH);
}

#[test]
fn shoot_spawns_centred_upward_bullet() {
    let mut p = player();
    let b = p.shoot().expect("first shot should fire");
    assert_eq!(b.owner, BulletOwner::Player);
    assert_eq!(b.x, 400.0 + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0);
    assert_eq!(b.y, 550.0);
    assert_eq!(p.reload, PLAYER_RELOAD_TICKS);
}

#[test]
fn second_shot_waits_for_reload() {
    let mut p = player();
    assert!(p.shoot().is_some());
    assert!(p.shoot().is_none());

    for _ in 0..PLAYER_RELOAD_TICKS - 1 {
        p.tick();
    }
    assert!(p.shoot().is_none(), "one tick short of reloaded");
    p.tick();
    assert!(p.shoot().is_some());
}

#[test]
fn reload_never_goes_below_zero() {
    let mut p = player();
    p.tick();
    p.tick();
    assert_eq!(p.reload, 0);
}

// ── Bullets ───────────────────────────────────────────────────────────────────

#[test]
fn bullets_travel_by_owner() {
    let mut up = Bullet::new(10.0, 300.0, BulletOwner::Player);
    let mut down = Bullet::new(10.0, 300.0, BulletOwner::Enemy);
    up.tick();
    down.tick();
    assert_eq!(up.y, 300.0 - BULLET_SPEED);
    assert_eq!(down.y, 300.0 + BULLET_SPEED);
}

#[test]
fn offscreen_bounds_are_inclusive() {
    let at = |y| Bullet::new(0.0, y, BulletOwner::Player);
    assert!(at(-1.0).is_offscreen(600.0));
    assert!(!at(0.0).is_offscreen(600.0));
    assert!(!at(600.0).is_offscreen(600.0));
    assert!(at(601.0).is_offscreen(600.0));
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn enemy_tier_drives_points_and_fire_rate() {
    let squid = Enemy::new(0.0, 0.0, EnemyKind::Squid);
    let crab = Enemy::new(0.0, 0.0, EnemyKind::Crab);
    let octopus = Enemy::new(0.0, 0.0, EnemyKind::Octopus);
    assert_eq!(squid.points(), 30);
    assert_eq!(crab.points(), 20);
    assert_eq!(octopus.points(), 10);
    assert!((squid.shoot_chance() - 0.003).abs() < 1e-12);
    assert!((octopus.shoot_chance() - 0.001).abs() < 1e-12);
}

#[test]
fn enemy_advance_and_descend() {
    let mut e = Enemy::new(100.0, 100.0, EnemyKind::Crab);
    e.advance(5.0, Heading::Right);
    assert_eq!(e.x, 105.0);
    e.advance(5.0, Heading::Left);
    assert_eq!(e.x, 100.0);
    e.descend();
    assert_eq!(e.y, 120.0);
}

#[test]
fn enemy_shoots_only_under_its_chance() {
    let e = Enemy::new(100.0, 100.0, EnemyKind::Octopus);

    let mut hit = ScriptedRandom::new([0.0005]);
    let b = e.maybe_shoot(&mut hit).expect("roll under chance fires");
    assert_eq!(b.owner, BulletOwner::Enemy);
    assert_eq!(b.x, 100.0 + (ENEMY_WIDTH - BULLET_WIDTH) / 2.0);
    assert_eq!(b.y, 100.0 + ENEMY_HEIGHT);

    let mut miss = ScriptedRandom::new([0.0015]);
    assert!(e.maybe_shoot(&mut miss).is_none());
}

// ── Shields ───────────────────────────────────────────────────────────────────

#[test]
fn shield_has_trimmed_corners() {
    let s = Shield::new(100.0, 450.0);
    assert_eq!(s.segments.len(), 28);
    assert_eq!(s.health(), 56);
    // top-left corner cell is missing, the one next to it is not
    assert!(!s.segments.iter().any(|seg| seg.x == 100.0 && seg.y == 450.0));
    assert!(!s.segments.iter().any(|seg| seg.x == 100.0 && seg.y == 460.0));
    assert!(s.segments.iter().any(|seg| seg.x == 110.0 && seg.y == 450.0));
    assert!(s.segments.iter().any(|seg| seg.x == 100.0 && seg.y == 470.0));
}

#[test]
fn segment_survives_one_hit_and_falls_to_the_second() {
    let mut s = Shield::new(100.0, 450.0);
    let bullet = Bullet::new(125.0, 445.0, BulletOwner::Player);

    assert!(s.resolve_hit(&bullet));
    assert_eq!(s.segments.len(), 28);
    assert_eq!(s.health(), 55);

    assert!(s.resolve_hit(&bullet));
    assert_eq!(s.segments.len(), 27);
    assert!(!s.segments.iter().any(|seg| seg.x == 120.0 && seg.y == 450.0));
}

#[test]
fn only_the_first_overlapping_segment_absorbs() {
    let mut s = Shield::new(100.0, 450.0);
    // straddles the columns at x=120 and x=130
    let bullet = Bullet::new(128.0, 445.0, BulletOwner::Enemy);
    assert!(s.resolve_hit(&bullet));
    assert_eq!(s.health(), 55);
    let left = s.segments.iter().find(|seg| seg.x == 120.0 && seg.y == 450.0).unwrap();
    let right = s.segments.iter().find(|seg| seg.x == 130.0 && seg.y == 450.0).unwrap();
    assert_eq!(left.health, 1);
    assert_eq!(right.health, SEGMENT_HEALTH);
}

#[test]
fn bullet_beside_shield_is_not_absorbed() {
    let mut s = Shield::new(100.0, 450.0);
    let bullet = Bullet::new(300.0, 460.0, BulletOwner::Player);
    assert!(!s.resolve_hit(&bullet));
    assert_eq!(s.health(), 56);
}

// ── UFO ───────────────────────────────────────────────────────────────────────

#[test]
fn ufo_starts_parked() {
    let u = Ufo::new(800.0);
    assert!(!u.active);
    assert_eq!(u.x, -UFO_WIDTH);
}

#[test]
fn ufo_spawn_rolls_only_while_parked() {
    let mut u = Ufo::new(800.0);
    let mut rng = ScriptedRandom::new([0.5, 0.001, 0.0]);

    assert!(!u.try_spawn(0.002, &mut rng));
    assert!(u.try_spawn(0.002, &mut rng));
    assert!(u.active);
    assert!(!u.try_spawn(0.002, &mut rng));
    assert_eq!(rng.remaining(), 1, "active saucer must not consume a draw");
}

#[test]
fn ufo_crosses_and_escapes() {
    let mut u = Ufo::new(800.0);
    u.active = true;
    assert!(!u.tick());
    assert_eq!(u.x, -UFO_WIDTH + UFO_SPEED);

    u.x = 799.0;
    assert!(u.tick());
    assert!(!u.active);
    assert_eq!(u.x, -UFO_WIDTH);
}

#[test]
fn parked_ufo_does_not_move() {
    let mut u = Ufo::new(800.0);
    assert!(!u.tick());
    assert_eq!(u.x, -UFO_WIDTH);
}

#[test]
fn ufo_reward_comes_from_table() {
    let u = Ufo::new(800.0);
    let mut rng = ScriptedRandom::new([0.0, 0.3, 0.6, 0.9]);
    let drawn: Vec<u32> = (0..4).map(|_| u.reward_value(&mut rng)).collect();
    assert_eq!(drawn, vec![50, 100, 150, 300]);
}

// ── Game state ────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let original = invaders::new_session(800.0, 600.0).unwrap();
    let mut cloned = original.clone();

    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.formation.enemies.clear();

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.enemies().len(), 55);
}
