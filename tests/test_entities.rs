use invaders::entities::*;

use crossterm::style::Color;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(EnemyKind::Squid, EnemyKind::Squid);
    assert_ne!(EnemyKind::Squid, EnemyKind::Octopus);
    assert_eq!(EntityState::Alive, EntityState::Alive);
    assert_ne!(EntityState::Alive, EntityState::Dead);
    assert_eq!(Tier::Easy, Tier::Easy);
    assert_ne!(Tier::Easy, Tier::Deathzone);
    assert_eq!(Screen::Play, Screen::Play);
    assert_ne!(Screen::Menu, Screen::Play);

    // Game-over carries its outcome in the screen value
    assert_eq!(
        Screen::GameOver(Outcome::Victory),
        Screen::GameOver(Outcome::Victory)
    );
    assert_ne!(
        Screen::GameOver(Outcome::Victory),
        Screen::GameOver(Outcome::Defeat)
    );

    // Clone must produce an equal value
    let kind = EnemyKind::Crab;
    assert_eq!(kind.clone(), EnemyKind::Crab);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        screen: Screen::Play,
        tier: Tier::Easy,
        player: Player {
            position: Position { x: 320.0, y: 440.0 },
            lives: 3,
            speed: 4.0,
        },
        player_bullet: Bullet {
            position: Position { x: -1.0, y: -1.0 },
            direction: -1,
            speed: 8.0,
            is_active: false,
            height: 12.0,
        },
        enemies: Vec::new(),
        fleet: Fleet {
            alive_count: 0,
            direction: 1,
            speed: 1.0,
            fire_rate: 1,
            bullets: Vec::new(),
            bullet_count: 0,
            last_drop_ms: 0,
        },
        bunkers: Vec::new(),
        score: 0,
        started_ms: 0,
        last_shot_ms: 0,
        width: 640.0,
        height: 480.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.position.x = 99.0;
    cloned.score = 999;
    cloned.screen = Screen::GameOver(Outcome::Defeat);
    cloned.enemies.push(Enemy {
        position: Position { x: 5.0, y: 5.0 },
        kind: EnemyKind::Squid,
        scale: 0.5,
        state: EntityState::Alive,
    });
    cloned.fleet.bullets.push(Bullet {
        position: Position { x: 1.0, y: 1.0 },
        direction: 1,
        speed: 3.0,
        is_active: true,
        height: 12.0,
    });
    cloned.fleet.bullet_count = 1;

    assert_eq!(original.player.position.x, 320.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.screen, Screen::Play);
    assert!(original.enemies.is_empty());
    assert!(original.fleet.bullets.is_empty());
    assert_eq!(original.fleet.bullet_count, 0);
}

#[test]
fn rect_is_plain_copyable_data() {
    let r = Rect {
        position: Position { x: 10.0, y: 20.0 },
        width: 8.0,
        height: 32.0,
        color: Color::White,
    };
    let copy = r;
    assert_eq!(copy, r); // Copy leaves the original usable
    assert_eq!(copy.position.y, 20.0);
}
