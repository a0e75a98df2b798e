use game_core::{
    AttackTables, BattleOutcome, GameConfig, GameSession, GameState, InputEvent, Phase,
    ScriptedRng, StepOutcome, Turn,
};

/// Session already in `Battle` with the stock stats and the given HP values.
fn battle(player_hp: u32, boss_hp: u32, rng: ScriptedRng) -> GameSession<ScriptedRng> {
    let config = GameConfig::default();
    let mut state = GameState::from_config("Aria", &config)
        .unwrap()
        .with_phase(Phase::Battle)
        .with_turn(Turn::Player);
    state.player = state.player.with_hp(player_hp);
    state.boss = state.boss.with_hp(boss_hp);

    let attacks = AttackTables::from_config(&config).unwrap();
    GameSession::from_parts(state, attacks, rng)
}

fn combat(outcome: StepOutcome) -> (game_core::TurnReport, Phase) {
    match outcome {
        StepOutcome::Combat { report, phase } => (report, phase),
        other => panic!("expected a combat step, got {other:?}"),
    }
}

#[test]
fn boss_counter_attack_can_end_the_game_in_one_input() {
    // Sword Slash (50 - 35 = 15) leaves the boss standing,
    // Claw Swipe (30 - 25 = 5) finishes the player.
    let rng = ScriptedRng::default().pick(0).roll(100).pick(0).roll(100);
    let mut session = battle(1, 700, rng);

    let (report, phase) = combat(session.handle(InputEvent::Attack));

    assert_eq!(report.outcome, BattleOutcome::Lose);
    assert_eq!(phase, Phase::Lose);
    assert_eq!(report.strikes.len(), 2);
    assert_eq!(report.strikes[0].defender_hp, 685);
    assert_eq!(report.strikes[1].attack_name, "Claw Swipe");
    assert_eq!(session.snapshot().player.hp, 0);
    assert_eq!(session.phase(), Phase::Lose);
}

#[test]
fn killing_blow_skips_the_counter_attack() {
    let rng = ScriptedRng::default().pick(0).roll(100).pick(0).roll(100);
    let mut session = battle(300, 1, rng);

    let (report, phase) = combat(session.handle(InputEvent::Attack));

    assert_eq!(report.outcome, BattleOutcome::Win);
    assert_eq!(phase, Phase::Win);
    assert_eq!(report.strikes.len(), 1);
    assert_eq!(report.turn, Turn::Boss);

    let state = session.state();
    assert_eq!(state.boss.current_hp(), 0);
    assert_eq!(state.player.current_hp(), 300);
    assert_eq!(state.turn, Turn::Boss);
    assert_eq!(session.rng().consumed(), 2);
}

#[test]
fn critical_hit_doubles_base_damage_before_defense() {
    // Lightning Strike crits: 60 * 2 - 35 = 85. Fire Breath without crit: 50 - 25 = 25.
    let rng = ScriptedRng::default().pick(2).roll(20).pick(2).roll(11);
    let mut session = battle(300, 700, rng);

    let (report, phase) = combat(session.handle(InputEvent::Attack));

    assert_eq!(phase, Phase::Battle);
    assert_eq!(report.outcome, BattleOutcome::Continue);
    assert_eq!(report.turn, Turn::Player);

    let [player_strike, boss_strike] = [&report.strikes[0], &report.strikes[1]];
    assert!(player_strike.roll.critical);
    assert_eq!(player_strike.roll.damage, 85);
    assert!(!boss_strike.roll.critical);
    assert_eq!(boss_strike.roll.damage, 25);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.boss.hp, 615);
    assert_eq!(snapshot.player.hp, 275);
    assert_eq!(
        snapshot.player.summary,
        "Aria (HP: 275/300, Atk: 60, Def: 25)"
    );
}

#[test]
fn boss_critical_doubles_fire_breath() {
    // Sword Slash: 50 - 35 = 15. Fire Breath on the boss's 10% edge: 50 * 2 - 25 = 75.
    let rng = ScriptedRng::default().pick(0).roll(100).pick(2).roll(10);
    let mut session = battle(300, 700, rng);

    let (report, _) = combat(session.handle(InputEvent::Attack));

    let boss_strike = &report.strikes[1];
    assert_eq!(boss_strike.attack_name, "Fire Breath");
    assert!(boss_strike.roll.critical);
    assert_eq!(boss_strike.roll.damage, 75);
    assert_eq!(
        boss_strike.critical_notice().as_deref(),
        Some("Boss landed a CRITICAL HIT!")
    );
    assert_eq!(session.state().player.current_hp(), 225);
}

#[test]
fn fully_blocked_attack_leaves_health_untouched() {
    // Tail Whip (25) against defense 25 deals nothing.
    let rng = ScriptedRng::default().pick(1).roll(100).pick(1).roll(100);
    let mut session = battle(300, 700, rng);

    let (report, _) = combat(session.handle(InputEvent::Attack));

    assert_eq!(report.strikes[1].attack_name, "Tail Whip");
    assert_eq!(report.strikes[1].roll.damage, 0);
    assert_eq!(session.state().player.current_hp(), 300);
}

#[test]
fn advance_during_battle_is_ignored() {
    let mut session = battle(300, 700, ScriptedRng::default());
    let before = session.state().clone();

    assert_eq!(session.handle(InputEvent::Advance), StepOutcome::Ignored);
    assert_eq!(session.state(), &before);
}

#[test]
fn terminal_screens_only_accept_exit() {
    let rng = ScriptedRng::default().pick(0).roll(100);
    let mut session = battle(300, 1, rng);
    session.handle(InputEvent::Attack);
    assert_eq!(session.phase(), Phase::Win);

    let before = session.state().clone();
    assert_eq!(session.handle(InputEvent::Attack), StepOutcome::Ignored);
    assert_eq!(session.state(), &before);

    assert_eq!(session.handle(InputEvent::Advance), StepOutcome::Exit);
    assert!(session.is_finished());
}

#[test]
fn strike_messages_read_like_a_combat_log() {
    let rng = ScriptedRng::default().pick(0).roll(1).pick(2).roll(100);
    let mut session = battle(300, 700, rng);

    let (report, _) = combat(session.handle(InputEvent::Attack));
    let lines: Vec<String> = report
        .strikes
        .iter()
        .flat_map(|s| s.critical_notice().into_iter().chain([s.describe()]))
        .collect();

    assert_eq!(
        lines,
        [
            "Aria landed a CRITICAL HIT!",
            "Aria used Sword Slash! It dealt 65 damage.",
            "Boss used Fire Breath! It dealt 25 damage.",
        ]
    );
}
