use arena_core::effects::compute_dodge_bonus_with;
use arena_core::mana::rewards;
use arena_core::{
    AttackDescriptor, AttackScheme, Board, BoardPos, DeathRecord, Direction, Element,
    ForcedSchemeRule, HpRule, ManaGainContext, MatchState, PlayerIndex, ProfileContext,
    RulesConfig, Template, TemplateCatalog, TemplateOracle, UnitState, apply_mana_gain_on_deaths,
    compute_attack_bonus, compute_dodge_bonus, maybe_unlock, resolve_attack_profile,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pos(row: usize, col: usize) -> BoardPos {
    BoardPos::new(row, col).unwrap()
}

fn catalog() -> TemplateCatalog {
    TemplateCatalog::from_templates([
        Template::new("FIRE_SALAMANDER", 3, 2)
            .with_attacks(vec![AttackDescriptor::adjacent(Direction::N)])
            .with_scheme(
                AttackScheme::new("INFERNO").with_attacks(vec![
                    AttackDescriptor::adjacent(Direction::N).with_ranges(&[1, 2]),
                ]),
            )
            .with_forced_scheme(ForcedSchemeRule::new(["FIRE"], "INFERNO"))
            .with_hp_effects(vec![HpRule::at_hp(1).with_attack_bonus(2)].into()),
        Template::new("BIOLITH_WARDEN", 2, 1)
            .with_attacks(vec![AttackDescriptor::adjacent(Direction::N)])
            .with_hp_effects(vec![HpRule::at_hp(1).with_dodge_attempts(1)].into()),
        Template::new("WATER_SPRITE", 1, 1),
    ])
    .unwrap()
}

fn spawn(catalog: &TemplateCatalog, id: &str, owner: PlayerIndex) -> UnitState {
    let template = catalog.require(id).unwrap();
    UnitState::spawn(template, owner, owner.home_facing())
}

#[test]
fn multi_death_turn_grants_mana_and_unlocks_summoning() {
    init_tracing();
    let catalog = catalog();
    let board = Board::with_elements([
        [Element::Fire, Element::Neutral, Element::Water],
        [Element::Earth, Element::Biolith, Element::Earth],
        [Element::Water, Element::Neutral, Element::Fire],
    ]);
    let mut state = MatchState::new(board).with_mana([9, 4]);
    let (p0, p1) = (PlayerIndex::FIRST, PlayerIndex::SECOND);

    // Summon one creature at a time; the lock lifts with the fourth
    let placements = [
        (pos(0, 0), "FIRE_SALAMANDER", p0),
        (pos(2, 2), "WATER_SPRITE", p1),
        (pos(1, 1), "BIOLITH_WARDEN", p0),
        (pos(0, 2), "WATER_SPRITE", p1),
    ];
    let mut unlocks = Vec::new();
    for (cell, id, owner) in placements {
        state.board.place(cell, spawn(&catalog, id, owner)).unwrap();
        unlocks.push(maybe_unlock(Some(&mut state)));
    }
    assert_eq!(unlocks, [false, false, false, true]);

    // The salamander stands on fire terrain and attacks with its forced scheme
    let salamander = state.board.unit_at(pos(0, 0)).unwrap();
    let profile = resolve_attack_profile(
        Some(&state.board),
        catalog.template(&salamander.template_id),
        &ProfileContext::at(pos(0, 0)),
    );
    assert_eq!(profile.scheme_key.as_deref(), Some("INFERNO"));

    // Both sprites die in the same resolution step
    let deaths: Vec<DeathRecord> = [pos(2, 2), pos(0, 2)]
        .into_iter()
        .map(|cell| {
            let unit = state.board.remove(cell).unwrap();
            DeathRecord::from_unit(cell, &unit, &state.board)
        })
        .collect();
    assert_eq!(deaths[0].element, Some(Element::Fire));
    assert_eq!(deaths[1].element, Some(Element::Water));

    // Second player gets one mana per enemy still on the board for the first
    // death and the flat reward for the second
    let scaled = rewards::per_enemy_unit(&state.board, p1);
    assert_eq!(scaled, 2);
    let deaths = vec![deaths[0].clone().with_reward(scaled), deaths[1].clone()];

    let context = ManaGainContext::from_config(&RulesConfig::default()).with_cause("COMBAT");
    let outcome = apply_mana_gain_on_deaths(&mut state, &deaths, &context);
    assert_eq!(outcome.events.len(), 2);
    assert_eq!(outcome.total, 3);
    assert_eq!(state.players[1].mana, 7);
    assert_eq!(state.players[0].mana, 9);
    assert!(outcome.events.iter().all(|event| event.owner == p1));

    // Board is down to two units; the lock stays lifted
    assert!(!maybe_unlock(Some(&mut state)));
    assert!(state.summoning_unlocked);
}

#[test]
fn redelivered_deaths_are_paid_twice() {
    let mut state = MatchState::default().with_mana([2, 0]);
    let death = DeathRecord::new(PlayerIndex::FIRST, pos(1, 0), "WATER_SPRITE");
    let context = ManaGainContext::default();

    let first = apply_mana_gain_on_deaths(&mut state, std::slice::from_ref(&death), &context);
    let second = apply_mana_gain_on_deaths(&mut state, std::slice::from_ref(&death), &context);

    // No deduplication: at-most-once delivery is the caller's job
    assert_eq!(first.total, 1);
    assert_eq!(second.total, 1);
    assert_eq!(state.players[0].mana, 4);
}

#[test]
fn wounded_creatures_gain_bonuses_at_exact_hp() {
    init_tracing();
    let catalog = catalog();
    let salamander_template = catalog.require("FIRE_SALAMANDER").unwrap();
    let warden_template = catalog.require("BIOLITH_WARDEN").unwrap();

    let mut salamander = spawn(&catalog, "FIRE_SALAMANDER", PlayerIndex::FIRST);
    assert_eq!(compute_attack_bonus(Some(&salamander), Some(salamander_template)), None);
    salamander.take_damage(2);
    let bonus = compute_attack_bonus(Some(&salamander), Some(salamander_template)).unwrap();
    assert_eq!((bonus.amount, bonus.hp), (2, 1));

    let mut warden = spawn(&catalog, "BIOLITH_WARDEN", PlayerIndex::SECOND);
    assert!(!warden.dodge.can_dodge());
    warden.take_damage(1);

    let dodge = compute_dodge_bonus(Some(&warden), Some(warden_template)).unwrap();
    assert_eq!(dodge.attempts, 1);
    assert_eq!(dodge.chance, RulesConfig::DEFAULT_DODGE_CHANCE);

    warden.dodge.grant(&dodge);
    assert!(warden.dodge.can_dodge());
    assert!(warden.dodge.consume_attempt());
    assert!(!warden.dodge.consume_attempt());
    assert_eq!(warden.dodge.remaining, Some(0));

    let tuned = compute_dodge_bonus_with(Some(&warden), Some(warden_template), 0.3).unwrap();
    assert_eq!(tuned.chance, 0.3);
}

#[test]
fn unknown_template_resolves_to_default_profile() {
    let catalog = catalog();
    let board = Board::new();

    let profile = resolve_attack_profile(
        Some(&board),
        catalog.template("NOT_A_CARD"),
        &ProfileContext::at(pos(1, 1)),
    );
    assert!(profile.is_default());
    assert!(catalog.require("NOT_A_CARD").is_err());
}
