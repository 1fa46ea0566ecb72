use approx::assert_relative_eq;
use petstat::*;

fn official_roster() -> Roster {
    Catalog::from_json(
        r#"{
            "Slime":   { "BaseDamage": 2,   "BaseHealth": 30, "SellAmount": 5 },
            "Fire Fox":{ "BaseDamage": 4.5, "BaseHealth": 12, "SellAmount": 40 },
            "Dragon":  { "BaseDamage": 9,   "BaseHealth": 80, "SellAmount": 900, "Legendary": true },
            "Phoenix": { "BaseDamage": 9,   "BaseHealth": 60, "SellAmount": 700, "Legendary": true }
        }"#,
    )
    .unwrap()
    .to_roster()
}

/// Formula pets are exactly `base * level` at every level.
#[test]
fn test_formula_values_are_linear() {
    let roster = official_roster();
    for entity in &roster {
        let base_damage = entity.curve(StatKind::Damage).unwrap().growth().unwrap();
        let base_health = entity.curve(StatKind::Health).unwrap().growth().unwrap();
        for level in 1..=200 {
            assert_eq!(
                value_at_level(entity, StatKind::Damage, level),
                Some(base_damage * level as f64)
            );
            assert_eq!(
                value_at_level(entity, StatKind::Health, level),
                Some(base_health * level as f64)
            );
        }
    }
}

/// Formula curves never expose a regression model.
#[test]
fn test_formula_never_fits_model() {
    let roster = official_roster();
    for entity in &roster {
        for (_, curve) in entity.curves() {
            assert!(curve.model().is_none());
        }
    }
}

/// The textbook three-point fit.
#[test]
fn test_fit_three_points() {
    let model = fit_linear_model([(1, 10.0), (2, 20.0), (3, 30.0)]).unwrap();
    assert_eq!(model, LinearModel::new(10.0, 0.0));
}

/// Degenerate sample sets have no model.
#[test]
fn test_fit_degenerate() {
    assert!(fit_linear_model([(5, 1.0)]).is_none());
    assert!(fit_linear_model([(5, 1.0), (5, 9.0)]).is_none());
    assert!(fit_linear_model(std::iter::empty()).is_none());
}

/// Sample-based pets project from their fitted line.
#[test]
fn test_sampled_projection() {
    let mut roster = official_roster();
    roster.record_sample("Wolf", StatKind::Damage, 1, 3.0).unwrap();
    roster.record_sample("Wolf", StatKind::Damage, 4, 9.0).unwrap();
    roster.record_sample("Wolf", StatKind::Damage, 8, 17.0).unwrap();

    let wolf = roster.get(&"Wolf".into()).unwrap();
    let model = wolf.curve(StatKind::Damage).unwrap().model().unwrap();
    assert_relative_eq!(model.slope, 2.0, epsilon = 1e-9);
    assert_relative_eq!(model.intercept, 1.0, epsilon = 1e-9);

    let series: Vec<_> = project_series(wolf, StatKind::Damage, LevelRange::new(10, 12))
        .unwrap()
        .collect();
    assert_eq!(series.len(), 3);
    assert_relative_eq!(series[0].1, 21.0, epsilon = 1e-9);
    assert_relative_eq!(series[2].1, 25.0, epsilon = 1e-9);
}

/// Pets without a model are omitted from the projection, never NaN.
#[test]
fn test_projection_omits_unmodelled() {
    let mut roster = official_roster();
    roster.record_sample("Lonely", StatKind::Damage, 3, 12.0).unwrap();
    roster.record_sample("Flat", StatKind::Damage, 2, 4.0).unwrap();
    roster.record_sample("Flat", StatKind::Damage, 2, 6.0).unwrap();

    let series = project_all(&roster, StatKind::Damage, LevelRange::default());
    let names: Vec<_> = series.iter().map(|s| s.entity().as_str()).collect();
    assert_eq!(names, vec!["Dragon", "Fire Fox", "Phoenix", "Slime"]);

    for s in series {
        assert_eq!(s.len(), 20);
        assert!(s.into_iter().all(|(_, v)| v.is_finite()));
    }

    let lonely = roster.get(&"Lonely".into()).unwrap();
    assert!(matches!(
        try_value_at_level(lonely, StatKind::Damage, 3),
        Err(PetError::NoModelAvailable { .. })
    ));
}

/// Catalog pets whose values overflow are left out instead of yielding infinity.
#[test]
fn test_projection_omits_overflowing_catalog_pet() {
    let mut roster = official_roster();
    roster.extend(
        Catalog::from_json(r#"{"Big": {"BaseDamage": 1e308, "BaseHealth": 1}}"#)
            .unwrap()
            .entities(),
    );

    let series = project_all(&roster, StatKind::Damage, LevelRange::new(1, 3));
    assert!(series.iter().all(|s| s.entity().as_str() != "Big"));
    assert!(series
        .into_iter()
        .flatten()
        .all(|(_, value)| value.is_finite()));

    let health = project_all(&roster, StatKind::Health, LevelRange::new(1, 3));
    assert_eq!(health.len(), 5);
}

/// Ranking is stable and descending; name sort is ascending.
#[test]
fn test_rankings() {
    let roster = official_roster();

    let by_damage = rank_by_key(&roster, SortKey::Damage);
    let names: Vec<_> = by_damage.iter().map(EntityId::as_str).collect();
    assert_eq!(names, vec!["Dragon", "Phoenix", "Fire Fox", "Slime"]);

    let by_name = rank_by_key(&roster, SortKey::Name);
    let names: Vec<_> = by_name.iter().map(EntityId::as_str).collect();
    assert_eq!(names, vec!["Dragon", "Fire Fox", "Phoenix", "Slime"]);

    let by_sell = rank_by_key(&roster, SortKey::Sell);
    assert_eq!(by_sell[0].as_str(), "Dragon");
}

/// Equal metrics keep their input order.
#[test]
fn test_rank_by_metric_stable() {
    let entities: Vec<Entity> = (0..10)
        .map(|i| Entity::formula(format!("Pet{}", i), (i % 3) as f64, 1.0))
        .collect();
    let order = rank_by_metric(&entities, |e| e.curve(StatKind::Damage)?.growth());
    let names: Vec<_> = order.iter().map(EntityId::as_str).collect();
    assert_eq!(
        names,
        vec!["Pet2", "Pet5", "Pet8", "Pet1", "Pet4", "Pet7", "Pet0", "Pet3", "Pet6", "Pet9"]
    );
}

/// Sampled and formula pets rank together by growth per level.
#[test]
fn test_rank_mixed_sources() {
    let mut roster = official_roster();
    roster.record_sample("Titan", StatKind::Damage, 1, 0.0).unwrap();
    roster.record_sample("Titan", StatKind::Damage, 2, 12.0).unwrap();

    let order = rank_by_key(&roster, SortKey::Damage);
    assert_eq!(order[0].as_str(), "Titan");

    // Titan has no health curve, so it sorts last by health.
    let order = rank_by_key(&roster, SortKey::Health);
    assert_eq!(order.last().unwrap().as_str(), "Titan");
}

/// Breakdown readings describe where a value came from.
#[test]
fn test_explain_readings() {
    let roster = official_roster();
    let slime = roster.get(&"Slime".into()).unwrap();
    let reading = explain(slime, StatKind::Health, 4).unwrap();
    assert_eq!(reading.value, 120.0);
    assert_eq!(reading.basis, Basis::Formula { base: 30.0 });
    assert!(!reading.is_fitted());
}

/// The full view pipeline: filter, select, tabulate, summarize.
#[test]
fn test_view_pipeline() {
    let roster = official_roster();
    let filters = FilterState::new()
        .with_rarity(RarityFilter::Legendary)
        .with_levels(1, 5);
    let filtered = filters.visible(&roster);
    assert_eq!(filtered.len(), 2);

    let selection = Selection::new().with_pick_at(0, Pick::Pet("Phoenix".into()));
    let charted = selection.visible(&filtered);
    assert_eq!(charted, vec![EntityId::from_str("Phoenix")]);

    let table = ProgressionTable::build(&roster, &charted, filters.level_range);
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[4].cells[0].damage, Some(45.0));
    assert_eq!(table.rows[4].cells[0].health, Some(300.0));

    let best = BestPet::find(&roster, &filtered).unwrap();
    assert_eq!(best.entity.as_str(), "Dragon");
}

/// Filtering everything out leaves an empty table and no best pet.
#[test]
fn test_view_empty() {
    let roster = official_roster();
    let filtered = FilterState::new().with_search("zzz").visible(&roster);
    assert!(filtered.is_empty());
    assert!(ProgressionTable::build(&roster, &filtered, LevelRange::default()).is_empty());
    assert!(BestPet::find(&roster, &filtered).is_none());
}
