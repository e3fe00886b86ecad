use salvo::{Coord, LedgerError, Outcome, ShipKind, TargetEngine, TargetError, Tuning};

fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_first_shot_is_raster_origin() {
    let engine = TargetEngine::new(Tuning::DEFAULT);
    assert_eq!(engine.next_shot().unwrap(), at(0, 0));
}

#[test]
fn test_miss_block_drives_next_shot() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    engine.report_outcome(at(4, 4), Outcome::Miss).unwrap();
    // the 3x3 block around the miss outranks untouched cells; raster
    // order breaks the nine-way tie at its top-left corner
    assert_eq!(engine.next_shot().unwrap(), at(3, 3));
    assert!(engine.is_resolved(at(4, 4)));
}

#[test]
fn test_hunt_mode_follows_the_axis() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    engine.report_outcome(at(2, 2), Outcome::Hit).unwrap();
    engine.report_outcome(at(2, 1), Outcome::Miss).unwrap();
    engine.report_outcome(at(1, 2), Outcome::Miss).unwrap();
    engine.report_outcome(at(3, 2), Outcome::Miss).unwrap();
    // three orthogonal neighbors eliminated; the fourth keeps its boost
    assert_eq!(engine.next_shot().unwrap(), at(2, 3));
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn test_sunk_depresses_surroundings() {
    let t = Tuning::DEFAULT;
    let mut engine = TargetEngine::new(t);
    engine.report_outcome(at(0, 0), Outcome::Hit).unwrap();
    engine
        .report_outcome(at(0, 1), Outcome::Sunk(ShipKind::PatrolBoat))
        .unwrap();
    assert!(!engine.is_fleet_destroyed());
    // (1,0) borders both sunk cells: hit boost then two penalties
    assert!(approx(
        engine.score(at(1, 0)),
        t.baseline + t.hit_boost - 2.0 * t.sink_penalty
    ));
    // (1,1) borders both, no boost
    assert!(approx(engine.score(at(1, 1)), t.baseline - 2.0 * t.sink_penalty));
    // (0,2) and (1,2) border only the terminal cell
    assert!(approx(engine.score(at(0, 2)), t.baseline - t.sink_penalty));
    assert!(approx(engine.score(at(1, 2)), t.baseline - t.sink_penalty));
    // untouched far cell
    assert!(approx(engine.score(at(9, 9)), t.baseline));
}

#[test]
fn test_duplicate_report_fails_without_state_change() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    engine.report_outcome(at(5, 5), Outcome::Miss).unwrap();
    let open_before = engine.open_cells();
    let shot_before = engine.next_shot().unwrap();
    assert_eq!(
        engine.report_outcome(at(5, 5), Outcome::Hit).unwrap_err(),
        LedgerError::DuplicateShot
    );
    assert_eq!(engine.open_cells(), open_before);
    assert_eq!(engine.next_shot().unwrap(), shot_before);
    assert_eq!(engine.shots_fired(), 1);
}

#[test]
fn test_monotonic_resolution() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    let mut open = engine.open_cells();
    assert_eq!(open, 100);
    for _ in 0..30 {
        let shot = engine.next_shot().unwrap();
        assert!(!engine.is_resolved(shot));
        engine.report_outcome(shot, Outcome::Miss).unwrap();
        assert_eq!(engine.open_cells(), open - 1);
        open -= 1;
    }
}

#[test]
fn test_no_cells_remaining_after_full_board() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    for _ in 0..100 {
        let shot = engine.next_shot().unwrap();
        engine.report_outcome(shot, Outcome::Miss).unwrap();
    }
    assert_eq!(engine.next_shot(), Err(TargetError::NoCellsRemaining));
    assert_eq!(engine.open_cells(), 0);
}

#[test]
fn test_fleet_destroyed_after_five_sinks() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    let sinks = [
        (at(0, 0), ShipKind::Carrier),
        (at(2, 0), ShipKind::Battleship),
        (at(4, 0), ShipKind::Destroyer),
        (at(6, 0), ShipKind::Submarine),
        (at(8, 0), ShipKind::PatrolBoat),
    ];
    for (i, (coord, kind)) in sinks.into_iter().enumerate() {
        assert!(!engine.is_fleet_destroyed(), "destroyed after {} sinks", i);
        engine.report_outcome(coord, Outcome::Sunk(kind)).unwrap();
    }
    assert!(engine.is_fleet_destroyed());
}

#[test]
fn test_determinism_across_identical_histories() {
    let outcomes = [
        (at(4, 4), Outcome::Miss),
        (at(3, 3), Outcome::Hit),
        (at(3, 4), Outcome::Hit),
        (at(3, 5), Outcome::Sunk(ShipKind::Destroyer)),
        (at(7, 1), Outcome::Miss),
    ];
    let mut a = TargetEngine::new(Tuning::DEFAULT);
    let mut b = TargetEngine::new(Tuning::DEFAULT);
    for (coord, outcome) in outcomes {
        a.report_outcome(coord, outcome).unwrap();
        b.report_outcome(coord, outcome).unwrap();
        assert_eq!(a.next_shot().unwrap(), b.next_shot().unwrap());
    }
}

#[test]
fn test_state_roundtrip_replays_exactly() {
    let mut engine = TargetEngine::new(Tuning::DEFAULT);
    engine.report_outcome(at(5, 5), Outcome::Hit).unwrap();
    engine.report_outcome(at(5, 6), Outcome::Miss).unwrap();
    engine.report_outcome(at(5, 4), Outcome::Hit).unwrap();
    engine
        .report_outcome(at(5, 3), Outcome::Sunk(ShipKind::Destroyer))
        .unwrap();

    let restored = TargetEngine::from_state(engine.state()).unwrap();
    assert_eq!(restored.open_cells(), engine.open_cells());
    assert_eq!(restored.next_shot().unwrap(), engine.next_shot().unwrap());
    assert_eq!(restored.history(), engine.history());
    assert_eq!(restored.is_fleet_destroyed(), engine.is_fleet_destroyed());
}
