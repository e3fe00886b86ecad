use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{Fleet, TargetEngine, Tuning};

#[test]
fn test_bot_vs_bot_duel_completes() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut fleet1 = Fleet::new();
    let mut fleet2 = Fleet::new();
    fleet1.place_all_random(&mut rng).unwrap();
    fleet2.place_all_random(&mut rng).unwrap();

    // one independent engine per board, nothing shared
    let mut e1 = TargetEngine::new(Tuning::DEFAULT);
    let mut e2 = TargetEngine::new(Tuning::DEFAULT);

    let mut turns = 0;
    loop {
        turns += 1;
        let shot = e1.next_shot().unwrap();
        let outcome = fleet2.resolve_shot(shot).unwrap();
        e1.report_outcome(shot, outcome).unwrap();
        if fleet2.all_sunk() {
            assert!(e1.is_fleet_destroyed());
            break;
        }

        let shot = e2.next_shot().unwrap();
        let outcome = fleet1.resolve_shot(shot).unwrap();
        e2.report_outcome(shot, outcome).unwrap();
        if fleet1.all_sunk() {
            assert!(e2.is_fleet_destroyed());
            break;
        }

        if turns > 100 {
            panic!("duel took more turns than cells on a board");
        }
    }
}

#[test]
fn test_identical_setups_mirror_each_other() {
    // both sides see the same layout and run the same deterministic
    // policy, so their shot sequences must be identical
    let mut fleet1 = Fleet::new();
    let mut fleet2 = Fleet::new();
    let mut rng = SmallRng::seed_from_u64(9);
    fleet1.place_all_random(&mut rng).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    fleet2.place_all_random(&mut rng).unwrap();

    let mut e1 = TargetEngine::new(Tuning::DEFAULT);
    let mut e2 = TargetEngine::new(Tuning::DEFAULT);

    for _ in 0..100 {
        if fleet1.all_sunk() {
            break;
        }
        let s1 = e1.next_shot().unwrap();
        let s2 = e2.next_shot().unwrap();
        assert_eq!(s1, s2);
        let o1 = fleet2.resolve_shot(s1).unwrap();
        let o2 = fleet1.resolve_shot(s2).unwrap();
        assert_eq!(o1, o2);
        e1.report_outcome(s1, o1).unwrap();
        e2.report_outcome(s2, o2).unwrap();
    }
    assert!(fleet1.all_sunk() && fleet2.all_sunk());
}
