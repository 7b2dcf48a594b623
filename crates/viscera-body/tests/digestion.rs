//! Digestion integration tests — full body, many ticks.

use viscera_body::body::{Body, BodyConfig};
use viscera_body::stomach::StomachConfig;
use viscera_core::diagnostics::{BodyEvent, NullSink, RecordingSink};
use viscera_core::solution::Solution;
use viscera_core::types::ReagentId;

fn meal(pairs: &[(&str, f64)]) -> Solution {
    let mut solution = Solution::new();
    for (id, quantity) in pairs {
        solution.add_reagent(*id, *quantity);
    }
    solution
}

#[test]
fn water_digests_after_twenty_seconds() {
    let mut sink = NullSink;
    let mut body = Body::new(&mut sink);

    assert!(body.ingest(&meal(&[("Water", 30.0)])));
    assert_eq!(body.stomach().pending().len(), 1);
    assert_eq!(body.stomach().solution().current_volume(), 30.0);

    // Two 10-second ticks land exactly on the delay: not strictly past it
    body.tick(10.0);
    body.tick(10.0);
    assert_eq!(body.stomach().pending().len(), 1);
    assert!(body.blood().unwrap().solution().is_empty());

    // The first tick past the delay moves everything at once
    body.tick(0.1);
    assert!(body.stomach().pending().is_empty());
    assert_eq!(body.stomach().solution().current_volume(), 0.0);
    assert_eq!(
        body.blood().unwrap().solution().quantity_of(&ReagentId::from("Water")),
        30.0
    );
}

#[test]
fn overfull_stomach_rejects_wholesale() {
    let mut sink = NullSink;
    let mut body = Body::new(&mut sink);

    assert!(body.ingest(&meal(&[("Nutriment", 90.0)])));
    // 90 + 15 > 100: rejected with no state change
    assert!(!body.ingest(&meal(&[("Water", 15.0)])));
    assert_eq!(body.stomach().solution().current_volume(), 90.0);
    assert_eq!(body.stomach().pending().len(), 1);

    // 90 + 10 == 100: an exact fill is admitted
    assert!(body.ingest(&meal(&[("Water", 10.0)])));
    assert_eq!(body.stomach().solution().current_volume(), 100.0);
}

#[test]
fn body_without_bloodstream_stalls_forever() {
    let mut sink = RecordingSink::new();
    let mut body = Body::without_bloodstream(&mut sink);
    assert_eq!(
        sink.events(),
        &[BodyEvent::CirculationMissing {
            entity: body.entity()
        }]
    );

    assert!(body.ingest(&meal(&[("Water", 30.0)])));
    for _ in 0..1000 {
        body.tick(60.0);
    }
    // Hours of simulated time later, nothing has aged or moved
    assert_eq!(body.stomach().pending().len(), 1);
    assert_eq!(body.stomach().pending()[0].age(), 0.0);
    assert_eq!(body.stomach().solution().current_volume(), 30.0);
    assert!(body.blood().is_none());
}

#[test]
fn split_ticks_digest_on_the_first_strict_crossing() {
    let mut sink = NullSink;
    let config = BodyConfig {
        stomach: StomachConfig {
            max_volume: 100.0,
            digestion_delay: 5.0,
        },
        ..Default::default()
    };
    let mut body = Body::from_config(config, &mut sink).unwrap();

    assert!(body.ingest(&meal(&[("Water", 10.0)])));

    // 2 + 2 + 1 = 5 exactly: still held
    body.tick(2.0);
    body.tick(2.0);
    body.tick(1.0);
    assert_eq!(body.stomach().pending().len(), 1);
    assert!(body.blood().unwrap().solution().is_empty());

    body.tick(0.5);
    assert!(body.stomach().pending().is_empty());
    assert_eq!(
        body.blood().unwrap().solution().quantity_of(&ReagentId::from("Water")),
        10.0
    );
}

#[test]
fn conservation_across_staggered_meals() {
    let mut sink = NullSink;
    let mut body = Body::new(&mut sink);

    assert!(body.ingest(&meal(&[("Water", 20.0), ("Nutriment", 10.0)])));
    body.tick(12.0);
    assert!(body.ingest(&meal(&[("Water", 25.0)])));

    // First meal crosses the delay; second is only 9 seconds old
    body.tick(9.0);
    assert_eq!(body.stomach().pending().len(), 1);
    assert_eq!(body.stomach().solution().current_volume(), 25.0);
    {
        let blood = body.blood().unwrap();
        assert_eq!(blood.solution().quantity_of(&ReagentId::from("Water")), 20.0);
        assert_eq!(
            blood.solution().quantity_of(&ReagentId::from("Nutriment")),
            10.0
        );
    }

    // Second meal crosses at 9 + 12 = 21 > 20
    body.tick(12.0);
    assert!(body.stomach().pending().is_empty());
    assert_eq!(body.stomach().solution().current_volume(), 0.0);

    // Everything ingested is now in the blood, nothing more, nothing less
    let blood = body.blood().unwrap();
    assert_eq!(blood.solution().quantity_of(&ReagentId::from("Water")), 45.0);
    assert_eq!(
        blood.solution().quantity_of(&ReagentId::from("Nutriment")),
        10.0
    );
    assert_eq!(blood.solution().current_volume(), 55.0);
}

#[test]
fn zero_length_ticks_change_nothing() {
    let mut sink = NullSink;
    let mut body = Body::new(&mut sink);
    assert!(body.ingest(&meal(&[("Water", 30.0)])));

    body.tick(19.0);
    for _ in 0..50 {
        body.tick(0.0);
    }
    assert_eq!(body.stomach().pending().len(), 1);
    assert_eq!(body.stomach().pending()[0].age(), 19.0);
    assert!(body.blood().unwrap().solution().is_empty());

    body.tick(1.5);
    assert!(body.stomach().pending().is_empty());
    assert_eq!(
        body.blood().unwrap().solution().quantity_of(&ReagentId::from("Water")),
        30.0
    );
}

#[test]
fn template_config_round_trip_drives_digestion() {
    let json = r#"{
        "stomach": { "max_volume": 40.0, "digestion_delay": 2.0 },
        "bloodstream": { "max_volume": 500.0 }
    }"#;
    let config: BodyConfig = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_ok());

    let mut sink = NullSink;
    let mut body = Body::from_config(config, &mut sink).unwrap();

    assert!(!body.ingest(&meal(&[("Water", 41.0)])));
    assert!(body.ingest(&meal(&[("Water", 40.0)])));
    body.tick(2.5);
    assert_eq!(
        body.blood().unwrap().solution().quantity_of(&ReagentId::from("Water")),
        40.0
    );
}
