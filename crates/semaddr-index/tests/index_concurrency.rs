//! Concurrency and end-to-end flow over the similarity index.

use std::sync::Arc;
use std::thread;

use semaddr_core::config::QuantizerConfig;
use semaddr_core::pipeline::SemIdPipeline;
use semaddr_core::stubs::HashEmbedding;
use semaddr_core::types::SemId;
use semaddr_index::{DistanceQuery, Registrar, RegistrationRequest, SimilarityIndex};
use semaddr_ledger::{Address, CodeHash};

fn addr(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn concurrent_writers_lose_no_updates() {
    init_tracing();
    let index = Arc::new(SimilarityIndex::new());
    let writers = 8;
    let per_writer = 200u32;

    let handles: Vec<_> = (0..writers)
        .map(|w| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for i in 0..per_writer {
                    // Disjoint identifier ranges per writer.
                    let value = (u32::from(w) << 16) | i;
                    let semid = SemId::new(value).unwrap();
                    index.register(semid, addr(w)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(index.len(), usize::from(writers) * per_writer as usize);
    // A lookup after registration completion observes the record.
    assert_eq!(
        index.lookup_exact(SemId::new(0x0300C7).unwrap()),
        Some(addr(3))
    );
}

#[test]
fn readers_run_against_consistent_snapshots() {
    init_tracing();
    let index = Arc::new(SimilarityIndex::new());
    let stop_value = 0x00FFFF;

    let writer = {
        let index = Arc::clone(&index);
        thread::spawn(move || {
            for value in 0..=stop_value {
                index.register(SemId::new(value).unwrap(), addr(1)).unwrap();
            }
        })
    };

    let reader = {
        let index = Arc::clone(&index);
        thread::spawn(move || {
            let query = DistanceQuery::new(SemId::new(0).unwrap())
                .with_radius(24)
                .with_limit(usize::MAX);
            let mut last_len = 0;
            while last_len < 1000 {
                let hits = index.radius_query(&query).unwrap();
                // Snapshot consistency: results are ordered and never
                // shrink while the writer only appends.
                assert!(hits.len() >= last_len);
                for pair in hits.windows(2) {
                    assert!(
                        (pair[0].distance, pair[0].sequence)
                            <= (pair[1].distance, pair[1].sequence)
                    );
                }
                last_len = hits.len();
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}

#[test]
fn text_to_address_round_trip_is_reproducible_across_parties() {
    init_tracing();
    // Two independently constructed stacks with the same configuration must
    // agree on the identifier and the address for the same text.
    let config = QuantizerConfig::default();
    let deployer = addr(0x42);
    let code_hash = CodeHash::of_code(&[0x60, 0x80, 0x60, 0x40]);

    let build = || {
        let pipeline =
            SemIdPipeline::new(HashEmbedding::new(config.dimension), &config).unwrap();
        let index = SimilarityIndex::new();
        (pipeline, index)
    };

    let (pipeline_a, index_a) = build();
    let (pipeline_b, index_b) = build();
    let registrar_a = Registrar::new(&pipeline_a, &index_a, deployer, code_hash);
    let registrar_b = Registrar::new(&pipeline_b, &index_b, deployer, code_hash);

    let request = RegistrationRequest::Text("shared knowledge, no coordination".to_string());
    let (semid_a, address_a, _) = registrar_a.register_one(&request).unwrap();
    let (semid_b, address_b, _) = registrar_b.register_one(&request).unwrap();

    assert_eq!(semid_a, semid_b);
    assert_eq!(address_a, address_b);

    // And each party can find the other's record by a nearby identifier.
    let nearby = SemId::new(semid_a.as_u32() ^ 0b101).unwrap();
    let hits = index_b
        .radius_query(&DistanceQuery::new(nearby).with_radius(2))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].semid, semid_a);
    assert_eq!(hits[0].address, address_a);
}
