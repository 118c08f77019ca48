//! landmarks — end-to-end demo of the geomatch engine.
//!
//! Seeds the eight-landmark reference catalog, ranks it against a query
//! photographed near the National Mall in Washington DC, persists the results
//! through the CSV sink, and prints a match table.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gm_catalog::{CatalogProvider, sample_catalog};
use gm_core::{GeoPoint, ImageId, SessionId, format_bearing};
use gm_output::{CsvSink, ResultSink, record_search};
use gm_rank::{MockScorer, Ranker};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:     u64   = 42;
const TOP_K:    usize = 5;
const USER_LAT: f64   = 38.8977; // National Mall, Washington DC
const USER_LON: f64   = -77.0365;

fn main() -> Result<()> {
    println!("=== landmarks — geomatch engine demo ===");
    println!("Catalog: 8 landmarks  |  Top-K: {TOP_K}  |  Seed: {SEED}");
    println!();

    // 1. Seed the reference catalog.
    let catalog = sample_catalog()?;
    let candidates = catalog.list()?;
    println!("Seeded {} reference images", candidates.len());

    // 2. Query location (supplied by upload metadata in the full pipeline).
    let user = GeoPoint::new(USER_LAT, USER_LON)?;
    println!("Query location: {user}");
    println!();

    // 3. Rank the catalog against the query.
    let ranker = Ranker::new(MockScorer::new(SEED)).with_top_k(TOP_K);
    let t0 = Instant::now();
    let matches = ranker.rank(Some(user), &candidates)?;
    let elapsed = t0.elapsed();

    // 4. Persist through the CSV sink.
    std::fs::create_dir_all("output/landmarks")?;
    let mut sink = CsvSink::new(Path::new("output/landmarks"))?;
    let query_id = ImageId(candidates.len() as u32); // next free id for the upload
    record_search(
        &mut sink,
        SessionId(0),
        query_id,
        &matches,
        elapsed.as_millis() as u64,
    )?;
    sink.finish()?;

    // 5. Match table.
    println!(
        "{:<4} {:<20} {:<7} {:<12} {:<16} {:<12}",
        "#", "Match", "Conf", "Distance", "Bearing", "From N pole"
    );
    println!("{}", "-".repeat(74));
    for (i, m) in matches.iter().enumerate() {
        let name = catalog.name(m.id).unwrap_or("?");
        let distance = m
            .relative
            .map(|r| format!("{:.0} km", r.distance_km))
            .unwrap_or_else(|| "-".into());
        let bearing = m
            .relative
            .map(|r| format_bearing(r.bearing_deg))
            .unwrap_or_else(|| "-".into());
        let pole = m
            .polar
            .map(|p| format!("{:.0} km", p.north_km))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<4} {:<20} {:<7.3} {:<12} {:<16} {:<12}",
            i + 1,
            name,
            m.confidence,
            distance,
            bearing,
            pole
        );
    }
    println!();
    println!(
        "Ranked {} candidates in {:.3} ms; rows written to output/landmarks/",
        candidates.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
