//! Integration tests for the cutoff trend flow.
//!
//! These tests verify the end-to-end flow:
//! 1. A dataset is loaded from a `CutoffSource` and normalized
//! 2. Facets are selected one by one, each step narrowing the next options
//! 3. The single-selection trend view is derived
//! 4. Selections are pinned, aligned and unpinned through a `ComparisonStore`
//!
//! Uses in-memory adapters to test the flow without external dependencies.

use serde_json::{json, Value};
use std::sync::Arc;

use cutoff_trends::adapters::{InMemoryComparisonStore, InMemoryCutoffSource};
use cutoff_trends::application::{
    AddComparisonCommand, AddComparisonHandler, CompareEntriesHandler, GetFacetOptionsHandler,
    GetFacetOptionsQuery, GetRoundTrendHandler, GetRoundTrendQuery, LoadDatasetHandler,
    RemoveComparisonCommand, RemoveComparisonHandler, ResetComparisonHandler, SelectFacetCommand,
    SelectFacetHandler,
};
use cutoff_trends::domain::comparison::ComparisonRejected;
use cutoff_trends::domain::cutoff::CutoffDataset;
use cutoff_trends::domain::facets::{FacetChange, FilterState};
use cutoff_trends::domain::foundation::Facet;
use cutoff_trends::ports::ComparisonStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn row(
    institute: &str,
    program: &str,
    category: &str,
    round: Value,
    opening: Value,
    closing: Value,
) -> Value {
    json!({
        "Institute": institute,
        "College Type": "NIT",
        "Academic Program Name": program,
        "Quota": "OS",
        "Category": category,
        "Gender": "Gender-Neutral",
        "Round": round,
        "Opening Rank": opening,
        "Closing Rank": closing
    })
}

const TRICHY: &str = "National Institute of Technology, Tiruchirappalli";
const WARANGAL: &str = "National Institute of Technology, Warangal";
const CSE: &str = "Computer Science and Engineering (4 Years, Bachelor of Technology)";
const ECE: &str = "Electronics and Communication Engineering (4 Years, Bachelor of Technology)";

fn source() -> InMemoryCutoffSource {
    InMemoryCutoffSource::from_json(json!([
        row(TRICHY, CSE, "OPEN", json!(1), json!(1200), json!(2000)),
        row(TRICHY, CSE, "OPEN", json!(2), json!(1300), json!(2200)),
        row(TRICHY, CSE, "OPEN", json!(2), json!(9999), json!(9999)),
        row(TRICHY, ECE, "OPEN", json!(2), json!("2500"), json!("3800")),
        row(TRICHY, ECE, "OPEN", json!(3), json!("2600"), json!("")),
        row(TRICHY, ECE, "SC", json!(1), json!(8000), json!(9000)),
        row(WARANGAL, CSE, "OPEN", json!(4), json!(0), json!(1500)),
        row(WARANGAL, CSE, "OPEN", json!(5), json!(900), json!(1650)),
        row(WARANGAL, ECE, "OPEN", json!(null), json!(1), json!(2)),
    ]))
    .unwrap()
}

async fn load() -> Arc<CutoffDataset> {
    LoadDatasetHandler::new(Arc::new(source()))
        .handle()
        .await
        .unwrap()
}

fn full_state(institute: &str, program: &str, category: &str) -> FilterState {
    FilterState::from_selections([
        (Facet::CollegeType, "NIT"),
        (Facet::Institute, institute),
        (Facet::Program, program),
        (Facet::Quota, "OS"),
        (Facet::Category, category),
        (Facet::Gender, "Gender-Neutral"),
    ])
}

// =============================================================================
// Ingestion
// =============================================================================

#[tokio::test]
async fn rows_without_round_are_dropped_at_load() {
    let dataset = load().await;

    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.dropped_rows(), 1);
}

// =============================================================================
// Cascading selection
// =============================================================================

#[tokio::test]
async fn selecting_down_the_chain_narrows_options() {
    let dataset = load().await;
    let select = SelectFacetHandler::new(dataset.clone());

    let step = select.handle(SelectFacetCommand {
        state: FilterState::new(),
        change: FacetChange::Select {
            facet: Facet::CollegeType,
            value: "NIT".into(),
        },
    });
    assert_eq!(step.next_facet, Some(Facet::Institute));
    assert_eq!(step.next_options, vec![TRICHY, WARANGAL]);

    let step = select.handle(SelectFacetCommand {
        state: step.state,
        change: FacetChange::Select {
            facet: Facet::Institute,
            value: WARANGAL.into(),
        },
    });
    assert_eq!(step.next_facet, Some(Facet::Program));
    assert_eq!(step.next_options, vec![CSE]);

    let step = select.handle(SelectFacetCommand {
        state: step.state.select(Facet::Program, ECE),
        change: FacetChange::Select {
            facet: Facet::Institute,
            value: TRICHY.into(),
        },
    });
    assert_eq!(step.state.get(Facet::Program), None);
    assert_eq!(step.next_options, vec![CSE, ECE]);

    let options = GetFacetOptionsHandler::new(dataset).handle(GetFacetOptionsQuery {
        state: step.state.select(Facet::Program, ECE),
        facet: None,
    });
    assert_eq!(options.options(Facet::Category), ["OPEN", "SC"]);
}

// =============================================================================
// Single-selection trend
// =============================================================================

#[tokio::test]
async fn trend_view_uses_first_record_per_round() {
    let dataset = load().await;

    let view = GetRoundTrendHandler::new(dataset).handle(GetRoundTrendQuery {
        state: full_state(TRICHY, CSE, "OPEN"),
    });

    assert_eq!(view.matched_records, 3);
    assert!(view.has_trend);
    let delta = view.delta.unwrap();
    assert_eq!((delta.first_round, delta.last_round), (1, 2));
    assert_eq!(delta.opening.diff(), Some(-100));
    assert_eq!(delta.opening.percent(), Some(-8.3));
    assert_eq!(delta.closing.percent(), Some(-10.0));
}

#[tokio::test]
async fn zero_first_rank_makes_delta_unavailable() {
    let dataset = load().await;

    let view = GetRoundTrendHandler::new(dataset).handle(GetRoundTrendQuery {
        state: full_state(WARANGAL, CSE, "OPEN"),
    });

    let delta = view.delta.unwrap();
    assert!(!delta.opening.is_available());
    assert_eq!(delta.closing.diff(), Some(-150));
    assert_eq!(delta.closing.percent(), Some(-10.0));
}

#[tokio::test]
async fn single_round_selection_has_no_trend() {
    let dataset = load().await;

    let view = GetRoundTrendHandler::new(dataset).handle(GetRoundTrendQuery {
        state: full_state(TRICHY, ECE, "SC"),
    });

    assert_eq!(view.series.len(), 1);
    assert!(!view.has_trend);
}

// =============================================================================
// Comparison
// =============================================================================

#[tokio::test]
async fn comparison_lifecycle() {
    let dataset = load().await;
    let store = Arc::new(InMemoryComparisonStore::new(8));
    let add = AddComparisonHandler::new(dataset.clone(), store.clone());
    let compare = CompareEntriesHandler::new(store.clone());

    let cse = add
        .handle(AddComparisonCommand {
            state: full_state(TRICHY, CSE, "OPEN"),
        })
        .unwrap();
    let ece = add
        .handle(AddComparisonCommand {
            state: full_state(TRICHY, ECE, "OPEN"),
        })
        .unwrap();
    assert_eq!(cse.display_name, "National Institute of Technology - Computer Science and Engineering");
    assert_eq!((cse.color_index, ece.color_index), (0, 1));

    let duplicate = add.handle(AddComparisonCommand {
        state: full_state(TRICHY, CSE, "OPEN"),
    });
    assert!(matches!(duplicate, Err(ComparisonRejected::DuplicateEntry { .. })));

    let too_short = add.handle(AddComparisonCommand {
        state: full_state(TRICHY, ECE, "SC"),
    });
    assert!(matches!(too_short, Err(ComparisonRejected::InsufficientRounds { found: 1, .. })));

    // Rounds {1,2} and {2,3}: three rows, round 2 shared.
    let view = compare.handle();
    assert!(view.active);
    let rounds: Vec<u32> = view.rows.iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![1, 2, 3]);
    let cse_col = &view.columns[0];
    let ece_col = &view.columns[1];
    assert!(view.rows[0].has_column(cse_col) && !view.rows[0].has_column(ece_col));
    assert!(view.rows[1].has_column(cse_col) && view.rows[1].has_column(ece_col));
    assert!(!view.rows[2].has_column(cse_col) && view.rows[2].has_column(ece_col));
    assert_eq!(view.rows[2].opening(ece_col), Some(2600));
    assert_eq!(view.rows[2].closing(ece_col), None);

    let ece_delta = view.deltas[1].delta.unwrap();
    assert_eq!(ece_delta.opening.percent(), Some(-4.0));
    assert!(!ece_delta.closing.is_available());

    let removed = RemoveComparisonHandler::new(store.clone())
        .handle(RemoveComparisonCommand { key: cse.key });
    assert!(removed.removed.is_some());
    assert!(removed.active);
    assert_eq!(compare.handle().rows.len(), 2);

    ResetComparisonHandler::new(store.clone()).handle();
    assert!(!store.is_active());
    assert!(!compare.handle().active);
}

#[tokio::test]
async fn shared_program_label_yields_readable_example_entry() {
    let source = InMemoryCutoffSource::from_json(json!([
        {
            "Institute": "X", "College Type": "IIT", "Academic Program Name": "P (4yr)",
            "Quota": "AI", "Category": "OPEN", "Gender": "Gender-Neutral",
            "Round": 1, "Opening Rank": 100, "Closing Rank": 200
        },
        {
            "Institute": "X", "College Type": "IIT", "Academic Program Name": "P (4yr)",
            "Quota": "AI", "Category": "OPEN", "Gender": "Gender-Neutral",
            "Round": 2, "Opening Rank": 90, "Closing Rank": 210
        }
    ]))
    .unwrap();
    let dataset = LoadDatasetHandler::new(Arc::new(source)).handle().await.unwrap();
    let store = Arc::new(InMemoryComparisonStore::default());
    let state = FilterState::from_selections([
        (Facet::CollegeType, "IIT"),
        (Facet::Institute, "X"),
        (Facet::Program, "P (4yr)"),
        (Facet::Quota, "AI"),
        (Facet::Category, "OPEN"),
        (Facet::Gender, "Gender-Neutral"),
    ]);

    let entry = AddComparisonHandler::new(dataset, store)
        .handle(AddComparisonCommand { state })
        .unwrap();

    assert_eq!(entry.display_name, "X - P");
    assert_eq!(entry.short_name, "P");
    assert_eq!(entry.key.as_str(), "IIT|X|P (4yr)|AI|OPEN|Gender-Neutral");
}

#[tokio::test]
async fn concurrent_adds_of_one_selection_pin_it_once() {
    let dataset = load().await;
    let store = Arc::new(InMemoryComparisonStore::default());
    let add = Arc::new(AddComparisonHandler::new(dataset, store.clone()));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let add = Arc::clone(&add);
            tokio::spawn(async move {
                add.handle(AddComparisonCommand {
                    state: full_state(TRICHY, CSE, "OPEN"),
                })
                .is_ok()
            })
        })
        .collect();

    let mut added = 0;
    for task in tasks {
        if task.await.unwrap() {
            added += 1;
        }
    }

    assert_eq!(added, 1);
    assert_eq!(store.count(), 1);
}
