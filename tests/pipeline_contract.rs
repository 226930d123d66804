//! End-to-end contract tests: catalog query in, serializable ranked
//! result out.

use price_scout::{
    evaluate, Candidate, EvalConfig, EvalStatus, HyphenPolicy, ScoringStrategy,
};

fn candidate(name: &str, price: f64, link: &str) -> Candidate {
    let mut c = Candidate::new(name, Some(price));
    c.metadata
        .insert("link".into(), serde_json::Value::String(link.into()));
    c
}

#[test]
fn catalog_query_end_to_end() {
    let query = "ATIVIDADES PARA PESSOAS COM DEFICIÊNCIA - Kit Bolas Suíças PCD";
    let candidates = vec![
        candidate("Kit Bolas Suíças PCD 65cm", 120.0, "https://ml.example/1"),
        candidate("Bolas Suíças PCD Par Profissional", 99.0, "https://ml.example/2"),
        candidate("Bolas Suíças PCD Premium", 110.0, "https://ml.example/3"),
        candidate("Cadeira Gamer RGB", 950.0, "https://ml.example/4"),
        candidate("Bolas Suíças PCD Importadas", 2500.0, "https://ml.example/5"),
    ];

    let result = evaluate(query, candidates, &EvalConfig::default()).expect("evaluate");

    // Only the segment after the hyphen is classified.
    assert_eq!(result.terms.specific, vec!["bolas", "suíças", "pcd"]);
    assert_eq!(result.terms.generic, vec!["kit"]);

    // The unrelated chair is filtered; everything else survives.
    assert_eq!(result.status, EvalStatus::Success);
    assert_eq!(result.candidates.len(), 4);
    for pair in result.candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for c in &result.candidates {
        assert!((0.0..=1.0).contains(&c.score));
    }

    // The R$2500 import is an outlier against the ~R$100 cluster.
    let stats = result.statistics.expect("statistics");
    assert_eq!(stats.count_total, 4);
    assert_eq!(stats.count_kept, 3);
    assert_eq!(stats.outliers_removed, 1);
    assert!(stats.maximum <= 120.0);
}

#[test]
fn result_serializes_to_flat_json() {
    let candidates = vec![candidate("Bola Suíça 65cm", 89.9, "https://ml.example/1")];
    let result = evaluate("Bola Suíça", candidates, &EvalConfig::default()).expect("evaluate");

    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["status"], "success");
    assert_eq!(json["terms"]["specific"][0], "bola");
    // Candidate metadata is flattened beside name/price/score.
    let first = &json["candidates"][0];
    assert_eq!(first["name"], "Bola Suíça 65cm");
    assert_eq!(first["link"], "https://ml.example/1");
    assert!(first["score"].as_f64().is_some_and(|s| (0.0..=1.0).contains(&s)));
    assert_eq!(json["statistics"]["count_total"], 1);
}

#[test]
fn whole_string_policy_changes_classification() {
    let query = "Linha Fitness - Bola Pilates";
    let last = evaluate(query, vec![], &EvalConfig::default()).expect("evaluate");
    assert_eq!(last.terms.specific, vec!["bola", "pilates"]);

    let config = EvalConfig {
        hyphen_policy: HyphenPolicy::WholeString,
        ..Default::default()
    };
    let whole = evaluate(query, vec![], &config).expect("evaluate");
    assert_eq!(whole.terms.specific, vec!["fitness", "bola", "pilates"]);
    assert_eq!(whole.terms.generic, vec!["linha"]);
}

#[test]
fn strict_strategy_eliminates_partial_matches() {
    let candidates = vec![
        candidate("Bolas Suíças PCD", 100.0, "https://ml.example/1"),
        candidate("Kit Bolas Suíça Profissional", 80.0, "https://ml.example/2"),
    ];
    let config = EvalConfig {
        scoring_strategy: ScoringStrategy::Strict,
        ..Default::default()
    };
    let result = evaluate("Kit Bolas Suíças PCD", candidates, &config).expect("evaluate");

    // The plural mismatch ("suíça" vs "suíças") and missing "pcd" zero
    // out the second candidate; no stemming is applied.
    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.candidates[0].candidate.name, "Bolas Suíças PCD");
    assert!((result.candidates[0].score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn confidence_strategy_ranks_without_eliminating() {
    let candidates = vec![
        candidate("Bolas Suíças PCD", 100.0, "https://ml.example/1"),
        candidate("Produto Qualquer", 80.0, "https://ml.example/2"),
    ];
    let config = EvalConfig {
        scoring_strategy: ScoringStrategy::Confidence,
        min_score: 0.0,
        ..Default::default()
    };
    let result = evaluate("Bolas Suíças PCD", candidates, &config).expect("evaluate");
    assert_eq!(result.candidates.len(), 2);
    assert!(result.candidates.iter().all(|c| c.score >= 0.3));
    assert_eq!(result.candidates[0].candidate.name, "Bolas Suíças PCD");
}

#[test]
fn batch_of_queries_processes_unconditionally() {
    // Batch callers must be able to iterate rows without handling
    // per-row errors; every data-quality outcome is a status.
    let rows = [
        ("Kit Bolas Suíças PCD", vec![candidate("Bolas Suíças PCD", 99.0, "")]),
        ("de para com", vec![candidate("Bolas", 10.0, "")]),
        ("Bola Suíça", vec![]),
        ("Bola Suíça", vec![candidate("Cadeira", 10.0, "")]),
    ];
    let config = EvalConfig::default();
    let statuses: Vec<EvalStatus> = rows
        .into_iter()
        .map(|(query, candidates)| {
            evaluate(query, candidates, &config)
                .expect("only config errors are fatal")
                .status
        })
        .collect();
    assert_eq!(
        statuses,
        vec![
            EvalStatus::Success,
            EvalStatus::QueryEmpty,
            EvalStatus::NoCandidates,
            EvalStatus::NoRelevantCandidates,
        ]
    );
}
