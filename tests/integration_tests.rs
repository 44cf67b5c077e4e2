//! Integration tests for the topic graph pipeline

use std::collections::HashSet;
use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use medial::dataset::{load_dataset, parse_dataset, Dataset};
use medial::pipeline::{
    attach_scaling, build_ego_graph, explore, rescale_node_sizes, summarize, EgoLookup,
    Exploration, SizeConfig,
};
use medial::types::{Bounds, NodeShape, SizeMethod, Table, TopicRecord};

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write dataset");
    file
}

fn sample_dataset() -> Dataset {
    parse_dataset(
        &json!([
            {"topic": "Life", "stories": 9.2, "writers": 8.1,
             "related_topics": ["Writing", "Self Improvement", "Love"]},
            {"topic": "Writing", "stories": 8.7, "writers": 7.9,
             "related_topics": ["Life", "Poetry", "Self Improvement"]},
            {"topic": "Self Improvement", "stories": 8.3, "writers": 7.2,
             "related_topics": ["Life", "Productivity"]},
            {"topic": "Poetry", "stories": 7.5, "writers": 6.8,
             "related_topics": ["Writing", "Love"]},
            {"topic": "Productivity", "stories": 7.9, "writers": 7.0,
             "related_topics": ["Self Improvement"]},
            {"topic": "Love", "stories": 7.1, "writers": 6.2,
             "related_topics": ["Life", "Poetry"]}
        ])
        .to_string(),
    )
    .expect("Sample dataset is valid")
}

#[test]
fn test_load_dataset_from_file() {
    let file = write_dataset(
        r#"[{"topic": "Life", "stories": 0, "writers": 0, "related_topics": ["Writing"]},
            {"topic": "Writing", "stories": 0, "writers": 0, "related_topics": ["Life"]}]"#,
    );

    let dataset = load_dataset(file.path()).expect("Failed to load dataset");
    assert_eq!(dataset.len(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_dataset("does/not/exist.json").unwrap_err();
    assert!(matches!(err, medial::MedialError::Io(_)));
}

#[test]
fn test_load_dataset_missing_field() {
    let file = write_dataset(r#"[{"topic": "Life", "stories": 0, "writers": 0}]"#);
    let err = load_dataset(file.path()).unwrap_err();
    assert!(err.is_schema());
}

#[test]
fn test_two_topic_example_end_to_end() {
    let dataset = parse_dataset(
        r#"[{"topic": "Life", "stories": 0, "writers": 0, "related_topics": ["Writing"]},
            {"topic": "Writing", "stories": 0, "writers": 0, "related_topics": ["Life"]}]"#,
    )
    .unwrap();

    let graph = build_ego_graph(&dataset, Some("life")).found().unwrap();
    let (payload, scaling) = attach_scaling(graph.edges, Some(graph.nodes), &SizeConfig::default()).unwrap();

    let ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["Life", "Writing"]);
    assert_eq!(payload.edges.len(), 1);
    assert_eq!(payload.edges[0].from, "Life");
    assert_eq!(payload.edges[0].to, "Writing");
    assert_eq!(payload.edges[0].id, "Life__Writing");

    // single-valued columns
    assert_eq!(scaling.node_bounds("stories"), Some(Bounds { min: 0.0, max: 0.0 }));
}

#[test]
fn test_ego_nodes_are_topic_plus_declared_related() {
    let dataset = sample_dataset();

    for topic in dataset.topics() {
        let graph = build_ego_graph(&dataset, Some(topic.name.to_uppercase().as_str()))
            .found()
            .unwrap();

        let ids: HashSet<String> = graph
            .nodes
            .rows
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect();

        let mut expected: HashSet<String> = topic
            .related_topics
            .iter()
            .filter(|r| dataset.get(r).is_some())
            .cloned()
            .collect();
        expected.insert(topic.name.clone());

        assert_eq!(ids, expected, "ego network of {}", topic.name);
    }
}

#[test]
fn test_every_edge_references_a_node() {
    let dataset = sample_dataset();
    let sizes = SizeConfig::default();

    for topic in dataset.topics() {
        let exploration = explore(&dataset, Some(topic.name.as_str()), None, &sizes).unwrap();
        let (payload, related_count) = match exploration {
            Exploration::Found { payload, related_count, .. } => (payload, related_count),
            other => panic!("expected a graph for {}, got {:?}", topic.name, other),
        };
        assert_eq!(related_count, payload.node_count() - 1);

        let ids: HashSet<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), payload.nodes.len(), "node ids are unique");
        for edge in &payload.edges {
            assert!(ids.contains(edge.from.as_str()));
            assert!(ids.contains(edge.to.as_str()));
        }
    }
}

#[test]
fn test_undirected_pairs_are_deduplicated() {
    let dataset = sample_dataset();
    let graph = build_ego_graph(&dataset, Some("life")).found().unwrap();

    let mut pairs = HashSet::new();
    for row in &graph.edges.rows {
        let mut pair = [
            row["from"].as_str().unwrap().to_string(),
            row["to"].as_str().unwrap().to_string(),
        ];
        pair.sort();
        assert!(pairs.insert(pair), "duplicate edge {:?}", row);
    }
    // Life-Writing, Life-Self Improvement, Life-Love, Writing-Self Improvement
    assert_eq!(pairs.len(), 4);
}

#[test]
fn test_pipeline_is_idempotent() {
    let dataset = sample_dataset();
    let sizes = SizeConfig::default();

    let first = explore(&dataset, Some("Self-Improvement"), Some(SizeMethod::Writers), &sizes).unwrap();
    let second = explore(&dataset, Some("self improvement"), Some(SizeMethod::Writers), &sizes).unwrap();

    let (a, b) = match (first, second) {
        (Exploration::Found { payload: a, .. }, Exploration::Found { payload: b, .. }) => (a, b),
        other => panic!("expected two graphs, got {:?}", other),
    };
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_no_selection_and_not_found_are_distinct() {
    let dataset = sample_dataset();

    assert_eq!(build_ego_graph(&dataset, None), EgoLookup::NoSelection);
    assert_eq!(build_ego_graph(&dataset, Some("")), EgoLookup::NoSelection);
    assert_eq!(
        build_ego_graph(&dataset, Some("nonexistent-topic-xyz")),
        EgoLookup::NotFound
    );
}

#[test]
fn test_rescale_by_writers_spans_display_range() {
    let dataset = sample_dataset();
    let sizes = SizeConfig::default();

    let graph = build_ego_graph(&dataset, Some("poetry")).found().unwrap();
    let (payload, scaling) = attach_scaling(graph.edges, Some(graph.nodes), &sizes).unwrap();
    let payload = rescale_node_sizes(payload, &scaling, Some(SizeMethod::Writers), &sizes);

    // Poetry: Writing (7.9), Poetry (6.8), Love (6.2)
    assert_eq!(payload.node("Writing").unwrap().size, sizes.max_size);
    assert_eq!(payload.node("Love").unwrap().size, sizes.min_size);
    let poetry = payload.node("Poetry").unwrap().size;
    assert!(poetry > sizes.min_size && poetry < sizes.max_size);
    assert!(payload.nodes.iter().all(|n| n.shape == NodeShape::Dot));
}

#[test]
fn test_scaler_on_bare_edge_list() {
    let edges = Table::from_rows(vec![
        json!({"from": "a", "to": "b", "weight": 2}).as_object().cloned().unwrap(),
        json!({"from": "c", "to": "a", "weight": 4}).as_object().cloned().unwrap(),
    ]);

    let (payload, scaling) = attach_scaling(edges, None, &SizeConfig::default()).unwrap();

    assert_eq!(payload.node_count(), 3);
    assert_eq!(scaling.edge["weight"], Bounds { min: 2.0, max: 4.0 });
    assert_eq!(payload.edges[1].attributes["weight"], 4);
}

#[test]
fn test_summary_counts_every_topic() {
    let dataset = sample_dataset();
    let table = summarize(&dataset);

    assert_eq!(table.len(), dataset.len());
    assert_eq!(table[0].name, "Life");
    assert_eq!(table[0].stories, 9.2f64.exp().round() as u64);
    assert!(table.windows(2).all(|w| w[0].stories >= w[1].stories));
}

#[test]
fn test_image_urls_make_circular_image_nodes() {
    let dataset = Dataset::new(vec![
        TopicRecord::new("Life", 1.0, 1.0, vec!["Art".to_string()])
            .with_attribute("node_image_url", json!("https://example.com/life.png")),
        TopicRecord::new("Art", 1.0, 1.0, vec![]),
    ]);

    let exploration = explore(&dataset, Some("life"), None, &SizeConfig::default()).unwrap();
    let Exploration::Found { payload, .. } = exploration else {
        panic!("expected a graph");
    };

    let life = payload.node("Life").unwrap();
    assert_eq!(life.shape, NodeShape::CircularImage);
    assert_eq!(life.image.as_deref(), Some("https://example.com/life.png"));
    assert_eq!(payload.node("Art").unwrap().shape, NodeShape::Dot);
}

#[test]
fn test_dataset_id_column_does_not_break_edges() {
    let dataset = parse_dataset(
        r#"[{"topic": "Life", "stories": 1, "writers": 1, "related_topics": ["Writing"], "id": 7, "size": 3},
            {"topic": "Writing", "stories": 2, "writers": 2, "related_topics": ["Life"], "id": 8, "label": "x"}]"#,
    )
    .unwrap();

    let exploration = explore(&dataset, Some("life"), None, &SizeConfig::default()).unwrap();
    let Exploration::Found { payload, .. } = exploration else {
        panic!("expected a graph");
    };

    let ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["Life", "Writing"]);
    for edge in &payload.edges {
        assert!(ids.contains(&edge.from.as_str()), "dangling edge {}", edge.id);
        assert!(ids.contains(&edge.to.as_str()), "dangling edge {}", edge.id);
    }
    assert_eq!(payload.node("Writing").unwrap().label, "Writing");
}
