//! Browser-side smoke tests for the exported JS surface.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use graphlab_wasm::Graph;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn sample() -> Graph {
    let mut g = Graph::new(false, true);
    for id in ["A", "B", "C", "D"] {
        g.js_add_node(Some(id.to_string()), id.to_string(), 0.0, 0.0, JsValue::UNDEFINED)
            .unwrap();
    }
    for (s, t, w) in [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0), ("C", "D", 3.0)] {
        g.js_add_edge(s, t, Some(w), None, None).unwrap();
    }
    g
}

#[wasm_bindgen_test]
fn test_kruskal_record() {
    let g = sample();
    let result = g.js_kruskal().unwrap();
    assert_eq!(field(&result, "algorithm").as_string().unwrap(), "Kruskal");
    assert_eq!(field(&result, "totalWeight").as_f64().unwrap(), 6.0);
}

#[wasm_bindgen_test]
fn test_bfs_record() {
    let g = sample();
    let result = g.js_bfs("A", Some("D".to_string())).unwrap();
    assert_eq!(field(&result, "algorithm").as_string().unwrap(), "BFS");
    assert_eq!(field(&result, "found").as_bool(), Some(true));
    assert_eq!(field(&result, "distance").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn test_unweighted_kruskal_is_an_error() {
    let mut g = Graph::new(false, false);
    g.js_add_node(Some("a".into()), "a".into(), 0.0, 0.0, JsValue::NULL)
        .unwrap();
    assert!(g.js_kruskal().is_err());
}

#[wasm_bindgen_test]
fn test_js_weight_must_be_whole() {
    let mut g = sample();
    assert!(g.js_add_edge("B", "D", Some(-1.0), None, None).is_err());
    assert!(g.js_add_edge("B", "D", Some(2.7), None, None).is_err());
    assert_eq!(g.edge_count(), 4);
}

#[wasm_bindgen_test]
fn test_edge_weight_sentinel() {
    let g = sample();
    assert_eq!(g.js_get_edge_weight("A", "B"), 1.0);
    assert!(g.js_get_edge_weight("A", "D").is_infinite());
}

#[wasm_bindgen_test]
fn test_json_round_trip() {
    let g = sample();
    let json = g.js_to_json().unwrap();
    let mut copy = Graph::default();
    copy.js_from_json(&json).unwrap();
    assert_eq!(copy.node_count(), 4);
    assert_eq!(copy.edge_count(), 4);
    assert_eq!(copy.js_get_neighbors("C").length(), 3);
}
