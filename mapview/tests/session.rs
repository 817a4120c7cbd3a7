// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview session behavior: loading, resizing, and interaction updates.

use kurbo::{Point, Size};
use mapview::MapPreview;
use mapview::coloring::GreedyRule;
use mapview::layers::{LayerId, PreviewOptions, PreviewStyle};
use mapview::topology::{ShapeKind, Topology, TopologyError};
use mapview::viewport::{GeoBounds, Interpolator, Transition, Viewport};

const SHAPES: &str = include_str!("../../mapview_topology/tests/data/three_cantons.topo.json");
const CITIES: &str = include_str!("../../mapview_topology/tests/data/cities.topo.json");

fn sized_preview() -> MapPreview {
    let mut preview = MapPreview::default();
    preview.resize(Size::new(800.0, 600.0));
    preview
}

#[test]
fn loading_derives_features_and_color_index() {
    let mut preview = MapPreview::default();
    preview.load_topology_json(SHAPES).unwrap();

    assert_eq!(preview.features().cantons.as_ref().unwrap().len(), 3);
    assert_eq!(preview.color_index().unwrap().as_slice(), &[0, 1, 0]);

    let layers = preview.layers(&PreviewOptions::default(), &PreviewStyle::default());
    let ids: Vec<_> = layers.iter().map(|l| l.id).collect();
    assert_eq!(ids, [LayerId::Country, LayerId::Cantons, LayerId::Lakes]);
}

#[test]
fn max_plus_one_rule_is_selectable() {
    let mut preview = MapPreview::default().with_rule(GreedyRule::MaxPlusOne);
    preview.load_topology_json(SHAPES).unwrap();
    assert_eq!(preview.color_index().unwrap().as_slice(), &[0, 1, 2]);
}

#[test]
fn failed_load_keeps_previous_derivation() {
    let mut preview = MapPreview::default();
    preview.load_topology_json(SHAPES).unwrap();

    let err = preview.load_topology_json("{ truncated").unwrap_err();
    assert!(matches!(err, TopologyError::Json(_)));

    let broken = r#"{
        "type": "Topology",
        "arcs": [[[0, 0], [1, 1]]],
        "objects": {"cantons": {"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "arcs": [[7]]}
        ]}}
    }"#;
    let err = preview.load_topology_json(broken).unwrap_err();
    assert!(matches!(err, TopologyError::ArcOutOfRange { arc: 7, .. }));

    assert_eq!(preview.features().cantons.as_ref().unwrap().len(), 3);
    assert!(preview.features().lakes.is_some());
    assert_eq!(preview.color_index().unwrap().as_slice(), &[0, 1, 0]);
}

#[test]
fn loading_without_cantons_drops_the_color_index() {
    let mut preview = MapPreview::default();
    preview.load_topology_json(SHAPES).unwrap();
    preview
        .load_topology_json(r#"{"type": "Topology", "arcs": [], "objects": {}}"#)
        .unwrap();
    assert!(preview.features().is_empty());
    assert!(preview.color_index().is_none());
}

#[test]
fn city_labels_feed_the_label_layer() {
    let mut preview = MapPreview::default();
    preview.load_topology_json(SHAPES).unwrap();
    preview
        .load_city_labels(&Topology::from_json(CITIES).unwrap())
        .unwrap();
    assert_eq!(preview.city().unwrap().len(), 3);

    let options = PreviewOptions {
        with_name: true,
        highlighted: Some(ShapeKind::Cantons),
        ..PreviewOptions::default()
    };
    let layers = preview.layers(&options, &PreviewStyle::default());
    let ids: Vec<_> = layers.iter().map(|l| l.id).collect();
    assert_eq!(
        ids,
        [
            LayerId::Country,
            LayerId::Cantons,
            LayerId::Lakes,
            LayerId::City,
            LayerId::Highlight
        ]
    );
}

#[test]
fn resize_fits_the_bounds() {
    let preview = sized_preview();
    let v = preview.viewport();
    assert_eq!((v.width, v.height), (800.0, 600.0));
    assert!(v.zoom > 6.0 && v.zoom < 7.5, "zoom {}", v.zoom);
    assert!(GeoBounds::SWITZERLAND.contains(v.center()));
    assert!(v.transition.is_none());
    // Limits and tilt are carried over.
    assert_eq!((v.min_zoom, v.max_zoom), (2.0, 16.0));
    assert_eq!((v.pitch, v.bearing), (0.0, 0.0));
}

#[test]
fn transitions_pass_through_until_settled() {
    let mut preview = sized_preview();
    let fitted_zoom = preview.viewport().zoom;

    let far = Viewport {
        transition: Transition::new(300.0, Interpolator::FlyTo),
        ..preview.viewport().with_center(Point::new(20.0, 60.0)).with_zoom(3.0)
    };

    let during = *preview.view_state_changed(far, true);
    assert_eq!(during, far);

    let settled = *preview.view_state_changed(far, false);
    assert!(settled.zoom >= fitted_zoom - 1e-9);
    assert!(settled.transition.is_none());
    assert!(GeoBounds::SWITZERLAND.inflate(0.5).contains(settled.center()));
}

#[test]
fn settled_view_inside_the_bounds_is_kept() {
    let mut preview = sized_preview();
    let inside = preview.viewport().with_zoom(9.0).with_center(Point::new(8.0, 46.9));
    let settled = *preview.view_state_changed(inside, false);
    assert!((settled.longitude - 8.0).abs() < 1e-9);
    assert!((settled.latitude - 46.9).abs() < 1e-9);
    assert_eq!(settled.zoom, 9.0);
}
