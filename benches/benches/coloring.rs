// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mapview_coloring::{GreedyRule, RegionAdjacency, assign_colors_with};
use mapview_topology::{GeometryObject, Shape, shared_arc_neighbors};

/// `n * n` square cells sharing their edges, as polygon members.
///
/// Horizontal edge `(r, c)` is arc `r * n + c`; vertical edge `(r, c)` is
/// arc `(n + 1) * n + r * (n + 1) + c`.
fn grid_members(n: i64) -> Vec<GeometryObject> {
    let horizontal = |r: i64, c: i64| r * n + c;
    let vertical = |r: i64, c: i64| (n + 1) * n + r * (n + 1) + c;
    let mut members = Vec::with_capacity((n * n) as usize);
    for r in 0..n {
        for c in 0..n {
            let ring = vec![
                horizontal(r, c),
                vertical(r, c + 1),
                !horizontal(r + 1, c),
                !vertical(r, c),
            ];
            members.push(GeometryObject {
                shape: Shape::Polygon { arcs: vec![ring] },
                id: None,
                properties: None,
            });
        }
    }
    members
}

fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapview_coloring");
    group.sample_size(50);

    for &n in &[8_i64, 32, 128] {
        let members = grid_members(n);
        group.bench_function(format!("shared_arc_neighbors(grid={n}x{n})"), |b| {
            b.iter(|| black_box(shared_arc_neighbors(black_box(&members))));
        });

        let adjacency: RegionAdjacency = shared_arc_neighbors(&members);
        let regions = members.len();
        for rule in [GreedyRule::FirstFit, GreedyRule::MaxPlusOne] {
            group.bench_function(format!("assign_colors({rule:?},grid={n}x{n})"), |b| {
                b.iter(|| black_box(assign_colors_with(black_box(&adjacency), regions, rule)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_coloring);
criterion_main!(benches);
