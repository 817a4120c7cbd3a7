// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use mapview_viewport::{BoundsConstraint, DEFAULT_PADDING, GeoBounds, Viewport, fit_bounds};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

/// Random cameras around the Swiss bounds, zoomed from far out to close in.
fn cameras(count: usize, seed: u64) -> Vec<Viewport> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| {
            let center = Point::new(2.0 + 12.0 * rng.next_unit(), 43.0 + 8.0 * rng.next_unit());
            let zoom = 2.0 + 12.0 * rng.next_unit();
            Viewport::new(center, zoom, Size::new(800.0, 600.0))
        })
        .collect()
}

fn bench_constrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapview_viewport");
    let constraint = BoundsConstraint::new(GeoBounds::SWITZERLAND);

    group.bench_function("fit_bounds(800x600)", |b| {
        b.iter(|| {
            black_box(fit_bounds(
                black_box(Size::new(800.0, 600.0)),
                &GeoBounds::SWITZERLAND,
                DEFAULT_PADDING,
            ))
        });
    });

    let views = cameras(1_024, 0x5EED_0000_0000_0001);
    group.bench_function("constrain(1024 cameras)", |b| {
        b.iter(|| {
            let zoom_sum: f64 = views.iter().map(|v| constraint.apply(v).zoom).sum();
            black_box(zoom_sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_constrain);
criterion_main!(benches);
