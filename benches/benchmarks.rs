/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use atoms_bridge::atoms::Vector3D;
use atoms_bridge::system::names;
use atoms_bridge::utils::LengthUnit;
use atoms_bridge::{to_abstract, to_external, AbstractAtom, AbstractSystem, Species};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn supercell(repeat: usize) -> AbstractSystem {
    let a = 4.2;
    let mut atoms = Vec::with_capacity(2 * repeat.pow(3));
    for i in 0..repeat {
        for j in 0..repeat {
            for k in 0..repeat {
                let origin = Vector3D::new(i as f64, j as f64, k as f64) * a;
                atoms.push(
                    AbstractAtom::new(Species::new(12), origin)
                        .with_property(names::VELOCITY, Vector3D::new(0.001, 0.0, -0.001))
                        .with_property(names::CHARGE, 1.2),
                );
                atoms.push(
                    AbstractAtom::new(Species::new(8), origin + Vector3D::new(0.5 * a, 0.0, 0.0))
                        .with_property(names::VELOCITY, Vector3D::new(0.0, 0.002, 0.0))
                        .with_property(names::CHARGE, -1.2),
                );
            }
        }
    }
    let edge = a * repeat as f64;
    let lattice = [[edge, 0.0, 0.0], [0.0, edge, 0.0], [0.0, 0.0, edge]];
    AbstractSystem::periodic(atoms, lattice, LengthUnit::Bohr)
}

fn conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structure Conversion");

    for repeat in [4, 8, 16] {
        let system = supercell(repeat);
        let external = to_external(&system).unwrap();

        group.bench_with_input(BenchmarkId::new("to_external", system.len()), &system, |b, system| {
            b.iter(|| black_box(to_external(black_box(system)).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("to_abstract", external.len()), &external, |b, atoms| {
            b.iter(|| black_box(to_abstract(black_box(atoms)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
