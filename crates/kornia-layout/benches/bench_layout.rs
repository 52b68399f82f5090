use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kornia_layout::{calc_strides, itol, ltoi, permute, permute_in_place};

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("offsets");

    let test_shapes: Vec<Vec<usize>> = vec![vec![64, 64], vec![8, 16, 32], vec![4, 8, 8, 16]];

    for shape in test_shapes {
        let strides = calc_strides(&shape);
        let numel = shape.iter().product::<usize>();
        let name = format!("{:?}", shape);

        group.bench_function(format!("itol_{}", name), |bencher| {
            bencher.iter(|| {
                for offset in 0..numel {
                    black_box(itol(black_box(offset), &shape, &strides).unwrap());
                }
            })
        });

        let coords: Vec<Vec<usize>> = (0..numel)
            .map(|offset| itol(offset, &shape, &strides).unwrap())
            .collect();

        group.bench_function(format!("ltoi_{}", name), |bencher| {
            bencher.iter(|| {
                for coord in coords.iter() {
                    black_box(ltoi(&shape, &strides, black_box(coord)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_permute(c: &mut Criterion) {
    let mut group = c.benchmark_group("permute");

    let shape = vec![2, 3, 4, 5, 6, 7];
    let strides = calc_strides(&shape);
    let pattern = [5, 3, 1, 0, 2, 4];

    group.bench_function("copy", |bencher| {
        bencher.iter(|| black_box(permute(&pattern, &[&shape[..], &strides[..]]).unwrap()))
    });

    group.bench_function("in_place", |bencher| {
        let mut s = shape.clone();
        let mut st = strides.clone();
        bencher.iter(|| {
            black_box(permute_in_place(&pattern, &mut [&mut s[..], &mut st[..]]).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_offsets, bench_permute);
criterion_main!(benches);
