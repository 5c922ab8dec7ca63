use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scene_release_parser::parse;

fn simple_benchmark(c: &mut Criterion) {
    c.bench_function("parse_movie_filename", |b| {
        b.iter(|| black_box(parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv")));
    });

    c.bench_function("parse_anime_filename", |b| {
        b.iter(|| {
            black_box(parse(
                "[字幕组] 某动画 / Some Anime [01-12][1080p][简繁内封].mkv",
            ))
        });
    });
}

criterion_group!(benches, simple_benchmark);
criterion_main!(benches);
