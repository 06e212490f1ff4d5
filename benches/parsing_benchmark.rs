use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use curl_workbench::RequestModel;
use std::hint::black_box;
use std::str::FromStr;

fn simple_curl_commands() -> Vec<&'static str> {
    vec![
        "curl https://api.example.com/users",
        "curl http://localhost:8080/health",
        "curl 'https://jsonplaceholder.typicode.com/posts/1'",
        "curl http://example.com",
        "curl -X GET https://api.github.com/user",
    ]
}

fn complex_curl_commands() -> Vec<&'static str> {
    vec![
        r#"curl -X POST https://api.example.com/users \
          -H 'Content-Type: application/json' \
          -H 'Authorization: Bearer token123' \
          -H 'Accept: application/json' \
          -H 'X-Custom-Header: value' \
          -d '{"name": "John Doe", "email": "john@example.com"}'"#,
        r#"curl -X PATCH \
          -d '{"visibility":"private"}' \
          -H "Accept: application/vnd.github+json" \
          -H "Authorization: Bearer abcd1234" \
          -H "X-GitHub-Api-Version: 2022-11-28" \
          -H "User-Agent: MyApp/1.0" \
          https://api.github.com/user/email/visibility"#,
        r#"curl 'https://api.example.com/search?q=term' \
          -H 'Accept: text/html' \
          -H 'X-Request-ID: 12345' \
          --compressed -s"#,
    ]
}

fn bench_simple_parsing(c: &mut Criterion) {
    let commands = simple_curl_commands();
    let mut group = c.benchmark_group("simple_parsing");

    for (i, cmd) in commands.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("parse", i), cmd, |b, cmd| {
            b.iter(|| RequestModel::from_str(black_box(cmd)).unwrap())
        });
    }
    group.finish();
}

fn bench_complex_parsing(c: &mut Criterion) {
    let commands = complex_curl_commands();
    let mut group = c.benchmark_group("complex_parsing");

    for (i, cmd) in commands.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("parse", i), cmd, |b, cmd| {
            b.iter(|| RequestModel::from_str(black_box(cmd)).unwrap())
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    let model = RequestModel::from_str(complex_curl_commands()[0]).unwrap();
    group.bench_function("generate", |b| b.iter(|| black_box(&model).to_curl()));

    let command = model.to_curl();
    group.bench_function("generate_then_parse", |b| {
        b.iter(|| RequestModel::from_str(black_box(&command)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simple_parsing,
    bench_complex_parsing,
    bench_round_trip
);
criterion_main!(benches);
