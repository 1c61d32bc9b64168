use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twpca::{load_records, AddressParser, ReferenceIndex};

fn benchmark_parse(c: &mut Criterion) {
    let parser = AddressParser::new();

    c.bench_function("parse_full_address", |b| {
        b.iter(|| parser.parse(black_box("臺北市中正區重慶南路一段122號")))
    });

    c.bench_function("parse_short_address", |b| {
        b.iter(|| parser.parse(black_box("高雄鳳山區光遠路")))
    });

    c.bench_function("parse_area_backfill", |b| {
        b.iter(|| parser.parse(black_box("板橋區文化路一段188號")))
    });

    c.bench_function("parse_unmatched", |b| {
        b.iter(|| parser.parse(black_box("某某路123號某某大樓五樓")))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let parser = AddressParser::new();
    let addresses: Vec<&str> = vec![
        "臺北市中正區",
        "新北市板橋區",
        "桃園市中壢區",
        "臺中市西屯區",
        "臺南市安平區",
        "高雄市鳳山區",
        "新竹縣竹北市",
        "彰化縣員林市",
        "花蓮縣吉安鄉",
        "金門縣金城鎮",
    ];

    c.bench_function("transform_10", |b| {
        b.iter(|| parser.transform(black_box(addresses.iter().copied())))
    });
}

fn benchmark_init(c: &mut Criterion) {
    c.bench_function("index_build", |b| {
        b.iter(|| ReferenceIndex::build(load_records().unwrap()))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_batch, benchmark_init);
criterion_main!(benches);
