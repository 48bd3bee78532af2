//! Performance benchmarks for kisho-scraper.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kisho_scraper::{dom, links, parse_review, ScrapeOptions};
use url::Url;

const SAMPLE_REVIEW: &str = r#"
<html>
<body>
<table border="1">
    <tr><td colspan="2">マイナビ将棋BOOKS<br><strong>一撃！対振り飛車へなちょこ急戦</strong></td></tr>
    <tr><td>著者</td><td>Sugar</td></tr>
    <tr><td>発行年月</td><td>2024年4月</td></tr>
    <tr><td>[総合評価]<strong>A</strong></td></tr>
    <tr><td>戦法</td><td>四間飛車、三間飛車、振り飛車、中飛車、居飛車</td></tr>
</table>
<p>振り飛車党への対策をまとめた一冊。急戦の狙い筋を丁寧に解説する。</p>
</body>
</html>
"#;

const SAMPLE_INDEX: &str = r#"
<html>
<body>
<a href="serial-number.htm">通巻順</a>
<a href="1/1-1.htm">羽生の頭脳</a>
<a href="1/1-2.htm">四間飛車を指しこなす本</a>
<a href="2/2-10.htm">将棋は歩から</a>
<a href="3/3-25.htm">光速の寄せ</a>
</body>
</html>
"#;

fn bench_parse_review(c: &mut Criterion) {
    let options = ScrapeOptions::default();

    c.bench_function("parse_review", |b| {
        b.iter(|| {
            parse_review(
                black_box(SAMPLE_REVIEW),
                "https://example.com/1/1-1.htm",
                black_box(&options),
            )
        });
    });
}

fn bench_discover_links(c: &mut Criterion) {
    let base = Url::parse("https://example.com/serial-number.htm").unwrap();

    c.bench_function("discover_links", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(SAMPLE_INDEX));
            links::discover_links(&doc, &base)
        });
    });
}

criterion_group!(benches, bench_parse_review, bench_discover_links);
criterion_main!(benches);
