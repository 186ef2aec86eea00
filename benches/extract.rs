// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shot_map::core::sanitize::unescape_js;
use shot_map::data::SessionSummary;
use shot_map::specs::shots::{self, ScriptSlice};

/// A season-sized page: ~150 shots over three seasons, escaped like the site.
fn sample_page() -> String {
    let shots: Vec<String> = (0..150)
        .map(|i| {
            let season = 2020 + i % 3;
            let result = if i % 7 == 0 { "Goal" } else { "MissedShots" };
            format!(
                r#"{{"id":"{i}","minute":"{}","result":"{result}","X":"0.{}","Y":"0.{}","xG":"0.0{}","player":"Erling Haaland","season":"{season}","situation":"OpenPlay","shotType":"LeftFoot","match_id":"{}","h_team":"Manchester City","a_team":"Crystal Palace","date":"2022-08-27 15:00:00"}}"#,
                i % 90,
                70 + i % 29,
                30 + i % 40,
                1 + i % 9,
                18000 + i,
            )
        })
        .collect();
    let json = format!("[{}]", shots.join(","));
    let escaped: String = json
        .bytes()
        .map(|b| if b.is_ascii_alphanumeric() { (b as char).to_string() } else { format!("\\x{b:02X}") })
        .collect();
    format!(
        "<html><head><script></script><script></script></head><body><script></script>\
         <script>var shotsData = JSON.parse('{escaped}');</script></body></html>"
    )
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();
    let slice = ScriptSlice::at(3);
    let raw = page.split("('").nth(1).and_then(|s| s.split("')").next()).unwrap_or_default().to_string();

    c.bench_function("unescape_payload", |b| {
        b.iter(|| black_box(unescape_js(black_box(&raw)).map(|s| s.len())))
    });

    c.bench_function("parse_page_one_season", |b| {
        b.iter(|| {
            let bundle = shots::parse_page(&slice, black_box(&page), "2022");
            black_box(bundle.map(|b| b.records.len()))
        })
    });

    c.bench_function("summary", |b| {
        let records = shots::parse_page(&slice, &page, "2022").map(|b| b.records).unwrap_or_default();
        b.iter(|| black_box(SessionSummary::compute(black_box(&records))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
