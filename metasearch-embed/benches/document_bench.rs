use criterion::{black_box, criterion_group, criterion_main, Criterion};

use metasearch_embed::{embed_verdict, extract_title};

fn large_page() -> String {
    let mut html = String::from("<!doctype html><html><head>");
    for i in 0..2_000 {
        html.push_str(&format!("<meta name=\"k{i}\" content=\"v{i}\">"));
    }
    html.push_str("<title>neural nets &amp; friends - Google Scholar</title></head><body>");
    for _ in 0..5_000 {
        html.push_str("<div class=\"gs_r\"><a href=\"#\">result</a></div>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract_title(c: &mut Criterion) {
    let html = large_page();
    c.bench_function("extract_title_large_page", |b| {
        b.iter(|| extract_title(black_box(&html)));
    });
}

fn bench_embed_verdict(c: &mut Criterion) {
    let csp = "default-src 'self'; script-src 'nonce-abc' 'strict-dynamic'; \
               object-src 'none'; base-uri 'self'; frame-ancestors 'self' https://a.test";
    c.bench_function("embed_verdict_csp", |b| {
        b.iter(|| embed_verdict(black_box(Some("SAMEORIGIN")), black_box(Some(csp))));
    });
}

criterion_group!(benches, bench_extract_title, bench_embed_verdict);
criterion_main!(benches);
