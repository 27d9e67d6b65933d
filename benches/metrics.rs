// benches/metrics.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ff_scrape::config::options::MetricKind;
use ff_scrape::specs::{metrics, summary};

// Synthetic report pages, sized like the real ones (a few hundred KB of
// markup around an 8-row table / 8 composition entries).
fn damage_doc() -> String {
    let mut doc = String::with_capacity(300_000);
    doc.push_str("<html><head><title>report</title></head><body>");
    for i in 0..2000 {
        doc.push_str(&format!("<div class=\"filler\" data-ix=\"{i}\">lorem ipsum dolor</div>"));
    }
    doc.push_str("<table id=\"main-table-0\" class=\"stats\">");
    doc.push_str("<th>Parse %</th><th>Name</th><th>Amount</th><th>Active</th><th>DPS</th><th>rDPS</th>");
    for i in 0..8 {
        doc.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"#\">Player {}</a></td>\
             <td>1,{}34,567$1{}.5%</td><td>9{}%</td><td>12,345.{}</td><td>11,900.{}</td></tr>",
            90 - i, i, i, i, i, i, i
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn summary_doc() -> String {
    let mut doc = String::with_capacity(300_000);
    doc.push_str("<html><body>");
    for i in 0..2000 {
        doc.push_str(&format!("<span class=\"filler\" data-ix=\"{i}\">lorem</span>"));
    }
    for job in ["Warrior", "Paladin", "White Mage", "Scholar", "Samurai", "Ninja", "Bard", "Black Mage"] {
        doc.push_str(&format!(
            "<div class=\"composition-entry\"><img src=\"x.png\" alt=\"{job}\"></div>"
        ));
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let table_doc = damage_doc();
    let comp_doc = summary_doc();

    c.bench_function("extract_table_damage", |b| {
        b.iter(|| {
            let ds = metrics::extract_table(black_box(&table_doc), MetricKind::DamageDone).unwrap();
            black_box(ds.row_count())
        })
    });

    c.bench_function("extract_jobs", |b| {
        b.iter(|| {
            let jobs = summary::extract_jobs(black_box(&comp_doc));
            black_box(jobs.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
