// src/combine.rs
// Aggregation: concatenate per-report tables, group by player name and
// reduce each column (mean for rates and percentages, sum for the raw
// amount). Output column order and titles are the display shapes the
// dashboard and exports use verbatim.

use std::error::Error;

use crate::config::options::MetricKind;
use crate::core::sanitize::{parse_number, parse_percent, split_amount};
use crate::store::DataSet;

pub const DAMAGE_SUMMARY_COLUMNS: &[&str] = &[
    "Parse %", "Player Name", "Amount %", "Amount Total", "Active %", "DPS", "rDPS",
];
pub const HEALING_SUMMARY_COLUMNS: &[&str] = &[
    "Parse %", "Player Name", "Amount %", "Amount Total", "Overheal", "Active %", "HPS", "rHPS",
];

pub fn summary_columns(kind: MetricKind) -> &'static [&'static str] {
    match kind {
        MetricKind::DamageDone => DAMAGE_SUMMARY_COLUMNS,
        MetricKind::HealingDone => HEALING_SUMMARY_COLUMNS,
    }
}

pub fn summarize_damage(tables: &[DataSet]) -> Result<DataSet, Box<dyn Error>> {
    summarize(tables, MetricKind::DamageDone)
}

pub fn summarize_healing(tables: &[DataSet]) -> Result<DataSet, Box<dyn Error>> {
    summarize(tables, MetricKind::HealingDone)
}

/// Per-player accumulator across reports. Means are computed over the
/// number of tables the player actually appears in.
#[derive(Default)]
struct Accum {
    parse: Stat,
    amount_pct: Stat,
    amount_total: f64,
    overheal: Stat,
    active: Stat,
    per_sec: Stat,
    r_per_sec: Stat,
}

#[derive(Default)]
struct Stat {
    sum: f64,
    n: usize,
}

impl Stat {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.n += 1;
    }
    fn mean(&self) -> f64 {
        if self.n == 0 { 0.0 } else { self.sum / self.n as f64 }
    }
}

fn summarize(tables: &[DataSet], kind: MetricKind) -> Result<DataSet, Box<dyn Error>> {
    let headers: Vec<&str> = summary_columns(kind).to_vec();

    // Keyed by player name; insertion order retained for stable ties.
    let mut order: Vec<String> = Vec::new();
    let mut accums: Vec<Accum> = Vec::new();

    for ds in tables {
        let hs = ds.headers.as_ref().ok_or("table without headers")?;
        let col = |name: &str| -> Result<usize, Box<dyn Error>> {
            hs.iter()
                .position(|h| h == name)
                .ok_or_else(|| format!("missing '{}' column", name).into())
        };

        let c_parse = col("Parse %")?;
        let c_name = col("Name")?;
        let c_amount = col("Amount")?;
        let c_active = col("Active")?;
        let (c_rate, c_rrate) = match kind {
            MetricKind::DamageDone => (col("DPS")?, col("rDPS")?),
            MetricKind::HealingDone => (col("HPS")?, col("rHPS")?),
        };
        let c_overheal = match kind {
            MetricKind::DamageDone => None,
            MetricKind::HealingDone => Some(col("Overheal")?),
        };

        for row in &ds.rows {
            let name = row.get(c_name).map(|s| s.as_str()).unwrap_or("");
            if name.is_empty() {
                continue;
            }

            let ix = match order.iter().position(|n| n == name) {
                Some(ix) => ix,
                None => {
                    order.push(s!(name));
                    accums.push(Accum::default());
                    accums.len() - 1
                }
            };
            let acc = &mut accums[ix];

            let cell = |ci: usize| row.get(ci).map(|s| s.as_str()).unwrap_or("");

            acc.parse.push(parse_percent(cell(c_parse)).unwrap_or(0.0));
            acc.active.push(parse_percent(cell(c_active)).unwrap_or(0.0));
            acc.per_sec.push(parse_number(cell(c_rate)).unwrap_or(0.0));
            acc.r_per_sec.push(parse_number(cell(c_rrate)).unwrap_or(0.0));

            let (amt, amt_pct) = split_amount(cell(c_amount)).unwrap_or((0.0, 0.0));
            acc.amount_total += amt;
            acc.amount_pct.push(amt_pct);

            if let Some(c) = c_overheal {
                acc.overheal.push(parse_percent(cell(c)).unwrap_or(0.0));
            }
        }
    }

    let mut rows: Vec<Vec<String>> = order
        .iter()
        .zip(&accums)
        .map(|(name, acc)| {
            let mut row = vec![
                fmt_int(acc.parse.mean()),
                name.clone(),
                fmt2(acc.amount_pct.mean()),
                fmt2(acc.amount_total),
            ];
            if kind == MetricKind::HealingDone {
                row.push(fmt2(acc.overheal.mean()));
            }
            row.push(fmt2(acc.active.mean()));
            row.push(fmt2(acc.per_sec.mean()));
            row.push(fmt2(acc.r_per_sec.mean()));
            row
        })
        .collect();

    // Deterministic presentation: biggest contributors first.
    rows.sort_by(|a, b| {
        let av = parse_number(&a[3]).unwrap_or(0.0);
        let bv = parse_number(&b[3]).unwrap_or(0.0);
        bv.partial_cmp(&av).unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(DataSet {
        headers: Some(headers.iter().map(|s| s!(*s)).collect()),
        rows,
    })
}

/// Parse percentile: whole number, site-style.
fn fmt_int(v: f64) -> String {
    format!("{:.0}", v)
}

fn fmt2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damage_table(rows: &[[&str; 6]]) -> DataSet {
        DataSet {
            headers: Some(
                ["Parse %", "Name", "Amount", "Active", "DPS", "rDPS"]
                    .iter().map(|s| s!(*s)).collect(),
            ),
            rows: rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        }
    }

    #[test]
    fn means_and_sums_across_reports() {
        let t1 = damage_table(&[["90", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"]]);
        let t2 = damage_table(&[["70", "Aeri Tal", "3,000$40.0%", "94%", "300.0", "290.0"]]);

        let ds = summarize_damage(&[t1, t2]).unwrap();
        assert_eq!(ds.headers.as_deref().unwrap(), DAMAGE_SUMMARY_COLUMNS);
        assert_eq!(ds.rows.len(), 1);

        let row = &ds.rows[0];
        assert_eq!(row[0], "80");        // mean parse, integer
        assert_eq!(row[1], "Aeri Tal");
        assert_eq!(row[2], "45.00");     // mean amount %
        assert_eq!(row[3], "4000.00");   // summed amount
        assert_eq!(row[4], "96.00");     // mean active
        assert_eq!(row[5], "200.00");    // mean DPS
        assert_eq!(row[6], "190.00");    // mean rDPS
    }

    #[test]
    fn rows_sorted_by_amount_total_desc() {
        let t = damage_table(&[
            ["50", "Small Fry", "100$5.0%", "90%", "10.0", "10.0"],
            ["50", "Big Hitter", "9,000$60.0%", "90%", "900.0", "900.0"],
        ]);
        let ds = summarize_damage(&[t]).unwrap();
        assert_eq!(ds.rows[0][1], "Big Hitter");
        assert_eq!(ds.rows[1][1], "Small Fry");
    }

    #[test]
    fn healing_summary_keeps_overheal_column() {
        let t = DataSet {
            headers: Some(
                ["Parse %", "Name", "Amount", "Overheal", "Active", "HPS", "rHPS"]
                    .iter().map(|s| s!(*s)).collect(),
            ),
            rows: vec![
                ["80", "Cael Yan", "2,000$55.0%", "30%", "95%", "200.0", "190.0"]
                    .iter().map(|c| s!(*c)).collect(),
            ],
        };
        let ds = summarize_healing(&[t]).unwrap();
        assert_eq!(ds.headers.as_deref().unwrap(), HEALING_SUMMARY_COLUMNS);
        assert_eq!(ds.rows[0][4], "30.00"); // overheal mean
        assert_eq!(ds.rows[0][7], "190.00");
    }

    #[test]
    fn player_missing_from_one_report_keeps_honest_mean() {
        let t1 = damage_table(&[
            ["90", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"],
            ["60", "Bran Kal", "500$25.0%", "96%", "50.0", "45.0"],
        ]);
        let t2 = damage_table(&[["70", "Aeri Tal", "1,000$50.0%", "98%", "100.0", "90.0"]]);

        let ds = summarize_damage(&[t1, t2]).unwrap();
        let bran = ds.rows.iter().find(|r| r[1] == "Bran Kal").unwrap();
        // One appearance: mean over 1, not over table count.
        assert_eq!(bran[0], "60");
        assert_eq!(bran[5], "50.00");
    }
}
