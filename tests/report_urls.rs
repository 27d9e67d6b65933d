// tests/report_urls.rs
use ff_scrape::config::options::{EncounterFilter, MetricKind};
use ff_scrape::report::Report;

const CODE: &str = "VrNFghvTcL3J48WK";

#[test]
fn accepts_full_urls_and_bare_codes() {
    let from_url = Report::parse(&format!("https://www.fflogs.com/reports/{}", CODE)).unwrap();
    let from_code = Report::parse(CODE).unwrap();
    assert_eq!(from_url, from_code);
    assert_eq!(from_url.code(), CODE);
}

#[test]
fn tolerates_scheme_www_slash_and_query_noise() {
    for input in [
        format!("http://fflogs.com/reports/{}/", CODE),
        format!("www.fflogs.com/reports/{}?boss=-2#damage-done", CODE),
        format!("  {}  ", CODE),
    ] {
        let r = Report::parse(&input).unwrap();
        assert_eq!(r.code(), CODE, "input: {}", input);
    }
}

#[test]
fn anonymized_codes_keep_their_prefix() {
    let r = Report::parse(&format!("https://www.fflogs.com/reports/a:{}", CODE)).unwrap();
    assert_eq!(r.code(), format!("a:{}", CODE));
    // filenames cannot carry ':'
    assert_eq!(r.file_stem(), format!("a-{}", CODE));
}

#[test]
fn rejects_bad_input() {
    for input in [
        "",
        "tooshort",
        "https://www.fflogs.com/character/eu/whatever",
        "VrNFghvTcL3J48W!",         // non-alphanumeric
        "VrNFghvTcL3J48WKX",        // 17 chars
    ] {
        assert!(Report::parse(input).is_err(), "should reject: {}", input);
    }
}

#[test]
fn summary_path_carries_the_encounter_filter() {
    let r = Report::parse(CODE).unwrap();
    assert_eq!(
        r.summary_path(EncounterFilter::All),
        format!("/reports/{}?boss=-2", CODE)
    );
    assert_eq!(
        r.summary_path(EncounterFilter::Kills),
        format!("/reports/{}?boss=-2&wipes=2", CODE)
    );
    assert_eq!(
        r.summary_path(EncounterFilter::Wipes),
        format!("/reports/{}?boss=-2&wipes=1", CODE)
    );
}

#[test]
fn metric_path_appends_the_table_type() {
    let r = Report::parse(CODE).unwrap();
    assert_eq!(
        r.metric_path(EncounterFilter::Kills, MetricKind::DamageDone),
        format!("/reports/{}?boss=-2&wipes=2&type=damage-done", CODE)
    );
    // the site spells these differently: damage-done, but plain healing
    assert_eq!(
        r.metric_path(EncounterFilter::All, MetricKind::HealingDone),
        format!("/reports/{}?boss=-2&type=healing", CODE)
    );
}
