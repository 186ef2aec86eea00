// tests/pipeline.rs
mod common;

use claims::{assert_matches, assert_ok};
use common::*;

use shot_map::ShotMapError;
use shot_map::params::{Request, Season};
use shot_map::runner;

const THREE_SHOTS: &[(f64, f64, f64, &str, &str)] = &[
    (0.90, 0.50, 0.30, "Goal", "2022"),
    (0.80, 0.40, 0.10, "MissedShots", "2022"),
    (0.95, 0.50, 0.60, "Goal", "2022"),
    (0.85, 0.55, 0.20, "SavedShot", "2021"),
];

fn haaland() -> FakeTransport {
    FakeTransport::new()
        .with_player("Erling Haaland", "8260")
        .with_page("8260", player_page(&shots_json(THREE_SHOTS)))
}

#[test]
fn unknown_player_fails_lookup_and_writes_nothing() {
    let out = tmp_dir("unknown_player");
    let transport = FakeTransport::new();
    let request = Request::parse("Nobody McNoname", "2022").unwrap();

    let err = runner::generate(&request, &options(&out), &transport, None).unwrap_err();
    assert_matches!(err, ShotMapError::LookupFailure { ref name } if name == "Nobody McNoname");
    assert!(png_files(&out).is_empty());
}

#[test]
fn empty_hit_list_is_a_lookup_failure() {
    let out = tmp_dir("empty_hits");
    let fetch = shot_map::config::FetchOptions { base_url: BASE.into(), ..Default::default() };
    let transport = FakeTransport::new().with(
        fetch.lookup_url("Ghost"),
        r#"{"success":true,"response":{"players":[]}}"#,
    );
    let request = Request::parse("Ghost", "2022").unwrap();

    let err = runner::generate(&request, &options(&out), &transport, None).unwrap_err();
    assert_matches!(err, ShotMapError::LookupFailure { .. });
}

#[test]
fn lookup_sends_the_search_headers() {
    let transport = haaland();
    let fetch = shot_map::config::FetchOptions { base_url: BASE.into(), ..Default::default() };
    let hit = shot_map::specs::lookup::find_player(&transport, &fetch, "Erling Haaland").unwrap();
    assert_eq!(hit.id, "8260");

    let requests = transport.requests.borrow();
    let (url, headers) = &requests[0];
    assert_eq!(url, "http://understat.test/main/getPlayersName/Erling%20Haaland");
    assert!(headers.contains(&("Accept".into(), "*/*".into())));
    assert!(headers.contains(&("User-Agent".into(), "Player Name ID".into())));
}

#[test]
fn page_without_payload_is_a_parse_failure() {
    let out = tmp_dir("malformed_page");
    let transport = FakeTransport::new()
        .with_player("Erling Haaland", "8260")
        .with_page("8260", "<html><body><script>var x = 1;</script></body></html>".into());
    let request = Request::parse("Erling Haaland", "2022").unwrap();

    let err = runner::generate(&request, &options(&out), &transport, None).unwrap_err();
    assert_matches!(err, ShotMapError::ParseFailure(_));
    assert!(png_files(&out).is_empty());
}

#[test]
fn non_numeric_coordinate_is_a_parse_failure() {
    let json = shots_json(&[(0.9, 0.5, 0.3, "Goal", "2022")]).replace(r#""X":"0.9""#, r#""X":"far""#);
    let transport = FakeTransport::new().with_page("8260", player_page(&json));
    let fetch = shot_map::config::FetchOptions { base_url: BASE.into(), ..Default::default() };
    let season = Season::parse("2022").unwrap();

    assert_matches!(runner::fetch(&transport, &fetch, "8260", &season), Err(ShotMapError::ParseFailure(_)));
}

#[test]
fn season_without_shots_lists_the_available_ones() {
    let out = tmp_dir("empty_season");
    let request = Request::parse("Erling Haaland", "2019").unwrap();

    let err = runner::generate(&request, &options(&out), &haaland(), None).unwrap_err();
    match err {
        ShotMapError::EmptyResult { season, available } => {
            assert_eq!(season, "2019");
            assert_eq!(available, vec!["2022", "2021"]);
        }
        other => panic!("expected EmptyResult, got {other:?}"),
    }
    assert!(png_files(&out).is_empty());
}

#[test]
fn three_shot_season_summary() {
    let fetch = shot_map::config::FetchOptions { base_url: BASE.into(), ..Default::default() };
    let season = Season::parse("2022").unwrap();

    let records = runner::fetch(&haaland(), &fetch, "8260", &season).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].match_id, "18000");

    let s = runner::summarize(&records, &season).unwrap();
    assert_eq!(s.total_shots, 3);
    assert_eq!(s.total_goals, 2);
    assert!((s.total_xg - 1.0).abs() < 1e-9);
    assert!((s.xg_per_shot - 1.0 / 3.0).abs() < 1e-9);
    assert!((s.points_average_distance - 88.333_333).abs() < 1e-4);
    assert!((s.actual_average_distance - 14.0).abs() < 1e-9);
}

#[test]
fn missing_font_fails_before_anything_is_written() {
    let out = tmp_dir("missing_font");
    let mut opts = options(&out);
    opts.render.font_path = out.join("no_such_font.ttf");
    let request = Request::parse("Erling Haaland", "2022").unwrap();

    let err = runner::generate(&request, &opts, &haaland(), None).unwrap_err();
    assert_matches!(err, ShotMapError::MissingResource { .. });
    assert!(png_files(&out).is_empty());
}

#[test]
fn full_run_writes_a_named_png_of_canvas_size() {
    let out = tmp_dir("full_run");
    let opts = options(&out);
    let request = Request::parse("  Erling Haaland ", "2022").unwrap();

    let map = assert_ok!(runner::generate(&request, &opts, &haaland(), None));
    assert_eq!(map.player, "Erling Haaland");
    assert_eq!(map.player_id, "8260");
    assert_eq!(map.summary.total_shots, 3);
    assert_eq!(map.path, out.join("Erling_Haaland_2022.png"));

    let img = image::open(&map.path).unwrap();
    assert_eq!((img.width(), img.height()), opts.render.canvas_size());
    assert_eq!(png_files(&out).len(), 1);
}

#[test]
fn rerun_overwrites_the_same_file() {
    let out = tmp_dir("rerun");
    let opts = options(&out);
    let request = Request::parse("Erling Haaland", "2022").unwrap();

    let first = runner::generate(&request, &opts, &haaland(), None).unwrap();
    let second = runner::generate(&request, &opts, &haaland(), None).unwrap();
    assert_eq!(first.path, second.path);
    assert_eq!(png_files(&out).len(), 1);
}

#[test]
fn progress_sees_every_step() {
    #[derive(Default)]
    struct Count {
        total: usize,
        steps: Vec<String>,
        finished: bool,
    }
    impl shot_map::progress::Progress for Count {
        fn begin(&mut self, total: usize) {
            self.total = total;
        }
        fn step_done(&mut self, step: &str) {
            self.steps.push(step.to_string());
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    let out = tmp_dir("progress");
    let request = Request::parse("Erling Haaland", "2022").unwrap();
    let mut count = Count::default();
    runner::generate(&request, &options(&out), &haaland(), Some(&mut count)).unwrap();

    assert_eq!(count.total, 3);
    assert_eq!(count.steps, vec!["lookup", "fetch", "render"]);
    assert!(count.finished);
}
