// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use shot_map::ShotMapError;
use shot_map::config::{AppOptions, FetchOptions};
use shot_map::core::Transport;
use shot_map::core::sanitize::encode_path_segment;

pub const BASE: &str = "http://understat.test";

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shot_map_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn png_files(dir: &PathBuf) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|x| x == "png"))
        .collect()
}

pub fn bundled_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/DejaVuSans.ttf")
}

/// Options pointed at the fake host, writing into `out`.
pub fn options(out: &PathBuf) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.base_url = BASE.to_string();
    opts.output.dir = out.clone();
    opts.render.font_path = bundled_font();
    opts.render.dpi = 40;
    opts
}

/// Canned bodies keyed by URL. Unknown URLs fail like a dead host.
#[derive(Default)]
pub struct FakeTransport {
    bodies: HashMap<String, String>,
    pub requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: String, body: impl Into<String>) -> Self {
        self.bodies.insert(url, body.into());
        self
    }

    pub fn with_player(self, name: &str, id: &str) -> Self {
        let fetch = FetchOptions { base_url: BASE.to_string(), ..Default::default() };
        let body = format!(
            r#"{{"success":true,"response":{{"players":[{{"id":"{id}","player_name":"{name}","team":"Manchester City"}}]}}}}"#
        );
        self.with(fetch.lookup_url(&encode_path_segment(name)), body)
    }

    pub fn with_page(self, id: &str, page: String) -> Self {
        let fetch = FetchOptions { base_url: BASE.to_string(), ..Default::default() };
        self.with(fetch.player_url(id), page)
    }
}

impl Transport for FakeTransport {
    fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> shot_map::Result<String> {
        self.requests.borrow_mut().push((
            url.to_string(),
            headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        ));
        self.bodies.get(url).cloned().ok_or_else(|| {
            ShotMapError::Io(io::Error::new(io::ErrorKind::ConnectionRefused, format!("no route to {url}")))
        })
    }
}

/// `(x, y, xg, result, season)` → the JSON array the player page embeds.
pub fn shots_json(shots: &[(f64, f64, f64, &str, &str)]) -> String {
    let items: Vec<String> = shots
        .iter()
        .enumerate()
        .map(|(i, (x, y, xg, result, season))| {
            format!(
                r#"{{"id":"{}","minute":"{}","result":"{result}","X":"{x}","Y":"{y}","xG":"{xg}","player":"Erling Haaland","season":"{season}","situation":"OpenPlay","shotType":"RightFoot","match_id":"1800{i}","h_team":"Manchester City","a_team":"Bournemouth","date":"2022-08-13 15:00:00"}}"#,
                i + 1,
                10 + i,
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// Escape like the site does: everything outside [A-Za-z0-9 ] as `\xNN`.
pub fn js_escape(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 3);
    for b in json.bytes() {
        if b.is_ascii_alphanumeric() || b == b' ' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{b:02X}"));
        }
    }
    out
}

/// A player page with the payload in the fourth `<script>`.
pub fn player_page(json: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<script src="/js/jquery.min.js"></script>
<script>var settings = {{}};</script>
</head><body>
<script>var groupsData = JSON.parse('\x5B\x5D');</script>
<script>
    var shotsData = JSON.parse('{}');
</script>
<script>var matchesData = JSON.parse('\x5B\x5D');</script>
</body></html>"#,
        js_escape(json)
    )
}
