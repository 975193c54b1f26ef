use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskbarSection {
    height_px: i32,
    clock_refresh_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EffectsSection {
    minimize_fade_ms: u32,
    toast_lifetime_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusSection {
    visitor_seed: u64,
    visitor_interval_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileSection {
    owner: String,
    email: String,
    resume_path: String,
    about: String,
    skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TabEntry {
    title: String,
    #[serde(default)]
    lines: Vec<String>,
    #[serde(default)]
    terminal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    id: u64,
    title: String,
    icon: String,
    #[serde(default)]
    tabs: Vec<TabEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconEntry {
    label: String,
    icon: String,
    opens: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StartMenuAction {
    Announce,
    Open { window: u64 },
    Shutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StartMenuEntry {
    label: String,
    icon: String,
    action: StartMenuAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfigFile {
    schema_version: u32,
    taskbar: TaskbarSection,
    effects: EffectsSection,
    status: StatusSection,
    profile: ProfileSection,
    #[serde(default)]
    windows: Vec<WindowEntry>,
    #[serde(default)]
    icons: Vec<IconEntry>,
    #[serde(default)]
    start_menu: Vec<StartMenuEntry>,
}

fn validate(config: &DesktopConfigFile, path: &std::path::Path) {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        panic!(
            "config schema mismatch in {}: expected {CONFIG_SCHEMA_VERSION} found {}",
            path.display(),
            config.schema_version
        );
    }
    if config.taskbar.height_px <= 0 {
        panic!("taskbar.height_px must be positive in {}", path.display());
    }
    if config.status.visitor_interval_ms == 0 || config.taskbar.clock_refresh_ms == 0 {
        panic!("timer intervals must be non-zero in {}", path.display());
    }

    let mut window_ids = BTreeSet::new();
    for window in &config.windows {
        if !window_ids.insert(window.id) {
            panic!("duplicate window id {} in {}", window.id, path.display());
        }
    }
    for icon in &config.icons {
        if !window_ids.contains(&icon.opens) {
            panic!(
                "icon `{}` opens unknown window {} in {}",
                icon.label,
                icon.opens,
                path.display()
            );
        }
    }
    for entry in &config.start_menu {
        if let StartMenuAction::Open { window } = entry.action {
            if !window_ids.contains(&window) {
                panic!(
                    "start menu entry `{}` opens unknown window {window} in {}",
                    entry.label,
                    path.display()
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DesktopConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path);

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
