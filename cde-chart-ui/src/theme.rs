//! Dark/light theme with CSS custom properties.
//!
//! The dashboard is styled through one global stylesheet built on CSS
//! variables; `Theme::Light` swaps the palette by adding a `light-theme`
//! class to `<body>`. The choice persists in `localStorage`.

use crate::js_bridge;

const STORAGE_KEY: &str = "cde-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class added to `<body>`; dark is the base palette.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Apply the theme to `<body>` and persist the choice.
pub fn apply(theme: Theme) {
    js_bridge::call_js(&format!(
        "document.body.className = '{}'; localStorage.setItem('{}', '{}');",
        theme.body_class(),
        STORAGE_KEY,
        theme.storage_value()
    ));
}

/// Previously persisted theme, if any.
pub fn load_saved() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Theme::from_storage_value(&value)
}

/// Global stylesheet injected once at startup.
pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #0a0f16;
  --panel: #101723;
  --panel-raised: #16202e;
  --border: rgba(255, 255, 255, 0.09);
  --border-strong: rgba(255, 255, 255, 0.18);
  --text: #e8eef7;
  --text-dim: #b4c2d4;
  --text-muted: #7e8ba0;
  --accent: #53aaf5;
  --accent-strong: #7cc2ff;
  --good: #3fb68b;
  --bad: #ef6860;
  --warn: #f3c349;
  --hover: rgba(255, 255, 255, 0.05);
  --radius: 8px;
  --radius-pill: 999px;
  --font-body: "Inter", "Segoe UI", system-ui, -apple-system, sans-serif;
}

.light-theme {
  --bg: #f6f9fd;
  --panel: #ffffff;
  --panel-raised: #eef2f8;
  --border: rgba(0, 0, 0, 0.08);
  --border-strong: rgba(0, 0, 0, 0.16);
  --text: #101a29;
  --text-dim: #32445c;
  --text-muted: #5e6a7e;
  --accent: #2368d0;
  --accent-strong: #1b4fa6;
  --good: #0c9e66;
  --bad: #d8423c;
  --warn: #c98a0b;
  --hover: rgba(0, 0, 0, 0.04);
}

* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: 14px;
  line-height: 1.45;
  min-height: 100%;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.app-shell {
  display: grid;
  grid-template-rows: 56px 1fr;
  grid-template-columns: 270px minmax(0, 1fr) 330px;
  grid-template-areas:
    "topbar topbar topbar"
    "sidebar main rightbar";
  gap: 12px;
  padding: 12px;
  min-height: 100vh;
}
.app-shell.sidebar-collapsed {
  grid-template-columns: 0 minmax(0, 1fr) 330px;
}
.app-shell.sidebar-collapsed .sidebar { display: none; }

.panel {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.topbar { grid-area: topbar; display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 0 14px; }
.brand { font-size: 17px; font-weight: 600; letter-spacing: 0.02em; }
.topbar-actions { display: flex; align-items: center; gap: 8px; }

.sidebar { grid-area: sidebar; display: flex; flex-direction: column; gap: 14px; padding: 14px; overflow-y: auto; }
.main { grid-area: main; display: flex; flex-direction: column; gap: 10px; padding: 14px; min-height: 0; }
.rightbar { grid-area: rightbar; display: flex; flex-direction: column; gap: 14px; padding: 14px; overflow-y: auto; }

.section-title { font-size: 11px; font-weight: 600; color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.05em; margin: 0 0 6px 0; }

label { color: var(--text-dim); }
input, select, textarea {
  background: var(--panel-raised);
  border: 1px solid var(--border);
  color: var(--text);
  padding: 7px 10px;
  border-radius: var(--radius);
  font-size: 13px;
  outline: none;
}
input:focus, select:focus, textarea:focus { border-color: var(--accent); }
input:disabled { opacity: 0.45; }

.btn {
  border: 1px solid var(--border);
  background: var(--panel-raised);
  color: var(--text);
  padding: 7px 12px;
  border-radius: var(--radius);
  font-size: 13px;
  cursor: pointer;
}
.btn:hover { background: var(--hover); border-color: var(--border-strong); }
.btn.primary { background: var(--accent); border-color: transparent; color: #06121f; font-weight: 600; }
.btn.primary:hover { background: var(--accent-strong); }
.btn.ghost { background: transparent; border-style: dashed; color: var(--text-dim); }
.btn:disabled { opacity: 0.5; cursor: default; }

.station-list { display: flex; flex-direction: column; gap: 4px; max-height: 260px; overflow-y: auto; }
.station-row { display: flex; align-items: center; gap: 8px; padding: 6px 8px; border-radius: var(--radius); cursor: pointer; }
.station-row:hover { background: var(--hover); }
.station-row.selected { background: var(--hover); border-left: 2px solid var(--accent); }

.field-row { display: flex; gap: 10px; align-items: center; flex-wrap: wrap; }
.field-row label { display: flex; align-items: center; gap: 6px; font-size: 13px; }
.field-row input[type="number"] { width: 84px; }
.field-error { color: var(--bad); font-size: 12px; margin: 4px 0 0 0; }
.field-hint { color: var(--text-muted); font-size: 12px; margin: 4px 0 0 0; }

.error-box { padding: 10px 14px; margin: 4px 0; background: rgba(239, 104, 96, 0.12); color: var(--bad); border: 1px solid rgba(239, 104, 96, 0.4); border-radius: var(--radius); }
.loading-box { display: flex; justify-content: center; align-items: center; padding: 36px; color: var(--text-muted); }

.pill { display: inline-flex; align-items: center; gap: 6px; padding: 3px 10px; border-radius: var(--radius-pill); border: 1px solid var(--border); background: var(--panel-raised); font-size: 11px; color: var(--text-dim); }
.pill.good { border-color: rgba(63, 182, 139, 0.45); color: var(--good); }
.pill.bad { border-color: rgba(239, 104, 96, 0.45); color: var(--bad); }
.pill.warn { border-color: rgba(243, 195, 73, 0.45); color: var(--warn); }

.stats-table { width: 100%; border-collapse: collapse; font-size: 12px; }
.stats-table th { text-align: left; color: var(--text-muted); font-weight: 500; padding: 4px 6px; border-bottom: 1px solid var(--border); }
.stats-table td { padding: 4px 6px; border-bottom: 1px solid var(--border); }

.insight-card { border: 1px solid var(--border); border-radius: var(--radius); padding: 10px 12px; background: var(--panel-raised); display: flex; flex-direction: column; gap: 6px; }
.insight-head { display: flex; align-items: center; justify-content: space-between; gap: 8px; }
.insight-title { font-weight: 600; font-size: 13px; }
.insight-desc { color: var(--text-dim); font-size: 12px; margin: 0; }
.insight-meta { display: flex; gap: 6px; flex-wrap: wrap; }

.chat-drawer {
  position: fixed; top: 0; right: 0; bottom: 0; width: 360px; max-width: 92vw;
  background: var(--panel); border-left: 1px solid var(--border-strong);
  display: flex; flex-direction: column; z-index: 30;
  transform: translateX(100%); transition: transform 160ms ease-out;
}
.chat-drawer.open { transform: translateX(0); }
.chat-head { display: flex; align-items: center; justify-content: space-between; padding: 12px 14px; border-bottom: 1px solid var(--border); }
.chat-body { flex: 1 1 auto; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; padding: 12px 14px; }
.chat-msg { max-width: 85%; padding: 8px 11px; border-radius: var(--radius); font-size: 13px; white-space: pre-wrap; }
.chat-msg.user { align-self: flex-end; background: var(--accent); color: #06121f; }
.chat-msg.assistant { align-self: flex-start; background: var(--panel-raised); border: 1px solid var(--border); }
.chat-input-row { display: flex; gap: 8px; padding: 12px 14px; border-top: 1px solid var(--border); }
.chat-input-row input { flex: 1 1 auto; }

.tour-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.55); z-index: 40; display: flex; align-items: center; justify-content: center; }
.tour-card { width: 440px; max-width: 92vw; background: var(--panel); border: 1px solid var(--border-strong); border-radius: var(--radius); padding: 18px 20px; display: flex; flex-direction: column; gap: 10px; }
.tour-progress { color: var(--text-muted); font-size: 12px; }
.tour-actions { display: flex; justify-content: space-between; gap: 8px; margin-top: 6px; }
.shortcut-list { margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 4px; font-size: 13px; }
.shortcut-list kbd { background: var(--panel-raised); border: 1px solid var(--border-strong); border-radius: 4px; padding: 1px 6px; font-family: monospace; }

@media (max-width: 1100px) {
  .app-shell {
    grid-template-columns: 1fr;
    grid-template-rows: 56px auto auto auto;
    grid-template-areas:
      "topbar"
      "sidebar"
      "main"
      "rightbar";
  }
  .app-shell.sidebar-collapsed { grid-template-columns: 1fr; }
  .station-list { max-height: 180px; }
}

@media (max-width: 640px) {
  .app-shell { padding: 8px; gap: 8px; }
  .topbar { flex-wrap: wrap; padding: 8px; }
  .chat-drawer { width: 100vw; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_dark_and_light() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn storage_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_storage_value(theme.storage_value()), Some(theme));
        }
        assert_eq!(Theme::from_storage_value("solarized"), None);
    }

    #[test]
    fn dark_is_the_base_palette() {
        assert_eq!(Theme::Dark.body_class(), "");
        assert_eq!(Theme::Light.body_class(), "light-theme");
    }
}
