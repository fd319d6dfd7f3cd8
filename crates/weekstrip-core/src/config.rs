use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::calendar::WeekStart;
use crate::grid::{GridSpec, OutOfRangePadding, FULL_WEEK};
use crate::nav::{CommitAnchor, NavigatorOptions, PageKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// "monday" or "sunday"
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Days per page, 1 to 7
    #[serde(default = "default_page_width")]
    pub page_width: usize,
    #[serde(default = "default_years_around")]
    pub years_before: u32,
    #[serde(default = "default_years_around")]
    pub years_after: u32,
    /// How cells outside the span are shown: "dated" or "blank"
    #[serde(default)]
    pub pad_out_of_range: OutOfRangePadding,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            page_width: default_page_width(),
            years_before: default_years_around(),
            years_after: default_years_around(),
            pad_out_of_range: OutOfRangePadding::default(),
        }
    }
}

impl GridConfig {
    /// Grid spec around `pivot`; an unknown week start is a misconfiguration
    pub fn to_spec(&self, pivot: NaiveDate) -> crate::Result<GridSpec> {
        let week_start: WeekStart = self.week_start.parse()?;
        let spec = GridSpec::new(
            pivot,
            self.years_before,
            self.years_after,
            week_start,
            self.page_width,
        )
        .with_padding(self.pad_out_of_range);
        spec.validate()?;
        Ok(spec)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// "week" or "day"
    #[serde(default)]
    pub kind: PageKind,
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
    /// Report live drag translations to the owner
    #[serde(default)]
    pub track_scroll_offset: bool,
    #[serde(default)]
    pub commit_anchor: CommitAnchor,
    #[serde(default = "default_scroll_delay")]
    pub scroll_delay_ms: u64,
    #[serde(default = "default_baseline_settle")]
    pub baseline_settle_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            kind: PageKind::default(),
            scroll_enabled: default_true(),
            track_scroll_offset: false,
            commit_anchor: CommitAnchor::default(),
            scroll_delay_ms: default_scroll_delay(),
            baseline_settle_ms: default_baseline_settle(),
        }
    }
}

impl NavigatorConfig {
    pub fn to_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            kind: self.kind,
            scroll_enabled: self.scroll_enabled,
            track_scroll_offset: self.track_scroll_offset,
            commit_anchor: self.commit_anchor,
            scroll_delay: Duration::from_millis(self.scroll_delay_ms),
            baseline_settle: Duration::from_millis(self.baseline_settle_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Which surface renders the strip: "continuous" or "discrete"
    #[serde(default)]
    pub surface: SurfaceKind,
    /// Show event counts under each day
    #[serde(default = "default_true")]
    pub show_events: bool,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            surface: SurfaceKind::default(),
            show_events: default_true(),
            scroll: ScrollConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    #[default]
    Continuous,
    Discrete,
}

/// Easing curve for page animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate page changes
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Columns moved per drag key press
    #[serde(default = "default_drag_step")]
    pub drag_step: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            drag_step: default_drag_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Dragging the strip
    #[serde(default = "default_key_drag_left")]
    pub drag_left: String,
    #[serde(default = "default_key_drag_right")]
    pub drag_right: String,
    #[serde(default = "default_key_release")]
    pub release: String,

    // Programmatic moves
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    #[serde(default = "default_key_prev_day")]
    pub prev_day: String,
    #[serde(default = "default_key_next_day")]
    pub next_day: String,
    #[serde(default = "default_key_today")]
    pub today: String,

    #[serde(default = "default_key_toggle_tracking")]
    pub toggle_tracking: String,
    #[serde(default = "default_key_toggle_kind")]
    pub toggle_kind: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            drag_left: default_key_drag_left(),
            drag_right: default_key_drag_right(),
            release: default_key_release(),
            prev_page: default_key_prev_page(),
            next_page: default_key_next_page(),
            prev_day: default_key_prev_day(),
            next_day: default_key_next_day(),
            today: default_key_today(),
            toggle_tracking: default_key_toggle_tracking(),
            toggle_kind: default_key_toggle_kind(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_drag_left() -> String { "h".to_string() }
fn default_key_drag_right() -> String { "l".to_string() }
fn default_key_release() -> String { "<Space>".to_string() }
fn default_key_prev_page() -> String { "H".to_string() }
fn default_key_next_page() -> String { "L".to_string() }
fn default_key_prev_day() -> String { "k".to_string() }
fn default_key_next_day() -> String { "j".to_string() }
fn default_key_today() -> String { "t".to_string() }
fn default_key_toggle_tracking() -> String { "o".to_string() }
fn default_key_toggle_kind() -> String { "d".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekstrip")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_week_start() -> String {
    "monday".to_string()
}

fn default_page_width() -> usize {
    FULL_WEEK
}

fn default_years_around() -> u32 {
    1
}

fn default_scroll_delay() -> u64 {
    100
}

fn default_baseline_settle() -> u64 {
    500
}

fn default_tick_rate() -> u64 {
    50
}

fn default_animation_duration() -> u64 {
    180
}

fn default_animation_fps() -> u32 {
    60
}

fn default_drag_step() -> u16 {
    4
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        if !(1..=FULL_WEEK).contains(&config.grid.page_width) {
            warn!(
                page_width = config.grid.page_width,
                "grid.page_width must be between 1 and 7"
            );
        }
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/weekstrip/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("weekstrip")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("weekstrip.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
