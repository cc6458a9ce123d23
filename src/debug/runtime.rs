use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::RwLock;

/// Prefix shared by every environment variable read by [`RuntimeToggles::from_env`].
pub const ENV_PREFIX: &str = "SVGPAINT_";

/// Upper bound on a single pixmap allocation when `SVGPAINT_MAX_PIXMAP_BYTES` is unset.
pub const DEFAULT_MAX_PIXMAP_BYTES: u64 = 512 * 1024 * 1024;

/// Sampling quality used when a pattern tile is resampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingQuality {
  Nearest,
  #[default]
  Bilinear,
  Bicubic,
}

impl SamplingQuality {
  fn parse(value: &str) -> Option<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "nearest" => Some(Self::Nearest),
      "bilinear" => Some(Self::Bilinear),
      "bicubic" => Some(Self::Bicubic),
      _ => None,
    }
  }
}

/// Parsed runtime configuration toggles sourced from `SVGPAINT_*` environment variables.
///
/// Values are captured once (via [`RuntimeToggles::from_env`]) and then reused by every canvas.
/// Callers can also construct instances manually to override environment-derived behavior when
/// embedding the library.
#[derive(Debug, Clone, Default)]
pub struct RuntimeToggles {
  raw: HashMap<String, String>,
  config: PaintConfig,
}

impl RuntimeToggles {
  /// Parse all `SVGPAINT_*` environment variables into a toggle map.
  pub fn from_env() -> Self {
    let raw = std::env::vars()
      .filter(|(k, _)| k.starts_with(ENV_PREFIX))
      .collect::<HashMap<_, _>>();
    Self::from_map(raw)
  }

  /// Construct a toggle set from a provided map of key/value pairs.
  pub fn from_map(raw: HashMap<String, String>) -> Self {
    let config = PaintConfig::from_env_map(&raw);
    Self { raw, config }
  }

  /// Returns the typed configuration derived from the raw toggles.
  pub fn config(&self) -> &PaintConfig {
    &self.config
  }

  /// Returns the raw string value for a toggle, if set.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.raw.get(key).map(String::as_str)
  }

}

fn matches_ignore_case(value: &str, candidates: &[&str]) -> bool {
  let lower = value.trim().to_ascii_lowercase();
  candidates.iter().any(|c| lower == *c)
}

fn truthy(raw: Option<&String>, default: bool) -> bool {
  raw
    .map(|v| !matches_ignore_case(v, &["0", "false", "off"]))
    .unwrap_or(default)
}

/// Typed view over the toggles the paint layer understands.
#[derive(Debug, Clone)]
pub struct PaintConfig {
  /// Allocation ceiling for owned surfaces and scratch pixmaps.
  pub max_pixmap_bytes: u64,
  /// Resampling quality for pattern shaders.
  pub pattern_quality: SamplingQuality,
  /// Whether fill and stroke paints are anti-aliased.
  pub anti_alias: bool,
  /// Emit a debug log line for every draw call.
  pub log_paint: bool,
}

impl Default for PaintConfig {
  fn default() -> Self {
    Self {
      max_pixmap_bytes: DEFAULT_MAX_PIXMAP_BYTES,
      pattern_quality: SamplingQuality::default(),
      anti_alias: true,
      log_paint: false,
    }
  }
}

impl PaintConfig {
  pub fn from_env_map(raw: &HashMap<String, String>) -> Self {
    let defaults = Self::default();
    Self {
      max_pixmap_bytes: raw
        .get("SVGPAINT_MAX_PIXMAP_BYTES")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(defaults.max_pixmap_bytes),
      pattern_quality: raw
        .get("SVGPAINT_PATTERN_QUALITY")
        .and_then(|v| SamplingQuality::parse(v))
        .unwrap_or(defaults.pattern_quality),
      anti_alias: truthy(raw.get("SVGPAINT_ANTI_ALIAS"), defaults.anti_alias),
      log_paint: truthy(raw.get("SVGPAINT_LOG_PAINT"), defaults.log_paint),
    }
  }
}

static DEFAULT_TOGGLES: OnceLock<Arc<RuntimeToggles>> = OnceLock::new();
static ACTIVE_TOGGLES: OnceLock<RwLock<Arc<RuntimeToggles>>> = OnceLock::new();

/// Returns the currently active runtime toggles.
///
/// Defaults to `RuntimeToggles::from_env()` if no overrides are installed.
pub fn runtime_toggles() -> Arc<RuntimeToggles> {
  let lock = ACTIVE_TOGGLES.get_or_init(|| RwLock::new(default_toggles()));
  match lock.read() {
    Ok(guard) => guard.clone(),
    Err(poisoned) => poisoned.into_inner().clone(),
  }
}

fn default_toggles() -> Arc<RuntimeToggles> {
  DEFAULT_TOGGLES
    .get_or_init(|| Arc::new(RuntimeToggles::from_env()))
    .clone()
}

/// Guard that restores the previous active toggles when dropped.
pub struct RuntimeTogglesGuard {
  previous: Arc<RuntimeToggles>,
}

impl Drop for RuntimeTogglesGuard {
  fn drop(&mut self) {
    if let Some(lock) = ACTIVE_TOGGLES.get() {
      if let Ok(mut guard) = lock.write() {
        *guard = self.previous.clone();
      }
    }
  }
}

/// Install the provided toggles as the active set for the duration of the returned guard.
pub fn set_runtime_toggles(toggles: Arc<RuntimeToggles>) -> RuntimeTogglesGuard {
  let lock = ACTIVE_TOGGLES.get_or_init(|| RwLock::new(default_toggles()));
  let mut guard = match lock.write() {
    Ok(guard) => guard,
    Err(poisoned) => poisoned.into_inner(),
  };
  let previous = std::mem::replace(&mut *guard, toggles);
  RuntimeTogglesGuard { previous }
}

/// Convenience helper to run a closure with a temporary toggles override.
pub fn with_runtime_toggles<T>(toggles: Arc<RuntimeToggles>, f: impl FnOnce() -> T) -> T {
  let guard = set_runtime_toggles(toggles);
  let result = f();
  drop(guard);
  result
}
