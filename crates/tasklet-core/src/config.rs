use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

pub const DEFAULT_STORAGE_KEY: &str =
  "todos";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 =
  3_000;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct Config {
  /// Key the task list is stored
  /// under.
  pub storage_key:       String,
  /// How long a transient message
  /// stays visible.
  pub notice_timeout_ms: u32
}

impl Default for Config {
  fn default() -> Self {
    Self {
      storage_key:
        DEFAULT_STORAGE_KEY
          .to_string(),
      notice_timeout_ms:
        DEFAULT_NOTICE_TIMEOUT_MS
    }
  }
}

impl Config {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Config =
      toml::from_str(text).context(
        "failed to parse tasklet \
         config"
      )?;

    if cfg.storage_key.trim().is_empty()
    {
      warn!(
        "empty storage_key; using \
         default"
      );
      cfg.storage_key =
        DEFAULT_STORAGE_KEY
          .to_string();
    }

    if cfg.notice_timeout_ms == 0 {
      warn!(
        "notice_timeout_ms must be \
         positive; using default"
      );
      cfg.notice_timeout_ms =
        DEFAULT_NOTICE_TIMEOUT_MS;
    }

    debug!(
      storage_key = %cfg.storage_key,
      notice_timeout_ms = cfg.notice_timeout_ms,
      "loaded config"
    );
    Ok(cfg)
  }

  /// Parses `text`, falling back to
  /// defaults when it is unusable.
  pub fn from_toml_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "invalid config; using \
           defaults"
        );
        Self::default()
      }
    }
  }
}
