use tasklet_core::Config;

const TASKLET_CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

pub fn load_config() -> Config {
  Config::from_toml_or_default(
    TASKLET_CONFIG_TOML
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_parses() {
    let cfg = Config::from_toml_str(
      TASKLET_CONFIG_TOML
    )
    .expect("embedded config");
    assert_eq!(cfg, load_config());
    assert_eq!(cfg.storage_key, "todos");
  }
}
