//! Environment variables override file configuration.

use figment::Jail;
use pretty_assertions::assert_eq;
use settle_config::SettleConfig;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SETTLE_RISK__MAX_ALERTS", "3");
        jail.set_env("SETTLE_CALENDAR__WINDOW_DAYS", "7");

        let config = SettleConfig::load().expect("config loads");
        assert_eq!(config.risk.max_alerts, 3);
        assert_eq!(config.calendar.window_days, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".settle")?;
        jail.create_file(".settle/config.toml", "[risk]\nmax_alerts = 5\n")?;
        jail.set_env("SETTLE_RISK__MAX_ALERTS", "8");

        let config = SettleConfig::load().expect("config loads");
        assert_eq!(config.risk.max_alerts, 8);
        Ok(())
    });
}

#[test]
fn env_accepts_keyword_arrays() {
    Jail::expect_with(|jail| {
        jail.set_env("SETTLE_RISK__LOAN_TASK_KEYWORDS", r#"["bank", "mortgage"]"#);

        let config = SettleConfig::load().expect("config loads");
        assert_eq!(config.risk.loan_task_keywords, ["bank", "mortgage"]);
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "SETTLE_GENERAL__DEFAULT_FORMAT=raw\n")?;

        let config = SettleConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}
