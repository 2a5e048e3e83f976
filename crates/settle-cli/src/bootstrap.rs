use anyhow::Context;
use settle_config::SettleConfig;

/// Load layered configuration, picking up a `.env` in the working directory.
pub fn load_config() -> anyhow::Result<SettleConfig> {
    SettleConfig::load_with_dotenv().context("failed to load settle configuration")
}
