// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use config::Config;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

/// Environment variable consulted for the name server address list.
pub const NAMESRV_ADDR_ENV: &str = "NAMESRV_ADDR";

const DEFAULT_TIMEOUT_MILLIS: u64 = 3000;
const DEFAULT_CONNECT_TIMEOUT_MILLIS: u64 = 3000;

/// Settings shared by every admin command.
///
/// Resolved in increasing priority: built-in defaults, the optional config
/// file, the `NAMESRV_ADDR` environment variable, then the `-n` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Name server address list, `;` separated
    pub namesrv_addr: Option<String>,
    pub timeout_millis: u64,
    pub connect_timeout_millis: u64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            namesrv_addr: None,
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
            connect_timeout_millis: DEFAULT_CONNECT_TIMEOUT_MILLIS,
        }
    }
}

impl ToolsConfig {
    pub fn load(config_file: Option<&Path>, namesrv_addr_flag: Option<&str>) -> RocketMQResult<Self> {
        let config = match config_file {
            Some(path) => parse_config_file::<ToolsConfig>(path)?,
            None => ToolsConfig::default(),
        };
        Ok(config.with_overrides(std::env::var(NAMESRV_ADDR_ENV).ok().as_deref(), namesrv_addr_flag))
    }

    /// Applies the environment value and then the flag value; blank values are ignored.
    pub fn with_overrides(mut self, namesrv_addr_env: Option<&str>, namesrv_addr_flag: Option<&str>) -> Self {
        for value in [namesrv_addr_env, namesrv_addr_flag].into_iter().flatten() {
            let value = value.trim();
            if !value.is_empty() {
                self.namesrv_addr = Some(value.to_string());
            }
        }
        self
    }
}

pub fn parse_config_file<C>(config_file: &Path) -> RocketMQResult<C>
where
    C: DeserializeOwned,
{
    let cfg = Config::builder()
        .add_source(config::File::from(config_file))
        .build()
        .map_err(|e| RocketMQError::ConfigParseFailed {
            key: "config_file",
            reason: format!("{}: {}", config_file.display(), e),
        })?;
    cfg.try_deserialize::<C>().map_err(|e| RocketMQError::ConfigParseFailed {
        key: "config_file",
        reason: e.to_string(),
    })
}
