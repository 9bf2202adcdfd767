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

use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use tracing::debug;

use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::tools_config::ToolsConfig;

const BIN_NAME: &str = "rocketmq-admin-cli-rust";

#[derive(Parser)]
#[command(name = "rocketmq-admin-cli-rust")]
#[command(about = "Rocketmq Rust admin commands", long_about = None, author="mxsm")]
pub struct RocketMQCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    /// The name server address list
    #[arg(
        short = 'n',
        long = "namesrvAddr",
        global = true,
        help = "Name server address list, eg: '192.168.0.1:9876;192.168.0.2:9876'"
    )]
    namesrv_addr: Option<String>,

    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Tool config file (toml, yaml, json, ...)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl RocketMQCli {
    pub async fn handle(&self) -> RocketMQResult<()> {
        // Handle completion generation
        if let Some(shell) = &self.completion {
            let mut cmd = RocketMQCli::command();

            match shell.to_lowercase().as_str() {
                "bash" => {
                    generate(Bash, &mut cmd, BIN_NAME, &mut std::io::stdout());
                }
                "zsh" => {
                    generate(Zsh, &mut cmd, BIN_NAME, &mut std::io::stdout());
                }
                "fish" => {
                    generate(Fish, &mut cmd, BIN_NAME, &mut std::io::stdout());
                }
                _ => {
                    return Err(RocketMQError::illegal_argument(format!(
                        "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                        shell
                    )));
                }
            }
            return Ok(());
        }

        // Handle regular commands
        match &self.commands {
            Some(commands) => {
                let config = ToolsConfig::load(self.config.as_deref(), self.namesrv_addr.as_deref())?;
                debug!("resolved tools config: {:?}", config);
                commands.execute(&config).await
            }
            None => Err(RocketMQError::illegal_argument(
                "No command specified. Use --help for usage information.",
            )),
        }
    }
}
