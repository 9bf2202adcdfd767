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

pub mod command_util;
pub mod consumer_commands;
pub mod target;

use clap::Parser;
use clap::Subcommand;
use rocketmq_error::RocketMQResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::tools_config::ToolsConfig;

/// A trait that defines the execution behavior for commands.
///
/// This trait is designed to be implemented by various command types
/// that require execution logic. The `execute` method runs a command with
/// the resolved tool settings.
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `config`: name server addresses and timeouts, already layered from the config file,
    ///   environment and command line.
    async fn execute(&self, config: &ToolsConfig) -> RocketMQResult<()>;
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Consumer commands")]
    Consumer(consumer_commands::ConsumerCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    async fn execute(&self, config: &ToolsConfig) -> RocketMQResult<()> {
        match self {
            Commands::Consumer(value) => value.execute(config).await,
            Commands::Show(value) => value.execute(config).await,
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Parser)]
pub struct ClassificationTablePrint;

impl ClassificationTablePrint {
    fn render() -> String {
        let commands: Vec<Command> = vec![Command {
            category: "Consumer",
            command: "updateSubGroupList",
            remark: "Update or create subscription group in batch.",
        }];
        let mut table = Table::new(commands);
        table.with(Style::extended());
        table.to_string()
    }
}

impl CommandExecute for ClassificationTablePrint {
    async fn execute(&self, _config: &ToolsConfig) -> RocketMQResult<()> {
        print!("{}", Self::render());
        Ok(())
    }
}
