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

mod update_sub_group_list_sub_command;

use clap::Subcommand;
use rocketmq_error::RocketMQResult;
pub use update_sub_group_list_sub_command::NoOpReason;
pub use update_sub_group_list_sub_command::UpdateSubGroupListOutcome;
pub use update_sub_group_list_sub_command::UpdateSubGroupListSubCommand;

use crate::commands::CommandExecute;
use crate::tools_config::ToolsConfig;

#[derive(Subcommand)]
pub enum ConsumerCommands {
    #[command(
        name = "updateSubGroupList",
        about = "Update or create subscription group in batch",
        long_about = r#"Read a JSON array of subscription group configs from a file and submit it to one
broker (-b) or to every master broker of a cluster (-c). The broker applies the batch
asynchronously, check the result later."#
    )]
    UpdateSubGroupList(UpdateSubGroupListSubCommand),
}

impl CommandExecute for ConsumerCommands {
    async fn execute(&self, config: &ToolsConfig) -> RocketMQResult<()> {
        match self {
            ConsumerCommands::UpdateSubGroupList(value) => value.execute(config).await,
        }
    }
}
