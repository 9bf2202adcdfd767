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

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::ArgGroup;
use clap::CommandFactory;
use clap::Parser;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use rocketmq_error::SerializationError;
use rocketmq_remoting::protocol::subscription::subscription_group_config::SubscriptionGroupConfig;
use tracing::debug;
use tracing::info;

use crate::admin::default_mq_admin_ext::DefaultMQAdminExt;
use crate::admin::mq_admin_ext_async::MQAdminExt;
use crate::commands::command_util::CommandUtil;
use crate::commands::target::Target;
use crate::commands::CommandExecute;
use crate::tools_config::ToolsConfig;

const COMMAND_NAME: &str = "UpdateSubGroupListSubCommand";
const HELP_COMMAND_NAME: &str = "mqadmin updateSubGroupList";

#[derive(Debug, Clone, Parser)]
#[command(group(ArgGroup::new("target").required(true).args(&["broker_addr", "cluster_name"])))]
pub struct UpdateSubGroupListSubCommand {
    #[arg(
        short = 'b',
        long = "brokerAddr",
        conflicts_with = "cluster_name",
        help = "create groups to which broker"
    )]
    broker_addr: Option<String>,

    #[arg(
        short = 'c',
        long = "clusterName",
        conflicts_with = "broker_addr",
        help = "create groups to which cluster"
    )]
    cluster_name: Option<String>,

    #[arg(
        short = 'f',
        long = "filename",
        alias = "file",
        required = true,
        help = "Path to a file with a list of SubscriptionGroupConfig in json format"
    )]
    file: String,
}

/// Why a run finished without touching any broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    FileNotFound(PathBuf),
    EmptyBatch,
    NoMasterBroker(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSubGroupListOutcome {
    /// The batch was accepted by this many brokers.
    Applied(usize),
    NoOp(NoOpReason),
}

impl UpdateSubGroupListSubCommand {
    /// Runs the command on `admin`, writing status lines to `out`.
    ///
    /// `admin` is shut down before returning whatever the result. Failures are
    /// wrapped in [`RocketMQError::SubCommandFailed`] with the original error
    /// as source.
    pub async fn execute_with<A, W>(&self, admin: &mut A, out: &mut W) -> RocketMQResult<UpdateSubGroupListOutcome>
    where
        A: MQAdminExt,
        W: Write,
    {
        let result = self.submit(admin, out).await;
        MQAdminExt::shutdown(admin).await;
        result.map_err(|e| RocketMQError::sub_command_failed(COMMAND_NAME, e))
    }

    async fn submit<A, W>(&self, admin: &mut A, out: &mut W) -> RocketMQResult<UpdateSubGroupListOutcome>
    where
        A: MQAdminExt,
        W: Write,
    {
        let file_path = Path::new(self.file.trim());
        if !matches!(tokio::fs::try_exists(file_path).await, Ok(true)) {
            writeln!(out, "the file path {} does not exists", file_path.display())?;
            return Ok(UpdateSubGroupListOutcome::NoOp(NoOpReason::FileNotFound(
                file_path.to_path_buf(),
            )));
        }
        let group_configs = parse_group_configs(&tokio::fs::read(file_path).await?)?;
        if group_configs.is_empty() {
            info!("{} contains no subscription group config, nothing to submit", file_path.display());
            return Ok(UpdateSubGroupListOutcome::NoOp(NoOpReason::EmptyBatch));
        }

        let target = Target::new(&self.cluster_name, &self.broker_addr)?;
        MQAdminExt::start(admin).await?;

        match target {
            Target::BrokerAddr(broker_addr) => {
                admin
                    .create_and_update_subscription_group_config_list(broker_addr.as_str().into(), group_configs)
                    .await?;
                writeln!(
                    out,
                    "submit batch of group config to {} success, please check the result later.",
                    broker_addr
                )?;
                Ok(UpdateSubGroupListOutcome::Applied(1))
            }
            Target::ClusterName(cluster_name) => {
                let cluster_info = admin.examine_broker_cluster_info().await?;
                let master_set = CommandUtil::fetch_master_addr_by_cluster_name(&cluster_info, &cluster_name)?;
                debug!("cluster {} resolved to masters {:?}", cluster_name, master_set);

                let outcome = if master_set.is_empty() {
                    writeln!(out, "no master broker found in cluster {}", cluster_name)?;
                    UpdateSubGroupListOutcome::NoOp(NoOpReason::NoMasterBroker(cluster_name))
                } else {
                    // The first failing broker aborts the remaining ones.
                    for broker_addr in &master_set {
                        admin
                            .create_and_update_subscription_group_config_list(
                                broker_addr.clone(),
                                group_configs.clone(),
                            )
                            .await?;
                        writeln!(
                            out,
                            "submit batch of subscription group config to {} success, please check the result \
                             later.",
                            broker_addr
                        )?;
                    }
                    UpdateSubGroupListOutcome::Applied(master_set.len())
                };
                writeln!(out, "{}", Self::usage_help())?;
                Ok(outcome)
            }
        }
    }

    /// Help text of this command as printed after a cluster-wide submit.
    pub fn usage_help() -> String {
        Self::command().name(HELP_COMMAND_NAME).render_help().to_string()
    }
}

/// Parses a batch file body: a JSON array of config objects.
///
/// Blank content and `null` are an empty batch. Any malformed element fails
/// the whole batch.
pub fn parse_group_configs(content: &[u8]) -> RocketMQResult<Vec<SubscriptionGroupConfig>> {
    let content = std::str::from_utf8(content)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<SubscriptionGroupConfig>>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|e| SerializationError::decode_failed("JSON", e.to_string()).into())
}

impl CommandExecute for UpdateSubGroupListSubCommand {
    async fn execute(&self, config: &ToolsConfig) -> RocketMQResult<()> {
        let mut default_mq_admin_ext = DefaultMQAdminExt::with_config(config);
        let instance_name = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        default_mq_admin_ext.set_instance_name(instance_name.to_string().into());

        let mut stdout = std::io::stdout();
        let outcome = self.execute_with(&mut default_mq_admin_ext, &mut stdout).await?;
        debug!("{} finished: {:?}", COMMAND_NAME, outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_arguments() {
        let broker_address = "127.0.0.1:10911";
        let input_file_name = "groups.json";

        let args = vec!["mqadmin", "-b", broker_address, "-f", input_file_name];

        let cmd = UpdateSubGroupListSubCommand::try_parse_from(args).unwrap();
        assert_eq!(Some(broker_address), cmd.broker_addr.as_deref());
        assert!(cmd.cluster_name.is_none());
        assert_eq!(input_file_name, cmd.file);
    }

    #[test]
    fn test_cluster_arguments_with_long_names() {
        let args = vec![
            "mqadmin",
            "--clusterName",
            "DefaultCluster",
            "--filename",
            "groups.json",
        ];

        let cmd = UpdateSubGroupListSubCommand::try_parse_from(args).unwrap();
        assert_eq!(Some("DefaultCluster"), cmd.cluster_name.as_deref());
        assert!(cmd.broker_addr.is_none());
    }

    #[test]
    fn target_flags_are_exclusive_and_required() {
        let both = vec!["mqadmin", "-b", "127.0.0.1:10911", "-c", "DefaultCluster", "-f", "g.json"];
        assert!(UpdateSubGroupListSubCommand::try_parse_from(both).is_err());

        let neither = vec!["mqadmin", "-f", "g.json"];
        assert!(UpdateSubGroupListSubCommand::try_parse_from(neither).is_err());
    }

    #[test]
    fn filename_is_required() {
        let args = vec!["mqadmin", "-b", "127.0.0.1:10911"];
        assert!(UpdateSubGroupListSubCommand::try_parse_from(args).is_err());
    }

    #[test]
    fn usage_help_names_the_command() {
        let help = UpdateSubGroupListSubCommand::usage_help();
        assert!(help.contains("mqadmin updateSubGroupList"));
        assert!(help.contains("--brokerAddr"));
        assert!(help.contains("--clusterName"));
        assert!(help.contains("--filename"));
    }

    #[test]
    fn parse_keeps_record_order() {
        let configs = parse_group_configs(br#"[{"groupName":"G1"},{"groupName":"G2"}]"#).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].as_map()["groupName"], "G1");
        assert_eq!(configs[1].as_map()["groupName"], "G2");
    }

    #[test]
    fn parse_blank_null_and_empty_are_empty_batch() {
        assert!(parse_group_configs(b"").unwrap().is_empty());
        assert!(parse_group_configs(b"  \n").unwrap().is_empty());
        assert!(parse_group_configs(b"null").unwrap().is_empty());
        assert!(parse_group_configs(b"[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_malformed_batches() {
        assert!(parse_group_configs(br#"[{"groupName":"G1"},"#).is_err());
        assert!(parse_group_configs(br#"{"groupName":"G1"}"#).is_err());
        assert!(parse_group_configs(br#"[{"groupName":"G1"}, 42]"#).is_err());
    }
}
