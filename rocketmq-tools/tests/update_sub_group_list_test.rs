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

use std::collections::HashMap;
use std::collections::HashSet;
use std::error::Error;
use std::io::Write;

use cheetah_string::CheetahString;
use clap::Parser;
use rocketmq_error::NetworkError;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use rocketmq_remoting::protocol::body::broker_body::cluster_info::ClusterInfo;
use rocketmq_remoting::protocol::route::route_data_view::BrokerData;
use rocketmq_remoting::protocol::subscription::subscription_group_config::SubscriptionGroupConfig;
use rocketmq_tools::admin::mq_admin_ext_async::MQAdminExt;
use rocketmq_tools::commands::consumer_commands::NoOpReason;
use rocketmq_tools::commands::consumer_commands::UpdateSubGroupListOutcome;
use rocketmq_tools::commands::consumer_commands::UpdateSubGroupListSubCommand;
use tempfile::NamedTempFile;

const GROUPS: &str = r#"[{"groupName":"G1"}, {"groupName":"G2"}]"#;

#[derive(Default)]
struct RecordingAdmin {
    starts: usize,
    shutdowns: usize,
    lookups: usize,
    cluster_info: Option<ClusterInfo>,
    fail_on_call: Option<usize>,
    calls: Vec<(CheetahString, Vec<SubscriptionGroupConfig>)>,
}

impl RecordingAdmin {
    fn with_cluster(cluster_info: ClusterInfo) -> Self {
        Self {
            cluster_info: Some(cluster_info),
            ..Default::default()
        }
    }
}

impl MQAdminExt for RecordingAdmin {
    async fn start(&mut self) -> RocketMQResult<()> {
        self.starts += 1;
        Ok(())
    }

    async fn shutdown(&mut self) {
        self.shutdowns += 1;
    }

    async fn examine_broker_cluster_info(&mut self) -> RocketMQResult<ClusterInfo> {
        self.lookups += 1;
        self.cluster_info
            .clone()
            .ok_or_else(|| NetworkError::connection_failed("127.0.0.1:9876", "connection refused").into())
    }

    async fn create_and_update_subscription_group_config_list(
        &mut self,
        broker_addr: CheetahString,
        configs: Vec<SubscriptionGroupConfig>,
    ) -> RocketMQResult<()> {
        self.calls.push((broker_addr.clone(), configs));
        if self.fail_on_call == Some(self.calls.len()) {
            return Err(RocketMQError::broker_operation_failed(
                "UPDATE_AND_CREATE_SUBSCRIPTION_GROUP_LIST",
                1,
                "disk full",
            )
            .with_broker_addr(broker_addr.as_str()));
        }
        Ok(())
    }
}

fn batch_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn command(args: &[&str]) -> UpdateSubGroupListSubCommand {
    let mut argv = vec!["mqadmin"];
    argv.extend_from_slice(args);
    UpdateSubGroupListSubCommand::try_parse_from(argv).unwrap()
}

/// Cluster `DefaultCluster` with the given masters plus one slave-only group.
fn cluster_with_masters(masters: &[&str]) -> ClusterInfo {
    let mut broker_addr_table = HashMap::new();
    let mut broker_names = HashSet::new();
    for (index, master) in masters.iter().enumerate() {
        let broker_name = CheetahString::from(format!("broker-{index}"));
        broker_addr_table.insert(
            broker_name.clone(),
            BrokerData::new(
                "DefaultCluster".into(),
                broker_name.clone(),
                HashMap::from([(0, CheetahString::from(*master)), (1, format!("slave-{index}:10911").into())]),
                None,
            ),
        );
        broker_names.insert(broker_name);
    }
    let slave_only = CheetahString::from("broker-slave-only");
    broker_addr_table.insert(
        slave_only.clone(),
        BrokerData::new(
            "DefaultCluster".into(),
            slave_only.clone(),
            HashMap::from([(1, CheetahString::from("10.0.0.99:10911"))]),
            None,
        ),
    );
    broker_names.insert(slave_only);
    ClusterInfo::new(
        Some(broker_addr_table),
        Some(HashMap::from([(CheetahString::from("DefaultCluster"), broker_names)])),
    )
}

fn expected_groups() -> Vec<SubscriptionGroupConfig> {
    serde_json::from_str(GROUPS).unwrap()
}

fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn single_broker_receives_the_whole_batch() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-b", "127.0.0.1:10911", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(outcome, UpdateSubGroupListOutcome::Applied(1));
    assert_eq!(admin.calls, vec![(CheetahString::from("127.0.0.1:10911"), expected_groups())]);
    assert_eq!(admin.lookups, 0);
    assert_eq!(admin.starts, 1);
    assert_eq!(admin.shutdowns, 1);
    let out = output(out);
    assert_eq!(
        out,
        "submit batch of group config to 127.0.0.1:10911 success, please check the result later.\n"
    );
    assert!(!out.contains("Usage"));
}

#[tokio::test]
async fn broker_address_and_file_path_are_trimmed() {
    let file = batch_file(GROUPS);
    let padded_path = format!("  {}  ", file.path().to_str().unwrap());
    let cmd = command(&["-b", " 127.0.0.1:10911 ", "-f", &padded_path]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(outcome, UpdateSubGroupListOutcome::Applied(1));
    assert_eq!(admin.calls[0].0, CheetahString::from("127.0.0.1:10911"));
}

#[tokio::test]
async fn cluster_masters_each_receive_the_batch_then_help_is_printed() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-c", "DefaultCluster", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::with_cluster(cluster_with_masters(&["10.0.0.1:10911", "10.0.0.2:10911"]));
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(outcome, UpdateSubGroupListOutcome::Applied(2));
    assert_eq!(admin.lookups, 1);
    assert_eq!(
        admin.calls,
        vec![
            (CheetahString::from("10.0.0.1:10911"), expected_groups()),
            (CheetahString::from("10.0.0.2:10911"), expected_groups()),
        ]
    );
    assert_eq!(admin.shutdowns, 1);

    let out = output(out);
    let first = out
        .find("submit batch of subscription group config to 10.0.0.1:10911 success, please check the result later.")
        .unwrap();
    let second = out
        .find("submit batch of subscription group config to 10.0.0.2:10911 success, please check the result later.")
        .unwrap();
    let help = out.find("mqadmin updateSubGroupList").unwrap();
    assert!(first < second && second < help);
}

#[tokio::test]
async fn missing_file_is_a_silent_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("groups.json");
    let cmd = command(&["-b", "127.0.0.1:10911", "-f", missing.to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(outcome, UpdateSubGroupListOutcome::NoOp(NoOpReason::FileNotFound(missing.clone())));
    assert!(admin.calls.is_empty());
    assert_eq!(admin.starts, 0);
    assert_eq!(admin.shutdowns, 1);
    assert_eq!(output(out), format!("the file path {} does not exists\n", missing.display()));
}

#[tokio::test]
async fn blank_broker_address_with_missing_file_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("groups.json");
    let cmd = command(&["-b", "  ", "-f", missing.to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(outcome, UpdateSubGroupListOutcome::NoOp(NoOpReason::FileNotFound(missing.clone())));
    assert!(admin.calls.is_empty());
    assert_eq!(admin.starts, 0);
    assert_eq!(admin.shutdowns, 1);
    assert_eq!(output(out), format!("the file path {} does not exists\n", missing.display()));
}

#[tokio::test]
async fn blank_broker_address_with_a_batch_fails_before_start() {
    let file = batch_file(r#"[{"groupName":"G1"}]"#);
    let cmd = command(&["-b", "  ", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    assert!(matches!(err.sub_command_cause(), Some(RocketMQError::IllegalArgument(_))));
    assert!(admin.calls.is_empty());
    assert_eq!(admin.starts, 0);
    assert_eq!(admin.shutdowns, 1);
}

#[tokio::test]
async fn empty_batches_are_no_ops() {
    for content in ["[]", "null", "", "  \n"] {
        let file = batch_file(content);
        let cmd = command(&["-c", "DefaultCluster", "-f", file.path().to_str().unwrap()]);
        let mut admin = RecordingAdmin::with_cluster(cluster_with_masters(&["10.0.0.1:10911"]));
        let mut out = Vec::new();

        let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

        assert_eq!(outcome, UpdateSubGroupListOutcome::NoOp(NoOpReason::EmptyBatch), "content {content:?}");
        assert!(admin.calls.is_empty());
        assert_eq!(admin.lookups, 0);
        assert_eq!(admin.shutdowns, 1);
        assert!(out.is_empty());
    }
}

#[tokio::test]
async fn malformed_batch_fails_without_any_call() {
    let file = batch_file(r#"[{"groupName":"G1"}, {"groupName": }]"#);
    let cmd = command(&["-b", "127.0.0.1:10911", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    assert_eq!(err.to_string(), "UpdateSubGroupListSubCommand command failed");
    assert!(matches!(
        err.sub_command_cause(),
        Some(RocketMQError::Serialization(_))
    ));
    assert!(admin.calls.is_empty());
    assert_eq!(admin.shutdowns, 1);
}

#[tokio::test]
async fn cluster_lookup_failure_fails_without_any_call() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-c", "DefaultCluster", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    assert!(matches!(err, RocketMQError::SubCommandFailed { .. }));
    assert!(admin.calls.is_empty());
    assert_eq!(admin.shutdowns, 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn unknown_cluster_fails_without_any_call() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-c", "NoSuchCluster", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::with_cluster(cluster_with_masters(&["10.0.0.1:10911"]));
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    let cause = err.source().unwrap().to_string();
    assert!(cause.contains("NoSuchCluster"), "{cause}");
    assert!(admin.calls.is_empty());
    assert_eq!(admin.shutdowns, 1);
}

#[tokio::test]
async fn failing_broker_aborts_the_remaining_ones() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-c", "DefaultCluster", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::with_cluster(cluster_with_masters(&[
        "10.0.0.1:10911",
        "10.0.0.2:10911",
        "10.0.0.3:10911",
    ]));
    admin.fail_on_call = Some(2);
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    assert!(matches!(err, RocketMQError::SubCommandFailed { .. }));
    let cause = err.sub_command_cause();
    assert!(matches!(
        cause,
        Some(RocketMQError::BrokerOperationFailed { broker_addr: Some(addr), .. }) if addr == "10.0.0.2:10911"
    ));
    assert_eq!(admin.calls.len(), 2);
    assert_eq!(admin.shutdowns, 1);

    let out = output(out);
    assert!(out.contains("10.0.0.1:10911 success"));
    assert!(!out.contains("10.0.0.2:10911 success"));
    assert!(!out.contains("mqadmin updateSubGroupList"));
}

#[tokio::test]
async fn single_broker_failure_is_wrapped() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-b", "127.0.0.1:10911", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin {
        fail_on_call: Some(1),
        ..Default::default()
    };
    let mut out = Vec::new();

    let err = cmd.execute_with(&mut admin, &mut out).await.unwrap_err();

    assert!(matches!(err, RocketMQError::SubCommandFailed { .. }));
    assert_eq!(admin.calls.len(), 1);
    assert_eq!(admin.shutdowns, 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn cluster_without_masters_prints_diagnostic_and_help() {
    let file = batch_file(GROUPS);
    let cmd = command(&["-c", "DefaultCluster", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::with_cluster(cluster_with_masters(&[]));
    let mut out = Vec::new();

    let outcome = cmd.execute_with(&mut admin, &mut out).await.unwrap();

    assert_eq!(
        outcome,
        UpdateSubGroupListOutcome::NoOp(NoOpReason::NoMasterBroker("DefaultCluster".into()))
    );
    assert!(admin.calls.is_empty());
    assert_eq!(admin.shutdowns, 1);
    let out = output(out);
    assert!(out.starts_with("no master broker found in cluster DefaultCluster\n"));
    assert!(out.contains("mqadmin updateSubGroupList"));
}

#[tokio::test]
async fn records_are_forwarded_untouched() {
    let content = r#"[{"groupName":"G1","retryMaxTimes":16,"consumeEnable":true,"attributes":{"k":"v"}}]"#;
    let file = batch_file(content);
    let cmd = command(&["-b", "127.0.0.1:10911", "-f", file.path().to_str().unwrap()]);
    let mut admin = RecordingAdmin::default();
    let mut out = Vec::new();

    cmd.execute_with(&mut admin, &mut out).await.unwrap();

    let forwarded = serde_json::to_string(&admin.calls[0].1).unwrap();
    assert_eq!(forwarded, content);
}
