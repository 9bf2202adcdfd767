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

use cheetah_string::CheetahString;
use rocketmq_error::RocketMQResult;
use rocketmq_error::ToolsError;
use rocketmq_remoting::protocol::body::broker_body::cluster_info::ClusterInfo;

pub struct CommandUtil;

impl CommandUtil {
    /// Master broker addresses of every broker group in `cluster_name`.
    ///
    /// Groups are visited in broker-name order; a group without a master is
    /// skipped.
    pub fn fetch_master_addr_by_cluster_name(
        cluster_info: &ClusterInfo,
        cluster_name: &str,
    ) -> RocketMQResult<Vec<CheetahString>> {
        let cluster_addr_table = cluster_info.cluster_addr_table.as_ref().ok_or_else(|| {
            ToolsError::cluster_invalid("CommandUtil: No cluster address table available from nameserver.")
        })?;
        let broker_names = cluster_addr_table
            .get(cluster_name)
            .ok_or_else(|| ToolsError::cluster_not_found(cluster_name))?;
        let broker_addr_table = cluster_info.broker_addr_table.as_ref().ok_or_else(|| {
            ToolsError::cluster_invalid("CommandUtil: No broker address table available from nameserver.")
        })?;

        let mut broker_names: Vec<&CheetahString> = broker_names.iter().collect();
        broker_names.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let mut master_addrs = Vec::new();
        for broker_name in broker_names {
            if let Some(broker_data) = broker_addr_table.get(broker_name) {
                if let Some(master_addr) = broker_data.master_addr() {
                    master_addrs.push(master_addr.clone());
                }
            }
        }
        Ok(master_addrs)
    }
}
