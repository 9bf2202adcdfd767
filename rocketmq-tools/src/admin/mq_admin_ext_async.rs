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
use rocketmq_remoting::protocol::body::broker_body::cluster_info::ClusterInfo;
use rocketmq_remoting::protocol::subscription::subscription_group_config::SubscriptionGroupConfig;

/// Admin operations against name servers and brokers.
///
/// Implementations own a session with an explicit lifecycle: `start` must
/// succeed before any remote call, and `shutdown` releases it. `shutdown`
/// never fails and may be called on a session that was never started or was
/// already shut down.
#[trait_variant::make(MQAdminExt: Send)]
pub trait MQAdminExtLocal: Sync {
    async fn start(&mut self) -> RocketMQResult<()>;

    async fn shutdown(&mut self);

    /// Fetches cluster topology from the name server.
    async fn examine_broker_cluster_info(&mut self) -> RocketMQResult<ClusterInfo>;

    /// Submits a batch of subscription group configs to one broker.
    ///
    /// Success means the broker accepted the batch; the groups are applied
    /// asynchronously on the broker side.
    async fn create_and_update_subscription_group_config_list(
        &mut self,
        broker_addr: CheetahString,
        configs: Vec<SubscriptionGroupConfig>,
    ) -> RocketMQResult<()>;
}
