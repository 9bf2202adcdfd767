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

use serde::Deserialize;
use serde::Serialize;

use crate::protocol::subscription::subscription_group_config::SubscriptionGroupConfig;
use crate::protocol::RemotingSerializable;

/// Request body of `UpdateAndCreateSubscriptionGroupList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupList {
    group_config_list: Vec<SubscriptionGroupConfig>,
}

impl SubscriptionGroupList {
    pub fn new(group_config_list: Vec<SubscriptionGroupConfig>) -> Self {
        Self { group_config_list }
    }

    pub fn group_config_list(&self) -> &[SubscriptionGroupConfig] {
        &self.group_config_list
    }
}

impl RemotingSerializable for SubscriptionGroupList {
    type Output = SubscriptionGroupList;
}
