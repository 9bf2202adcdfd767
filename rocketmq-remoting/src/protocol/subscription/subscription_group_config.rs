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
use serde_json::Map;
use serde_json::Value;

/// One consumer group's subscription settings, as the broker defines them.
///
/// The admin tools forward these records without looking inside: any JSON
/// object is accepted, and its keys are kept in their original order so the
/// broker receives exactly what the operator wrote. Field-level validation
/// (retry counts, queue numbers, permissions) belongs to the broker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionGroupConfig(Map<String, Value>);

impl SubscriptionGroupConfig {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        SubscriptionGroupConfig(fields)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
