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

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

/// Broker id of the master within a broker group.
pub const MASTER_ID: u64 = 0;

/// Addresses of one broker group (a master and its replicas) inside a cluster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrokerData {
    #[serde(default)]
    cluster: CheetahString,
    #[serde(rename = "brokerName")]
    broker_name: CheetahString,
    #[serde(rename = "brokerAddrs", default)]
    broker_addrs: HashMap<u64 /* broker id */, CheetahString /* broker ip */>,
    #[serde(rename = "zoneName", default)]
    zone_name: Option<CheetahString>,
    #[serde(rename = "enableActingMaster", default)]
    enable_acting_master: bool,
}

impl BrokerData {
    pub fn new(
        cluster: CheetahString,
        broker_name: CheetahString,
        broker_addrs: HashMap<u64, CheetahString>,
        zone_name: Option<CheetahString>,
    ) -> BrokerData {
        BrokerData {
            cluster,
            broker_name,
            broker_addrs,
            zone_name,
            enable_acting_master: false,
        }
    }

    #[inline]
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    #[inline]
    pub fn broker_name(&self) -> &CheetahString {
        &self.broker_name
    }

    #[inline]
    pub fn broker_addrs(&self) -> &HashMap<u64, CheetahString> {
        &self.broker_addrs
    }

    #[inline]
    pub fn master_addr(&self) -> Option<&CheetahString> {
        self.broker_addrs.get(&MASTER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broker_data_new_initializes_correctly() {
        let mut broker_addrs = HashMap::new();
        broker_addrs.insert(0u64, CheetahString::from_static_str("10.0.0.1:10911"));
        broker_addrs.insert(1u64, CheetahString::from_static_str("10.0.0.2:10911"));

        let broker_data = BrokerData::new(
            CheetahString::from_static_str("DefaultCluster"),
            CheetahString::from_static_str("broker-a"),
            broker_addrs,
            None,
        );

        assert_eq!(broker_data.cluster(), "DefaultCluster");
        assert_eq!(broker_data.broker_name().as_str(), "broker-a");
        assert_eq!(broker_data.broker_addrs().len(), 2);
        assert!(broker_data.zone_name.is_none());
        assert!(!broker_data.enable_acting_master);
        assert_eq!(broker_data.master_addr().map(|a| a.as_str()), Some("10.0.0.1:10911"));
    }

    #[test]
    fn broker_data_without_master() {
        let json = r#"{"cluster":"c","brokerName":"broker-b","brokerAddrs":{"1":"10.0.0.3:10911"}}"#;
        let broker_data: BrokerData = serde_json::from_str(json).unwrap();
        assert!(broker_data.master_addr().is_none());
        assert_eq!(broker_data.broker_addrs().len(), 1);
    }
}
