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
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use rocketmq_remoting::clients::RemotingClient;
use rocketmq_remoting::code::request_code::RequestCode;
use rocketmq_remoting::code::response_code::ResponseCode;
use rocketmq_remoting::protocol::body::broker_body::cluster_info::ClusterInfo;
use rocketmq_remoting::protocol::body::subscription_group_list::SubscriptionGroupList;
use rocketmq_remoting::protocol::remoting_command::RemotingCommand;
use rocketmq_remoting::protocol::subscription::subscription_group_config::SubscriptionGroupConfig;
use rocketmq_remoting::RemotingSerializable;
use tracing::info;

use crate::admin::mq_admin_ext_async::MQAdminExt;
use crate::admin::service_state::ServiceState;
use crate::tools_config::ToolsConfig;

const ADMIN_EXT_GROUP: &str = "admin_ext_group";
const DEFAULT_INSTANCE_NAME: &str = "DEFAULT";

pub struct DefaultMQAdminExt {
    admin_ext_group: CheetahString,
    instance_name: CheetahString,
    namesrv_addr: Option<CheetahString>,
    timeout_millis: u64,
    connect_timeout_millis: u64,
    service_state: ServiceState,
    remoting_client: Option<RemotingClient>,
}

impl DefaultMQAdminExt {
    pub fn new() -> Self {
        Self::with_config(&ToolsConfig::default())
    }

    pub fn with_config(config: &ToolsConfig) -> Self {
        Self {
            admin_ext_group: CheetahString::from_static_str(ADMIN_EXT_GROUP),
            instance_name: CheetahString::from_static_str(DEFAULT_INSTANCE_NAME),
            namesrv_addr: config.namesrv_addr.as_deref().map(CheetahString::from),
            timeout_millis: config.timeout_millis,
            connect_timeout_millis: config.connect_timeout_millis,
            service_state: ServiceState::CreateJust,
            remoting_client: None,
        }
    }

    pub fn set_instance_name(&mut self, instance_name: CheetahString) {
        self.instance_name = instance_name;
    }

    pub fn instance_name(&self) -> &CheetahString {
        &self.instance_name
    }

    pub fn set_namesrv_addr(&mut self, namesrv_addr: &str) {
        self.namesrv_addr = Some(namesrv_addr.into());
    }

    pub fn namesrv_addr(&self) -> Option<&CheetahString> {
        self.namesrv_addr.as_ref()
    }

    pub fn set_timeout_millis(&mut self, timeout_millis: u64) {
        self.timeout_millis = timeout_millis;
    }

    pub fn service_state(&self) -> ServiceState {
        self.service_state
    }

    fn namesrv_addr_list(&self) -> Vec<CheetahString> {
        self.namesrv_addr
            .as_ref()
            .map(|addrs| {
                addrs
                    .as_str()
                    .split(';')
                    .map(str::trim)
                    .filter(|addr| !addr.is_empty())
                    .map(CheetahString::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn remoting_client(&mut self) -> RocketMQResult<&mut RemotingClient> {
        match self.service_state {
            ServiceState::Running => self.remoting_client.as_mut().ok_or(RocketMQError::ClientNotStarted),
            ServiceState::CreateJust | ServiceState::ShutdownAlready | ServiceState::StartFailed => {
                Err(RocketMQError::ClientNotStarted)
            }
        }
    }
}

impl Default for DefaultMQAdminExt {
    fn default() -> Self {
        Self::new()
    }
}

impl MQAdminExt for DefaultMQAdminExt {
    async fn start(&mut self) -> RocketMQResult<()> {
        match self.service_state {
            ServiceState::CreateJust => {
                self.service_state = ServiceState::StartFailed;
                let namesrv_addr_list = self.namesrv_addr_list();
                if namesrv_addr_list.is_empty() {
                    info!("the adminExt [{}] has no name server address configured", self.admin_ext_group);
                }
                self.remoting_client = Some(RemotingClient::new(namesrv_addr_list, self.connect_timeout_millis));
                self.service_state = ServiceState::Running;
                info!(
                    "the adminExt [{}@{}] start OK",
                    self.admin_ext_group, self.instance_name
                );
                Ok(())
            }
            ServiceState::Running | ServiceState::ShutdownAlready | ServiceState::StartFailed => {
                Err(RocketMQError::ClientAlreadyStarted)
            }
        }
    }

    async fn shutdown(&mut self) {
        match self.service_state {
            ServiceState::CreateJust | ServiceState::ShutdownAlready | ServiceState::StartFailed => {
                // do nothing
            }
            ServiceState::Running => {
                if let Some(mut client) = self.remoting_client.take() {
                    client.shutdown().await;
                }
                self.service_state = ServiceState::ShutdownAlready;
                info!("the adminExt [{}] shutdown OK", self.admin_ext_group);
            }
        }
    }

    async fn examine_broker_cluster_info(&mut self) -> RocketMQResult<ClusterInfo> {
        let timeout_millis = self.timeout_millis;
        let client = self.remoting_client()?;
        let request = RemotingCommand::create_request_command(RequestCode::GetBrokerClusterInfo);
        let response = client.invoke_request(None, request, timeout_millis).await?;
        if ResponseCode::from(response.code()) == ResponseCode::Success {
            if let Some(body) = response.body() {
                return ClusterInfo::decode(body.as_ref());
            }
        }
        Err(RocketMQError::broker_operation_failed(
            "GET_BROKER_CLUSTER_INFO",
            response.code(),
            response.remark().unwrap_or_default(),
        ))
    }

    async fn create_and_update_subscription_group_config_list(
        &mut self,
        broker_addr: CheetahString,
        configs: Vec<SubscriptionGroupConfig>,
    ) -> RocketMQResult<()> {
        let timeout_millis = self.timeout_millis;
        let client = self.remoting_client()?;
        let body = SubscriptionGroupList::new(configs).encode()?;
        let request =
            RemotingCommand::create_request_command(RequestCode::UpdateAndCreateSubscriptionGroupList).set_body(body);
        let response = client.invoke_request(Some(&broker_addr), request, timeout_millis).await?;
        match ResponseCode::from(response.code()) {
            ResponseCode::Success => Ok(()),
            _ => Err(RocketMQError::broker_operation_failed(
                "UPDATE_AND_CREATE_SUBSCRIPTION_GROUP_LIST",
                response.code(),
                response.remark().unwrap_or_default(),
            )
            .with_broker_addr(broker_addr.as_str())),
        }
    }
}
