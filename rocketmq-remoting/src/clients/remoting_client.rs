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
use std::time::Duration;

use cheetah_string::CheetahString;
use futures::SinkExt;
use futures::StreamExt;
use rocketmq_error::NetworkError;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::codec::remoting_command_codec::RemotingCommandCodec;
use crate::protocol::remoting_command::RemotingCommand;

type Connection = Framed<TcpStream, RemotingCommandCodec>;

/// Request/response client over the remoting protocol.
///
/// Keeps at most one connection per remote address and issues one request at
/// a time on it. A connection that fails while sending or receiving is
/// dropped and re-established on the next call.
pub struct RemotingClient {
    namesrv_addr_list: Vec<CheetahString>,
    connect_timeout_millis: u64,
    connections: HashMap<CheetahString, Connection>,
}

impl RemotingClient {
    pub fn new(namesrv_addr_list: Vec<CheetahString>, connect_timeout_millis: u64) -> Self {
        Self {
            namesrv_addr_list,
            connect_timeout_millis,
            connections: HashMap::new(),
        }
    }

    #[inline]
    pub fn namesrv_addr_list(&self) -> &[CheetahString] {
        &self.namesrv_addr_list
    }

    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Sends `request` and waits up to `timeout_millis` for its response.
    ///
    /// With `addr = None` the request goes to the name servers, tried in the
    /// configured order until one accepts the connection.
    pub async fn invoke_request(
        &mut self,
        addr: Option<&CheetahString>,
        request: RemotingCommand,
        timeout_millis: u64,
    ) -> RocketMQResult<RemotingCommand> {
        match addr {
            Some(addr) => self.invoke_addr(addr, request, timeout_millis).await,
            None => self.invoke_namesrv(request, timeout_millis).await,
        }
    }

    async fn invoke_namesrv(&mut self, request: RemotingCommand, timeout_millis: u64) -> RocketMQResult<RemotingCommand> {
        if self.namesrv_addr_list.is_empty() {
            return Err(RocketMQError::nameserver_config_invalid(
                "no name server address configured, use -n or NAMESRV_ADDR",
            ));
        }
        let mut last_error = None;
        for addr in self.namesrv_addr_list.clone() {
            match self.invoke_addr(&addr, request.clone(), timeout_millis).await {
                Err(RocketMQError::Network(
                    error @ (NetworkError::ConnectionFailed { .. } | NetworkError::ConnectionTimeout { .. }),
                )) => {
                    warn!("name server {} not reachable: {}", addr, error);
                    last_error = Some(error);
                }
                result => return result,
            }
        }
        Err(match last_error {
            Some(error) => error.into(),
            None => RocketMQError::nameserver_config_invalid("no name server address configured"),
        })
    }

    async fn invoke_addr(
        &mut self,
        addr: &CheetahString,
        request: RemotingCommand,
        timeout_millis: u64,
    ) -> RocketMQResult<RemotingCommand> {
        let connection = self.get_or_create_connection(addr).await?;
        let result = match timeout(
            Duration::from_millis(timeout_millis),
            Self::exchange(connection, addr, request),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(NetworkError::request_timeout(addr.as_str(), timeout_millis).into()),
        };
        if result.is_err() {
            debug!("dropping connection to {}", addr);
            self.connections.remove(addr);
        }
        result
    }

    async fn exchange(
        connection: &mut Connection,
        addr: &CheetahString,
        request: RemotingCommand,
    ) -> RocketMQResult<RemotingCommand> {
        let opaque = request.opaque();
        connection
            .send(request)
            .await
            .map_err(|e| NetworkError::send_failed(addr.as_str(), e.to_string()))?;
        loop {
            match connection.next().await {
                Some(Ok(response)) if response.is_response_type() && response.opaque() == opaque => {
                    return Ok(response);
                }
                Some(Ok(other)) => {
                    debug!("ignoring unrelated command from {}: {}", addr, other);
                }
                Some(Err(e)) => {
                    return Err(NetworkError::receive_failed(addr.as_str(), e.to_string()).into());
                }
                None => return Err(NetworkError::connection_closed(addr.as_str()).into()),
            }
        }
    }

    async fn get_or_create_connection(&mut self, addr: &CheetahString) -> RocketMQResult<&mut Connection> {
        if !self.connections.contains_key(addr) {
            let connect = TcpStream::connect(addr.as_str());
            let stream = match timeout(Duration::from_millis(self.connect_timeout_millis), connect).await {
                Ok(Ok(stream)) => stream,
                Ok(Err(e)) => return Err(NetworkError::connection_failed(addr.as_str(), e.to_string()).into()),
                Err(_) => {
                    return Err(NetworkError::connection_timeout(addr.as_str(), self.connect_timeout_millis).into());
                }
            };
            if let Err(e) = stream.set_nodelay(true) {
                debug!("set TCP_NODELAY on {} failed: {}", addr, e);
            }
            info!("connected to {}", addr);
            self.connections
                .insert(addr.clone(), Framed::new(stream, RemotingCommandCodec::new()));
        }
        self.connections
            .get_mut(addr)
            .ok_or_else(|| NetworkError::connection_closed(addr.as_str()).into())
    }

    /// Closes every cached connection. Calling it again is a no-op.
    pub async fn shutdown(&mut self) {
        for (addr, mut connection) in self.connections.drain() {
            if let Err(e) = connection.close().await {
                debug!("closing connection to {} failed: {}", addr, e);
            }
        }
    }
}
