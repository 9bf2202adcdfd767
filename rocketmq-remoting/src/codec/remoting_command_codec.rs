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

use bytes::BytesMut;
use rocketmq_error::RocketMQError;
use tokio_util::codec::Decoder;
use tokio_util::codec::Encoder;

use crate::protocol::remoting_command::RemotingCommand;

/// Frames `RemotingCommand`s on a byte stream.
///
/// Decoding yields `Ok(None)` until a whole frame is buffered; a frame whose
/// header length exceeds the frame size, or whose header is not JSON, is an
/// error and the connection should be dropped.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RemotingCommandCodec(());

impl RemotingCommandCodec {
    pub fn new() -> Self {
        RemotingCommandCodec(())
    }
}

impl Decoder for RemotingCommandCodec {
    type Error = RocketMQError;
    type Item = RemotingCommand;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        RemotingCommand::decode(src)
    }
}

impl Encoder<RemotingCommand> for RemotingCommandCodec {
    type Error = RocketMQError;

    fn encode(&mut self, item: RemotingCommand, dst: &mut BytesMut) -> Result<(), Self::Error> {
        item.encode(dst)
    }
}
