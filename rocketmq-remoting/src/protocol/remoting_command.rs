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
use std::fmt;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;
use std::sync::OnceLock;

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;
use rocketmq_error::RocketMQResult;
use rocketmq_error::SerializationError;
use serde::Deserialize;
use serde::Serialize;

use crate::protocol::LanguageCode;
use crate::protocol::SerializeType;

pub const REMOTING_VERSION_ENV: &str = "ROCKETMQ_REMOTING_VERSION";

const DEFAULT_REMOTING_VERSION: i32 = 453;

static REQUEST_ID: AtomicI32 = AtomicI32::new(0);
static CONFIG_VERSION: OnceLock<i32> = OnceLock::new();

fn remoting_version() -> i32 {
    *CONFIG_VERSION.get_or_init(|| {
        std::env::var(REMOTING_VERSION_ENV)
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or(DEFAULT_REMOTING_VERSION)
    })
}

/// A remoting frame: JSON header plus optional opaque body.
///
/// On the wire a command is `total_len (i32) | header_len with serialize type
/// in the high byte (i32) | header | body`, all big-endian.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotingCommand {
    code: i32,
    #[serde(default)]
    language: LanguageCode,
    #[serde(default)]
    version: i32,
    opaque: i32,

    ///flag -> bit: 00
    /// The lowest bit of the flag indicates whether it is a response command.
    /// Non-zero indicates a response command, while 0 indicates a request command.
    /// The second bit indicates whether it is a one-way request.
    /// Non-zero indicates a one-way request.
    #[serde(default)]
    flag: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remark: Option<String>,

    #[serde(rename = "extFields", default, skip_serializing_if = "Option::is_none")]
    ext_fields: Option<HashMap<String, String>>,

    #[serde(skip)]
    body: Option<Bytes>,
    #[serde(rename = "serializeTypeCurrentRPC", default)]
    serialize_type: SerializeType,
}

impl fmt::Display for RemotingCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RemotingCommand [code={}, language={}, version={}, opaque={}, flag(B)={:b}, remark={}, extFields={:?}, \
             serializeTypeCurrentRPC={}]",
            self.code,
            self.language,
            self.version,
            self.opaque,
            self.flag,
            self.remark.as_deref().unwrap_or(""),
            self.ext_fields,
            self.serialize_type
        )
    }
}

impl Default for RemotingCommand {
    fn default() -> Self {
        RemotingCommand {
            code: 0,
            language: LanguageCode::RUST,
            version: 0,
            opaque: REQUEST_ID.fetch_add(1, Ordering::AcqRel),
            flag: 0,
            remark: None,
            ext_fields: None,
            body: None,
            serialize_type: SerializeType::JSON,
        }
    }
}

impl RemotingCommand {
    pub(crate) const RPC_ONEWAY: i32 = 1;
    pub(crate) const RPC_TYPE: i32 = 0;
}

impl RemotingCommand {
    pub fn create_request_command(code: impl Into<i32>) -> Self {
        let mut command = Self::default().set_code(code);
        command.version = remoting_version();
        command
    }

    pub fn create_response_command_with_code(code: impl Into<i32>) -> Self {
        Self::default().set_code(code).mark_response_type()
    }

    pub fn set_code(mut self, code: impl Into<i32>) -> Self {
        self.code = code.into();
        self
    }

    pub fn set_opaque(mut self, opaque: i32) -> Self {
        self.opaque = opaque;
        self
    }

    pub fn set_remark(mut self, remark: Option<String>) -> Self {
        self.remark = remark;
        self
    }

    pub fn set_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_ext_fields(mut self, ext_fields: HashMap<String, String>) -> Self {
        self.ext_fields = Some(ext_fields);
        self
    }

    pub fn mark_response_type(mut self) -> Self {
        let mark = 1 << Self::RPC_TYPE;
        self.flag |= mark;
        self
    }

    pub fn mark_oneway_rpc(mut self) -> Self {
        let mark = 1 << Self::RPC_ONEWAY;
        self.flag |= mark;
        self
    }

    #[inline]
    pub fn is_response_type(&self) -> bool {
        let bits = 1 << Self::RPC_TYPE;
        (self.flag & bits) == bits
    }

    #[inline]
    pub fn is_oneway_rpc(&self) -> bool {
        let bits = 1 << Self::RPC_ONEWAY;
        (self.flag & bits) == bits
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn opaque(&self) -> i32 {
        self.opaque
    }

    pub fn flag(&self) -> i32 {
        self.flag
    }

    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }

    pub fn ext_fields(&self) -> Option<&HashMap<String, String>> {
        self.ext_fields.as_ref()
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn serialize_type(&self) -> SerializeType {
        self.serialize_type
    }

    /// Writes the complete frame for this command into `dst`.
    pub fn encode(&self, dst: &mut BytesMut) -> RocketMQResult<()> {
        let header =
            serde_json::to_vec(self).map_err(|e| SerializationError::encode_failed("JSON", e.to_string()))?;
        let header_length = header.len() as i32;
        let body_length = self.body.as_ref().map_or(0, |b| b.len()) as i32;
        let total_length = 4 + header_length + body_length;

        dst.reserve((total_length + 4) as usize);
        dst.put_i32(total_length);
        dst.put_i32(mark_serialize_type(header_length, SerializeType::JSON));
        dst.put_slice(header.as_slice());
        if let Some(body) = &self.body {
            dst.put_slice(body.as_ref());
        }
        Ok(())
    }

    /// Decodes one frame from `src`, returning `Ok(None)` until a full frame is buffered.
    pub fn decode(src: &mut BytesMut) -> RocketMQResult<Option<RemotingCommand>> {
        let read_to = src.len();
        if read_to < 4 {
            return Ok(None);
        }
        let total_size = i32::from_be_bytes([src[0], src[1], src[2], src[3]]);
        if total_size < 4 {
            return Err(SerializationError::invalid_format(
                "frame length of at least 4 bytes",
                total_size.to_string(),
            )
            .into());
        }
        let total_size = total_size as usize;
        if read_to < total_size + 4 {
            return Ok(None);
        }

        let mut cmd_data = src.split_to(total_size + 4);
        cmd_data.advance(4);
        let ori_header_length = cmd_data.get_i32();
        let header_length = parse_header_length(ori_header_length);
        if header_length > total_size - 4 {
            return Err(SerializationError::decode_failed(
                "JSON",
                format!(
                    "Header length {} is greater than total size {}",
                    header_length, total_size
                ),
            )
            .into());
        }
        match parse_serialize_type(ori_header_length)? {
            SerializeType::JSON => {}
            other => {
                return Err(SerializationError::invalid_format("JSON serialize type", other.to_string()).into());
            }
        }

        let header_data = cmd_data.split_to(header_length);
        let mut cmd = serde_json::from_slice::<RemotingCommand>(header_data.as_ref())
            .map_err(|e| SerializationError::decode_failed("JSON", e.to_string()))?;
        if total_size - 4 > header_length {
            cmd.body = Some(cmd_data.split_to(total_size - 4 - header_length).freeze());
        }
        Ok(Some(cmd))
    }
}

pub fn mark_serialize_type(header_length: i32, protocol_type: SerializeType) -> i32 {
    ((protocol_type.get_code() as i32) << 24) | (header_length & 0x00FFFFFF)
}

pub fn parse_header_length(size: i32) -> usize {
    (size & 0xFFFFFF) as usize
}

pub fn parse_serialize_type(size: i32) -> RocketMQResult<SerializeType> {
    let code = (size >> 24) as u8;
    SerializeType::value_of(code)
        .ok_or_else(|| SerializationError::invalid_format("serialize type 0 or 1", code.to_string()).into())
}
