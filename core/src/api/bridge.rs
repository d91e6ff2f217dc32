//! Line-delimited JSON bridge between a UI process and the endpoints
//!
//! Each input line is `{"id": ..., "cmd": "<endpoint>", "params": {...}}`;
//! each output line is `{"id": ..., "result": <payload>}`. Requests are
//! handled one at a time, in order.

use crate::api::{error_payload, EndpointCall, EndpointExecutor};
use crate::error::{ArgumentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// A request as framed on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeRequest {
    #[serde(default)]
    pub id: Value,
    pub cmd: String,
    #[serde(default)]
    pub params: Value,
}

/// A response as framed on the wire
#[derive(Debug, Clone, Serialize)]
pub struct BridgeResponse {
    pub id: Value,
    pub result: Value,
}

impl From<BridgeRequest> for EndpointCall {
    fn from(request: BridgeRequest) -> Self {
        EndpointCall::new(request.cmd, request.params).with_id(request.id)
    }
}

/// Handle one request line; blank lines produce no response
pub async fn handle_line(executor: &EndpointExecutor, line: &str) -> Option<BridgeResponse> {
    if line.trim().is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<BridgeRequest>(line) {
        Ok(request) => {
            debug!("Bridge request {} -> {}", request.id, request.cmd);
            let call: EndpointCall = request.into();
            let id = call.id.clone();
            BridgeResponse {
                id,
                result: executor.execute(call).await,
            }
        }
        Err(e) => malformed(e),
    };

    Some(response)
}

/// Response for input that is not a request at all; there is no id to echo
fn malformed(reason: impl std::fmt::Display) -> BridgeResponse {
    BridgeResponse {
        id: Value::Null,
        result: error_payload(
            &ArgumentError::InvalidParameters {
                message: format!("Malformed request: {}", reason),
            }
            .into(),
        ),
    }
}

/// Decode one raw input line, dropping the `\n` / `\r\n` terminator
fn decode_line(mut raw: Vec<u8>) -> std::result::Result<String, std::string::FromUtf8Error> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8(raw)
}

/// Serve requests from `reader` until EOF, returning how many were answered
pub async fn serve<R, W>(executor: &EndpointExecutor, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Split on raw bytes so one undecodable line cannot end the session
    let mut lines = reader.split(b'\n');
    let mut handled = 0usize;

    while let Some(raw) = lines.next_segment().await? {
        let response = match decode_line(raw) {
            Ok(line) => handle_line(executor, &line).await,
            Err(e) => Some(malformed(e)),
        };
        if let Some(response) = response {
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
            handled += 1;
        }
    }

    info!("Bridge input closed after {} requests", handled);
    Ok(handled)
}
