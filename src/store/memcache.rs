use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufStream};
use tokio::net::TcpStream;
use tracing::debug;

use super::error::StoreError;
use super::traits::KvStore;

/// Memcached refuses keys over 250 bytes
const MAX_KEY_BYTES: usize = 250;

/// Minimal memcached text-protocol client
///
/// Speaks only `set`. Connects lazily on first use; after any protocol or
/// IO error the connection is dropped and the next call dials again. No
/// internal retry: a failed write is reported to the caller and counted
/// there.
pub struct MemcacheStore {
    addr: String,
    conn: Option<BufStream<TcpStream>>,
}

impl MemcacheStore {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            conn: None,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

#[async_trait]
impl KvStore for MemcacheStore {
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;

        let mut conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!(addr = %self.addr, "connecting");
                BufStream::new(TcpStream::connect(&self.addr).await?)
            }
        };

        // Keep the connection only if the round trip fully succeeded.
        let result = set_on(&mut conn, key, value).await;
        if result.is_ok() {
            self.conn = Some(conn);
        }
        result
    }
}

async fn set_on(
    conn: &mut BufStream<TcpStream>,
    key: &str,
    value: &[u8],
) -> Result<(), StoreError> {
    let header = format!("set {} 0 0 {}\r\n", key, value.len());
    conn.write_all(header.as_bytes()).await?;
    conn.write_all(value).await?;
    conn.write_all(b"\r\n").await?;
    conn.flush().await?;

    let mut reply = String::new();
    conn.read_line(&mut reply).await?;
    if reply.is_empty() {
        return Err(StoreError::Disconnected);
    }

    let reply = reply.trim_end();
    if reply == "STORED" {
        Ok(())
    } else {
        Err(StoreError::Rejected(reply.to_string()))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty()
        || key.len() > MAX_KEY_BYTES
        || key.bytes().any(|b| b <= b' ' || b == 0x7F)
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
