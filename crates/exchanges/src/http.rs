//! Monoio-native HTTPS transport
//!
//! Minimal HTTP/1.1 over rustls on monoio's TCP streams. One connection per
//! request (`Connection: close`); retries, rate limiting, and timeouts are the
//! caller's concern.

use crate::errors::{ExchangeError, Result};
use monoio::io::{AsyncReadRent, AsyncWriteRentExt};
use monoio::net::TcpStream;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

/// HTTPS client for venue REST endpoints
pub struct HttpsClient {
    tls_config: Arc<ClientConfig>,
}

/// Raw HTTP response
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpsClient {
    /// Create a client with the webpki root certificate store
    pub fn new() -> Result<Self> {
        let mut root_store = rustls::RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let tls_config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Ok(Self {
            tls_config: Arc::new(tls_config),
        })
    }

    /// Perform one HTTPS request
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse> {
        let parsed_url = url::Url::parse(url)?;

        let host = parsed_url
            .host_str()
            .ok_or_else(|| ExchangeError::InvalidUrl(format!("no host in {url}")))?;
        let port = parsed_url.port().unwrap_or(443);

        let path_and_query = if parsed_url.path().is_empty() {
            "/".to_string()
        } else {
            let mut p = parsed_url.path().to_string();
            if let Some(query) = parsed_url.query() {
                p.push('?');
                p.push_str(query);
            }
            p
        };

        let tcp_stream = TcpStream::connect(&format!("{host}:{port}"))
            .await
            .map_err(|e| ExchangeError::Network(format!("TCP connect failed: {e}")))?;

        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| ExchangeError::Network(format!("invalid server name: {e:?}")))?;
        let tls_conn = ClientConnection::new(self.tls_config.clone(), server_name)
            .map_err(|e| ExchangeError::Network(format!("TLS setup failed: {e}")))?;

        let mut tls_stream = TlsStream::new(tcp_stream, tls_conn);

        let content_length = body.map(|b| b.len()).unwrap_or(0);
        let mut request = format!(
            "{method} {path_and_query} HTTP/1.1\r\n\
             Host: {host}\r\n\
             User-Agent: oxidex/0.1\r\n\
             Connection: close\r\n\
             Content-Length: {content_length}\r\n"
        );
        for (key, value) in headers {
            request.push_str(&format!("{key}: {value}\r\n"));
        }
        request.push_str("\r\n");
        if let Some(body) = body {
            request.push_str(body);
        }

        tls_stream
            .write_all(request.as_bytes())
            .await
            .map_err(|e| ExchangeError::Network(format!("write failed: {e}")))?;

        let response_data = tls_stream.read_to_end().await?;

        parse_http_response(&response_data)
    }
}

/// Split a raw HTTP/1.1 response into status, headers, and body
fn parse_http_response(data: &[u8]) -> Result<HttpResponse> {
    let response_str = String::from_utf8_lossy(data);

    let header_end = response_str
        .find("\r\n\r\n")
        .ok_or_else(|| ExchangeError::Network("invalid HTTP response: no header terminator".to_string()))?;

    let header_part = &response_str[..header_end];
    let body_part = &response_str[header_end + 4..];

    let mut lines = header_part.lines();

    let status_line = lines
        .next()
        .ok_or_else(|| ExchangeError::Network("empty HTTP response".to_string()))?;
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| ExchangeError::Network(format!("invalid status line: {status_line}")))?;

    let mut headers = Vec::new();
    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    Ok(HttpResponse {
        status,
        headers,
        body: body_part.to_string(),
    })
}

/// rustls session pumped over a monoio TCP stream
struct TlsStream {
    stream: TcpStream,
    tls_conn: ClientConnection,
    write_buf: Vec<u8>,
    plain_buf: Vec<u8>,
    handshake_complete: bool,
}

impl TlsStream {
    fn new(stream: TcpStream, tls_conn: ClientConnection) -> Self {
        Self {
            stream,
            tls_conn,
            write_buf: Vec::with_capacity(8192),
            plain_buf: Vec::with_capacity(8192),
            handshake_complete: false,
        }
    }

    /// Flush pending TLS records to the TCP stream
    async fn flush_tls(&mut self) -> Result<()> {
        while self.tls_conn.wants_write() {
            self.write_buf.clear();
            let tls_bytes = self
                .tls_conn
                .write_tls(&mut self.write_buf)
                .map_err(|e| ExchangeError::Network(format!("TLS write failed: {e}")))?;

            if tls_bytes > 0 {
                let (result, _) = self.stream.write_all(self.write_buf.clone()).await;
                result.map_err(|e| ExchangeError::Network(format!("TCP write failed: {e}")))?;
            }
        }
        Ok(())
    }

    /// Read one batch of TLS records from TCP into the session
    ///
    /// Returns false when the peer closed the connection.
    async fn pump_incoming(&mut self) -> Result<bool> {
        let buffer = vec![0u8; 4096];
        let (result, buf) = self.stream.read(buffer).await;
        let bytes_read =
            result.map_err(|e| ExchangeError::Network(format!("TCP read failed: {e}")))?;

        if bytes_read == 0 {
            return Ok(false);
        }

        self.tls_conn
            .read_tls(&mut std::io::Cursor::new(&buf[..bytes_read]))
            .map_err(|e| ExchangeError::Network(format!("TLS read failed: {e}")))?;
        self.tls_conn
            .process_new_packets()
            .map_err(|e| ExchangeError::Network(format!("TLS process failed: {e}")))?;

        Ok(true)
    }

    async fn complete_handshake(&mut self) -> Result<()> {
        if self.handshake_complete {
            return Ok(());
        }

        loop {
            self.flush_tls().await?;

            if !self.tls_conn.is_handshaking() {
                self.handshake_complete = true;
                return Ok(());
            }

            if self.tls_conn.wants_read() {
                if !self.pump_incoming().await? {
                    return Err(ExchangeError::Network(
                        "connection closed during TLS handshake".to_string(),
                    ));
                }
            } else if !self.tls_conn.wants_write() {
                return Err(ExchangeError::Network("TLS handshake stalled".to_string()));
            }
        }
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.complete_handshake().await?;

        self.tls_conn
            .writer()
            .write_all(data)
            .map_err(|e| ExchangeError::Network(format!("TLS application write failed: {e}")))?;

        self.flush_tls().await
    }

    /// Read decrypted data until the peer closes the connection
    async fn read_to_end(&mut self) -> Result<Vec<u8>> {
        self.complete_handshake().await?;

        let mut response_data = Vec::new();

        loop {
            // Drain any decrypted data already buffered in the session
            self.plain_buf.clear();
            self.plain_buf.resize(4096, 0);
            match self.tls_conn.reader().read(&mut self.plain_buf) {
                Ok(0) => {}
                Ok(n) => {
                    response_data.extend_from_slice(&self.plain_buf[..n]);
                    continue;
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
                Err(e) => {
                    return Err(ExchangeError::Network(format!("TLS read failed: {e}")));
                }
            }

            if !self.pump_incoming().await? {
                break; // connection closed
            }
        }

        Ok(response_data)
    }
}
