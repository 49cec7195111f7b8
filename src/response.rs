// pdf-convert/src/response.rs

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::error::{ConvertError, Result};
use crate::models::{RenderedDocument, PDF_MIME_TYPE};

/// Destination for an attachment response.
///
/// In an HTTP host this maps onto the live response object; anywhere else
/// it degrades to "write these bytes to the given output stream with these
/// two headers" (see [`HttpFramedSink`]).
#[async_trait]
pub trait ResponseSink: Send {
    /// Discard any response state staged so far (content and headers).
    fn clear(&mut self);
    fn set_content_type(&mut self, value: &str);
    fn insert_header(&mut self, name: &str, value: &str);
    async fn write_body(&mut self, data: &[u8]) -> Result<()>;
    /// Finalize the response; nothing may be written afterwards.
    async fn finish(&mut self) -> Result<()>;
}

/// Write a rendered document to the sink as a downloadable attachment.
pub async fn write_attachment<S>(doc: &RenderedDocument, sink: &mut S) -> Result<()>
where
    S: ResponseSink + ?Sized,
{
    sink.clear();
    sink.set_content_type(PDF_MIME_TYPE);
    sink.insert_header(
        "Content-Disposition",
        &format!("attachment; filename={}", doc.file_name),
    );
    sink.write_body(&doc.data).await?;
    sink.finish().await?;

    info!(
        file_name = %doc.file_name,
        size_bytes = doc.data.len(),
        "Attachment response written"
    );

    Ok(())
}

/// Sink that frames the response as raw HTTP-style headers followed by the
/// body, onto any byte stream.
pub struct HttpFramedSink<W> {
    writer: W,
    content_type: Option<String>,
    headers: Vec<(String, String)>,
    headers_sent: bool,
}

impl<W: AsyncWrite + Unpin + Send> HttpFramedSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            content_type: None,
            headers: Vec::new(),
            headers_sent: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn send_headers(&mut self, body_len: usize) -> Result<()> {
        let mut head = String::new();
        if let Some(ct) = &self.content_type {
            head.push_str(&format!("Content-Type: {ct}\r\n"));
        }
        for (name, value) in &self.headers {
            head.push_str(&format!("{name}: {value}\r\n"));
        }
        head.push_str(&format!("Content-Length: {body_len}\r\n\r\n"));

        self.writer
            .write_all(head.as_bytes())
            .await
            .map_err(|e| ConvertError::DeliveryFailed(e.to_string()))?;
        self.headers_sent = true;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResponseSink for HttpFramedSink<W> {
    fn clear(&mut self) {
        // Once headers hit the wire there is nothing left to clear; staged
        // state is all that can be discarded.
        if !self.headers_sent {
            self.content_type = None;
            self.headers.clear();
        }
    }

    fn set_content_type(&mut self, value: &str) {
        self.content_type = Some(value.to_string());
    }

    fn insert_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    async fn write_body(&mut self, data: &[u8]) -> Result<()> {
        if !self.headers_sent {
            self.send_headers(data.len()).await?;
        }
        self.writer
            .write_all(data)
            .await
            .map_err(|e| ConvertError::DeliveryFailed(e.to_string()))?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .await
            .map_err(|e| ConvertError::DeliveryFailed(e.to_string()))?;
        self.writer
            .shutdown()
            .await
            .map_err(|e| ConvertError::DeliveryFailed(e.to_string()))?;
        Ok(())
    }
}

/// In-memory sink recording everything written to it.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub content_type: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub finished: bool,
    pub cleared: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
impl ResponseSink for MemorySink {
    fn clear(&mut self) {
        self.content_type = None;
        self.headers.clear();
        self.body.clear();
        self.cleared += 1;
    }

    fn set_content_type(&mut self, value: &str) {
        self.content_type = Some(value.to_string());
    }

    fn insert_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    async fn write_body(&mut self, data: &[u8]) -> Result<()> {
        if self.finished {
            return Err(ConvertError::DeliveryFailed(
                "sink already finished".to_string(),
            ));
        }
        self.body.extend_from_slice(data);
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
