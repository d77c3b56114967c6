//! 最小化的 HTTP/1.1 讀寫：一個連線一個請求，回應後關閉連線。

use crate::domain::model::{reason_phrase, HttpRequest, HttpResponse, ResponseBody};
use crate::utils::error::{KataError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use url::Url;

pub const MAX_HEADERS: usize = 100;
pub const MAX_LINE_BYTES: usize = 8 * 1024;

fn bad_request(message: impl Into<String>) -> KataError {
    KataError::BadRequest {
        message: message.into(),
    }
}

/// 讀取一行（不含 CRLF）；連線已關閉時回傳 None
async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = (&mut *reader)
        .take(MAX_LINE_BYTES as u64 + 1)
        .read_until(b'\n', &mut buf)
        .await?;

    if read == 0 {
        return Ok(None);
    }
    if buf.len() > MAX_LINE_BYTES {
        return Err(bad_request(format!(
            "line exceeds {} bytes",
            MAX_LINE_BYTES
        )));
    }
    if buf.last() != Some(&b'\n') {
        return Err(bad_request("connection closed mid-line"));
    }

    buf.pop();
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| bad_request("line is not valid UTF-8"))
}

/// 連線在 body 讀完前關閉視為格式錯誤
async fn read_body_exact<R: AsyncBufRead + Unpin>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    match reader.read_exact(buf).await {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            Err(bad_request("body shorter than declared"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn expect_line<R: AsyncBufRead + Unpin>(reader: &mut R, what: &str) -> Result<String> {
    read_line(reader)
        .await?
        .ok_or_else(|| bad_request(format!("connection closed before {}", what)))
}

fn parse_target(target: &str) -> Result<(String, Vec<(String, String)>)> {
    if !target.starts_with('/') {
        return Err(bad_request(format!("unsupported request target '{}'", target)));
    }

    let url = Url::parse(&format!("http://localhost{}", target))
        .map_err(|e| bad_request(format!("invalid request target '{}': {}", target, e)))?;

    let query = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    Ok((url.path().to_string(), query))
}

async fn read_chunked_body<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    max_body: usize,
) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    loop {
        let size_line = expect_line(reader, "chunk size").await?;
        let size_text = size_line.split(';').next().unwrap_or("").trim();
        let size = usize::from_str_radix(size_text, 16)
            .map_err(|_| bad_request(format!("invalid chunk size '{}'", size_text)))?;

        if size == 0 {
            // 略過 trailer 標頭
            while !expect_line(reader, "end of chunked body").await?.is_empty() {}
            return Ok(body);
        }

        if body.len().saturating_add(size) > max_body {
            return Err(KataError::PayloadTooLarge { limit: max_body });
        }

        let start = body.len();
        body.resize(start + size, 0);
        read_body_exact(reader, &mut body[start..]).await?;

        if !expect_line(reader, "chunk terminator").await?.is_empty() {
            return Err(bad_request("chunk data longer than declared size"));
        }
    }
}

pub async fn read_request<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    max_body: usize,
) -> Result<HttpRequest> {
    let request_line = expect_line(reader, "request line").await?;
    let mut parts = request_line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(m), Some(t), Some(v), None) => (m, t, v),
        _ => {
            return Err(bad_request(format!(
                "malformed request line '{}'",
                request_line
            )))
        }
    };

    if !version.starts_with("HTTP/1.") {
        return Err(bad_request(format!("unsupported version '{}'", version)));
    }

    let (path, query) = parse_target(target)?;

    let mut headers = Vec::new();
    loop {
        let line = expect_line(reader, "end of headers").await?;
        if line.is_empty() {
            break;
        }
        if headers.len() >= MAX_HEADERS {
            return Err(bad_request(format!("more than {} headers", MAX_HEADERS)));
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| bad_request(format!("malformed header '{}'", line)))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let mut request = HttpRequest {
        method: method.to_string(),
        path,
        query,
        headers,
        body: Vec::new(),
    };

    let chunked = request
        .header("Transfer-Encoding")
        .map(|te| te.to_ascii_lowercase().contains("chunked"))
        .unwrap_or(false);

    if chunked {
        request.body = read_chunked_body(reader, max_body).await?;
    } else if let Some(length) = request.header("Content-Length") {
        let length: usize = length
            .parse()
            .map_err(|_| bad_request(format!("invalid Content-Length '{}'", length)))?;
        if length > max_body {
            return Err(KataError::PayloadTooLarge { limit: max_body });
        }
        let mut body = vec![0; length];
        read_body_exact(reader, &mut body).await?;
        request.body = body;
    }

    Ok(request)
}

async fn write_head<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &HttpResponse,
    content_length: u64,
) -> Result<()> {
    let mut head = format!(
        "HTTP/1.1 {} {}\r\n",
        response.status,
        reason_phrase(response.status)
    );
    for (name, value) in &response.headers {
        if name.eq_ignore_ascii_case("Content-Length") || name.eq_ignore_ascii_case("Connection") {
            continue;
        }
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str(&format!("Content-Length: {}\r\n", content_length));
    head.push_str("Connection: close\r\n\r\n");

    writer.write_all(head.as_bytes()).await?;
    Ok(())
}

pub async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &HttpResponse,
) -> Result<()> {
    match &response.body {
        ResponseBody::Bytes(bytes) => {
            write_head(writer, response, bytes.len() as u64).await?;
            writer.write_all(bytes).await?;
        }
        ResponseBody::File { path, len } => {
            let file = tokio::fs::File::open(path).await?;
            // Content-Length 以開檔後的實際大小為準
            let current = file.metadata().await?.len();
            if current != *len {
                tracing::debug!(
                    "{} changed size since it was stat'ed ({} -> {} bytes)",
                    path.display(),
                    len,
                    current
                );
            }
            write_head(writer, response, current).await?;

            let copied = tokio::io::copy(&mut file.take(current), writer).await?;
            if copied < current {
                tracing::warn!(
                    "⚠️ {} shrank while streaming ({} of {} bytes sent)",
                    path.display(),
                    copied,
                    current
                );
            }
        }
    }

    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn parse(raw: &str, max_body: usize) -> Result<HttpRequest> {
        let mut reader = BufReader::new(raw.as_bytes());
        read_request(&mut reader, max_body).await
    }

    #[tokio::test]
    async fn test_parse_get_with_query() {
        let request = parse(
            "GET /api/parsetime?iso=2013-08-10T12%3A10%3A15.474Z HTTP/1.1\r\nHost: localhost\r\n\r\n",
            1024,
        )
        .await
        .unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/parsetime");
        assert_eq!(request.query_param("iso"), Some("2013-08-10T12:10:15.474Z"));
        assert_eq!(request.header("host"), Some("localhost"));
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_parse_content_length_body() {
        let request = parse(
            "POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
            1024,
        )
        .await
        .unwrap();
        assert_eq!(request.body, b"hello");
    }

    #[tokio::test]
    async fn test_parse_chunked_body() {
        let request = parse(
            "POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nhello\r\n6;ext=1\r\n world\r\n0\r\n\r\n",
            1024,
        )
        .await
        .unwrap();
        assert_eq!(request.body, b"hello world");
    }

    #[tokio::test]
    async fn test_body_limits() {
        let err = parse("POST / HTTP/1.1\r\nContent-Length: 50\r\n\r\n", 10)
            .await
            .unwrap_err();
        assert!(matches!(err, KataError::PayloadTooLarge { limit: 10 }));

        let err = parse(
            "POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\nff\r\n",
            10,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, KataError::PayloadTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_truncated_bodies_are_bad_requests() {
        for raw in [
            "POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nabc",
            "POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\na\r\nabc",
        ] {
            let err = parse(raw, 1024).await.unwrap_err();
            assert!(
                matches!(err, KataError::BadRequest { .. }),
                "{:?} gave {:?}",
                raw,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_requests() {
        for raw in [
            "",
            "GET\r\n\r\n",
            "GET / SPDY/3\r\n\r\n",
            "GET http://elsewhere/ HTTP/1.1\r\n\r\n",
            "GET / HTTP/1.1\r\nno-colon-here\r\n\r\n",
            "POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\n",
        ] {
            let err = parse(raw, 1024).await.unwrap_err();
            assert!(
                matches!(err, KataError::BadRequest { .. }),
                "{:?} gave {:?}",
                raw,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_write_response_framing() {
        let response = HttpResponse::text(200, "HI").with_header("Connection", "keep-alive");
        let mut out = Vec::new();
        write_response(&mut out, &response).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 2\r\n"));
        assert!(text.contains("Connection: close\r\n"));
        assert!(!text.contains("keep-alive"));
        assert!(text.ends_with("\r\n\r\nHI"));
    }

    #[tokio::test]
    async fn test_write_file_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"file contents").unwrap();

        let response = HttpResponse::file(file.path().to_path_buf(), 13, "text/plain");
        let mut out = Vec::new();
        write_response(&mut out, &response).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Content-Length: 13\r\n"));
        assert!(text.ends_with("file contents"));
    }

    #[tokio::test]
    async fn test_file_length_is_taken_when_streaming() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"short").unwrap();

        // handler 看到的大小已過時
        let response = HttpResponse::file(file.path().to_path_buf(), 100, "text/plain");
        let mut out = Vec::new();
        write_response(&mut out, &response).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Content-Length: 5\r\n"));
        assert!(text.ends_with("\r\n\r\nshort"));
    }
}
