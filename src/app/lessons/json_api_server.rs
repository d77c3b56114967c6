use crate::domain::model::{HttpRequest, HttpResponse};
use crate::domain::ports::Handler;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnixTime {
    /// 自 epoch 起的毫秒數
    pub unixtime: i64,
}

/// 時、分、秒以時間戳本身帶的時區為準
pub fn parse_time(time: &DateTime<FixedOffset>) -> ParsedTime {
    ParsedTime {
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
    }
}

pub fn unix_time(time: &DateTime<FixedOffset>) -> UnixTime {
    UnixTime {
        unixtime: time.timestamp_millis(),
    }
}

fn error_response(status: u16, message: &str) -> HttpResponse {
    HttpResponse::json(status, &json!({ "error": message }))
}

enum Endpoint {
    ParseTime,
    UnixTime,
}

#[derive(Debug, Clone, Default)]
pub struct JsonApiServer;

impl JsonApiServer {
    fn iso_param(
        request: &HttpRequest,
    ) -> std::result::Result<DateTime<FixedOffset>, HttpResponse> {
        let iso = request
            .query_param("iso")
            .ok_or_else(|| error_response(400, "missing 'iso' query parameter"))?;
        DateTime::parse_from_rfc3339(iso).map_err(|e| {
            tracing::debug!("Rejecting iso={}: {}", iso, e);
            error_response(400, &format!("'iso' is not an ISO-8601 timestamp: {}", e))
        })
    }
}

#[async_trait]
impl Handler for JsonApiServer {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let endpoint = match request.path.as_str() {
            "/api/parsetime" => Endpoint::ParseTime,
            "/api/unixtime" => Endpoint::UnixTime,
            _ => return error_response(404, "unknown endpoint"),
        };

        if request.method != "GET" {
            return error_response(405, "only GET is supported").with_header("Allow", "GET");
        }

        match Self::iso_param(&request) {
            Ok(time) => match endpoint {
                Endpoint::ParseTime => HttpResponse::json(200, &parse_time(&time)),
                Endpoint::UnixTime => HttpResponse::json(200, &unix_time(&time)),
            },
            Err(response) => response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResponseBody;
    use serde_json::Value;

    fn get(path: &str, iso: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: "GET".to_string(),
            path: path.to_string(),
            query: iso
                .map(|iso| vec![("iso".to_string(), iso.to_string())])
                .unwrap_or_default(),
            ..HttpRequest::default()
        }
    }

    fn body_json(response: &HttpResponse) -> Value {
        match &response.body {
            ResponseBody::Bytes(bytes) => serde_json::from_slice(bytes).unwrap(),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parsetime() {
        let response = JsonApiServer
            .handle(get("/api/parsetime", Some("2013-08-10T12:10:15.474Z")))
            .await;
        assert_eq!(response.status, 200);
        assert_eq!(
            body_json(&response),
            json!({"hour": 12, "minute": 10, "second": 15})
        );
    }

    #[tokio::test]
    async fn test_parsetime_keeps_offset() {
        let response = JsonApiServer
            .handle(get("/api/parsetime", Some("2013-08-10T12:10:15+02:00")))
            .await;
        assert_eq!(body_json(&response)["hour"], 12);
    }

    #[tokio::test]
    async fn test_unixtime() {
        let response = JsonApiServer
            .handle(get("/api/unixtime", Some("2013-08-10T12:10:15.474Z")))
            .await;
        assert_eq!(body_json(&response), json!({"unixtime": 1376136615474i64}));
    }

    #[tokio::test]
    async fn test_errors() {
        assert_eq!(JsonApiServer.handle(get("/api/parsetime", None)).await.status, 400);
        assert_eq!(
            JsonApiServer
                .handle(get("/api/unixtime", Some("yesterday")))
                .await
                .status,
            400
        );
        assert_eq!(JsonApiServer.handle(get("/api/other", None)).await.status, 404);

        let mut post = get("/api/unixtime", Some("2013-08-10T12:10:15.474Z"));
        post.method = "POST".to_string();
        let response = JsonApiServer.handle(post).await;
        assert_eq!(response.status, 405);
        assert_eq!(response.header("Allow"), Some("GET"));
    }
}
