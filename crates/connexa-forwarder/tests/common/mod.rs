//! Shared mock backends for end-to-end tests.
//!
//! One axum server stands in for the AWS side (path-style S3 `GetObject`
//! plus Secrets Manager `GetSecretValue`); a second captures everything
//! POSTed to the Graylog intake. The forwarder's AWS clients are pointed
//! at the mock through `endpoint_url` overrides.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use flate2::write::GzEncoder;
use flate2::Compression;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

/// One request captured by the Graylog mock.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Parses the captured body as the intake's JSON array format.
    pub fn entries(&self) -> Vec<serde_json::Value> {
        let value: serde_json::Value = serde_json::from_slice(&self.body).unwrap();
        value.as_array().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry["message"].as_str().unwrap().to_string())
            .collect()
    }
}

/// Mock AWS side: stored objects keyed by `bucket/key` and a fixed secret.
pub struct MockAws {
    pub url: String,
}

impl MockAws {
    pub async fn start(objects: Vec<(&str, &str, Vec<u8>)>, secret_token: &str) -> Self {
        let objects: Arc<HashMap<String, Vec<u8>>> = Arc::new(
            objects
                .into_iter()
                .map(|(bucket, key, body)| (format!("{bucket}/{key}"), body))
                .collect(),
        );
        let secret_token = secret_token.to_string();

        let object_route = {
            let objects = Arc::clone(&objects);
            move |Path((bucket, key)): Path<(String, String)>| {
                let objects = Arc::clone(&objects);
                async move {
                    match objects.get(&format!("{bucket}/{key}")) {
                        Some(body) => (StatusCode::OK, body.clone()),
                        None => (StatusCode::NOT_FOUND, Vec::new()),
                    }
                }
            }
        };
        let secrets_route = move |_body: Bytes| {
            let secret_token = secret_token.clone();
            async move {
                let response = serde_json::json!({
                    "ARN": "arn:aws:secretsmanager:us-east-1:123456789012:secret:graylog-token",
                    "Name": "graylog-token",
                    "SecretString": secret_token,
                    "VersionId": "v1",
                });
                (
                    [(header::CONTENT_TYPE, "application/x-amz-json-1.1")],
                    response.to_string(),
                )
            }
        };

        let app = Router::new()
            .route("/", post(secrets_route))
            .route("/{bucket}/{*key}", get(object_route));

        MockAws {
            url: serve(app).await,
        }
    }

    pub fn s3_client(&self) -> aws_sdk_s3::Client {
        let creds = Credentials::new("test", "test", None, None, "integration-test");
        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(creds)
            .endpoint_url(&self.url)
            .force_path_style(true)
            .build();
        aws_sdk_s3::Client::from_conf(config)
    }

    pub fn secretsmanager_client(&self) -> aws_sdk_secretsmanager::Client {
        let creds =
            aws_sdk_secretsmanager::config::Credentials::new("test", "test", None, None, "integration-test");
        let config = aws_sdk_secretsmanager::config::Builder::new()
            .behavior_version(aws_sdk_secretsmanager::config::BehaviorVersion::latest())
            .region(aws_sdk_secretsmanager::config::Region::new("us-east-1"))
            .credentials_provider(creds)
            .endpoint_url(&self.url)
            .build();
        aws_sdk_secretsmanager::Client::from_conf(config)
    }
}

/// Mock Graylog intake that captures forwarded requests.
pub struct MockGraylog {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGraylog {
    pub async fn start(status: u16) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));

        let route = {
            let captured = Arc::clone(&captured);
            move |headers: HeaderMap, body: Bytes| {
                let captured = Arc::clone(&captured);
                async move {
                    let header_map: HashMap<String, String> = headers
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                        .collect();
                    captured.lock().unwrap().push(CapturedRequest {
                        headers: header_map,
                        body: body.to_vec(),
                    });
                    StatusCode::from_u16(status).unwrap()
                }
            }
        };

        // Payloads run up to the intake's 5 MB ceiling plus one entry;
        // axum's default body limit is far below that.
        let app = Router::new()
            .route("/", post(route))
            .layer(DefaultBodyLimit::max(8 * 1024 * 1024));

        MockGraylog {
            url: serve(app).await,
            captured,
        }
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock backend server failed");
    });

    format!("http://{addr}/")
}

/// Gzips `data` the way deposited log objects are compressed.
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Builds an object-creation event document for the given records.
pub fn object_created_event(records: &[(&str, &str)]) -> connexa_forwarder::S3Event {
    let records: Vec<serde_json::Value> = records
        .iter()
        .map(|(bucket, key)| {
            serde_json::json!({
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": bucket },
                    "object": { "key": key }
                }
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}
