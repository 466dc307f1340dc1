//! A mocked Kubernetes API server for the operation tests.

use crate::ProviderData;
use http::{Request, Response};
use hyper::Body;
use serde_json::{json, Value};
use tower_test::mock;

pub(crate) type Handle = mock::Handle<Request<Body>, Response<Body>>;

pub(crate) fn mock_provider_data() -> (ProviderData, Handle) {
    let (service, handle) = mock::pair::<Request<Body>, Response<Body>>();
    (
        ProviderData::new(kube::Client::new(service, "default")),
        handle,
    )
}

pub(crate) fn json_response(status: u16, body: &Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub(crate) fn status_response(code: u16, reason: &str, message: &str) -> Response<Body> {
    json_response(
        code,
        &json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": if code < 300 { "Success" } else { "Failure" },
            "message": message,
            "reason": reason,
            "code": code
        }),
    )
}

pub(crate) async fn request_body(request: Request<Body>) -> Value {
    let body = hyper::body::to_bytes(request.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// A remote cluster the way the API server returns it.
pub(crate) fn remote_cluster(name: &str) -> Value {
    json!({
        "apiVersion": "app.redislabs.com/v1alpha1",
        "kind": "RedisEnterpriseRemoteCluster",
        "metadata": {
            "name": name,
            "namespace": "redis",
            "uid": "0c2b4a3e",
            "resourceVersion": "42",
            "labels": {"region": "east"}
        },
        "spec": {
            "apiFqdnUrl": "api-east.example.com",
            "apiPort": 443,
            "recName": "rec-east",
            "recNamespace": "redis",
            "secretName": format!("redis-enterprise-{}", name)
        },
        "status": {"status": "Active", "specStatus": "Valid", "local": true}
    })
}
