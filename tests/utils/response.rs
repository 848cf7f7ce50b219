use http::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

#[allow(unused)]
impl TestResponse {
    pub(super) fn new(response: reqwest::Response) -> Self {
        TestResponse { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let status = self.response.status();
        let bytes = self
            .response
            .bytes()
            .await
            .expect("failed to read response body");

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => panic!(
                "failed to deserialize body (status {status}): {err}: {}",
                String::from_utf8_lossy(&bytes)
            ),
        }
    }
}
