mod local;
mod s3;

pub use local::*;
pub use s3::*;

use async_trait::async_trait;
use std::{env, fmt};

pub const UPLOAD_EXPIRY_SECS: u32 = 604_800;
pub const RETRIEVAL_EXPIRY_SECS: u32 = 86_400;

#[derive(Debug)]
pub enum StorageError {
    NotFound(String),
    InvalidKey(String),
    Io(std::io::Error),
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "object not found: {key}"),
            Self::InvalidKey(key) => write!(f, "invalid object key: {key}"),
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Object storage with transient retrieval URLs. `put` returns a URL
/// already signed for the upload expiry window.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, data: &[u8]) -> StorageResult<String>;
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;
    async fn presigned_url(&self, key: &str, expiry_secs: u32) -> StorageResult<String>;
    async fn delete(&self, key: &str) -> StorageResult<()>;
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Cloud,
    SelfHosted,
    Local,
}

impl Backend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::SelfHosted => "self-hosted",
            Self::Local => "local",
        }
    }
}

pub fn select_backend(cloud: bool, self_hosted_disabled: bool) -> Backend {
    if cloud {
        Backend::Cloud
    } else if !self_hosted_disabled {
        Backend::SelfHosted
    } else {
        Backend::Local
    }
}

fn env_flag(name: &str) -> bool {
    matches!(env::var(name).as_deref(), Ok("1") | Ok("true"))
}

pub struct Storage {
    backend: Backend,
    remote: Option<Box<dyn ObjectStore>>,
    local: LocalStore,
}

impl Storage {
    pub async fn from_env() -> Storage {
        let cloud = env_flag("S3_CLOUD")
            || (env::var("S3_REGION").is_ok() && env::var("S3_ENDPOINT").is_err());
        let backend = select_backend(cloud, env_flag("S3_DISABLED"));

        let root = env::var("LOCAL_STORAGE_DIR").unwrap_or_else(|_| "uploads".to_owned());
        let local = LocalStore::new(root.into())
            .await
            .expect("failed to initialize local storage");

        let remote: Option<Box<dyn ObjectStore>> = match backend {
            Backend::Cloud => {
                let region = env::var("S3_REGION").expect("S3_REGION is not set");
                let store = S3Store::cloud(
                    &region,
                    &env::var("S3_BUCKET").expect("S3_BUCKET is not set"),
                    &env::var("S3_ACCESS_KEY").expect("S3_ACCESS_KEY is not set"),
                    &env::var("S3_SECRET_KEY").expect("S3_SECRET_KEY is not set"),
                )
                .expect("failed to initialize cloud storage");
                Some(Box::new(store))
            }
            Backend::SelfHosted => {
                let endpoint = env::var("S3_ENDPOINT").expect("S3_ENDPOINT is not set");
                let store = S3Store::self_hosted(
                    endpoint,
                    &env::var("S3_BUCKET").expect("S3_BUCKET is not set"),
                    &env::var("S3_ACCESS_KEY").expect("S3_ACCESS_KEY is not set"),
                    &env::var("S3_SECRET_KEY").expect("S3_SECRET_KEY is not set"),
                )
                .expect("failed to initialize self-hosted storage");
                Some(Box::new(store))
            }
            Backend::Local => None,
        };

        info!("using {} storage backend", backend.as_str());

        Storage {
            backend,
            remote,
            local,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn local_root(&self) -> &std::path::Path {
        self.local.root()
    }

    fn store(&self) -> &dyn ObjectStore {
        match &self.remote {
            Some(remote) => remote.as_ref(),
            None => &self.local,
        }
    }

    pub async fn put(&self, key: &str, data: &[u8]) -> StorageResult<String> {
        let Some(remote) = &self.remote else {
            return self.local.put(key, data).await;
        };

        match remote.put(key, data).await {
            Ok(url) => Ok(url),
            Err(err) => {
                warn!(
                    "{} storage rejected put of {}, falling back to local: {}",
                    self.backend.as_str(),
                    key,
                    err
                );
                self.local.put(key, data).await
            }
        }
    }

    pub async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.store().get(key).await
    }

    pub async fn retrieval_url(&self, key: &str, expiry_secs: Option<u32>) -> StorageResult<String> {
        self.store()
            .presigned_url(key, expiry_secs.unwrap_or(RETRIEVAL_EXPIRY_SECS))
            .await
    }

    pub async fn delete(&self, key: &str) -> StorageResult<()> {
        self.store().delete(key).await
    }

    pub async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        self.store().list(prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectingStore;

    #[async_trait]
    impl ObjectStore for RejectingStore {
        async fn put(&self, _key: &str, _data: &[u8]) -> StorageResult<String> {
            Err(StorageError::Backend("put rejected".to_owned()))
        }

        async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
            Err(StorageError::NotFound(key.to_owned()))
        }

        async fn presigned_url(&self, _key: &str, _expiry_secs: u32) -> StorageResult<String> {
            Err(StorageError::Backend("presign rejected".to_owned()))
        }

        async fn delete(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Backend("delete rejected".to_owned()))
        }

        async fn list(&self, _prefix: &str) -> StorageResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    async fn storage_with_failing_remote(dir: &std::path::Path) -> Storage {
        Storage {
            backend: Backend::SelfHosted,
            remote: Some(Box::new(RejectingStore)),
            local: LocalStore::new(dir.to_path_buf()).await.unwrap(),
        }
    }

    #[test]
    fn backend_selection() {
        assert_eq!(select_backend(true, false), Backend::Cloud);
        assert_eq!(select_backend(true, true), Backend::Cloud);
        assert_eq!(select_backend(false, false), Backend::SelfHosted);
        assert_eq!(select_backend(false, true), Backend::Local);
    }

    #[tokio::test]
    async fn put_falls_back_to_local() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_with_failing_remote(dir.path()).await;

        let url = storage.put("submissions/report.txt", b"hello").await.unwrap();
        assert_eq!(url, "/uploads/submissions/report.txt");

        let data = storage.local.get("submissions/report.txt").await.unwrap();
        assert_eq!(data, b"hello");
    }

    #[tokio::test]
    async fn get_does_not_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_with_failing_remote(dir.path()).await;

        storage.local.put("submissions/a.txt", b"data").await.unwrap();

        assert!(matches!(
            storage.get("submissions/a.txt").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_does_not_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_with_failing_remote(dir.path()).await;

        assert!(storage.delete("submissions/a.txt").await.is_err());
    }
}
