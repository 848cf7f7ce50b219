use super::{ObjectStore, StorageError, StorageResult, UPLOAD_EXPIRY_SECS};
use async_trait::async_trait;
use s3::{creds::Credentials, error::S3Error, Bucket, Region};

pub struct S3Store {
    bucket: Box<Bucket>,
}

impl S3Store {
    pub fn cloud(
        region: &str,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
    ) -> StorageResult<Self> {
        let region: Region = region
            .parse()
            .map_err(|_| StorageError::Backend(format!("invalid region: {region}")))?;

        let bucket = Bucket::new(bucket, region, credentials(access_key, secret_key)?)
            .map_err(backend_err)?;

        Ok(Self { bucket })
    }

    pub fn self_hosted(
        endpoint: String,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
    ) -> StorageResult<Self> {
        let region = Region::Custom {
            region: "self-hosted".to_owned(),
            endpoint,
        };

        let bucket = Bucket::new(bucket, region, credentials(access_key, secret_key)?)
            .map_err(backend_err)?
            .with_path_style();

        Ok(Self { bucket })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, key: &str, data: &[u8]) -> StorageResult<String> {
        self.bucket
            .put_object(key, data)
            .await
            .map_err(backend_err)?;

        self.presigned_url(key, UPLOAD_EXPIRY_SECS).await
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|err| not_found_or_backend(key, err))?;

        Ok(response.bytes().to_vec())
    }

    async fn presigned_url(&self, key: &str, expiry_secs: u32) -> StorageResult<String> {
        self.bucket
            .presign_get(key, expiry_secs, None)
            .await
            .map_err(|err| not_found_or_backend(key, err))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|err| not_found_or_backend(key, err))?;

        Ok(())
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let pages = self
            .bucket
            .list(prefix.to_owned(), None)
            .await
            .map_err(backend_err)?;

        let mut keys = pages
            .into_iter()
            .flat_map(|page| page.contents)
            .map(|object| object.key)
            .collect::<Vec<_>>();

        keys.sort();

        Ok(keys)
    }
}

fn credentials(access_key: &str, secret_key: &str) -> StorageResult<Credentials> {
    Credentials::new(Some(access_key), Some(secret_key), None, None, None)
        .map_err(|err| StorageError::Backend(err.to_string()))
}

fn backend_err(err: S3Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

fn not_found_or_backend(key: &str, err: S3Error) -> StorageError {
    match err {
        S3Error::HttpFailWithBody(404, _) => StorageError::NotFound(key.to_owned()),
        err => backend_err(err),
    }
}
