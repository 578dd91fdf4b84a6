//! Uploaded media storage.
//!
//! Handlers talk to a [`MediaStore`]; the shipped backend is
//! [`LocalMediaStore`], which writes `<root>/<bucket>/<file>` and is served
//! read-only under `/storage` by the router.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use luther_core::uploads::Bucket;

/// URL path prefix the local files are served under.
pub const STORAGE_ROUTE: &str = "/storage";

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Write `bytes` as `file_name` in `bucket`, replacing any existing file.
    async fn put(&self, bucket: Bucket, file_name: &str, bytes: &[u8]) -> io::Result<()>;

    /// Remove `file_name` from `bucket`. `Ok(false)` when it did not exist.
    async fn remove(&self, bucket: Bucket, file_name: &str) -> io::Result<bool>;

    /// Public URL of a stored file.
    fn public_url(&self, bucket: Bucket, file_name: &str) -> String;

    /// Confirm the store can accept new uploads.
    async fn check_ready(&self) -> io::Result<()>;
}

/// Filesystem-backed [`MediaStore`].
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStore {
    /// `base_url` is the public origin, e.g. `http://localhost:3000`.
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn path_for(&self, bucket: Bucket, file_name: &str) -> PathBuf {
        self.root.join(bucket.as_str()).join(file_name)
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn put(&self, bucket: Bucket, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        let dir = self.root.join(bucket.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(file_name), bytes).await
    }

    async fn remove(&self, bucket: Bucket, file_name: &str) -> io::Result<bool> {
        match tokio::fs::remove_file(self.path_for(bucket, file_name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn public_url(&self, bucket: Bucket, file_name: &str) -> String {
        format!(
            "{}{STORAGE_ROUTE}/{}/{file_name}",
            self.base_url,
            bucket.as_str()
        )
    }
    async fn check_ready(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let metadata = tokio::fs::metadata(&self.root).await?;
        if metadata.permissions().readonly() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", self.root.display()),
            ));
        }
        Ok(())
    }
}
