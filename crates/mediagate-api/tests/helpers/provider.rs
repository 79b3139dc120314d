//! Recording media provider for integration tests.

use async_trait::async_trait;
use mediagate_core::{UploadOptions, UploadResult};
use mediagate_provider::{MediaProvider, ProviderError, ProviderResult};
use std::pin::Pin;
use std::sync::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt};

/// What the mock does once it has consumed the upload stream.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    Succeed,
    Fail,
    Panic,
}

/// One recorded provider call.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub options: UploadOptions,
    pub filename: String,
    pub content_type: String,
    pub content_length: Option<u64>,
    pub data: Vec<u8>,
}

pub struct MockProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedUpload>>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedUpload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedUpload {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("Expected at least one provider call")
    }

    /// URL the mock reports for a successful upload.
    pub fn secure_url_for(options: &UploadOptions, filename: &str) -> String {
        let resource_type = options
            .resource_type
            .map(|r| r.as_str())
            .unwrap_or("image");
        format!(
            "https://res.cloudinary.com/demo/{}/upload/{}/{}",
            resource_type, options.folder, filename
        )
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    async fn upload_stream(
        &self,
        options: &UploadOptions,
        filename: &str,
        content_type: &str,
        content_length: Option<u64>,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> ProviderResult<UploadResult> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        self.calls.lock().unwrap().push(RecordedUpload {
            options: options.clone(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            content_length,
            data,
        });

        match self.behavior {
            MockBehavior::Succeed => Ok(UploadResult {
                secure_url: Self::secure_url_for(options, filename),
                resource_type: options
                    .resource_type
                    .map(|r| r.as_str())
                    .unwrap_or("image")
                    .to_string(),
            }),
            MockBehavior::Fail => Err(ProviderError::Rejected {
                status: 401,
                message: "Invalid Signature".to_string(),
            }),
            MockBehavior::Panic => panic!("mock provider panicked"),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
