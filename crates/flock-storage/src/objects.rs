//! Low-level S3 object operations.
//!
//! Everything here is bucket-and-key plumbing; the domain-level store
//! lives in [`crate::responses`].

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use tracing::debug;

use crate::error::StorageError;

/// Fetch an object's bytes. A missing key maps to
/// [`StorageError::NotFound`] so callers can treat absence as a normal
/// domain condition.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    debug!(bucket, key, "s3 get_object");
    let output = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| {
            let service_err = err.into_service_error();
            if service_err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(service_err.to_string())
            }
        })?;

    let collected = output
        .body
        .collect()
        .await
        .map_err(|err| StorageError::GetObject(err.to_string()))?;

    Ok(collected.into_bytes().to_vec())
}

/// Write an object, overwriting any existing one at the key.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> Result<(), StorageError> {
    debug!(bucket, key, bytes = body.len(), "s3 put_object");
    let mut request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));
    if let Some(content_type) = content_type {
        request = request.content_type(content_type);
    }

    request
        .send()
        .await
        .map_err(|err| StorageError::PutObject(err.into_service_error().to_string()))?;
    Ok(())
}

/// Delete an object. Deleting a key that does not exist is not an error;
/// S3 reports success either way.
pub async fn delete_object(client: &Client, bucket: &str, key: &str) -> Result<(), StorageError> {
    debug!(bucket, key, "s3 delete_object");
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| StorageError::DeleteObject(err.into_service_error().to_string()))?;
    Ok(())
}

/// All keys under a prefix, following continuation tokens to the end.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    debug!(bucket, prefix, "s3 list_objects");
    let mut keys = Vec::new();
    let mut continuation: Option<String> = None;

    loop {
        let mut request = client.list_objects_v2().bucket(bucket).prefix(prefix);
        if let Some(token) = continuation.take() {
            request = request.continuation_token(token);
        }

        let page = request
            .send()
            .await
            .map_err(|err| StorageError::ListObjects(err.into_service_error().to_string()))?;

        keys.extend(
            page.contents()
                .iter()
                .filter_map(|obj| obj.key().map(String::from)),
        );

        match page.next_continuation_token() {
            Some(token) if page.is_truncated() == Some(true) => {
                continuation = Some(token.to_string());
            }
            _ => break,
        }
    }

    Ok(keys)
}
