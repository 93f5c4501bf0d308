//! Store operations for response sets, results, and contacts.
//!
//! Progress saves are upserts keyed by respondent identity: saving twice
//! overwrites, so resumption always sees the latest snapshot. When the
//! email gate rekeys a respondent mid-assessment, subsequent saves land
//! under the new identity and the old row is deleted at submission.

use aws_sdk_s3::Client;

use flock_core::models::contact::Contact;
use flock_core::models::respondent::RespondentId;
use flock_core::models::response_set::ResponseSet;
use flock_core::models::result::StoredResult;
use flock_core::s3_keys;

use crate::error::StorageError;
use crate::{json, objects, retry};

/// Upsert a partial (or complete) response set under its respondent key.
pub async fn save_progress(
    client: &Client,
    bucket: &str,
    responses: &ResponseSet,
) -> Result<(), StorageError> {
    let key = s3_keys::response_set(&responses.assessment_id, &responses.respondent);
    retry::with_backoff("save_progress", retry::DEFAULT_ATTEMPTS, || {
        json::put_json(client, bucket, &key, responses)
    })
    .await
}

/// Load a previously saved response set for this respondent.
pub async fn load_progress(
    client: &Client,
    bucket: &str,
    assessment_id: &str,
    respondent: &RespondentId,
) -> Result<ResponseSet, StorageError> {
    let key = s3_keys::response_set(assessment_id, respondent);
    json::get_json(client, bucket, &key).await
}

/// Delete a saved response set. Used to drop the orphaned anonymous row
/// after the email gate rekeyed a respondent.
pub async fn delete_progress(
    client: &Client,
    bucket: &str,
    assessment_id: &str,
    respondent: &RespondentId,
) -> Result<(), StorageError> {
    let key = s3_keys::response_set(assessment_id, respondent);
    objects::delete_object(client, bucket, &key).await
}

/// Persist a completed response set together with its scored result
/// snapshot. The responses remain the source of truth; the snapshot
/// exists for fast redisplay.
pub async fn save_completion(
    client: &Client,
    bucket: &str,
    responses: &ResponseSet,
    result: &StoredResult,
) -> Result<(), StorageError> {
    save_progress(client, bucket, responses).await?;

    let key = s3_keys::result(&responses.assessment_id, &responses.respondent);
    retry::with_backoff("save_result", retry::DEFAULT_ATTEMPTS, || {
        json::put_json(client, bucket, &key, result)
    })
    .await
}

/// Load the stored result snapshot for a respondent.
pub async fn load_result(
    client: &Client,
    bucket: &str,
    assessment_id: &str,
    respondent: &RespondentId,
) -> Result<StoredResult, StorageError> {
    let key = s3_keys::result(assessment_id, respondent);
    json::get_json(client, bucket, &key).await
}

/// Record a captured lead. Keyed by normalized email, so re-capturing the
/// same address overwrites rather than duplicates.
pub async fn save_contact(
    client: &Client,
    bucket: &str,
    contact: &Contact,
) -> Result<(), StorageError> {
    let key = s3_keys::contact(&contact.email);
    retry::with_backoff("save_contact", retry::DEFAULT_ATTEMPTS, || {
        json::put_json(client, bucket, &key, contact)
    })
    .await
}

/// All captured leads, for CRM export.
pub async fn list_contacts(client: &Client, bucket: &str) -> Result<Vec<Contact>, StorageError> {
    let keys = objects::list_objects(client, bucket, s3_keys::CONTACTS_PREFIX).await?;
    let mut contacts = Vec::with_capacity(keys.len());
    for key in &keys {
        contacts.push(json::get_json(client, bucket, key).await?);
    }
    Ok(contacts)
}
