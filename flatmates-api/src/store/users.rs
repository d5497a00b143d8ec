use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::results::UpdateResult;
use mongodb::Collection;
use serde::Serialize;
use uuid::Uuid;

use flatmates_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{NewUser, ProfileForm, User};
use crate::services::auth_service;

/// Outcome of an update, reported back to the caller in the response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Credential and profile operations over the `users` collection.
pub struct UserStore {
    users: Collection<User>,
}

impl UserStore {
    pub(crate) fn new(users: Collection<User>) -> Self {
        Self { users }
    }

    /// Register credentials for a new user and return the generated identity.
    ///
    /// Email uniqueness is case-insensitive: addresses are lowercased before
    /// both the lookup and the insert. The check-then-insert is not atomic;
    /// two concurrent signups for the same address can race (documented
    /// limitation of the store contract).
    pub async fn create_credentials(&self, email: &str, password: &str) -> AppResult<String> {
        let email = email.to_lowercase();

        if self.users.find_one(doc! { "email": &email }, None).await?.is_some() {
            return Err(AppError::new(
                ErrorCode::EmailAlreadyExists,
                "email already registered",
            ));
        }

        let hashed_password = auth_service::hash_password(password)?;
        let user_id = Uuid::new_v4().to_string();
        let new_user = NewUser {
            user_id: user_id.clone(),
            email,
            hashed_password,
        };

        self.users
            .clone_with_type::<NewUser>()
            .insert_one(&new_user, None)
            .await?;

        tracing::info!(user_id = %user_id, "credentials created");
        Ok(user_id)
    }

    /// Check a login attempt and return the matching identity.
    ///
    /// Unknown email and wrong password collapse into the same error kind so
    /// responses carry no account-enumeration signal.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<String> {
        let email = email.to_lowercase();

        let user = self
            .users
            .find_one(doc! { "email": &email }, None)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !auth_service::verify_password(password, &user.hashed_password)? {
            return Err(invalid_credentials());
        }

        Ok(user.user_id)
    }

    pub async fn find_by_id(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_one(doc! { "user_id": user_id }, None)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::UserNotFound, "user not found"))
    }

    /// Fetch the subset of the given ids that exists. Missing members are not
    /// an error; input shape is validated at the gateway.
    pub async fn find_by_ids(&self, user_ids: &[String]) -> AppResult<Vec<User>> {
        let cursor = self.users.find(ids_filter(user_ids), None).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_gender(&self, gender_identity: &str) -> AppResult<Vec<User>> {
        let cursor = self
            .users
            .find(doc! { "gender_identity": gender_identity }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Replace the profile fields of a user wholesale.
    pub async fn replace_profile(&self, form: &ProfileForm) -> AppResult<UpdateSummary> {
        let update = doc! { "$set": profile_set_document(form)? };
        let result = self
            .users
            .update_one(doc! { "user_id": &form.user_id }, update, None)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::new(ErrorCode::UserNotFound, "user not found"));
        }

        tracing::debug!(user_id = %form.user_id, "profile replaced");
        Ok(result.into())
    }

    /// Append a match entry to one user's `matches` array. No dedup check,
    /// and the matched user's own document is left untouched.
    pub async fn append_match(
        &self,
        user_id: &str,
        matched_user_id: &str,
    ) -> AppResult<UpdateSummary> {
        let result = self
            .users
            .update_one(
                doc! { "user_id": user_id },
                match_push_update(matched_user_id),
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::new(ErrorCode::UserNotFound, "user not found"));
        }

        tracing::debug!(user_id = %user_id, matched_user_id = %matched_user_id, "match appended");
        Ok(result.into())
    }
}

fn invalid_credentials() -> AppError {
    AppError::new(ErrorCode::InvalidCredentials, "invalid email or password")
}

fn ids_filter(user_ids: &[String]) -> Document {
    doc! { "user_id": { "$in": user_ids.to_vec() } }
}

fn match_push_update(matched_user_id: &str) -> Document {
    doc! { "$push": { "matches": { "user_id": matched_user_id } } }
}

/// Build the `$set` document for a profile replacement. The field list is
/// fixed; fields the caller left out are written as null so the stored
/// profile always mirrors the submitted form exactly.
fn profile_set_document(form: &ProfileForm) -> AppResult<Document> {
    Ok(doc! {
        "first_name": bson_or_null(&form.first_name)?,
        "dob_day": bson_or_null(&form.dob_day)?,
        "dob_month": bson_or_null(&form.dob_month)?,
        "dob_year": bson_or_null(&form.dob_year)?,
        "show_gender": bson_or_null(&form.show_gender)?,
        "gender_identity": bson_or_null(&form.gender_identity)?,
        "gender_interest": bson_or_null(&form.gender_interest)?,
        "url": bson_or_null(&form.url)?,
        "about": bson_or_null(&form.about)?,
        "matches": bson_or_null(&form.matches)?,
    })
}

fn bson_or_null<T: Serialize>(value: &Option<T>) -> AppResult<Bson> {
    match value {
        Some(v) => bson::to_bson(v)
            .map_err(|e| AppError::internal(format!("profile field encoding failed: {e}"))),
        None => Ok(Bson::Null),
    }
}
