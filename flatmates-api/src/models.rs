use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

// --- Users ---

/// A single entry in a user's `matches` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRef {
    pub user_id: String,
}

/// A user document as stored in the `users` collection.
///
/// `user_id` is the public identity; the store `_id` and the password hash
/// never leave the service in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing)]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gender: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchRef>,
}

/// Insert shape for a freshly registered user. Profile fields arrive later
/// through profile replacement.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub user_id: String,
    pub email: String,
    pub hashed_password: String,
}

/// Wholesale profile replacement payload. Every field in this list is written
/// on update; absent fields are written as null rather than left in place.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub user_id: String,
    pub first_name: Option<String>,
    pub dob_day: Option<String>,
    pub dob_month: Option<String>,
    pub dob_year: Option<String>,
    pub show_gender: Option<bool>,
    pub gender_identity: Option<String>,
    pub gender_interest: Option<String>,
    pub url: Option<String>,
    pub about: Option<String>,
    pub matches: Option<Vec<MatchRef>>,
}

// --- Messages ---

/// A direct message between two users. Beyond the directed `(from, to)` pair
/// the document is opaque: whatever the sender posted is stored and returned
/// verbatim via the flattened remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", skip_serializing)]
    pub id: Option<ObjectId>,
    #[serde(rename = "from_userId")]
    pub from_user_id: String,
    #[serde(rename = "to_userId")]
    pub to_user_id: String,
    #[serde(flatten)]
    pub body: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn sample_user() -> User {
        User {
            id: Some(ObjectId::new()),
            user_id: "3f2c7a1e-0000-0000-0000-000000000000".into(),
            email: "alice@example.com".into(),
            hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            first_name: Some("Alice".into()),
            dob_day: None,
            dob_month: None,
            dob_year: None,
            show_gender: None,
            gender_identity: Some("woman".into()),
            gender_interest: None,
            url: None,
            about: None,
            matches: vec![],
        }
    }

    #[test]
    fn responses_never_expose_hash_or_store_id() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("_id").is_none());
        assert_eq!(json["user_id"], "3f2c7a1e-0000-0000-0000-000000000000");
    }

    #[test]
    fn matches_default_to_empty_for_documents_without_the_field() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "user_id": "u1",
            "email": "u1@example.com",
            "hashed_password": "hash",
        };
        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert!(user.matches.is_empty());
    }

    #[test]
    fn message_round_trips_opaque_body_fields() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "from_userId": "a",
            "to_userId": "b",
            "text": "hi there",
            "img": null,
        };
        let message: Message = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(message.from_user_id, "a");
        assert_eq!(message.to_user_id, "b");

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["from_userId"], "a");
        assert_eq!(json["text"], "hi there");
        assert!(json.get("_id").is_none());
    }
}
