use serde::{Deserialize, Serialize};

use super::repo_types::ProfileId;

pub const SAVE_SUCCESS_MESSAGE: &str = "save data success";

/// Request body for `POST /profiles`.
///
/// Absent keys decode to empty strings so they are reported by the validator
/// as missing fields rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "profileBase64", alias = "profileImage")]
    pub profile_image: String,
    #[serde(rename = "birthDay", alias = "birthDate")]
    pub birth_date: String,
    pub occupation: String,
    pub sex: String,
}

#[derive(Debug, Serialize)]
pub struct CreateProfileResponse {
    pub id: ProfileId,
    pub message: &'static str,
}
