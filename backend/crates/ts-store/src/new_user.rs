use ts_core::{PathType, User};

/// Registration payload after validation.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub aadhaar_number: Option<String>,
    pub path_type: Option<PathType>,
}

impl NewUser {
    pub(crate) fn into_user(self, id: String) -> User {
        User {
            id,
            username: self.username,
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            aadhaar_number: self.aadhaar_number,
            path_type: self.path_type,
        }
    }
}
