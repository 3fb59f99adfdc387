use std::fmt;
use subtle::ConstantTimeEq;

/// Byte comparison whose running time does not depend on where the inputs
/// differ. Inputs of different length compare unequal.
pub fn constant_time_equals(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// The single operator account allowed through Basic Auth.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields are always compared so a wrong username costs the same
    /// as a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_equals(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_equals(self.password.as_bytes(), password.as_bytes());
        // `&` rather than `&&`: both comparisons always run.
        user_ok & pass_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
