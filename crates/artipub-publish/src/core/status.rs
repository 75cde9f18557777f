use crate::error::{PublishError, Result};

pub const CREATED: u16 = 201;

/// Classify the repository's answer to the PUT.
///
/// Only `201 Created` means the artifact was stored. Everything else,
/// including other 2xx codes, is a rejection carrying the status.
///
/// # Examples
///
/// ```
/// use artipub_publish::core::interpret_status;
///
/// assert!(interpret_status(201).is_ok());
/// assert_eq!(interpret_status(409).unwrap_err().status(), Some(409));
/// ```
pub fn interpret_status(status: u16) -> Result<()> {
    if status == CREATED {
        Ok(())
    } else {
        Err(PublishError::ServerRejected { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_is_success() {
        assert!(interpret_status(201).is_ok());
    }

    #[test]
    fn test_other_success_codes_rejected() {
        // 200 and 204 do not confirm the artifact was created
        for code in [200, 202, 204] {
            assert_eq!(interpret_status(code).unwrap_err().status(), Some(code));
        }
    }

    #[test]
    fn test_error_codes_carry_status() {
        for code in [401, 403, 404, 409, 500, 502] {
            match interpret_status(code) {
                Err(PublishError::ServerRejected { status }) => assert_eq!(status, code),
                other => panic!("code {code} should be rejected, got {other:?}"),
            }
        }
    }
}
