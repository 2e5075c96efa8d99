// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leaddesk::CoreError;
use leaddesk_domain::DomainError;

use crate::{ApiError, error_message};

#[test]
fn test_display_is_the_human_message() {
    assert_eq!(
        ApiError::Network.to_string(),
        "Network error: unable to reach server"
    );
    assert_eq!(
        ApiError::Http {
            status: 404,
            message: String::from("Lead not found"),
        }
        .to_string(),
        "Lead not found"
    );
    assert_eq!(
        ApiError::Core(CoreError::DomainViolation(DomainError::InvalidTag(
            String::from("Tag cannot be empty")
        )))
        .to_string(),
        "Domain violation: Invalid tag: Tag cannot be empty"
    );
}

#[test]
fn test_token_rejection_detection() {
    let unauthorized: ApiError = ApiError::Http {
        status: 401,
        message: String::from("Unauthorized"),
    };
    let expired: ApiError = ApiError::Http {
        status: 400,
        message: String::from("Token expired"),
    };
    let rejected: ApiError = ApiError::Rejected(String::from("Token invalid"));
    let server: ApiError = ApiError::Http {
        status: 500,
        message: String::from("Server error: 500"),
    };

    assert!(unauthorized.is_token_rejection());
    assert!(expired.is_token_rejection());
    assert!(rejected.is_token_rejection());
    assert!(!server.is_token_rejection());
    assert!(!ApiError::Network.is_token_rejection());
    assert_eq!(server.status(), Some(500));
    assert_eq!(ApiError::NoToken.status(), None);
}

#[test]
fn test_error_message_extraction() {
    assert_eq!(
        error_message(401, r#"{"message":"Token expired"}"#),
        "Token expired"
    );
    assert_eq!(error_message(400, r#"{"error":"bad"}"#), "Error: 400");
    assert_eq!(error_message(400, r#"{"message":""}"#), "Error: 400");
    assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "Server error: 502");
    assert_eq!(error_message(500, ""), "Server error: 500");
}
