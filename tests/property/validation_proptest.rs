//! Property-based tests for form validation

use lagerblogs::shared::validation::{is_valid_email, LoginForm, RegisterForm};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_well_formed_emails_pass(local in "[a-z0-9._]{1,10}", domain in "[a-z0-9]{1,10}", tld in "[a-z]{2,4}") {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_emails_without_at_fail(text in "[a-z0-9.]{0,20}") {
        prop_assert!(!is_valid_email(&text));
    }

    #[test]
    fn test_login_errors_only_for_failing_fields(email in "[a-z]{0,6}(@[a-z]{1,4}\\.[a-z]{2,3})?", password in "[a-z]{0,4}") {
        let form = LoginForm { email: email.clone(), password: password.clone() };
        match form.validate() {
            Ok(()) => {
                prop_assert!(is_valid_email(&email));
                prop_assert!(!password.is_empty());
            }
            Err(errors) => {
                prop_assert_eq!(errors.get("password").is_some(), password.is_empty());
                prop_assert_eq!(errors.get("email").is_some(), !is_valid_email(&email));
            }
        }
    }

    #[test]
    fn test_register_requires_matching_passwords(password in "[a-z]{1,8}", confirm in "[a-z]{1,8}") {
        let form = RegisterForm {
            email: "reader@example.com".to_string(),
            username: "reader".to_string(),
            password: password.clone(),
            confirm_password: confirm.clone(),
        };
        prop_assert_eq!(form.validate().is_ok(), password == confirm);
    }
}
