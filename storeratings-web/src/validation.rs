//! Validation logic for the application's forms.
//!
//! Field rules live in one place so every form applies the same constraints,
//! eagerly after each change and once more before submit. Server-side
//! rejections are a separate layer and never feed back into these maps.

use shared::models::{AddStoreRequest, AddUserRequest, SignupRequest, UserRole};
use std::collections::BTreeMap;

/// Characters that satisfy the "special character" password rule.
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Validation errors a single field can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is required but empty.
    Required,
    /// Name is outside 2-60 characters.
    NameLength,
    /// Store name is outside 1-100 characters.
    StoreNameLength,
    /// Email is missing an '@' or a local/domain part.
    EmailInvalid,
    /// Email exceeds 100 characters.
    EmailTooLong,
    /// Address exceeds 400 characters.
    AddressTooLong,
    /// Password is outside 8-16 characters.
    PasswordLength,
    /// Password has no uppercase letter.
    PasswordUppercase,
    /// Password has no character from the special set.
    PasswordSpecial,
    /// Rating is outside 1-5.
    RatingOutOfRange,
    /// Owner id is not a positive integer.
    OwnerIdInvalid,
}

impl ValidationError {
    /// Message shown under the offending field.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::NameLength => "Name must be 2-60 characters",
            Self::StoreNameLength => "Store name must be 1-100 characters",
            Self::EmailInvalid => "Enter a valid email address",
            Self::EmailTooLong => "Email must be at most 100 characters",
            Self::AddressTooLong => "Address must be at most 400 characters",
            Self::PasswordLength => "Password must be 8-16 characters",
            Self::PasswordUppercase => "Password needs at least one uppercase letter",
            Self::PasswordSpecial => "Password needs at least one special character",
            Self::RatingOutOfRange => "Rating must be between 1 and 5",
            Self::OwnerIdInvalid => "Owner id must be a positive number",
        }
    }
}

/// Per-field error map; empty means the form may submit.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validates a person's name: required, 2-60 characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if !(2..=60).contains(&trimmed.chars().count()) {
        return Err(ValidationError::NameLength);
    }
    Ok(())
}

/// Validates a store name: required, 1-100 characters.
pub fn validate_store_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::StoreNameLength);
    }
    Ok(())
}

/// Validates an email address.
///
/// The shape check is deliberately loose: one '@' with non-empty local and
/// domain parts and no whitespace. There is no top-level-domain requirement.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::EmailTooLong);
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::EmailInvalid);
    };
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || trimmed.contains(char::is_whitespace)
    {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Validates an optional email: empty input is fine.
pub fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        Ok(())
    } else {
        validate_email(email)
    }
}

/// Validates an optional address: at most 400 characters.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.chars().count() > 400 {
        return Err(ValidationError::AddressTooLong);
    }
    Ok(())
}

/// Validates a password: 8-16 characters with at least one uppercase letter
/// and one character from [`PASSWORD_SPECIAL_CHARACTERS`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    if !(8..=16).contains(&password.chars().count()) {
        return Err(ValidationError::PasswordLength);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(ValidationError::PasswordUppercase);
    }
    if !password
        .chars()
        .any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
    {
        return Err(ValidationError::PasswordSpecial);
    }
    Ok(())
}

/// Validates a star rating: integer in 1-5.
pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange)
    }
}

/// Parse an optional owner id; empty input means "no owner".
pub fn parse_owner_id(input: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(ValidationError::OwnerIdInvalid),
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Field values of the login form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Recompute the per-field error map from the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(error) = validate_email(&self.email) {
            errors.insert("email", error.message());
        }
        if self.password.is_empty() {
            errors.insert("password", ValidationError::Required.message());
        }
        errors
    }
}

/// Field values of the signup form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub password: String,
}

impl SignupForm {
    /// Recompute the per-field error map from the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(error) = validate_name(&self.name) {
            errors.insert("name", error.message());
        }
        if let Err(error) = validate_email(&self.email) {
            errors.insert("email", error.message());
        }
        if let Err(error) = validate_address(&self.address) {
            errors.insert("address", error.message());
        }
        if let Err(error) = validate_password(&self.password) {
            errors.insert("password", error.message());
        }
        errors
    }

    /// Build the wire payload. Call only after [`Self::validate`] is clean.
    #[must_use]
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: none_if_blank(&self.address),
            password: self.password.clone(),
        }
    }
}

/// Field values of the password-change form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChangeForm {
    /// Recompute the per-field error map from the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.old_password.is_empty() {
            errors.insert("oldPassword", ValidationError::Required.message());
        }
        if let Err(error) = validate_password(&self.new_password) {
            errors.insert("newPassword", error.message());
        }
        errors
    }
}

/// Field values of the admin add-user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub role: UserRole,
}

impl Default for NewUserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            address: String::new(),
            password: String::new(),
            role: UserRole::User,
        }
    }
}

impl NewUserForm {
    /// Recompute the per-field error map from the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(error) = validate_name(&self.name) {
            errors.insert("name", error.message());
        }
        if let Err(error) = validate_email(&self.email) {
            errors.insert("email", error.message());
        }
        if let Err(error) = validate_address(&self.address) {
            errors.insert("address", error.message());
        }
        if let Err(error) = validate_password(&self.password) {
            errors.insert("password", error.message());
        }
        errors
    }

    /// Build the wire payload. Call only after [`Self::validate`] is clean.
    #[must_use]
    pub fn to_request(&self) -> AddUserRequest {
        AddUserRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: none_if_blank(&self.address),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

/// Field values of the admin add-store form. The owner id is kept as the raw
/// input string until submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewStoreForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub owner_id: String,
}

impl NewStoreForm {
    /// Recompute the per-field error map from the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(error) = validate_store_name(&self.name) {
            errors.insert("name", error.message());
        }
        if let Err(error) = validate_optional_email(&self.email) {
            errors.insert("email", error.message());
        }
        if let Err(error) = validate_address(&self.address) {
            errors.insert("address", error.message());
        }
        if let Err(error) = parse_owner_id(&self.owner_id) {
            errors.insert("ownerId", error.message());
        }
        errors
    }

    /// Build the wire payload. Call only after [`Self::validate`] is clean.
    #[must_use]
    pub fn to_request(&self) -> AddStoreRequest {
        AddStoreRequest {
            name: self.name.trim().to_string(),
            email: none_if_blank(&self.email),
            address: none_if_blank(&self.address),
            owner_id: parse_owner_id(&self.owner_id).ok().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_two_to_sixty_characters() {
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(&"a".repeat(60)).is_ok());
    }

    #[test]
    fn name_rejects_out_of_range_lengths() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
        assert_eq!(validate_name("A"), Err(ValidationError::NameLength));
        assert_eq!(
            validate_name(&"a".repeat(61)),
            Err(ValidationError::NameLength)
        );
    }

    #[test]
    fn store_name_allows_single_character() {
        assert!(validate_store_name("7").is_ok());
        assert_eq!(
            validate_store_name(&"s".repeat(101)),
            Err(ValidationError::StoreNameLength)
        );
    }

    #[test]
    fn email_accepts_plain_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user@localhost").is_ok());
        assert!(validate_email("first.last+tag@shop.example").is_ok());
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(validate_email("user@"), Err(ValidationError::EmailInvalid));
        assert_eq!(
            validate_email("us er@example.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email("user@@example.com"),
            Err(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn email_rejects_over_one_hundred_characters() {
        let local = "a".repeat(95);
        assert_eq!(
            validate_email(&format!("{local}@example.com")),
            Err(ValidationError::EmailTooLong)
        );
    }

    #[test]
    fn password_boundary_lengths() {
        // 7 and 17 rejected, exactly 8 and 16 accepted.
        assert_eq!(
            validate_password("Abc#123"),
            Err(ValidationError::PasswordLength)
        );
        assert_eq!(
            validate_password("Abc#1234Abc#12345"),
            Err(ValidationError::PasswordLength)
        );
        assert!(validate_password("Abc#1234").is_ok());
        assert!(validate_password("Abc#1234Abc#1234").is_ok());
    }

    #[test]
    fn password_requires_uppercase_and_special() {
        assert_eq!(
            validate_password("abc#1234"),
            Err(ValidationError::PasswordUppercase)
        );
        assert_eq!(
            validate_password("Abcd1234"),
            Err(ValidationError::PasswordSpecial)
        );
        assert_eq!(validate_password(""), Err(ValidationError::Required));
    }

    #[test]
    fn password_accepts_each_documented_special_character() {
        for special in PASSWORD_SPECIAL_CHARACTERS.chars() {
            let candidate = format!("Abcdef1{special}");
            assert!(
                validate_password(&candidate).is_ok(),
                "expected {candidate:?} to pass"
            );
        }
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(validate_rating(0), Err(ValidationError::RatingOutOfRange));
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_eq!(validate_rating(6), Err(ValidationError::RatingOutOfRange));
    }

    #[test]
    fn owner_id_parsing() {
        assert_eq!(parse_owner_id(""), Ok(None));
        assert_eq!(parse_owner_id("  "), Ok(None));
        assert_eq!(parse_owner_id("14"), Ok(Some(14)));
        assert_eq!(parse_owner_id("0"), Err(ValidationError::OwnerIdInvalid));
        assert_eq!(parse_owner_id("-3"), Err(ValidationError::OwnerIdInvalid));
        assert_eq!(
            parse_owner_id("fourteen"),
            Err(ValidationError::OwnerIdInvalid)
        );
    }

    #[test]
    fn signup_form_weak_password_blocks_submit() {
        let form = SignupForm {
            name: "Quinn Harper".to_string(),
            email: "quinn@example.com".to_string(),
            address: String::new(),
            password: "abc".to_string(),
        };

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn signup_form_clean_values_produce_no_errors() {
        let form = SignupForm {
            name: "Quinn Harper".to_string(),
            email: "quinn@example.com".to_string(),
            address: "5 Birch Lane".to_string(),
            password: "Quinn#123".to_string(),
        };

        assert!(form.validate().is_empty());
        let request = form.to_request();
        assert_eq!(request.address.as_deref(), Some("5 Birch Lane"));
    }

    #[test]
    fn signup_form_blank_address_becomes_none() {
        let form = SignupForm {
            name: "Quinn Harper".to_string(),
            email: "quinn@example.com".to_string(),
            address: "   ".to_string(),
            password: "Quinn#123".to_string(),
        };

        assert_eq!(form.to_request().address, None);
    }

    #[test]
    fn login_form_requires_both_fields() {
        let errors = LoginForm::default().validate();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));

        let form = LoginForm {
            email: "quinn@example.com".to_string(),
            password: "anything".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn password_change_form_checks_new_password_rules() {
        let form = PasswordChangeForm {
            old_password: "OldSecret#1".to_string(),
            new_password: "weak".to_string(),
        };

        let errors = form.validate();
        assert!(!errors.contains_key("oldPassword"));
        assert!(errors.contains_key("newPassword"));
    }

    #[test]
    fn new_store_form_owner_id_flows_to_request() {
        let form = NewStoreForm {
            name: "Harbor Books".to_string(),
            email: String::new(),
            address: String::new(),
            owner_id: "21".to_string(),
        };

        assert!(form.validate().is_empty());
        assert_eq!(form.to_request().owner_id, Some(21));

        let unassigned = NewStoreForm {
            owner_id: String::new(),
            ..form
        };
        assert_eq!(unassigned.to_request().owner_id, None);
    }

    #[test]
    fn new_user_form_defaults_to_user_role() {
        assert_eq!(NewUserForm::default().role, UserRole::User);
    }
}
