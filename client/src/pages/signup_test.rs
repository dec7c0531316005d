use portal::Role;

use super::*;

fn filled() -> SignUpForm {
    SignUpForm {
        full_name: "  Grace Hopper ".to_owned(),
        email: " grace@example.com ".to_owned(),
        password: "cobol59".to_owned(),
        confirm: "cobol59".to_owned(),
        role: Role::Tutor,
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    let request = validate_sign_up_input(&filled()).unwrap();
    assert_eq!(request.full_name, "Grace Hopper");
    assert_eq!(request.email, "grace@example.com");
    assert_eq!(request.password, "cobol59");
    assert_eq!(request.role, Role::Tutor);
}

#[test]
fn default_form_registers_students() {
    assert_eq!(SignUpForm::default().role, Role::Student);
}

#[test]
fn missing_name_is_rejected() {
    let form = SignUpForm { full_name: "   ".to_owned(), ..filled() };
    assert_eq!(validate_sign_up_input(&form), Err("Enter your full name."));
}

#[test]
fn short_password_is_rejected() {
    let form = SignUpForm { password: "abc".to_owned(), confirm: "abc".to_owned(), ..filled() };
    assert_eq!(validate_sign_up_input(&form), Err("Password must be at least 6 characters."));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = SignUpForm { confirm: "cobol60".to_owned(), ..filled() };
    assert_eq!(validate_sign_up_input(&form), Err("Passwords do not match."));
}

#[test]
fn staff_roles_cannot_self_register() {
    let form = SignUpForm { role: Role::Admin, ..filled() };
    assert_eq!(validate_sign_up_input(&form), Err("Choose whether you want to learn or teach."));
}
