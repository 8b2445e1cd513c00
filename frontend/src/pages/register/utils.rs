use crate::api::DepartmentSeats;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub department_id: Option<i64>,
}

/// Same shape the HR API accepts: something, an @, a dot after it, no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let rest = &email[at + 1..];
    match rest.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < rest.len(),
        None => false,
    }
}

/// Checks fields in the order they appear on the form and reports the first
/// problem. Returns the chosen department id on success.
pub fn validate(form: &RegisterForm, departments: &[DepartmentSeats]) -> Result<i64, String> {
    if form.first_name.trim().is_empty() {
        return Err("First name is required".into());
    }
    if form.last_name.trim().is_empty() {
        return Err("Last name is required".into());
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Valid email is required".into());
    }
    if form.title.trim().is_empty() {
        return Err("Job title is required".into());
    }
    let Some(department_id) = form.department_id else {
        return Err("Please select a department".into());
    };
    let Some(department) = departments
        .iter()
        .find(|d| d.department_id == department_id)
    else {
        return Err("Please select a department".into());
    };
    if department.seats_left <= 0 {
        return Err("Selected department has no available seats".into());
    }
    Ok(department_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_departments;

    fn complete_form() -> RegisterForm {
        RegisterForm {
            first_name: "Ada".into(),
            last_name: "Lane".into(),
            email: "ada@corp.example".into(),
            title: "Analyst".into(),
            department_id: Some(2),
        }
    }

    #[test]
    fn email_validation_matches_expected_shapes() {
        assert!(is_valid_email("ada@corp.example"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn validation_reports_problems_in_form_order() {
        let departments = sample_departments();

        let mut form = complete_form();
        form.first_name = "  ".into();
        assert_eq!(validate(&form, &departments), Err("First name is required".into()));

        let mut form = complete_form();
        form.last_name = String::new();
        assert_eq!(validate(&form, &departments), Err("Last name is required".into()));

        let mut form = complete_form();
        form.email = "not-an-email".into();
        assert_eq!(validate(&form, &departments), Err("Valid email is required".into()));

        let mut form = complete_form();
        form.title = String::new();
        assert_eq!(validate(&form, &departments), Err("Job title is required".into()));

        let mut form = complete_form();
        form.department_id = None;
        assert_eq!(
            validate(&form, &departments),
            Err("Please select a department".into())
        );
    }

    #[test]
    fn first_failure_wins_when_several_fields_are_bad() {
        let mut form = complete_form();
        form.first_name = String::new();
        form.email = "broken".into();
        assert_eq!(
            validate(&form, &sample_departments()),
            Err("First name is required".into())
        );
    }

    #[test]
    fn full_department_is_rejected() {
        let mut form = complete_form();
        form.department_id = Some(1); // Engineering has 0 seats
        assert_eq!(
            validate(&form, &sample_departments()),
            Err("Selected department has no available seats".into())
        );
    }

    #[test]
    fn valid_form_returns_department_id() {
        assert_eq!(validate(&complete_form(), &sample_departments()), Ok(2));
    }
}
