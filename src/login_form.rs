use crate::Result;
use crate::component::toast::Toaster;
use crate::component::validated_form::guard_form_submission;
use crate::utils::get_field_value;
use crate::validation::{ValidationError, validate_credentials};
use web_sys::{Document, HtmlFormElement};

pub fn bind_login_form(document: &Document, toaster: Toaster) -> Result<()> {
    guard_form_submission(document, "login", read_credentials, toaster)
}

fn read_credentials(form: &HtmlFormElement) -> Result<Result<(), ValidationError>> {
    let username = get_field_value(form, r#"input[name="username"]"#)?;
    let password = get_field_value(form, r#"input[name="password"]"#)?;
    Ok(validate_credentials(username.as_deref(), password.as_deref()))
}
