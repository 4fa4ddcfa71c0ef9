use crate::Result;
use crate::component::toast::Toaster;
use crate::component::validated_form::guard_form_submission;
use crate::utils::get_field_value;
use crate::validation::{ValidationError, validate_member_to_add};
use web_sys::{Document, HtmlFormElement};

pub fn bind_add_form(document: &Document, toaster: Toaster) -> Result<()> {
    guard_form_submission(document, "add", read_member_to_add, toaster)
}

fn read_member_to_add(form: &HtmlFormElement) -> Result<Result<(), ValidationError>> {
    let name = get_field_value(form, r#"input[name="name"]"#)?;
    let rank = get_field_value(form, r#"select[name="rank"]"#)?;
    Ok(validate_member_to_add(name.as_deref(), rank.as_deref()))
}
