pub mod toast;
pub mod validated_form;
