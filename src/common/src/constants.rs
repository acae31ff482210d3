/// Field name used when reporting form-level (rather than element-level) errors.
pub const FORM_ERROR_FIELD: &str = "form";

// The remote system exposes no structured error detail, so submitters only
// ever see one of these two generic messages. Specifics stay in the logs.
pub const MESSAGE_SUBMISSION_BAD_RESPONSE_CODE: &str =
    "There is a problem with the information you have supplied - please amend and try again";
pub const MESSAGE_SUBMISSION_CLIENT_EXCEPTION: &str =
    "Your submission failed due to an unexpected communications error - please try again later";
