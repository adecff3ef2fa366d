use fogg_domain::{EnquiryForm, EnquiryOutcome, EnquiryStatus, FieldErrors};
use tracing::{info, warn};

const VALIDATION_FAILED: &str = "Validation failed. Please check your input.";
const THANK_YOU: &str = "Thank you for your enquiry! We will get back to you soon.";

/// Handles contact form submissions. Delivery is not wired to any backend;
/// an accepted enquiry is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnquiryService;

impl EnquiryService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, form: EnquiryForm) -> EnquiryOutcome {
        match form.validate() {
            Ok(()) => {
                info!(
                    name = %form.name,
                    email = %form.email,
                    subject = %form.subject,
                    message_chars = form.message.chars().count(),
                    "Enquiry received"
                );
                EnquiryOutcome {
                    message: THANK_YOU.to_string(),
                    status: EnquiryStatus::Success,
                    errors: FieldErrors::new(),
                    field_values: EnquiryForm::default(),
                }
            }
            Err(errors) => {
                warn!(fields = ?errors.keys().collect::<Vec<_>>(), "Rejected enquiry");
                EnquiryOutcome {
                    message: VALIDATION_FAILED.to_string(),
                    status: EnquiryStatus::Error,
                    errors,
                    field_values: form,
                }
            }
        }
    }
}
