use crate::api::{BackendClient, JobDetails, JobPost};
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use chrono::Utc;
use tracing::{info, warn};

/// Backend answer when the free job quota is used up.
const PAYMENT_REQUIRED_STATUS: u16 = 402;

#[derive(Debug, Clone)]
pub struct PostJobOutcome {
    pub notice: Notice,
    /// Set on success: the form is cleared and the user sent to the listing
    pub redirect: Option<String>,
}

/// Submit a job for the signed-in poster (`email` may be absent).
pub async fn post_job(
    details: JobDetails,
    email: Option<&str>,
    backend: &BackendClient,
    translator: &Translator<'_>,
) -> PostJobOutcome {
    let job = JobPost {
        details,
        email: email.map(str::to_string),
        posted_at: Utc::now(),
    };

    match backend.post_job(&job).await {
        Ok(_) => {
            info!("Job posted for {}", job.details.subject);
            PostJobOutcome {
                notice: Notice::success(translator.resolve(keys::SUCCESS))
                    .with_text(translator.resolve(keys::JOB_POSTED)),
                redirect: Some("/services".to_string()),
            }
        }
        Err(e) if e.status() == Some(PAYMENT_REQUIRED_STATUS) => {
            warn!("Job post needs payment: {}", e);
            PostJobOutcome {
                notice: Notice::warning(translator.resolve(keys::PAYMENT_REQUIRED))
                    .with_text(translator.resolve(keys::JOB_FEE_NOTICE))
                    .with_confirm(translator.resolve(keys::PAY_FEE)),
                redirect: None,
            }
        }
        Err(e) => {
            warn!("Job post failed: {}", e);
            let text = e
                .server_message()
                .unwrap_or_else(|| translator.resolve(keys::JOB_POST_FAILED))
                .to_string();
            PostJobOutcome {
                notice: Notice::error(translator.resolve(keys::ERROR)).with_text(text),
                redirect: None,
            }
        }
    }
}
