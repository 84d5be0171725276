//! Contact page submission flow.

use crate::model::ids::{Clock, IdGenerator};
use crate::model::lead::{ContactForm, Lead};
use crate::model::validation::ValidationError;
use crate::repo::portfolio_repo::PortfolioRepository;
use crate::service::portfolio_store::PortfolioStore;
use log::{info, warn};

/// Validates `form`, records it as a new unread lead, then clears the form.
///
/// On validation failure nothing is stored and the form keeps its input.
pub fn submit_contact<R: PortfolioRepository, C: Clock>(
    form: &mut ContactForm,
    store: &mut PortfolioStore<R>,
    ids: &mut IdGenerator<C>,
) -> Result<Lead, ValidationError> {
    if let Err(err) = form.validate() {
        warn!("event=contact_submit module=service status=rejected reason={err}");
        return Err(err);
    }

    let lead = form.to_lead(ids.next_id(), ids.now_millis())?;
    store.add_lead(lead.clone());
    form.reset();
    info!(
        "event=contact_submit module=service status=ok lead_id={}",
        lead.id
    );
    Ok(lead)
}
